use crate::commands::Command;
use crate::config::TIMEZONE;
use crate::prayer_times::fetch_prayer_times;
use crate::state::BotState;
use crate::types::PrayerTimes;
use chrono::Utc;
use std::error::Error;
use std::sync::Arc;
use teloxide::prelude::*;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<BotState>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    match cmd {
        Command::Start => {
            let added = state.subscribe(msg.chat.id.0).await?;
            if added {
                log::info!("Subscribed chat {}", msg.chat.id);
            }

            bot.send_message(
                msg.chat.id,
                "🕌 Assalamu Alaikum!\n\n\
                 I will send you a reminder 1 hour before each prayer.\n\n\
                 Available commands:\n\
                 /today - Show today's prayer times\n\
                 /stop - Stop the reminders",
            )
            .await?;
        }
        Command::Today => {
            let today = Utc::now().with_timezone(&TIMEZONE).date_naive();
            let reply = match fetch_prayer_times(&state.http, today).await {
                Ok(times) => today_message(&times),
                Err(e) => {
                    log::error!("Failed to fetch prayer times for /today: {}", e);
                    "❌ Could not fetch the prayer times. Please try again later.".to_string()
                }
            };

            bot.send_message(msg.chat.id, reply).await?;
        }
        Command::Stop => {
            let removed = state.unsubscribe(msg.chat.id.0).await?;
            if removed {
                log::info!("Unsubscribed chat {}", msg.chat.id);
                bot.send_message(
                    msg.chat.id,
                    "❌ Reminders disabled. Use /start to enable them again.",
                )
                .await?;
            } else {
                bot.send_message(msg.chat.id, "You are not subscribed to reminders.")
                    .await?;
            }
        }
    }
    Ok(())
}

pub fn today_message(times: &PrayerTimes) -> String {
    let mut reply = String::from("📅 Today's prayer times (El Harrach, Algiers):\n\n");
    for (prayer, time) in times.iter() {
        reply.push_str(&format!("🕌 {}: {}\n", prayer, time));
    }
    reply.push_str("\n✅ You will receive a reminder 1 hour before each prayer");
    reply
}
