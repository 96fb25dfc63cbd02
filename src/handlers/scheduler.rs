use crate::config::TIMEZONE;
use crate::prayer_times::fetch_prayer_times;
use crate::state::BotState;
use crate::types::{Prayer, PrayerTimes, ReminderLedger};
use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::time::{interval, Duration};

// A reminder fires when now is within this many seconds of (prayer - 1h).
// Matches the tick interval, so a healthy loop sees each window exactly once.
const WINDOW_SECS: i64 = 60;

pub async fn start_schedule_checker(bot: Bot, state: Arc<BotState>) {
    let mut interval = interval(Duration::from_secs(60));

    loop {
        interval.tick().await;
        check_prayer_times(&bot, &state).await;
    }
}

/// One scheduler tick: fetch today's table and send whatever is due.
/// A failed fetch ends the tick; the next minute retries naturally.
pub async fn check_prayer_times(bot: &Bot, state: &Arc<BotState>) {
    let now = Utc::now().with_timezone(&TIMEZONE);

    let times = match fetch_prayer_times(&state.http, now.date_naive()).await {
        Ok(times) => times,
        Err(e) => {
            log::error!("Failed to fetch prayer times: {}", e);
            return;
        }
    };

    let due = {
        let mut ledger = state.ledger.lock().await;
        due_reminders(&times, now, &mut ledger)
    };

    for (prayer, time) in due {
        log::info!("Sending reminder for {}", prayer);
        send_reminder(bot, state, prayer, &time).await;
    }
}

/// Picks the prayers whose reminder window covers `now` and marks them in
/// the ledger, so each fires at most once per day. The ledger resets itself
/// on the first mark of a new date.
pub fn due_reminders(
    times: &PrayerTimes,
    now: DateTime<Tz>,
    ledger: &mut ReminderLedger,
) -> Vec<(Prayer, String)> {
    let today = now.date_naive();
    let mut due = Vec::new();

    for (prayer, time_str) in times.iter() {
        let prayer_time = match NaiveTime::parse_from_str(time_str, "%H:%M") {
            Ok(time) => time,
            Err(e) => {
                log::error!("Unparseable time {:?} for {}: {}", time_str, prayer, e);
                continue;
            }
        };

        let prayer_instant = match today.and_time(prayer_time).and_local_timezone(now.timezone()) {
            chrono::LocalResult::Single(instant) => instant,
            _ => continue,
        };
        let reminder_instant = prayer_instant - chrono::Duration::hours(1);

        let diff = now.signed_duration_since(reminder_instant).num_seconds().abs();
        if diff < WINDOW_SECS && !ledger.is_notified(today, prayer) {
            ledger.mark_notified(today, prayer);
            due.push((prayer, time_str.to_string()));
        }
    }

    due
}

/// Fans the reminder out to every subscriber. A failed send is logged and
/// the remaining subscribers still get theirs.
pub async fn send_reminder(bot: &Bot, state: &Arc<BotState>, prayer: Prayer, time: &str) {
    let message = reminder_message(prayer, time);

    for chat_id in state.subscriber_ids().await {
        if let Err(e) = bot.send_message(ChatId(chat_id), &message).await {
            log::error!("Failed to send reminder to {}: {}", chat_id, e);
            continue;
        }
        log::info!("Reminder sent to {} for {}", chat_id, prayer);
    }
}

pub fn reminder_message(prayer: Prayer, time: &str) -> String {
    format!(
        "🕌 Reminder: the {} prayer is in 1 hour ({})\n\nAllahu Akbar!",
        prayer, time
    )
}
