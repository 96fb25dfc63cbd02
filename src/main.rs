use std::error::Error;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::commands::Command;
use crate::handlers::{command_handler, start_schedule_checker};
use crate::state::BotState;

mod commands;
mod config;
mod error;
mod handlers;
mod prayer_times;
mod state;
mod types;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting prayer reminder bot...");

    let bot = Bot::new(config::telegram_token());

    // A corrupt subscriber file is fatal here; a missing one is not.
    let state = Arc::new(BotState::load(config::SUBSCRIBERS_FILE)?);
    log::info!(
        "Loaded {} subscribers",
        state.subscribers.lock().await.len()
    );

    // Clone bot and state for the schedule checker
    let scheduler_bot = bot.clone();
    let scheduler_state = state.clone();

    // Spawn the minute-interval schedule checker
    let scheduler = tokio::spawn(async move {
        start_schedule_checker(scheduler_bot, scheduler_state).await;
    });

    let handler = dptree::entry().branch(
        Update::filter_message().filter_command::<Command>().endpoint(
            |bot: Bot, msg: Message, cmd: Command, state: Arc<BotState>| async move {
                command_handler(bot, msg, cmd, state).await
            },
        ),
    );

    log::info!("Starting command dispatching...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    scheduler.abort();

    Ok(())
}
