use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Subscribe to prayer reminders")]
    Start,
    #[command(description = "Show today's prayer times")]
    Today,
    #[command(description = "Stop the reminders")]
    Stop,
}
