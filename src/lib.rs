mod commands;
mod config;
mod error;
mod handlers;
mod prayer_times;
mod state;
mod types;

pub use commands::*;
pub use config::*;
pub use error::*;
pub use handlers::*;
pub use prayer_times::*;
pub use state::*;
pub use types::*;
