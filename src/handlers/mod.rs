mod command;
mod scheduler;

pub use command::*;
pub use scheduler::*;
