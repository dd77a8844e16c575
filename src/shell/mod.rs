//! App shell
//!
//! Line-oriented command interface over the app: parsing, dispatch, and the
//! interactive loop.

pub mod commands;
pub mod handlers;
pub mod runner;

pub use commands::{Command, CommandResult, CommandStatus, parse_command};
pub use handlers::handle_command;
pub use runner::run;
