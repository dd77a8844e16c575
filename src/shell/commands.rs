//! Module `commands`
//!
//! Defines the shell command set, the status of a handled command, and the
//! line parser.

/// A command entered at the shell prompt.
#[derive(Debug, PartialEq)]
pub enum Command {
    Login { username: String, password: String },
    Menu,
    Category(String),
    Tab(String),
    Logout,
    Status,
    Dismiss,
    Help,
    Quit,
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Exit,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(code: u16, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            message: Some(format!("{} {}", code, reason)),
            status: CommandStatus::Failure(reason),
        }
    }
}

/// Parses one input line into a [`Command`].
///
/// The verb is case-insensitive. `LOGIN` takes the username and the rest of
/// the line as the password; missing parts are submitted as empty strings.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "LOGIN" => {
            let mut fields = arg.splitn(2, char::is_whitespace);
            Command::Login {
                username: fields.next().unwrap_or("").to_string(),
                password: fields.next().unwrap_or("").trim_start().to_string(),
            }
        }
        "MENU" => Command::Menu,
        "CATEGORY" | "CAT" if !arg.is_empty() => Command::Category(arg.to_string()),
        "TAB" if !arg.is_empty() => Command::Tab(arg.to_string()),
        "LOGOUT" => Command::Logout,
        "STATUS" => Command::Status,
        "DISMISS" => Command::Dismiss,
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
