use pso_core::error::{codes, AppError};

use crate::observer::Observer;
use crate::source::StatusSource;

pub const USAGE: &str = concat!(
    "Available commands: list, --all, or platform with -- prefix like ",
    "--openrouter, --openai, --github"
);

/// The single-string command surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    All,
    Platform(String),
}

impl Command {
    /// Parse a command. Input is trimmed and lowercased first.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let command = input.trim().to_lowercase();
        match command.as_str() {
            "list" => Ok(Command::List),
            "--all" => Ok(Command::All),
            _ => match command.strip_prefix("--") {
                Some(id) if !id.is_empty() => Ok(Command::Platform(id.to_string())),
                _ => Err(AppError::new(
                    codes::COMMAND_INVALID,
                    format!("Unknown command: {command}. {USAGE}"),
                )),
            },
        }
    }

    pub fn execute<S: StatusSource>(&self, observer: &Observer<'_, S>) -> String {
        match self {
            Command::List => observer.platforms_list(),
            Command::All => observer.query_all(),
            Command::Platform(id) => observer.platform_status(id),
        }
    }
}

/// Parse and run one command. Only a malformed command is an error.
pub fn run_command<S: StatusSource>(
    observer: &Observer<'_, S>,
    input: &str,
) -> Result<String, AppError> {
    let command = Command::parse(input)?;
    tracing::debug!(?command, "running status command");
    Ok(command.execute(observer))
}
