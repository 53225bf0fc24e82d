//! Command driver error types.

use linkstack::EmptyStack;

/// Error type for everything a session can fail on.
///
/// Parse and stack errors carry the 1-based input line they came from, so
/// script authors can find the offending command.
#[derive(Debug)]
pub enum CommandError {
    /// The line is not a valid command
    Parse { line: usize, message: String },
    /// `pop` or `top` ran against an empty stack
    Stack { line: usize, source: EmptyStack },
    /// Reading commands or writing results failed
    Io(std::io::Error),
    /// The configuration file could not be read or parsed
    Config(String),
}

impl CommandError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        CommandError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Line number for errors tied to a specific command
    pub fn line(&self) -> Option<usize> {
        match self {
            CommandError::Parse { line, .. } | CommandError::Stack { line, .. } => Some(*line),
            CommandError::Io(_) | CommandError::Config(_) => None,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Parse { line, message } => write!(f, "line {}: {}", line, message),
            CommandError::Stack { line, source } => write!(f, "line {}: {}", line, source),
            CommandError::Io(e) => write!(f, "I/O error: {}", e),
            CommandError::Config(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Stack { source, .. } => Some(source),
            CommandError::Io(e) => Some(e),
            CommandError::Parse { .. } | CommandError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(e: std::io::Error) -> Self {
        CommandError::Io(e)
    }
}
