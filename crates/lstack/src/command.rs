//! Command parsing
//!
//! One command per line:
//!
//! ```text
//! push <value>   push the rest of the line
//! pop            print and remove the top value
//! top            print the top value
//! empty          print true or false
//! show           print the rendered chain
//! quit           end the session
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Push(String),
    Pop,
    Top,
    Empty,
    Show,
    Quit,
}

/// Parse one input line
///
/// Returns `Ok(None)` for blank lines and comments. `line` is the 1-based
/// line number used in error messages.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>, CommandError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    };

    let command = match word {
        "push" => {
            if rest.is_empty() {
                return Err(CommandError::parse(line, "push: missing value"));
            }
            Command::Push(rest.to_string())
        }
        "pop" => Command::Pop,
        "top" => Command::Top,
        "empty" => Command::Empty,
        "show" => Command::Show,
        "quit" => Command::Quit,
        other => {
            return Err(CommandError::parse(
                line,
                format!("unknown command '{}'", other),
            ));
        }
    };

    if !matches!(command, Command::Push(_)) && !rest.is_empty() {
        return Err(CommandError::parse(
            line,
            format!("{}: unexpected argument '{}'", word, rest),
        ));
    }

    Ok(Some(command))
}
