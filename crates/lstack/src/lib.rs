//! lstack: drive a `linkstack::Stack` from a script or a terminal
//!
//! # Modules
//!
//! - `command`: parsing one input line into a `Command`
//! - `config`: `SessionConfig`, loaded from TOML
//! - `error`: `CommandError` for parse, stack, I/O and config failures
//! - `logging`: the `tracing` filter installed by the binary
//! - `session`: executing commands against a `Stack<String>`

pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use command::{Command, parse_line};
pub use config::SessionConfig;
pub use error::CommandError;
pub use session::{Outcome, Session};
