//! Session configuration
//!
//! Loaded from an optional TOML file; every key has a default, so an empty
//! file is a valid configuration.
//!
//! ```toml
//! prompt = "stack> "
//! echo_render = true
//! keep_going = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Printed before each line when reading from a terminal
    pub prompt: String,
    /// Print the rendered stack after every successful push or pop
    pub echo_render: bool,
    /// Report failing commands and continue instead of stopping the session
    pub keep_going: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            prompt: "> ".to_string(),
            echo_render: false,
            keep_going: false,
        }
    }
}

impl SessionConfig {
    pub fn from_toml(content: &str) -> Result<Self, CommandError> {
        toml::from_str(content)
            .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self, CommandError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommandError::Config(format!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Apply command-line switches; a set flag always wins over the file
    pub fn with_overrides(mut self, echo_render: bool, keep_going: bool) -> Self {
        self.echo_render |= echo_render;
        self.keep_going |= keep_going;
        self
    }
}
