//! Selector configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default cap on candidate tokens read from a move list
pub const MAX_MOVES: usize = 256;

/// Default cap on bytes kept from each token
pub const MAX_TOKEN_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Tokens past this count are silently dropped
    pub max_moves: usize,
    /// Longer tokens are cut to this many bytes before parsing
    pub max_token_len: usize,
    /// Make the time budget binding instead of advisory
    pub enforce_deadline: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_moves: MAX_MOVES,
            max_token_len: MAX_TOKEN_LEN,
            enforce_deadline: false,
        }
    }
}

impl SelectorConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
