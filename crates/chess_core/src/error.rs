//! Error types for move interpretation and configuration loading.

use thiserror::Error;

/// Reasons a move token cannot be applied to a position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Nothing left to read a destination square from
    #[error("move token too short: {token:?}")]
    TooShort { token: String },

    /// Last two characters are not a square on the board
    #[error("invalid destination square in {token:?}")]
    BadDestination { token: String },

    /// Promotion suffix names no piece
    #[error("invalid promotion piece {piece:?} in {token:?}")]
    BadPromotion { token: String, piece: char },

    /// No piece of the requested kind can reach the destination
    #[error("no {piece} can reach {to}")]
    NoSource { piece: char, to: String },
}

/// Errors raised while reading a selector configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
