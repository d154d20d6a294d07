//! Error types for Lexis Core

use crate::limits::ValidationError;
use thiserror::Error;

/// Result type alias using Lexis's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Lexis error types
///
/// Queries never fail; these errors only come out of the surfaces that
/// touch the outside world (config files, JSON, shared locks).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Lock error: {0}")]
    Lock(String),
}
