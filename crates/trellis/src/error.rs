//! Error types for the collection engine.
//!
//! Only configuration-time operations are fallible. Runtime operations on
//! stale or unknown keys are silent no-ops.

use thiserror::Error;

/// Errors that can occur while configuring a collection.
#[derive(Error, Debug)]
pub enum Error {
    /// A pattern name did not match any entry in the pattern registry.
    #[error("unknown collection pattern: {0:?}")]
    UnknownPattern(String),

    /// A configuration value was out of range or inconsistent.
    #[error("invalid collection config: {0}")]
    InvalidConfig(String),

    /// A TOML configuration document could not be parsed.
    #[error("failed to parse TOML config: {0}")]
    Config(#[from] toml::de::Error),

    /// A JSON configuration document could not be parsed.
    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for collection configuration.
pub type Result<T> = std::result::Result<T, Error>;
