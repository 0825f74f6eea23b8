//! Error types for the facefusion-fs crate.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Target errors
    #[error("Target has no file name to derive a temp directory from: '{0}'")]
    InvalidTarget(String),

    // Pattern errors
    #[error("Invalid frame pattern: {0}")]
    InvalidPattern(String),

    #[error("Pattern compile error: {0}")]
    Regex(#[from] regex::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes used by the binary.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 3;
    pub const IO_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
