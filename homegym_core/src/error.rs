//! Error types for the homegym_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for homegym_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Questionnaire value outside the supported domain
    #[error("invalid input for {field}: {value}")]
    InvalidInput { field: &'static str, value: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),
}

impl Error {
    /// Construct an `InvalidInput` error for a questionnaire field
    pub fn invalid_input(field: &'static str, value: impl ToString) -> Self {
        Error::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}
