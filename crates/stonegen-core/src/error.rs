//! Error types for schema loading and configuration

use thiserror::Error;

/// Result type alias for fallible stonegen operations
pub type GenResult<T> = Result<T, GenError>;

/// Fatal errors raised before or around a generation run.
///
/// Problems found *during* generation are not errors: they are recorded as
/// [`Diagnostic`](crate::Diagnostic)s and generation continues.
#[derive(Error, Debug)]
pub enum GenError {
    /// I/O error while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema document could not be parsed
    #[error("schema error: {0}")]
    Json(#[from] serde_json::Error),

    /// Manifest could not be parsed
    #[error("manifest error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration parsed but is not usable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
