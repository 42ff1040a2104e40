//! Transport-level errors

use thiserror::Error;

/// Result type alias wrapping every route call
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that happen around a call rather than inside the route
#[derive(Error, Debug)]
pub enum Error {
    /// Argument or response JSON could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The client could not complete the exchange
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a status the helpers do not handle
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}
