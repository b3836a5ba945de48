use thiserror::Error;

use crate::bridge::UnsupportedValue;

/// Errors raised at the read/write boundary.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The locator is not a readable local resource.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The parsed document has a top-level shape with no JSON value form.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedValue),
}
