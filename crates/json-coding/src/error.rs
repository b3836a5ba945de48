use json_value::{JsonError, JsonValue};
use thiserror::Error;

/// Failure of a [`Decoder`](crate::Decoder).
///
/// Combinators pass these through untouched, so the caller always sees the
/// innermost failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A discriminator tag, or a lookup key, with no registered entry.
    #[error("unrecognized key: {0}")]
    UnrecognizedKey(String),
    /// The value does not have the shape the decoder expects.
    #[error("incorrect value type: {0}")]
    IncorrectValueType(JsonValue),
}

impl DecodeError {
    pub(crate) fn incorrect(json: &JsonValue) -> Self {
        DecodeError::IncorrectValueType(json.clone())
    }
}

/// Failure of a typed read or write: either the text layer or the decoder.
#[derive(Debug, Error)]
pub enum CodingError {
    #[error(transparent)]
    Json(#[from] JsonError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
