//! Error types for API failures.

use serde::{Deserialize, Serialize};

use crate::Code;

/// A single classified API error: a [`Code`] and a message.
///
/// Renders as `"<numeric code>: <message>"`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}: {}", .code.as_u32(), .message)]
pub struct Error {
    message: String,
    code: Code,
}

impl Error {
    /// Creates an error for `code`. An empty `message` is replaced with the
    /// code's canonical description.
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            code.describe().to_string()
        } else {
            message
        };
        Self { message, code }
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Code> for Error {
    fn from(code: Code) -> Self {
        Self::new(code, "")
    }
}

/// Failure to decode an error body returned by the API.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The body is not a JSON error envelope.
    #[error("Malformed error body")]
    Malformed(#[from] serde_json::Error),
}
