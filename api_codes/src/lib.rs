//! Error classification for HTTP API clients: coded errors, response
//! wrappers, and redaction of secrets from URLs shown in error messages.

mod code;
mod errors;
mod response;
mod sanitize;
pub use self::code::{describe, Code, UNDEFINED_DESCRIPTION};
pub use self::errors::{DecodeError, Error};
pub use self::response::{ErrorBody, ErrorResponse, RawResponse, RequestLine, Response};
pub use self::sanitize::{sanitize_url, Redactor, REDACTED, TOKEN_PARAM};
