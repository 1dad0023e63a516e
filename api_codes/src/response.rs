//! Wrappers tying classified errors to the HTTP response that caused them.

use std::{fmt, ops::Deref};

use http::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{errors::DecodeError, sanitize::Redactor, Error};

/// Method and URL of the request that produced a response.
///
/// HTTP client layers store it in the response extensions so that the
/// response can report its originating request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: Method,
    url: Url,
}

impl RequestLine {
    pub fn new(method: Method, url: Url) -> Self {
        Self { method, url }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// A transport response as seen by the error wrappers.
pub trait RawResponse {
    /// Status code returned by the server.
    fn status(&self) -> StatusCode;

    /// The request behind this response, if the client recorded it.
    fn request(&self) -> Option<&RequestLine>;
}

impl RawResponse for reqwest::Response {
    fn status(&self) -> StatusCode {
        reqwest::Response::status(self)
    }

    fn request(&self) -> Option<&RequestLine> {
        self.extensions().get::<RequestLine>()
    }
}

impl<B> RawResponse for http::Response<B> {
    fn status(&self) -> StatusCode {
        http::Response::status(self)
    }

    fn request(&self) -> Option<&RequestLine> {
        self.extensions().get::<RequestLine>()
    }
}

/// An API response. Wraps the transport response borrowed from the HTTP
/// client.
#[derive(Debug)]
pub struct Response<'a, R> {
    raw: &'a R,
}

impl<'a, R> Response<'a, R> {
    pub fn new(raw: &'a R) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &'a R {
        self.raw
    }
}

impl<R> Deref for Response<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.raw
    }
}

/// Reports an error caused by an API request.
///
/// Serializes as `{"error": {"message": ..., "code": ...}}`. The response
/// is borrowed and never serialized.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a, R> {
    /// HTTP response that caused this error.
    #[serde(skip)]
    response: &'a R,
    error: Error,
}

impl<'a, R: RawResponse> ErrorResponse<'a, R> {
    pub fn new(response: &'a R, error: Error) -> Self {
        tracing::debug!(
            "API request failed with status {}: {}",
            response.status(),
            error
        );
        Self { response, error }
    }

    /// Decodes an error body returned by the API for `response`.
    pub fn from_body(response: &'a R, body: &str) -> Result<Self, DecodeError> {
        let body: ErrorBody = serde_json::from_str(body)?;
        Ok(Self::new(response, body.error))
    }
}

impl<'a, R> ErrorResponse<'a, R> {
    pub fn response(&self) -> &'a R {
        self.response
    }

    pub fn error(&self) -> &Error {
        &self.error
    }

    pub fn into_error(self) -> Error {
        self.error
    }
}

impl<R: RawResponse> fmt::Display for ErrorResponse<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.response.status().as_u16();
        match self.response.request() {
            Some(request) => write!(
                f,
                "{} {}: {} {}",
                request.method(),
                Redactor::default().redact(request.url()),
                status,
                self.error
            ),
            None => {
                tracing::warn!("Rendering an error response with no recorded request");
                write!(f, "<unknown request>: {} {}", status, self.error)
            }
        }
    }
}

impl<R: RawResponse + fmt::Debug> std::error::Error for ErrorResponse<'_, R> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Owned form of the error envelope returned in API response bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: Error,
}

impl<R> From<ErrorResponse<'_, R>> for ErrorBody {
    fn from(response: ErrorResponse<'_, R>) -> Self {
        Self {
            error: response.error,
        }
    }
}
