//! Request failure classification
//!
//! Every failure of the HTTP wrapper is assigned exactly one
//! [`RequestErrorCategory`], which is what gets logged and what callers
//! branch on. External callers receive `UpsBridgeError` via conversion.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;
use upsbridge_domain::UpsBridgeError;

/// Failure category for an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestErrorCategory {
    /// The server answered with a 4xx or 5xx status
    HttpStatus,

    /// No connection could be established (refused, DNS, TLS, connect timeout)
    Connection,

    /// The request timed out after the connection was established
    Timeout,

    /// Any other request failure (invalid URL, body, redirect, decode)
    Request,

    /// Failure outside the HTTP stack
    Unexpected,
}

impl RequestErrorCategory {
    /// Stable label used as the `category` log field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HttpStatus => "http_status",
            Self::Connection => "connection",
            Self::Timeout => "timeout",
            Self::Request => "request",
            Self::Unexpected => "unexpected",
        }
    }
}

impl fmt::Display for RequestErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified request failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{category}: {message}")]
pub struct RequestError {
    category: RequestErrorCategory,
    message: String,
    status: Option<u16>,
}

impl RequestError {
    /// Create a new request error
    pub fn new(category: RequestErrorCategory, message: impl Into<String>) -> Self {
        Self { category, message: message.into(), status: None }
    }

    /// Failure outside the HTTP stack
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(RequestErrorCategory::Unexpected, message)
    }

    /// Error for a 4xx/5xx response. `body` is appended when non-empty.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let reason = status.canonical_reason().unwrap_or("Unknown");
        let body = body.trim();
        let message = if body.is_empty() {
            format!("HTTP {} {}", status.as_u16(), reason)
        } else {
            format!("HTTP {} {}: {}", status.as_u16(), reason, body)
        };

        Self { category: RequestErrorCategory::HttpStatus, message, status: Some(status.as_u16()) }
    }

    /// Get the error category
    pub fn category(&self) -> RequestErrorCategory {
        self.category
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status for [`RequestErrorCategory::HttpStatus`] errors.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Convert to domain error type
    pub fn into_domain_error(self) -> UpsBridgeError {
        match self.category {
            RequestErrorCategory::HttpStatus => UpsBridgeError::HttpStatus {
                status: self.status.unwrap_or_default(),
                message: self.message,
            },
            RequestErrorCategory::Connection => UpsBridgeError::Connection(self.message),
            RequestErrorCategory::Timeout => UpsBridgeError::Timeout(self.message),
            RequestErrorCategory::Request => UpsBridgeError::Request(self.message),
            RequestErrorCategory::Unexpected => UpsBridgeError::Unexpected(self.message),
        }
    }
}

/// Classify reqwest errors.
///
/// Connection failures are checked before timeouts, so a connect timeout is
/// reported as [`RequestErrorCategory::Connection`].
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_status(status, "");
        }

        let category = if err.is_connect() {
            RequestErrorCategory::Connection
        } else if err.is_timeout() {
            RequestErrorCategory::Timeout
        } else {
            RequestErrorCategory::Request
        };

        Self::new(category, err.to_string())
    }
}

impl From<RequestError> for UpsBridgeError {
    fn from(err: RequestError) -> Self {
        err.into_domain_error()
    }
}
