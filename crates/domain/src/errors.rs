//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for upsbridge
///
/// The transport variants (`HttpStatus`, `Connection`, `Timeout`, `Request`,
/// `Unexpected`) mirror the categories assigned by the HTTP request wrapper so
/// callers can tell an authentication failure from a transport failure.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum UpsBridgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential unavailable: {0}")]
    CredentialUnavailable(String),

    #[error("Token refresh failed: {0}")]
    TokenRefresh(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UpsBridgeError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::CredentialUnavailable(_) => "credential_unavailable",
            Self::TokenRefresh(_) => "token_refresh",
            Self::HttpStatus { .. } => "http_status",
            Self::Connection(_) => "connection",
            Self::Timeout(_) => "timeout",
            Self::Request(_) => "request",
            Self::Unexpected(_) => "unexpected",
            Self::Storage(_) => "storage",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }

    /// True for failures that happened before anything was sent to the
    /// carrier's shipment endpoint.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::CredentialUnavailable(_) | Self::TokenRefresh(_))
    }
}

/// Result type alias for upsbridge operations
pub type Result<T> = std::result::Result<T, UpsBridgeError>;
