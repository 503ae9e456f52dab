//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;
use upsbridge_common::TokenManagerError;
use upsbridge_domain::UpsBridgeError;

use crate::http::RequestError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub UpsBridgeError);

impl From<InfraError> for UpsBridgeError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl InfraError {
    /// Convert any supported infrastructure error straight into the domain
    /// error, e.g. `.map_err(InfraError::domain)`.
    pub fn domain<E>(err: E) -> UpsBridgeError
    where
        Self: From<E>,
    {
        Self::from(err).0
    }
}

impl From<UpsBridgeError> for InfraError {
    fn from(value: UpsBridgeError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoUpsBridgeError {
    fn into_upsbridge(self) -> UpsBridgeError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → UpsBridgeError */
/* -------------------------------------------------------------------------- */

impl IntoUpsBridgeError for HttpError {
    fn into_upsbridge(self) -> UpsBridgeError {
        if self.is_builder() {
            return UpsBridgeError::Config(format!("invalid HTTP client configuration: {self}"));
        }

        RequestError::from(self).into_domain_error()
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_upsbridge())
    }
}

impl From<RequestError> for InfraError {
    fn from(value: RequestError) -> Self {
        InfraError(value.into_domain_error())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → UpsBridgeError */
/* -------------------------------------------------------------------------- */

impl IntoUpsBridgeError for JsonError {
    fn into_upsbridge(self) -> UpsBridgeError {
        if self.is_io() {
            return UpsBridgeError::Storage(format!("failed to read JSON: {self}"));
        }
        UpsBridgeError::InvalidInput(format!("invalid JSON at line {}: {self}", self.line()))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_upsbridge())
    }
}

impl IntoUpsBridgeError for TomlError {
    fn into_upsbridge(self) -> UpsBridgeError {
        UpsBridgeError::Config(format!("invalid TOML: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_upsbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → UpsBridgeError */
/* -------------------------------------------------------------------------- */

impl IntoUpsBridgeError for IoError {
    fn into_upsbridge(self) -> UpsBridgeError {
        match self.kind() {
            ErrorKind::NotFound => UpsBridgeError::NotFound(self.to_string()),
            ErrorKind::PermissionDenied => {
                UpsBridgeError::Storage(format!("permission denied: {self}"))
            }
            _ => UpsBridgeError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_upsbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* TokenManagerError → UpsBridgeError */
/* -------------------------------------------------------------------------- */

impl IntoUpsBridgeError for TokenManagerError {
    fn into_upsbridge(self) -> UpsBridgeError {
        match self {
            TokenManagerError::CredentialUnavailable(message) => {
                UpsBridgeError::CredentialUnavailable(message)
            }
            TokenManagerError::RefreshFailed(message) | TokenManagerError::InvalidGrant(message) => {
                UpsBridgeError::TokenRefresh(message)
            }
            TokenManagerError::Storage(message) => UpsBridgeError::Storage(message),
        }
    }
}

impl From<TokenManagerError> for InfraError {
    fn from(value: TokenManagerError) -> Self {
        InfraError(value.into_upsbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
