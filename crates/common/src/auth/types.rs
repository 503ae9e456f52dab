//! OAuth 2.0 token types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer};

use crate::security::SecureString;

/// Bearer token record held by a credential store.
///
/// Token and expiry are read and replaced together; a token without an expiry
/// is never trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub access_token: SecureString,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a cached token record.
    pub fn new(access_token: impl Into<SecureString>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { access_token: access_token.into(), expires_at }
    }

    /// Whether the token can be used at `now`, leaving `margin` for in-flight
    /// requests.
    ///
    /// Returns `false` for empty tokens and for tokens without an expiry.
    pub fn is_valid_at(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        if self.access_token.is_empty() {
            return false;
        }

        match self.expires_at {
            Some(expires_at) => expires_at > now + margin,
            None => false,
        }
    }
}

/// Result of a client-credentials exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrant {
    pub access_token: SecureString,
    /// Issue time in milliseconds since the UNIX epoch.
    pub issued_at_ms: i64,
    /// Lifetime in seconds, counted from `issued_at_ms`.
    pub expires_in_secs: i64,
}

impl TokenGrant {
    /// Absolute expiry: issue time plus lifetime.
    ///
    /// `None` when either value is out of range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let issued_at = DateTime::from_timestamp_millis(self.issued_at_ms)?;
        let lifetime = Duration::try_seconds(self.expires_in_secs)?;
        issued_at.checked_add_signed(lifetime)
    }
}

/// Token endpoint response body.
///
/// The carrier sends `issued_at` and `expires_in` as JSON strings; plain
/// numbers are accepted too.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(deserialize_with = "int_or_string")]
    pub issued_at: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<TokenResponse> for TokenGrant {
    fn from(response: TokenResponse) -> Self {
        Self {
            access_token: SecureString::new(response.access_token),
            issued_at_ms: response.issued_at,
            expires_in_secs: response.expires_in,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Str(value) => value.trim().parse().map_err(serde::de::Error::custom),
    }
}
