//! Token manager with expiry-aware caching
//!
//! Hands out bearer tokens:
//! - from the credential store while they are outside the safety margin
//! - otherwise via a fresh client-credentials exchange, persisted before use
//!
//! Concurrent callers are not deduplicated: two callers that both see an
//! expired token each perform their own exchange.

use std::sync::Arc;

use chrono::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::traits::{CredentialStore, TokenIssuer};
use crate::security::SecureString;
use crate::time::{Clock, SystemClock};

/// Default margin before expiry at which cached tokens stop being used.
pub const DEFAULT_SAFETY_MARGIN_SECS: i64 = 10 * 60;

/// Error type for token manager operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenManagerError {
    /// Client credentials could not be read
    #[error("client credentials unavailable: {0}")]
    CredentialUnavailable(String),

    /// The client-credentials exchange failed
    #[error("token refresh failed: {0}")]
    RefreshFailed(String),

    /// The token endpoint returned an unusable grant
    #[error("invalid token grant: {0}")]
    InvalidGrant(String),

    /// The issued token could not be persisted
    #[error("token storage failed: {0}")]
    Storage(String),
}

/// Client-credentials token manager
pub struct TokenManager<I, S: ?Sized> {
    issuer: I,
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    safety_margin: Duration,
}

impl<I, S> TokenManager<I, S>
where
    I: TokenIssuer,
    S: CredentialStore + ?Sized,
{
    /// Create a token manager using the system clock and the default
    /// ten-minute safety margin.
    pub fn new(issuer: I, store: Arc<S>) -> Self {
        Self {
            issuer,
            store,
            clock: Arc::new(SystemClock),
            safety_margin: Duration::seconds(DEFAULT_SAFETY_MARGIN_SECS),
        }
    }

    /// Replace the clock used for expiry checks.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the safety margin.
    #[must_use]
    pub fn with_safety_margin(mut self, margin: Duration) -> Self {
        self.safety_margin = margin;
        self
    }

    /// Safety margin applied to cached tokens.
    pub fn safety_margin(&self) -> Duration {
        self.safety_margin
    }

    /// Cached token, if it is still outside the safety margin.
    pub async fn cached_token(&self) -> Option<SecureString> {
        let cached = self.store.cached_token().await?;
        let now = self.clock.now();

        if cached.is_valid_at(now, self.safety_margin) {
            Some(cached.access_token)
        } else {
            debug!(expires_at = ?cached.expires_at, "cached bearer token is stale");
            None
        }
    }

    /// Get a usable bearer token
    ///
    /// Returns the cached token when it is outside the safety margin and
    /// performs at most one refresh otherwise.
    ///
    /// # Errors
    /// Returns an error if credentials are unavailable, the exchange fails, or
    /// the new token cannot be persisted.
    pub async fn acquire_token(&self) -> Result<SecureString, TokenManagerError> {
        if let Some(token) = self.cached_token().await {
            debug!("using cached bearer token");
            return Ok(token);
        }

        self.refresh_token().await
    }

    /// Perform a client-credentials exchange and persist the result.
    ///
    /// # Errors
    /// See [`acquire_token`](Self::acquire_token).
    pub async fn refresh_token(&self) -> Result<SecureString, TokenManagerError> {
        let client_id = self.store.client_id();
        let client_secret = self.store.client_secret().await.map_err(|err| {
            error!(error = %err, "failed to retrieve client secret");
            err
        })?;

        let base_url = self.store.base_url();
        let grant = self
            .issuer
            .issue_token(&base_url, &client_id, &client_secret)
            .await
            .map_err(|err| {
                warn!(error = %err, "client-credentials exchange failed");
                err
            })?;

        let cached = self.store.store_token(&grant).await.map_err(|err| {
            error!(error = %err, "failed to persist bearer token");
            err
        })?;

        info!(expires_at = ?cached.expires_at, "issued new bearer token");

        Ok(cached.access_token)
    }
}
