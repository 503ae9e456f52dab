//! Traits for credential storage and token issuance
//!
//! These traits decouple [`TokenManager`](super::TokenManager) from the
//! settings backend and from the HTTP transport, so both can be replaced in
//! tests.

use async_trait::async_trait;

use super::token_manager::TokenManagerError;
use super::types::{CachedToken, TokenGrant};
use crate::security::SecureString;

/// Store holding the client credentials and the cached bearer token.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Base URL of the carrier API; empty when the target is not configured.
    fn base_url(&self) -> String;

    /// OAuth client id.
    fn client_id(&self) -> String;

    /// OAuth client secret.
    ///
    /// # Errors
    /// Returns [`TokenManagerError::CredentialUnavailable`] if the secret is
    /// missing or cannot be read.
    async fn client_secret(&self) -> Result<SecureString, TokenManagerError>;

    /// Currently cached token record, if any.
    async fn cached_token(&self) -> Option<CachedToken>;

    /// Replace the cached token record with a newly issued grant.
    ///
    /// Token and expiry must become visible together.
    ///
    /// # Errors
    /// Returns an error if the grant carries an invalid expiry or the record
    /// cannot be persisted.
    async fn store_token(&self, grant: &TokenGrant) -> Result<CachedToken, TokenManagerError>;
}

/// Performs the client-credentials exchange against a token endpoint.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Exchange client credentials for a bearer token.
    ///
    /// # Errors
    /// Returns [`TokenManagerError::RefreshFailed`] if the exchange fails.
    async fn issue_token(
        &self,
        base_url: &str,
        client_id: &str,
        client_secret: &SecureString,
    ) -> Result<TokenGrant, TokenManagerError>;
}
