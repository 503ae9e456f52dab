//! Bearer token acquisition

use chrono::{DateTime, Utc};
use serde::Serialize;
use upsbridge_common::CredentialStore;
use upsbridge_domain::Result;
use upsbridge_infra::InfraError;

use crate::context::AppContext;

/// Where the reported token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    Cached,
    Refreshed,
}

/// Token state after acquisition. The token itself is never reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenStatus {
    pub source: TokenSource,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Make sure a usable bearer token is cached.
///
/// With `force_refresh` the cached token is ignored and a new one is always
/// requested.
///
/// # Errors
/// Returns an error if the client secret is unavailable or the token
/// exchange fails.
pub async fn acquire_token(context: &AppContext, force_refresh: bool) -> Result<TokenStatus> {
    let gateway = context.gateway();
    let manager = gateway.token_manager(gateway.http_client()?);

    let source = if !force_refresh && manager.cached_token().await.is_some() {
        TokenSource::Cached
    } else {
        manager.refresh_token().await.map_err(InfraError::domain)?;
        TokenSource::Refreshed
    };

    let expires_at = context.settings.cached_token().await.and_then(|token| token.expires_at);

    Ok(TokenStatus { source, expires_at })
}
