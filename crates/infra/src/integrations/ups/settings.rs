//! UPS settings and token cache
//!
//! [`UpsSettingsStore`] is the [`CredentialStore`] behind the token manager.
//! The cached `(token, expiry)` pair lives behind a single lock and is
//! replaced as a unit. When `token_cache_path` is configured the record is
//! also written to a JSON file, so tokens survive process restarts.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use upsbridge_common::{CachedToken, CredentialStore, SecureString, TokenGrant, TokenManagerError};
use upsbridge_domain::{Result, UpsBridgeError, UpsConfig};

use crate::errors::InfraError;
use crate::storage::write_atomic;

/// On-disk form of the cached token record.
#[derive(Debug, Serialize, Deserialize)]
struct TokenCacheFile {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Credential store over [`UpsConfig`]
pub struct UpsSettingsStore {
    config: UpsConfig,
    cache_path: Option<PathBuf>,
    record: RwLock<Option<CachedToken>>,
}

impl UpsSettingsStore {
    /// Create a store, loading a previously cached token if the cache file
    /// exists.
    ///
    /// An unreadable or corrupt cache file is logged and treated as no cached
    /// token; the next issued token overwrites it.
    pub fn new(config: UpsConfig) -> Self {
        let cache_path = config.token_cache_path.as_ref().map(PathBuf::from);
        let record = match &cache_path {
            Some(path) if path.exists() => match read_cache_file(path) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "ignoring unreadable token cache; a new token will be requested"
                    );
                    None
                }
            },
            _ => None,
        };

        if record.is_some() {
            debug!("loaded cached bearer token from disk");
        }

        Self { config, cache_path, record: RwLock::new(record) }
    }

    /// Settings this store was created from.
    pub fn config(&self) -> &UpsConfig {
        &self.config
    }

    /// Token cache file, if configured.
    pub fn cache_path(&self) -> Option<&Path> {
        self.cache_path.as_deref()
    }

    /// Drop the cached token, in memory and on disk.
    ///
    /// # Errors
    /// Returns an error if the cache file exists and cannot be removed.
    pub fn clear_token(&self) -> Result<()> {
        let mut record = self.record.write();
        if let Some(path) = &self.cache_path {
            if path.exists() {
                fs::remove_file(path).map_err(InfraError::domain)?;
            }
        }
        *record = None;
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for UpsSettingsStore {
    fn base_url(&self) -> String {
        self.config.api_base_url().to_string()
    }

    fn client_id(&self) -> String {
        self.config.client_id.clone()
    }

    async fn client_secret(&self) -> std::result::Result<SecureString, TokenManagerError> {
        match self.config.client_secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(SecureString::new(secret)),
            _ => Err(TokenManagerError::CredentialUnavailable(
                "client secret is not configured".to_string(),
            )),
        }
    }

    async fn cached_token(&self) -> Option<CachedToken> {
        self.record.read().clone()
    }

    async fn store_token(
        &self,
        grant: &TokenGrant,
    ) -> std::result::Result<CachedToken, TokenManagerError> {
        let expires_at = grant.expires_at().ok_or_else(|| {
            TokenManagerError::InvalidGrant(format!(
                "issued_at {} / expires_in {} out of range",
                grant.issued_at_ms, grant.expires_in_secs
            ))
        })?;
        let cached = CachedToken::new(grant.access_token.clone(), Some(expires_at));

        let mut record = self.record.write();
        if let Some(path) = &self.cache_path {
            write_cache_file(path, &cached).map_err(|err| {
                error!(path = %path.display(), error = %err, "failed to write token cache");
                TokenManagerError::Storage(err.to_string())
            })?;
        }
        *record = Some(cached.clone());

        Ok(cached)
    }
}

fn read_cache_file(path: &Path) -> Result<CachedToken> {
    let contents = fs::read_to_string(path).map_err(InfraError::domain)?;
    let file: TokenCacheFile = serde_json::from_str(&contents).map_err(InfraError::domain)?;

    Ok(CachedToken::new(file.access_token, Some(file.expires_at)))
}

/// Write the record to a sibling temp file and rename it over `path`.
fn write_cache_file(path: &Path, token: &CachedToken) -> Result<()> {
    let Some(expires_at) = token.expires_at else {
        return Err(UpsBridgeError::InvalidInput("token without expiry".to_string()));
    };
    let file = TokenCacheFile { access_token: token.access_token.expose().to_string(), expires_at };
    let json = serde_json::to_vec_pretty(&file).map_err(InfraError::domain)?;

    write_atomic(path, &json)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn config() -> UpsConfig {
        let mut config = UpsConfig::new("client-1", "A1B2C3");
        config.client_secret = Some("s3cret".to_string());
        config
    }

    fn grant(issued_at: DateTime<Utc>) -> TokenGrant {
        TokenGrant {
            access_token: SecureString::new("fresh-token"),
            issued_at_ms: issued_at.timestamp_millis(),
            expires_in_secs: 3600,
        }
    }

    #[tokio::test]
    async fn stores_token_in_memory() {
        let store = UpsSettingsStore::new(config());
        let issued_at = Utc.with_ymd_and_hms(2024, 5, 6, 12, 0, 0).unwrap();

        let cached = store.store_token(&grant(issued_at)).await.unwrap();

        assert_eq!(cached.expires_at, Some(issued_at + Duration::seconds(3600)));
        assert_eq!(store.cached_token().await, Some(cached));
    }

    #[tokio::test]
    async fn persists_token_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config();
        config.token_cache_path =
            Some(dir.path().join("cache").join("token.json").to_string_lossy().into_owned());
        let issued_at = Utc.with_ymd_and_hms(2024, 5, 6, 12, 0, 0).unwrap();

        let first = UpsSettingsStore::new(config.clone());
        first.store_token(&grant(issued_at)).await.unwrap();

        let second = UpsSettingsStore::new(config);
        let cached = second.cached_token().await.unwrap();
        assert_eq!(cached.access_token.expose(), "fresh-token");
        assert_eq!(cached.expires_at, Some(issued_at + Duration::seconds(3600)));
    }

    #[tokio::test]
    async fn clear_token_removes_cache_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        let mut config = config();
        config.token_cache_path = Some(path.to_string_lossy().into_owned());

        let store = UpsSettingsStore::new(config);
        store.store_token(&grant(Utc::now())).await.unwrap();
        assert!(path.exists());

        store.clear_token().unwrap();
        assert!(!path.exists());
        assert!(store.cached_token().await.is_none());
    }

    #[tokio::test]
    async fn corrupt_cache_file_reads_as_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        fs::write(&path, r#"{"access_token": "abc""#).unwrap();
        let mut config = config();
        config.token_cache_path = Some(path.to_string_lossy().into_owned());

        let store = UpsSettingsStore::new(config.clone());
        assert!(store.cached_token().await.is_none());

        let issued_at = Utc.with_ymd_and_hms(2024, 5, 6, 12, 0, 0).unwrap();
        store.store_token(&grant(issued_at)).await.unwrap();

        let reloaded = UpsSettingsStore::new(config);
        let cached = reloaded.cached_token().await.unwrap();
        assert_eq!(cached.access_token.expose(), "fresh-token");
    }

    #[tokio::test]
    async fn missing_secret_is_unavailable() {
        let mut config = config();
        config.client_secret = Some(String::new());
        let store = UpsSettingsStore::new(config);

        let err = store.client_secret().await.unwrap_err();
        assert!(matches!(err, TokenManagerError::CredentialUnavailable(_)));
    }

    #[tokio::test]
    async fn out_of_range_grant_is_rejected_and_record_kept() {
        let store = UpsSettingsStore::new(config());
        let bad = TokenGrant {
            access_token: SecureString::new("x"),
            issued_at_ms: i64::MAX,
            expires_in_secs: 3600,
        };

        let err = store.store_token(&bad).await.unwrap_err();

        assert!(matches!(err, TokenManagerError::InvalidGrant(_)));
        assert!(store.cached_token().await.is_none());
    }

    #[test]
    fn unknown_target_has_empty_base_url() {
        let mut config = config();
        config.target_server = "Staging".to_string();
        let store = UpsSettingsStore::new(config);
        assert_eq!(store.base_url(), "");
    }
}
