//! Carrier configuration
//!
//! `UpsConfig` is the explicit settings object handed to the credential store,
//! the token manager and the gateway at construction time.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CIE_BASE_URL, DEFAULT_API_VERSION, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_RETRIES,
    DEFAULT_MERCHANT_ID, DEFAULT_TIMEOUT_SECS, PRODUCTION_BASE_URL,
};
use crate::impl_label_conversions;

/// UPS server a deployment talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetServer {
    /// Customer Integration Environment (sandbox)
    CustomerIntegration,
    /// Live production environment
    Production,
}

impl_label_conversions!(TargetServer {
    CustomerIntegration => "Customer Integration Environment",
    Production => "Production Environment",
});

impl TargetServer {
    /// Base URL of the carrier API for this server.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::CustomerIntegration => CIE_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// UPS integration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsConfig {
    /// Label of the target server; see [`TargetServer`].
    #[serde(default = "default_target_server")]
    pub target_server: String,
    /// Explicit API base URL; takes precedence over `target_server`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub client_id: String,
    #[serde(default, skip_serializing)]
    pub client_secret: Option<String>,
    pub account_number: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_merchant_id")]
    pub merchant_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
    /// File the cached bearer token is persisted to. Memory only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_cache_path: Option<String>,
    /// Enables the label specification section (e.g. `"GIF"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_image_format: Option<String>,
    /// Enables the receipt specification section (e.g. `"HTML"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_image_format: Option<String>,
}

impl UpsConfig {
    /// Create a configuration with defaults for everything but the account
    /// identifiers.
    pub fn new(client_id: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            target_server: default_target_server(),
            base_url: None,
            client_id: client_id.into(),
            client_secret: None,
            account_number: account_number.into(),
            api_version: default_api_version(),
            merchant_id: default_merchant_id(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_retries: default_max_retries(),
            token_cache_path: None,
            label_image_format: None,
            receipt_image_format: None,
        }
    }

    /// Resolve the configured target server.
    pub fn target(&self) -> Option<TargetServer> {
        self.target_server.parse().ok()
    }

    /// Base URL for the configured target server, or the explicit
    /// `base_url` when set.
    ///
    /// Unrecognized targets resolve to an empty string; requests built from it
    /// fail downstream as request errors.
    pub fn api_base_url(&self) -> &str {
        match self.base_url.as_deref() {
            Some(url) if !url.is_empty() => url.trim_end_matches('/'),
            _ => self.target().map_or("", |target| target.base_url()),
        }
    }
}

fn default_target_server() -> String {
    TargetServer::CustomerIntegration.label().to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_merchant_id() -> String {
    DEFAULT_MERCHANT_ID.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_max_retries() -> usize {
    DEFAULT_MAX_RETRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_sandbox_and_production_urls() {
        let mut config = UpsConfig::new("id", "A1B2C3");
        assert_eq!(config.api_base_url(), "https://wwwcie.ups.com");

        config.target_server = "Production Environment".to_string();
        assert_eq!(config.api_base_url(), "https://onlinetools.ups.com");
    }

    #[test]
    fn unknown_target_resolves_to_empty_base_url() {
        let mut config = UpsConfig::new("id", "A1B2C3");
        config.target_server = "Staging".to_string();
        assert_eq!(config.target(), None);
        assert_eq!(config.api_base_url(), "");
    }

    #[test]
    fn explicit_base_url_wins() {
        let mut config = UpsConfig::new("id", "A1B2C3");
        config.target_server = "Staging".to_string();
        config.base_url = Some("http://127.0.0.1:8080/".to_string());
        assert_eq!(config.api_base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: UpsConfig = serde_json::from_str(
            r#"{"client_id": "abc", "client_secret": "shh", "account_number": "A1B2C3"}"#,
        )
        .unwrap();

        assert_eq!(config.target_server, "Customer Integration Environment");
        assert_eq!(config.api_version, "2409");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.client_secret.as_deref(), Some("shh"));
        assert!(config.label_image_format.is_none());
    }

    #[test]
    fn never_serializes_client_secret() {
        let mut config = UpsConfig::new("id", "A1B2C3");
        config.client_secret = Some("top-secret".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("top-secret"));
    }
}
