//! Configuration loader
//!
//! Loads [`UpsConfig`] from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! Required:
//! - `UPSBRIDGE_CLIENT_ID`: OAuth client id
//! - `UPSBRIDGE_ACCOUNT_NUMBER`: UPS shipper number
//!
//! Optional:
//! - `UPSBRIDGE_CLIENT_SECRET`: OAuth client secret
//! - `UPSBRIDGE_TARGET_SERVER`: `Customer Integration Environment` or
//!   `Production Environment`
//! - `UPSBRIDGE_BASE_URL`: explicit API base URL (overrides the target server)
//! - `UPSBRIDGE_API_VERSION`, `UPSBRIDGE_MERCHANT_ID`
//! - `UPSBRIDGE_TIMEOUT_SECS`, `UPSBRIDGE_CONNECT_TIMEOUT_SECS`,
//!   `UPSBRIDGE_MAX_RETRIES`
//! - `UPSBRIDGE_TOKEN_CACHE_PATH`
//! - `UPSBRIDGE_LABEL_IMAGE_FORMAT`, `UPSBRIDGE_RECEIPT_IMAGE_FORMAT`
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./upsbridge.toml` or `./upsbridge.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. `../upsbridge.toml` or `../upsbridge.json` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use upsbridge_domain::{Result, UpsBridgeError, UpsConfig};

const FILE_NAMES: [&str; 4] = ["upsbridge.toml", "upsbridge.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `UpsBridgeError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<UpsConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `UpsBridgeError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<UpsConfig> {
    let mut config = UpsConfig::new(
        env_var("UPSBRIDGE_CLIENT_ID")?,
        env_var("UPSBRIDGE_ACCOUNT_NUMBER")?,
    );

    config.client_secret = env_opt("UPSBRIDGE_CLIENT_SECRET");
    if let Some(target) = env_opt("UPSBRIDGE_TARGET_SERVER") {
        config.target_server = target;
    }
    config.base_url = env_opt("UPSBRIDGE_BASE_URL");
    if let Some(version) = env_opt("UPSBRIDGE_API_VERSION") {
        config.api_version = version;
    }
    if let Some(merchant_id) = env_opt("UPSBRIDGE_MERCHANT_ID") {
        config.merchant_id = merchant_id;
    }
    if let Some(timeout) = env_parse("UPSBRIDGE_TIMEOUT_SECS")? {
        config.timeout_secs = timeout;
    }
    if let Some(timeout) = env_parse("UPSBRIDGE_CONNECT_TIMEOUT_SECS")? {
        config.connect_timeout_secs = timeout;
    }
    if let Some(retries) = env_parse("UPSBRIDGE_MAX_RETRIES")? {
        config.max_retries = retries;
    }
    config.token_cache_path = env_opt("UPSBRIDGE_TOKEN_CACHE_PATH");
    config.label_image_format = env_opt("UPSBRIDGE_LABEL_IMAGE_FORMAT");
    config.receipt_image_format = env_opt("UPSBRIDGE_RECEIPT_IMAGE_FORMAT");

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// A client secret missing from the file is taken from
/// `UPSBRIDGE_CLIENT_SECRET`, so secrets can stay out of config files.
///
/// # Errors
/// Returns `UpsBridgeError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<UpsConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(UpsBridgeError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            UpsBridgeError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| UpsBridgeError::Config(format!("Failed to read config file: {e}")))?;

    let mut config = parse_config(&contents, &config_path)?;
    if config.client_secret.is_none() {
        config.client_secret = env_opt("UPSBRIDGE_CLIENT_SECRET");
    }

    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<UpsConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| UpsBridgeError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| UpsBridgeError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(UpsBridgeError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(FILE_NAMES.iter().map(|name| cwd.join(name)));
        candidates.push(cwd.join("../upsbridge.toml"));
        candidates.push(cwd.join("../upsbridge.json"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        UpsBridgeError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional environment variable; empty values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an optional numeric environment variable.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| UpsBridgeError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}
