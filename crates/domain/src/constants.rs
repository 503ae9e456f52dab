//! Carrier constants
//!
//! Centralized location for the fixed values the UPS integration relies on.

/// Base URL of the UPS Customer Integration Environment (sandbox).
pub const CIE_BASE_URL: &str = "https://wwwcie.ups.com";

/// Base URL of the UPS production environment.
pub const PRODUCTION_BASE_URL: &str = "https://onlinetools.ups.com";

/// Path of the client-credentials token endpoint, relative to the base URL.
pub const OAUTH_TOKEN_PATH: &str = "/security/v1/oauth/token";

/// Header carrying the merchant identifier on token requests.
pub const MERCHANT_ID_HEADER: &str = "x-merchant-id";

// Configuration defaults
pub const DEFAULT_API_VERSION: &str = "2409";
pub const DEFAULT_MERCHANT_ID: &str = "upsbridge";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Bare API version number; a leading `v` is dropped (`v2409` → `2409`).
pub fn api_version_number(api_version: &str) -> &str {
    api_version.trim().trim_start_matches('v')
}

/// Build the shipment-creation path for an API version (e.g. `2409` →
/// `/api/shipments/v2409/ship`).
pub fn shipment_path(api_version: &str) -> String {
    format!("/api/shipments/v{}/ship", api_version_number(api_version))
}
