//! UPS shipping client
//!
//! Every [`UpsClient::open_session`] call builds a fresh HTTP client, resolves
//! a bearer token through the token manager, and returns a [`UpsSession`]
//! scoped to one submission. The session is released when dropped.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info};
use upsbridge_common::{SecureString, TokenManager};
use upsbridge_core::shipping::ShipmentRequestEnvelope;
use upsbridge_core::{CarrierGateway, CarrierSession};
use upsbridge_domain::constants::shipment_path;
use upsbridge_domain::{Result, UpsBridgeError};
use uuid::Uuid;

use super::auth::UpsTokenIssuer;
use super::settings::UpsSettingsStore;
use crate::errors::InfraError;
use crate::http::HttpClient;

const USER_AGENT: &str = concat!("upsbridge/", env!("CARGO_PKG_VERSION"));

/// Gateway to the UPS shipping API
pub struct UpsClient {
    store: Arc<UpsSettingsStore>,
}

impl UpsClient {
    pub fn new(store: Arc<UpsSettingsStore>) -> Self {
        Self { store }
    }

    /// Credential store backing this client.
    pub fn store(&self) -> &Arc<UpsSettingsStore> {
        &self.store
    }

    /// HTTP client configured from the settings.
    ///
    /// # Errors
    /// Returns an error if the underlying client cannot be constructed.
    pub fn http_client(&self) -> Result<HttpClient> {
        let config = self.store.config();
        HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .max_retries(config.max_retries)
            .user_agent(USER_AGENT)
            .build()
    }

    /// Token manager sharing this client's credential store, with the
    /// default ten-minute safety margin.
    pub fn token_manager(&self, http: HttpClient) -> TokenManager<UpsTokenIssuer, UpsSettingsStore> {
        let issuer = UpsTokenIssuer::new(http, self.store.config().merchant_id.clone());
        TokenManager::new(issuer, Arc::clone(&self.store))
    }
}

#[async_trait]
impl CarrierGateway for UpsClient {
    type Session = UpsSession;

    async fn open_session(&self) -> Result<UpsSession> {
        let http = self.http_client()?;
        let token = self
            .token_manager(http.clone())
            .acquire_token()
            .await
            .map_err(InfraError::domain)?;

        let config = self.store.config();
        let session = UpsSession {
            id: Uuid::new_v4(),
            http,
            token,
            ship_url: format!("{}{}", config.api_base_url(), shipment_path(&config.api_version)),
        };

        info!(session_id = %session.id, "UPS session opened");
        Ok(session)
    }
}

/// Authenticated session for one submission
pub struct UpsSession {
    id: Uuid,
    http: HttpClient,
    token: SecureString,
    ship_url: String,
}

impl UpsSession {
    /// Correlation id of this session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Shipment endpoint this session posts to.
    pub fn ship_url(&self) -> &str {
        &self.ship_url
    }
}

#[async_trait]
impl CarrierSession for UpsSession {
    async fn create_shipment(&self, request: &ShipmentRequestEnvelope) -> Result<Value> {
        debug!(session_id = %self.id, url = %self.ship_url, "posting shipment request");

        let builder = self
            .http
            .request(Method::POST, &self.ship_url)
            .bearer_auth(self.token.expose())
            .json(request);

        self.http.send_json::<Value>(builder).await.map_err(UpsBridgeError::from)
    }
}

impl Drop for UpsSession {
    fn drop(&mut self) {
        debug!(session_id = %self.id, "UPS session closed");
    }
}
