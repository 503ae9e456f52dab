//! UPS integration
//!
//! # Architecture
//!
//! - **Settings**: `UpsSettingsStore` - credential store over [`UpsConfig`]
//!   holding the cached bearer token (optionally mirrored to a JSON file)
//! - **Auth**: `UpsTokenIssuer` - client-credentials exchange against
//!   `/security/v1/oauth/token`
//! - **Client**: `UpsClient` / `UpsSession` - authenticated, per-submission
//!   sessions that post shipment requests
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use upsbridge_core::{CarrierGateway, CarrierSession};
//! use upsbridge_domain::UpsConfig;
//! use upsbridge_infra::integrations::ups::{UpsClient, UpsSettingsStore};
//!
//! # async fn example(
//! #     request: upsbridge_core::shipping::ShipmentRequestEnvelope,
//! # ) -> upsbridge_domain::Result<()> {
//! let mut config = UpsConfig::new("client-id", "A1B2C3");
//! config.client_secret = Some("client-secret".to_string());
//!
//! let store = Arc::new(UpsSettingsStore::new(config));
//! let client = UpsClient::new(store);
//!
//! let session = client.open_session().await?;
//! let response = session.create_shipment(&request).await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```
//!
//! [`UpsConfig`]: upsbridge_domain::UpsConfig

pub mod auth;
pub mod client;
pub mod settings;

pub use auth::UpsTokenIssuer;
pub use client::{UpsClient, UpsSession};
pub use settings::UpsSettingsStore;
