//! Port interfaces for shipment creation

use async_trait::async_trait;
use serde_json::Value;
use upsbridge_domain::{Address, Result, Shipment};

use super::payload::ShipmentRequestEnvelope;

/// Read access to address and country records.
#[async_trait]
pub trait AddressBook: Send + Sync {
    /// Address record by name.
    async fn address(&self, name: &str) -> Result<Address>;

    /// ISO country code for a country record. Case is not normalised.
    async fn country_code(&self, country: &str) -> Result<String>;
}

/// Persistence for shipment records.
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Load a shipment by name.
    async fn load(&self, name: &str) -> Result<Shipment>;

    /// Record the carrier response for a shipment.
    async fn save_response(&self, name: &str, response: &Value) -> Result<()>;
}

/// Opens authenticated sessions against the carrier.
#[async_trait]
pub trait CarrierGateway: Send + Sync {
    /// Session type; released when dropped.
    type Session: CarrierSession;

    /// Open a session and authenticate it.
    ///
    /// Fails with an authentication error when no bearer token can be
    /// obtained. Nothing is sent to the shipment endpoint in that case.
    async fn open_session(&self) -> Result<Self::Session>;
}

/// A single authenticated carrier session.
#[async_trait]
pub trait CarrierSession: Send + Sync {
    /// Submit a shipment request and return the raw carrier response.
    async fn create_shipment(&self, request: &ShipmentRequestEnvelope) -> Result<Value>;
}
