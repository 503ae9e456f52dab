//! In-memory address book and shipment repository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use upsbridge_core::{AddressBook, ShipmentRepository};
use upsbridge_domain::{Address, Result as DomainResult, Shipment, UpsBridgeError};

/// Address book seeded with the two fixture addresses.
#[derive(Clone)]
pub struct MockAddressBook {
    addresses: Arc<HashMap<String, Address>>,
}

impl Default for MockAddressBook {
    fn default() -> Self {
        let mut addresses = HashMap::new();
        addresses.insert(
            "Acme-Billing".to_string(),
            Address {
                address_line1: "12 Harbour Road".to_string(),
                address_line2: None,
                city: "Hamburg".to_string(),
                pincode: Some("20457".to_string()),
                country: "Germany".to_string(),
            },
        );
        addresses.insert(
            "Jane-Home".to_string(),
            Address {
                address_line1: "1 Main St".to_string(),
                address_line2: Some("Apt 4".to_string()),
                city: "Springfield".to_string(),
                pincode: Some("62701".to_string()),
                country: "United States".to_string(),
            },
        );
        Self { addresses: Arc::new(addresses) }
    }
}

#[async_trait]
impl AddressBook for MockAddressBook {
    async fn address(&self, name: &str) -> DomainResult<Address> {
        self.addresses
            .get(name)
            .cloned()
            .ok_or_else(|| UpsBridgeError::NotFound(format!("address {name}")))
    }

    async fn country_code(&self, country: &str) -> DomainResult<String> {
        match country {
            "Germany" => Ok("de".to_string()),
            "United States" => Ok("us".to_string()),
            other => Err(UpsBridgeError::NotFound(format!("country {other}"))),
        }
    }
}

/// Repository that keeps shipments and recorded responses in memory.
#[derive(Default, Clone)]
pub struct MockShipmentRepository {
    shipments: Arc<Mutex<HashMap<String, Shipment>>>,
    responses: Arc<Mutex<Vec<(String, Value)>>>,
    fail_saves: bool,
}

impl MockShipmentRepository {
    /// Repository seeded with one shipment.
    pub fn with_shipment(shipment: Shipment) -> Self {
        let repo = Self::default();
        repo.shipments.lock().insert(shipment.name.clone(), shipment);
        repo
    }

    /// Repository whose `save_response` always fails.
    pub fn failing_saves() -> Self {
        Self { fail_saves: true, ..Self::default() }
    }

    /// Responses recorded so far.
    pub fn responses(&self) -> Vec<(String, Value)> {
        self.responses.lock().clone()
    }
}

#[async_trait]
impl ShipmentRepository for MockShipmentRepository {
    async fn load(&self, name: &str) -> DomainResult<Shipment> {
        self.shipments
            .lock()
            .get(name)
            .cloned()
            .ok_or_else(|| UpsBridgeError::NotFound(format!("shipment {name}")))
    }

    async fn save_response(&self, name: &str, response: &Value) -> DomainResult<()> {
        if self.fail_saves {
            return Err(UpsBridgeError::Storage("disk full".to_string()));
        }
        self.responses.lock().push((name.to_string(), response.clone()));
        if let Some(shipment) = self.shipments.lock().get_mut(name) {
            shipment.response = Some(response.clone());
        }
        Ok(())
    }
}
