//! Shared test helpers for `upsbridge-core` integration tests.
//!
//! In-memory implementations of the core ports plus a fixture shipment, so
//! service tests can focus on behaviour instead of boilerplate.

pub mod carrier;
pub mod repositories;

use upsbridge_domain::{Shipment, ShipmentCharge, ShipmentPackage};

/// Ground shipment from Hamburg to Springfield with one 5 lb package.
pub fn ground_shipment() -> Shipment {
    Shipment {
        name: "SHIP-0001".to_string(),
        shipper: "Acme GmbH".to_string(),
        shipper_address: "Acme-Billing".to_string(),
        ship_to: "Jane Roe".to_string(),
        ship_to_address: "Jane-Home".to_string(),
        service: "Ground".to_string(),
        address_validation: "Postal Code, State Province Code, City".to_string(),
        description: None,
        packages: vec![ShipmentPackage {
            package_type: "Customer Supplied Package".to_string(),
            weight: 5.0,
            weight_uom: "Pounds".to_string(),
        }],
        charges: vec![ShipmentCharge { charge_type: "Transportation".to_string() }],
        response: None,
    }
}
