//! Domain types and models

pub mod address;
pub mod shipment;

pub use address::Address;
pub use shipment::{Shipment, ShipmentCharge, ShipmentPackage};
