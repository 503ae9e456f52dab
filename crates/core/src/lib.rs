//! # upsbridge Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Carrier code lookup tables
//! - The shipment request payload builder
//! - Port interfaces (traits) for address lookup, persistence, and the carrier
//! - The shipment submission service
//!
//! ## Architecture Principles
//! - Only depends on `upsbridge-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod shipping;

pub use shipping::ports::{AddressBook, CarrierGateway, CarrierSession, ShipmentRepository};
pub use shipping::{PayloadOptions, ShipmentRequestBuilder, ShipmentService};
