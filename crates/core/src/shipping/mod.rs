//! Shipment creation: code tables, payload mapping, and submission

pub mod codes;
pub mod payload;
pub mod ports;
pub mod service;

pub use codes::CodeTable;
pub use payload::{PayloadOptions, ShipmentRequestBuilder, ShipmentRequestEnvelope};
pub use service::{ShipmentService, SubmissionState};
