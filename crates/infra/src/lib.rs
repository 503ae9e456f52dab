//! # upsbridge Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with connection retries and failure classification
//! - The UPS integration (settings store, token issuer, shipping client)
//! - File-backed address book and shipment repository
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `upsbridge-core` and `upsbridge-common`
//! - Contains all "impure" code (network and file I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod storage;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder, RequestError, RequestErrorCategory};
pub use integrations::ups::{UpsClient, UpsSession, UpsSettingsStore, UpsTokenIssuer};
pub use storage::{JsonAddressBook, JsonShipmentRepository};
