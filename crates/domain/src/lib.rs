//! # upsbridge Domain
//!
//! Business domain types and models for upsbridge.
//!
//! This crate contains:
//! - Shipment entities (Shipment, packages, charges) and addresses
//! - Domain error types and Result definitions
//! - Carrier configuration (`UpsConfig`, `TargetServer`)
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other upsbridge crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
