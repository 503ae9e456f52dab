//! # upsbridge Application
//!
//! Application layer - command handlers and wiring for the `upsbridge`
//! binary.
//!
//! This crate contains:
//! - Command-line definition and dispatch
//! - Command handlers (token, payload preview, submission, code tables)
//! - Application context (dependency injection)
//! - Logging initialisation
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires the carrier gateway, the address book, and the shipment store
//!   into the shipment service

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
