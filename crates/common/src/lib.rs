//! Carrier-agnostic utilities shared across upsbridge crates.
//!
//! - [`auth`]: client-credentials token lifecycle (`TokenManager`) and the
//!   traits it is wired through (`CredentialStore`, `TokenIssuer`)
//! - [`security`]: `SecureString` for secrets held in memory
//! - [`time`]: wall-clock abstraction for deterministic expiry checks

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;
pub mod security;
pub mod time;

// Re-export commonly used types and traits for convenience
pub use auth::{
    CachedToken, CredentialStore, TokenGrant, TokenIssuer, TokenManager, TokenManagerError,
    TokenResponse,
};
pub use security::SecureString;
pub use time::{Clock, MockClock, SystemClock};
