//! OAuth 2.0 client-credentials infrastructure
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  TokenManager   │  cache check + refresh orchestration
//! └────────┬────────┘
//!          │
//!          ├──► CredentialStore  (client id/secret, cached token record)
//!          └──► TokenIssuer      (client-credentials exchange over HTTP)
//! ```
//!
//! The manager never talks to the network itself. Carrier integrations supply
//! a [`TokenIssuer`] that performs the exchange and a [`CredentialStore`] that
//! persists the issued token.
//!
//! # Module Organization
//!
//! - **[`types`]**: `CachedToken`, `TokenGrant`, `TokenResponse`
//! - **[`traits`]**: `CredentialStore`, `TokenIssuer`
//! - **[`token_manager`]**: `TokenManager` and `TokenManagerError`

pub mod token_manager;
pub mod traits;
pub mod types;

pub use token_manager::{TokenManager, TokenManagerError};
pub use traits::{CredentialStore, TokenIssuer};
pub use types::{CachedToken, TokenGrant, TokenResponse};
