//! HTTP transport with connection-level retries and failure classification

pub mod client;
pub mod errors;

pub use client::{HttpClient, HttpClientBuilder};
pub use errors::{RequestError, RequestErrorCategory};
