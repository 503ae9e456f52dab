//! External service integrations

pub mod ups;
