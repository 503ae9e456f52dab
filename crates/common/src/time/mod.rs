//! Time utilities
//!
//! Token expiry decisions read the wall clock through [`Clock`] so tests can
//! pin "now" instead of racing the real clock.

pub mod clock;

pub use clock::{Clock, MockClock, SystemClock};
