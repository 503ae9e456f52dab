//! Command handlers behind the `upsbridge` binary
//!
//! Each handler takes the [`AppContext`](crate::context::AppContext) and
//! returns a serializable report; printing is left to the binary.

pub mod codes;
pub mod payload;
pub mod submit;
pub mod token;

pub use codes::{code_tables, CodeEntry, CodeTableView};
pub use payload::build_payload;
pub use submit::{submit_shipment, SubmissionReport};
pub use token::{acquire_token, TokenSource, TokenStatus};
