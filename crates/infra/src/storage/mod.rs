//! File-backed implementations of the core shipping ports

pub mod address_book;
pub mod shipment_repository;

pub use address_book::{AddressBookDocument, JsonAddressBook};
pub use shipment_repository::JsonShipmentRepository;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use upsbridge_domain::Result;

use crate::errors::InfraError;

/// Replace `path` with `contents` via a temp file in the same directory.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(InfraError::domain)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(InfraError::domain)?;
    tmp.write_all(contents).map_err(InfraError::domain)?;
    tmp.persist(path).map_err(|e| InfraError::domain(e.error))?;

    Ok(())
}
