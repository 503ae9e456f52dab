//! Shipment records stored as one JSON file per shipment

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};
use upsbridge_core::ShipmentRepository;
use upsbridge_domain::{Result, Shipment, UpsBridgeError};

use super::write_atomic;
use crate::errors::InfraError;

/// Directory of `<name>.json` shipment files
#[derive(Debug, Clone)]
pub struct JsonShipmentRepository {
    root: PathBuf,
}

impl JsonShipmentRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the shipment files live in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a shipment record, replacing any existing file.
    ///
    /// # Errors
    /// Returns an error for invalid names or if the file cannot be written.
    pub fn save(&self, shipment: &Shipment) -> Result<()> {
        let path = self.path_for(&shipment.name)?;
        let json = serde_json::to_vec_pretty(shipment).map_err(InfraError::domain)?;
        write_atomic(&path, &json)?;
        debug!(shipment = %shipment.name, path = %path.display(), "saved shipment");
        Ok(())
    }

    fn read(&self, name: &str) -> Result<Shipment> {
        let path = self.path_for(name)?;
        let contents = std::fs::read_to_string(&path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                UpsBridgeError::NotFound(format!("shipment '{name}'"))
            } else {
                InfraError::domain(err)
            }
        })?;

        serde_json::from_str(&contents).map_err(InfraError::domain)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(UpsBridgeError::InvalidInput(format!("invalid shipment name '{name}'")));
        }

        Ok(self.root.join(format!("{name}.json")))
    }
}

#[async_trait]
impl ShipmentRepository for JsonShipmentRepository {
    async fn load(&self, name: &str) -> Result<Shipment> {
        self.read(name)
    }

    async fn save_response(&self, name: &str, response: &Value) -> Result<()> {
        let mut shipment = self.read(name)?;
        shipment.response = Some(response.clone());
        self.save(&shipment)?;
        info!(shipment = %name, "recorded carrier response");
        Ok(())
    }
}
