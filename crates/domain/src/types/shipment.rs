//! Shipment entity and its embedded child rows

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A shipment to be created with the carrier.
///
/// `service`, `address_validation`, and the package/charge type fields hold
/// the human-readable labels chosen by the operator; they are translated to
/// carrier codes when the request payload is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Document name, unique per shipment.
    pub name: String,
    /// Shipper display name.
    pub shipper: String,
    /// Reference to the shipper's address record.
    pub shipper_address: String,
    /// Recipient display name.
    pub ship_to: String,
    /// Reference to the recipient's address record.
    pub ship_to_address: String,
    pub service: String,
    #[serde(default)]
    pub address_validation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub packages: Vec<ShipmentPackage>,
    #[serde(default)]
    pub charges: Vec<ShipmentCharge>,
    /// Raw carrier response from the last successful submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

/// Package row of a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentPackage {
    pub package_type: String,
    pub weight: f64,
    pub weight_uom: String,
}

/// Charge row of a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentCharge {
    pub charge_type: String,
}

impl Shipment {
    /// Description if present and non-empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }

    /// Whether a carrier response has been recorded.
    pub fn is_recorded(&self) -> bool {
        self.response.is_some()
    }
}
