//! Address records resolved by reference from shipments

use serde::{Deserialize, Serialize};

/// Postal address as stored by the host system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    /// Postal code. Optional for countries without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    /// Reference to a country record, resolved to an ISO code separately.
    pub country: String,
}

impl Address {
    /// Non-empty address lines in order.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(Some(&self.address_line1))
            .chain(std::iter::once(self.address_line2.as_ref()))
            .flatten()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect()
    }

    /// Postal code if present and non-empty.
    pub fn postal_code(&self) -> Option<&str> {
        self.pincode.as_deref().filter(|code| !code.is_empty())
    }
}
