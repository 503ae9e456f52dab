//! Address book loaded from a JSON or TOML document
//!
//! ```json
//! {
//!   "addresses": {
//!     "Acme-Billing": {
//!       "address_line1": "12 Harbour Road",
//!       "city": "Hamburg",
//!       "pincode": "20457",
//!       "country": "Germany"
//!     }
//!   },
//!   "countries": { "Germany": "de" }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use upsbridge_core::AddressBook;
use upsbridge_domain::{Address, Result, UpsBridgeError};

use crate::errors::InfraError;

/// Serialized form of the address book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBookDocument {
    #[serde(default)]
    pub addresses: HashMap<String, Address>,
    /// Country record name → ISO code.
    #[serde(default)]
    pub countries: HashMap<String, String>,
}

/// Read-only address book held in memory
#[derive(Debug, Clone, Default)]
pub struct JsonAddressBook {
    document: AddressBookDocument,
}

impl JsonAddressBook {
    pub fn new(document: AddressBookDocument) -> Self {
        Self { document }
    }

    /// Load from a `.json` or `.toml` file.
    ///
    /// # Errors
    /// Returns an error if the file is missing or malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(InfraError::domain)?;
        let document: AddressBookDocument =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => toml::from_str(&contents).map_err(InfraError::domain)?,
                _ => serde_json::from_str(&contents).map_err(InfraError::domain)?,
            };

        debug!(
            path = %path.display(),
            addresses = document.addresses.len(),
            countries = document.countries.len(),
            "loaded address book"
        );

        Ok(Self::new(document))
    }
}

#[async_trait]
impl AddressBook for JsonAddressBook {
    async fn address(&self, name: &str) -> Result<Address> {
        self.document
            .addresses
            .get(name)
            .cloned()
            .ok_or_else(|| UpsBridgeError::NotFound(format!("address '{name}'")))
    }

    async fn country_code(&self, country: &str) -> Result<String> {
        self.document
            .countries
            .get(country)
            .cloned()
            .ok_or_else(|| UpsBridgeError::NotFound(format!("country '{country}'")))
    }
}
