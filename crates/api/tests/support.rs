//! Shared fixtures for `upsbridge-app` integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;
use upsbridge_domain::UpsConfig;
use upsbridge_lib::context::AppContext;

pub const TOKEN_PATH: &str = "/security/v1/oauth/token";
pub const SHIP_PATH: &str = "/api/shipments/v2409/ship";

/// Working directory with an address book and one stored shipment.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("addresses.json"), address_book().to_string()).unwrap();
        std::fs::create_dir_all(dir.path().join("shipments")).unwrap();
        std::fs::write(dir.path().join("shipments/SHIP-0001.json"), shipment().to_string())
            .unwrap();
        Self { dir }
    }

    pub fn address_book(&self) -> PathBuf {
        self.dir.path().join("addresses.json")
    }

    pub fn shipments_dir(&self) -> PathBuf {
        self.dir.path().join("shipments")
    }

    pub fn token_cache(&self) -> PathBuf {
        self.dir.path().join("token.json")
    }

    /// Config pointing at `base_url` with the token cache inside the workspace.
    pub fn config(&self, base_url: &str) -> UpsConfig {
        let mut config = UpsConfig::new("client-1", "A1B2C3");
        config.client_secret = Some("s3cret".to_string());
        config.base_url = Some(base_url.to_string());
        config.token_cache_path = Some(self.token_cache().to_string_lossy().into_owned());
        config
    }

    pub fn context(&self, base_url: &str) -> AppContext {
        AppContext::with_config(self.config(base_url), &self.address_book(), &self.shipments_dir())
            .unwrap()
    }

    pub fn stored_shipment(&self) -> Value {
        let raw = std::fs::read_to_string(self.shipments_dir().join("SHIP-0001.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}

pub fn address_book() -> Value {
    json!({
        "addresses": {
            "Acme-Billing": {
                "address_line1": "12 Harbour Road",
                "city": "Hamburg",
                "pincode": "20457",
                "country": "Germany"
            },
            "Jane-Home": {
                "address_line1": "1 Main St",
                "address_line2": "",
                "city": "Springfield",
                "country": "United States"
            }
        },
        "countries": { "Germany": "de", "United States": "us" }
    })
}

pub fn shipment() -> Value {
    json!({
        "name": "SHIP-0001",
        "shipper": "Acme GmbH",
        "shipper_address": "Acme-Billing",
        "ship_to": "Jane Roe",
        "ship_to_address": "Jane-Home",
        "service": "Ground",
        "address_validation": "Postal Code, State Province Code",
        "packages": [
            { "package_type": "Customer Supplied Package", "weight": 5.0, "weight_uom": "Pounds" }
        ],
        "charges": [ { "charge_type": "Transportation" } ]
    })
}

pub fn token_response(issued_at_ms: i64) -> Value {
    json!({
        "token_type": "Bearer",
        "issued_at": issued_at_ms.to_string(),
        "client_id": "client-1",
        "access_token": "fresh-token",
        "expires_in": "3600",
        "status": "approved"
    })
}

pub fn ship_response() -> Value {
    json!({
        "ShipmentResponse": {
            "Response": { "ResponseStatus": { "Code": "1", "Description": "Success" } },
            "ShipmentResults": { "ShipmentIdentificationNumber": "1Z2220060290602143" }
        }
    })
}
