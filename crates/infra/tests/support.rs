//! Shared helpers for `upsbridge-infra` integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;
use upsbridge_domain::{Address, Shipment, ShipmentCharge, ShipmentPackage};
use upsbridge_infra::storage::{AddressBookDocument, JsonAddressBook};

/// One captured tracing event.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Handle for inspecting captured events during tests.
#[derive(Clone, Default)]
pub struct LogHandle {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogHandle {
    /// Return all captured events.
    pub fn entries(&self) -> Vec<CapturedEvent> {
        self.events.lock().clone()
    }

    /// Events logged at `level` whose `category` field equals `category`.
    pub fn with_category(&self, level: Level, category: &str) -> Vec<CapturedEvent> {
        self.entries()
            .into_iter()
            .filter(|event| event.level == level && event.field("category") == Some(category))
            .collect()
    }

    /// Check whether an event matching the level and message fragment exists.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.entries().iter().any(|event| event.level == level && event.message.contains(needle))
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        self.events.lock().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: BTreeMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.insert(field.name().to_string(), value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            self.message = rendered;
        } else {
            self.fields.insert(field.name().to_string(), rendered);
        }
    }
}

/// Capture tracing events on the current thread until the guard is dropped.
///
/// Use with current-thread runtimes (the `#[tokio::test]` default) so that
/// every task runs on the capturing thread.
pub fn capture_logs() -> (LogHandle, DefaultGuard) {
    let handle = LogHandle::default();
    let subscriber = Registry::default().with(CaptureLayer { events: Arc::clone(&handle.events) });
    let guard = tracing::subscriber::set_default(subscriber);
    (handle, guard)
}

/// Address book with the shipper and recipient used by [`ground_shipment`].
pub fn address_book() -> JsonAddressBook {
    let mut addresses = HashMap::new();
    addresses.insert(
        "Acme-Billing".to_string(),
        Address {
            address_line1: "12 Harbour Road".to_string(),
            address_line2: None,
            city: "Hamburg".to_string(),
            pincode: Some("20457".to_string()),
            country: "Germany".to_string(),
        },
    );
    addresses.insert(
        "Jane-Home".to_string(),
        Address {
            address_line1: "1 Main St".to_string(),
            address_line2: Some(String::new()),
            city: "Springfield".to_string(),
            pincode: None,
            country: "United States".to_string(),
        },
    );

    let mut countries = HashMap::new();
    countries.insert("Germany".to_string(), "de".to_string());
    countries.insert("United States".to_string(), "us".to_string());

    JsonAddressBook::new(AddressBookDocument { addresses, countries })
}

/// Ground shipment with one 5 lb customer-supplied package.
pub fn ground_shipment() -> Shipment {
    Shipment {
        name: "SHIP-0001".to_string(),
        shipper: "Acme GmbH".to_string(),
        shipper_address: "Acme-Billing".to_string(),
        ship_to: "Jane Roe".to_string(),
        ship_to_address: "Jane-Home".to_string(),
        service: "Ground".to_string(),
        address_validation: "Postal Code, State Province Code".to_string(),
        description: Some("Spare parts".to_string()),
        packages: vec![ShipmentPackage {
            package_type: "Customer Supplied Package".to_string(),
            weight: 5.0,
            weight_uom: "Pounds".to_string(),
        }],
        charges: vec![ShipmentCharge { charge_type: "Transportation".to_string() }],
        response: None,
    }
}
