//! Carrier code tables
//!
//! Maps the labels stored on shipments to the codes the carrier expects.
//! Lookups are exact and case-sensitive; unknown labels yield `None` and the
//! corresponding field is left out of the request.

/// A named, ordered label → code table.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Table name, used when listing tables.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All entries in their declared order.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Code for `label`, if the table knows it.
    pub fn code(&self, label: &str) -> Option<&'static str> {
        self.entries.iter().find(|(known, _)| *known == label).map(|(_, code)| *code)
    }
}

/// Address validation level → `Request.RequestOption`.
pub const REQUEST_OPTIONS: CodeTable = CodeTable::new(
    "request_options",
    &[
        ("Postal Code, State Province Code, City", "validate"),
        ("Postal Code, State Province Code", "nonvalidate"),
    ],
);

/// Service name → `Service.Code`.
pub const SERVICES: CodeTable = CodeTable::new(
    "services",
    &[
        ("Next Day Air", "01"),
        ("2nd Day Air", "02"),
        ("Ground", "03"),
        ("Express", "07"),
        ("Expedited", "08"),
        ("UPS Standard", "11"),
        ("3 Day Select", "12"),
        ("Next Day Air Saver", "13"),
        ("UPS Next Day Air Early", "14"),
        ("UPS Worldwide Economy DDU", "17"),
        ("Express Plus", "54"),
        ("2nd Day Air A.M.", "59"),
        ("UPS Saver", "65"),
        ("First Class Mail", "M2"),
        ("Priority Mail", "M3"),
        ("Expedited Mail Innovations", "M4"),
        ("Priority Mail Innovations", "M5"),
        ("Economy Mail Innovations", "M6"),
        ("Mail Innovations (MI) Returns", "M7"),
        ("UPS Access Point Economy", "70"),
        ("UPS Worldwide Express Freight Midday", "71"),
        ("UPS Worldwide Economy DDP", "72"),
        ("UPS Express 12:00", "74"),
        ("UPS Heavy Goods", "75"),
        ("UPS Today Standard", "82"),
        ("UPS Today Dedicated Courier", "83"),
        ("UPS Today Intercity", "84"),
        ("UPS Today Express", "85"),
        ("UPS Today Express Saver", "86"),
        ("UPS Worldwide Express Freight", "96"),
    ],
);

/// Package type → `Packaging.Code`.
pub const PACKAGE_TYPES: CodeTable = CodeTable::new(
    "package_types",
    &[
        ("UPS Letter", "01"),
        ("Customer Supplied Package", "02"),
        ("Tube", "03"),
        ("PAK", "04"),
        ("UPS Express Box", "21"),
        ("UPS 25KG Box", "24"),
        ("UPS 10KG Box", "25"),
        ("Pallet", "30"),
        ("Small Express Box", "2a"),
        ("Medium Express Box", "2b"),
        ("Large Express Box", "2c"),
        ("Flats", "56"),
        ("Parcels", "57"),
        ("BPM", "58"),
        ("First Class", "59"),
        ("Priority", "60"),
        ("Machineables", "61"),
        ("Irregulars", "62"),
        ("Parcel Post", "63"),
        ("BPM Parcel", "64"),
        ("Media Mail", "65"),
        ("BPM Flat", "66"),
        ("Standard Flat", "67"),
    ],
);

/// Charge type → `ShipmentCharge.Type`.
pub const CHARGE_TYPES: CodeTable = CodeTable::new(
    "charge_types",
    &[("Transportation", "01"), ("Duties and Taxes", "02"), ("Broker of Choice", "03")],
);

/// Weight unit → `UnitOfMeasurement.Code`.
pub const WEIGHT_UOMS: CodeTable =
    CodeTable::new("weight_uoms", &[("Pounds", "LBS"), ("Kilograms", "KGS"), ("Ounces", "OZS")]);

/// Every table, in the order they are listed to operators.
pub const ALL_TABLES: [CodeTable; 5] =
    [SERVICES, PACKAGE_TYPES, CHARGE_TYPES, WEIGHT_UOMS, REQUEST_OPTIONS];

/// Code for a service name.
pub fn service_code(label: &str) -> Option<&'static str> {
    SERVICES.code(label)
}

/// Code for a package type.
pub fn package_type_code(label: &str) -> Option<&'static str> {
    PACKAGE_TYPES.code(label)
}

/// Code for a charge type.
pub fn charge_type_code(label: &str) -> Option<&'static str> {
    CHARGE_TYPES.code(label)
}

/// Code for a weight unit.
pub fn weight_uom_code(label: &str) -> Option<&'static str> {
    WEIGHT_UOMS.code(label)
}

/// Request option for an address validation level.
pub fn request_option(label: &str) -> Option<&'static str> {
    REQUEST_OPTIONS.code(label)
}
