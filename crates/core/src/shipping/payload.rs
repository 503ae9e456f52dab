//! Shipment request payload
//!
//! Wire types for the carrier's shipment endpoint and the builder that maps a
//! [`Shipment`] onto them. Optional fields are skipped when absent so the
//! serialised request never carries `null`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use upsbridge_domain::constants::api_version_number;
use upsbridge_domain::{Address, Result, Shipment, ShipmentCharge, ShipmentPackage};

use super::codes;
use super::ports::AddressBook;

/// User agent sent with label specifications.
pub const LABEL_HTTP_USER_AGENT: &str = "Mozilla/4.5";

/// Top-level request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequestEnvelope {
    #[serde(rename = "ShipmentRequest")]
    pub shipment_request: ShipmentRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentRequest {
    pub request: RequestInfo,
    pub shipment: ShipmentDetail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_specification: Option<LabelSpecification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_specification: Option<ReceiptSpecification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestInfo {
    pub sub_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_option: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentDetail {
    pub shipper: Shipper,
    pub ship_to: ShipTo,
    pub payment_information: PaymentInformation,
    pub service: CodeRef,
    pub package: Vec<Package>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shipper {
    pub name: String,
    pub shipper_number: String,
    pub address: WireAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipTo {
    pub name: String,
    pub address: WireAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireAddress {
    pub address_line: Vec<String>,
    pub city: String,
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentInformation {
    pub shipment_charge: Vec<WireCharge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireCharge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    pub bill_shipper: BillShipper,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillShipper {
    pub account_number: String,
}

/// `{ "Code": ... }` wrapper; `Code` is omitted when the lookup missed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CodeRef {
    fn from_lookup(code: Option<&str>) -> Self {
        Self { code: code.map(str::to_string) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
    pub packaging: CodeRef,
    pub package_weight: PackageWeight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageWeight {
    pub unit_of_measurement: CodeRef,
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpecification {
    #[serde(rename = "LabelImageFormat")]
    pub label_image_format: CodeRef,
    #[serde(rename = "HTTPUserAgent")]
    pub http_user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptSpecification {
    #[serde(rename = "ImageFormat")]
    pub image_format: CodeRef,
}

/// Optional payload sections. Both are off by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadOptions {
    /// Label image format (e.g. `GIF`); adds `LabelSpecification` when set.
    pub label_image_format: Option<String>,
    /// Receipt image format (e.g. `HTML`); adds `ReceiptSpecification` when set.
    pub receipt_image_format: Option<String>,
}

/// Maps shipments onto the carrier's request format.
pub struct ShipmentRequestBuilder {
    addresses: Arc<dyn AddressBook>,
    account_number: String,
    api_version: String,
    options: PayloadOptions,
}

impl ShipmentRequestBuilder {
    /// Create a builder for the given shipper account and API version.
    pub fn new(
        addresses: Arc<dyn AddressBook>,
        account_number: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            addresses,
            account_number: account_number.into(),
            api_version: api_version.into(),
            options: PayloadOptions::default(),
        }
    }

    /// Enable optional payload sections.
    #[must_use]
    pub fn with_options(mut self, options: PayloadOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the request body for `shipment`.
    ///
    /// Only address and country reads touch the outside world; building the
    /// same shipment twice yields identical requests.
    ///
    /// # Errors
    /// Returns an error if a referenced address or country cannot be resolved.
    pub async fn build(&self, shipment: &Shipment) -> Result<ShipmentRequestEnvelope> {
        let request = RequestInfo {
            sub_version: api_version_number(&self.api_version).to_string(),
            request_option: lookup(
                "request_option",
                &shipment.address_validation,
                codes::request_option,
            )
            .map(str::to_string),
        };

        let shipment_detail = ShipmentDetail {
            shipper: Shipper {
                name: shipment.shipper.clone(),
                shipper_number: self.account_number.clone(),
                address: self.address(&shipment.shipper_address).await?,
            },
            ship_to: ShipTo {
                name: shipment.ship_to.clone(),
                address: self.address(&shipment.ship_to_address).await?,
            },
            payment_information: PaymentInformation {
                shipment_charge: shipment.charges.iter().map(|c| self.charge(c)).collect(),
            },
            service: CodeRef::from_lookup(lookup("service", &shipment.service, codes::service_code)),
            package: shipment.packages.iter().map(package).collect(),
            description: shipment.description().map(str::to_string),
        };

        debug!(
            shipment = %shipment.name,
            packages = shipment_detail.package.len(),
            charges = shipment_detail.payment_information.shipment_charge.len(),
            "built shipment request"
        );

        Ok(ShipmentRequestEnvelope {
            shipment_request: ShipmentRequest {
                request,
                shipment: shipment_detail,
                label_specification: self.label_specification(),
                receipt_specification: self.receipt_specification(),
            },
        })
    }

    async fn address(&self, name: &str) -> Result<WireAddress> {
        let record = self.addresses.address(name).await?;
        self.wire_address(&record).await
    }

    async fn wire_address(&self, address: &Address) -> Result<WireAddress> {
        let country_code = self.addresses.country_code(&address.country).await?;

        Ok(WireAddress {
            address_line: address.lines(),
            city: address.city.clone(),
            country_code: country_code.to_uppercase(),
            postal_code: address.postal_code().map(str::to_string),
        })
    }

    fn charge(&self, charge: &ShipmentCharge) -> WireCharge {
        WireCharge {
            r#type: lookup("charge_type", &charge.charge_type, codes::charge_type_code)
                .map(str::to_string),
            bill_shipper: BillShipper { account_number: self.account_number.clone() },
        }
    }

    fn label_specification(&self) -> Option<LabelSpecification> {
        self.options.label_image_format.as_ref().map(|format| LabelSpecification {
            label_image_format: CodeRef { code: Some(format.clone()) },
            http_user_agent: LABEL_HTTP_USER_AGENT.to_string(),
        })
    }

    fn receipt_specification(&self) -> Option<ReceiptSpecification> {
        self.options
            .receipt_image_format
            .as_ref()
            .map(|format| ReceiptSpecification { image_format: CodeRef { code: Some(format.clone()) } })
    }
}

fn package(item: &ShipmentPackage) -> Package {
    Package {
        packaging: CodeRef::from_lookup(lookup(
            "package_type",
            &item.package_type,
            codes::package_type_code,
        )),
        package_weight: PackageWeight {
            unit_of_measurement: CodeRef::from_lookup(lookup(
                "weight_uom",
                &item.weight_uom,
                codes::weight_uom_code,
            )),
            weight: format_weight(item.weight),
        },
    }
}

fn lookup(
    table: &'static str,
    label: &str,
    find: fn(&str) -> Option<&'static str>,
) -> Option<&'static str> {
    let code = find(label);
    if code.is_none() && !label.is_empty() {
        warn!(table, label, "no carrier code for label; field omitted");
    }
    code
}

/// Shortest decimal rendering: `5.0` → `"5"`, `2.5` → `"2.5"`.
pub fn format_weight(weight: f64) -> String {
    weight.to_string()
}
