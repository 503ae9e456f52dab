//! Request payload preview

use serde_json::Value;
use upsbridge_core::ShipmentRepository;
use upsbridge_domain::Result;
use upsbridge_infra::InfraError;

use crate::context::AppContext;

/// Build the carrier request for a stored shipment without sending it.
///
/// # Errors
/// Returns an error if the shipment or one of its addresses cannot be
/// loaded.
pub async fn build_payload(context: &AppContext, name: &str) -> Result<Value> {
    let shipment = context.repository.load(name).await?;
    let envelope = context.shipments.preview(&shipment).await?;
    serde_json::to_value(envelope).map_err(InfraError::domain)
}
