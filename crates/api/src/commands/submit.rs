//! Shipment submission

use serde::Serialize;
use serde_json::Value;
use upsbridge_domain::Result;

use crate::context::AppContext;

/// Outcome of a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReport {
    pub shipment: String,
    pub response: Value,
}

/// Submit a stored shipment and record the carrier response on it.
///
/// # Errors
/// Returns the classified failure from authentication, the HTTP exchange,
/// or persistence. The stored shipment is left unchanged in that case.
pub async fn submit_shipment(context: &AppContext, name: &str) -> Result<SubmissionReport> {
    let shipment = context.shipments.submit_by_name(name).await?;

    Ok(SubmissionReport { shipment: shipment.name, response: shipment.response.unwrap_or_default() })
}
