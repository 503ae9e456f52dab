//! Shipment submission service - core business logic

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};
use upsbridge_domain::{Result, Shipment};
use uuid::Uuid;

use super::payload::{ShipmentRequestBuilder, ShipmentRequestEnvelope};
use super::ports::{CarrierGateway, CarrierSession, ShipmentRepository};

/// Progress of a single submission, as reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Built,
    Authenticated,
    Sent,
    Recorded,
    Failed,
}

impl SubmissionState {
    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Built => "built",
            Self::Authenticated => "authenticated",
            Self::Sent => "sent",
            Self::Recorded => "recorded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shipment submission service
///
/// Builds the request, opens one carrier session per submission, sends the
/// request, and records the carrier response on success.
pub struct ShipmentService<G: CarrierGateway> {
    builder: ShipmentRequestBuilder,
    gateway: G,
    repository: Arc<dyn ShipmentRepository>,
}

impl<G: CarrierGateway> ShipmentService<G> {
    /// Create a new shipment service
    pub fn new(
        builder: ShipmentRequestBuilder,
        gateway: G,
        repository: Arc<dyn ShipmentRepository>,
    ) -> Self {
        Self { builder, gateway, repository }
    }

    /// Build the request payload for a shipment without sending it.
    pub async fn preview(&self, shipment: &Shipment) -> Result<ShipmentRequestEnvelope> {
        self.builder.build(shipment).await
    }

    /// Load a shipment by name and submit it.
    pub async fn submit_by_name(&self, name: &str) -> Result<Shipment> {
        let mut shipment = self.repository.load(name).await?;
        self.submit(&mut shipment).await?;
        Ok(shipment)
    }

    /// Submit a shipment to the carrier.
    ///
    /// On success the carrier response is stored on `shipment` and persisted
    /// through the repository. On failure `shipment.response` is left as it
    /// was and the error is returned.
    ///
    /// # Errors
    /// Returns the first error from building, authentication, sending, or
    /// persisting.
    pub async fn submit(&self, shipment: &mut Shipment) -> Result<Value> {
        let submission_id = Uuid::new_v4();
        let result = self.run(submission_id, shipment).await;

        if let Err(err) = &result {
            error!(
                %submission_id,
                shipment = %shipment.name,
                state = %SubmissionState::Failed,
                error_kind = err.label(),
                "shipment submission failed"
            );
        }

        result
    }

    async fn run(&self, submission_id: Uuid, shipment: &mut Shipment) -> Result<Value> {
        let request = self.builder.build(shipment).await?;
        info!(%submission_id, shipment = %shipment.name, state = %SubmissionState::Built, "submission state");

        let session = self.gateway.open_session().await?;
        info!(
            %submission_id,
            shipment = %shipment.name,
            state = %SubmissionState::Authenticated,
            "submission state"
        );

        let response = session.create_shipment(&request).await?;
        drop(session);
        info!(%submission_id, shipment = %shipment.name, state = %SubmissionState::Sent, "submission state");

        if let Err(err) = self.repository.save_response(&shipment.name, &response).await {
            warn!(
                %submission_id,
                shipment = %shipment.name,
                error_kind = err.label(),
                "carrier accepted the shipment but the response could not be recorded"
            );
            return Err(err);
        }
        shipment.response = Some(response.clone());

        info!(
            %submission_id,
            shipment = %shipment.name,
            state = %SubmissionState::Recorded,
            "submission state"
        );

        Ok(response)
    }
}
