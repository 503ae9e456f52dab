//! Scripted carrier gateway

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use upsbridge_core::shipping::ShipmentRequestEnvelope;
use upsbridge_core::{CarrierGateway, CarrierSession};
use upsbridge_domain::{Result as DomainResult, UpsBridgeError};

/// Counters shared between the gateway and its sessions.
#[derive(Default)]
pub struct CarrierLog {
    pub sessions_opened: AtomicUsize,
    pub sessions_dropped: AtomicUsize,
    pub requests: Mutex<Vec<ShipmentRequestEnvelope>>,
}

impl CarrierLog {
    pub fn opened(&self) -> usize {
        self.sessions_opened.load(Ordering::SeqCst)
    }

    pub fn dropped(&self) -> usize {
        self.sessions_dropped.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> usize {
        self.requests.lock().len()
    }
}

/// Gateway that either fails authentication or answers with a fixed result.
pub struct MockGateway {
    pub log: Arc<CarrierLog>,
    auth_error: Option<UpsBridgeError>,
    reply: DomainResult<Value>,
}

impl MockGateway {
    pub fn replying(reply: DomainResult<Value>) -> Self {
        Self { log: Arc::default(), auth_error: None, reply }
    }

    pub fn unauthenticated(error: UpsBridgeError) -> Self {
        Self { log: Arc::default(), auth_error: Some(error), reply: Ok(Value::Null) }
    }
}

#[async_trait]
impl CarrierGateway for MockGateway {
    type Session = MockSession;

    async fn open_session(&self) -> DomainResult<MockSession> {
        if let Some(err) = &self.auth_error {
            return Err(err.clone());
        }
        self.log.sessions_opened.fetch_add(1, Ordering::SeqCst);
        Ok(MockSession { log: Arc::clone(&self.log), reply: self.reply.clone() })
    }
}

pub struct MockSession {
    log: Arc<CarrierLog>,
    reply: DomainResult<Value>,
}

#[async_trait]
impl CarrierSession for MockSession {
    async fn create_shipment(&self, request: &ShipmentRequestEnvelope) -> DomainResult<Value> {
        self.log.requests.lock().push(request.clone());
        self.reply.clone()
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.log.sessions_dropped.fetch_add(1, Ordering::SeqCst);
    }
}
