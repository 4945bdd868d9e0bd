//! Per-request context handed unchanged to every pipeline stage.

use serde_json::Value;

use crate::types::GatewayParams;

/// Carries the raw inbound request payload plus ambient per-request
/// metadata supplied by the routing collaborator. Read-only to the pipeline.
#[derive(Debug, Clone)]
pub struct RequestContext {
    body: Value,
    gateway: GatewayParams,
}

impl RequestContext {
    pub fn new(body: Value, gateway: GatewayParams) -> Self {
        Self { body, gateway }
    }

    /// The raw inbound request payload, as received.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Ambient per-request metadata, notably the selected provider.
    pub fn gateway_params(&self) -> &GatewayParams {
        &self.gateway
    }
}
