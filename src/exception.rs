//! Exception-handling contract.
//!
//! The single place permitted to translate an internal [`LangException`]
//! into a client-facing response. Pipelines never construct error responses
//! themselves; they propagate the exception and let this contract render it.

use crate::error::{ExceptionKind, LangException};
use crate::types::GatewayResponse;

/// Converts internal failures to client responses.
pub trait ExceptionHandling: Send + Sync {
    fn handle_exception(&self, exception: LangException) -> GatewayResponse;
}

/// Default renderer mapping failure kinds to HTTP-style statuses.
///
/// Upstream detail is logged and redacted; clients see only the kind and
/// message.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpExceptionHandler;

impl HttpExceptionHandler {
    fn status_for(kind: ExceptionKind) -> u16 {
        match kind {
            ExceptionKind::Validation => 400,
            ExceptionKind::NotImplemented => 501,
            ExceptionKind::Network | ExceptionKind::Provider => 502,
        }
    }
}

impl ExceptionHandling for HttpExceptionHandler {
    fn handle_exception(&self, exception: LangException) -> GatewayResponse {
        if let Some(detail) = exception.detail() {
            tracing::warn!("redacting upstream detail from client response: {detail}");
        }
        let status = Self::status_for(exception.kind());
        GatewayResponse::error(
            status,
            serde_json::json!({
                "error": {
                    "kind": exception.kind(),
                    "message": exception.to_string(),
                }
            }),
        )
    }
}
