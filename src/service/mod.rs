//! The four-stage model service contract and its kind-level base pipelines.
//!
//! Every model kind (chat, transcription, image edit, image generation,
//! embedding) is served through the same execution shape: build typed
//! params, apply provider-conditional adjustments, invoke the provider,
//! convert the raw result into the outbound response.

pub mod normalize;

mod chat;
mod embedding;
mod image_edit;
mod image_generation;
mod transcription;

pub use chat::ChatService;
pub use embedding::EmbeddingService;
pub use image_edit::ImageEditService;
pub use image_generation::ImageGenerationService;
pub use transcription::TranscriptionService;

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::LangException;
use crate::types::GatewayResponse;

/// Generic four-stage contract every model-kind pipeline implements.
///
/// Stages run strictly in order for a single request. Stages 1, 3 and 4
/// have no safe generic behavior across providers, so their defaults fail
/// loudly; concrete adapters must supply them. Stage 2 defaults to identity
/// and is the one place for cross-provider normalization.
#[async_trait]
pub trait ModelService: Send + Sync {
    type Params: Send;
    type Output: Send;

    /// Stage 1: derive fully-typed parameters from the raw inbound request.
    ///
    /// Fails with a validation error when required fields are absent or
    /// malformed. No generic default exists; adapters always override.
    async fn prepare_model_params(
        &self,
        _ctx: &RequestContext,
    ) -> Result<Self::Params, LangException> {
        Err(LangException::not_implemented("prepare_model_params"))
    }

    /// Stage 2: provider-conditional normalization of already-valid params.
    ///
    /// Idempotent, and performs no I/O in the default case.
    async fn ready_for_model(
        &self,
        _ctx: &RequestContext,
        params: Self::Params,
    ) -> Result<Self::Params, LangException> {
        Ok(params)
    }

    /// Stage 3: invoke the provider and return its raw result. The only
    /// stage expected to perform outbound network calls.
    async fn execute_model(
        &self,
        _ctx: &RequestContext,
        _params: Self::Params,
    ) -> Result<Self::Output, LangException> {
        Err(LangException::not_implemented("execute_model"))
    }

    /// Stage 4: convert the execution result into the outbound response.
    ///
    /// Must not fail for any value produced by a conforming
    /// `execute_model`; an unrepresentable value is a contract violation.
    async fn deliver_output(
        &self,
        _ctx: &RequestContext,
        _output: Self::Output,
    ) -> Result<GatewayResponse, LangException> {
        Err(LangException::not_implemented("deliver_output"))
    }
}

/// Run the four stages strictly in sequence.
///
/// The first failing stage aborts the rest; the error flows to the
/// exception-handling contract. Params are moved into stage 3, so stage 4
/// can only read the execution result.
pub async fn run_pipeline<S: ModelService>(
    service: &S,
    ctx: &RequestContext,
) -> Result<GatewayResponse, LangException> {
    let params = service.prepare_model_params(ctx).await?;
    let params = service.ready_for_model(ctx, params).await?;
    tracing::debug!(provider = ?ctx.gateway_params().provider, "executing model");
    let output = service.execute_model(ctx, params).await?;
    service.deliver_output(ctx, output).await
}
