//! Base chat pipeline.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::LangException;
use crate::service::{ModelService, normalize};
use crate::types::params::ChatModelParams;
use crate::types::response::ChatOutput;

/// Kind-level base for chat pipelines.
///
/// Stages 1, 3 and 4 keep the failing defaults for provider adapters to
/// supply. Stage 2 is the one piece of real cross-provider normalization:
/// it applies whatever rule the centralized table holds for the selected
/// provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatService;

#[async_trait]
impl ModelService for ChatService {
    type Params = ChatModelParams;
    type Output = ChatOutput;

    async fn ready_for_model(
        &self,
        ctx: &RequestContext,
        mut params: ChatModelParams,
    ) -> Result<ChatModelParams, LangException> {
        let provider = ctx.gateway_params().provider;
        if let Some(rule) = normalize::chat_normalizer(provider) {
            tracing::debug!(?provider, "applying provider-conditional chat rule");
            rule(&mut params);
        }
        Ok(params)
    }
}
