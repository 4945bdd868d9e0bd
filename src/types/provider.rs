//! Provider identity and ambient request metadata.

use serde::{Deserialize, Serialize};

/// Enumerated provider identity.
///
/// Used purely to select provider-conditional behavior inside a stage; it
/// carries no pipeline state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
    HuggingfaceHub,
    Ollama,
}

/// Ambient per-request metadata supplied by the routing collaborator.
/// Read-only to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayParams {
    /// The provider selected for this request.
    pub provider: Provider,
    /// Optional model alias chosen at routing time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl GatewayParams {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            model: None,
        }
    }
}
