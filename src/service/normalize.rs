//! Centralized provider-conditional normalization rules.
//!
//! Stage-2 behavior dispatches through this table instead of inline provider
//! checks scattered per pipeline, so every rule lives in one auditable place.

use crate::types::params::ChatModelParams;
use crate::types::provider::Provider;

/// A provider-conditional adjustment applied to chat params before
/// execution. Rules must be idempotent.
pub type ChatNormalizer = fn(&mut ChatModelParams);

/// Look up the stage-2 rule for a provider. Most providers need none.
///
/// The check is on provider identity only, never on message content.
pub fn chat_normalizer(provider: Provider) -> Option<ChatNormalizer> {
    match provider {
        // Hosted hub chat backends reject a leading system message.
        Provider::HuggingfaceHub => Some(strip_system_messages),
        Provider::OpenAi | Provider::Anthropic | Provider::Google | Provider::Ollama => None,
    }
}

/// Drop system-role messages, preserving the relative order of the rest.
fn strip_system_messages(params: &mut ChatModelParams) {
    params.input.retain(|message| !message.is_system());
}
