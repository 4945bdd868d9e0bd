//! The `ModelParams` variant family.
//!
//! Each variant is created fresh per request, mutated only within that
//! request's pipeline stages, and discarded after stage 4 completes.

use secrecy::SecretString;
use serde::Deserialize;

use crate::types::blob::Blob;
use crate::types::message::ChatMessage;

/// Fields shared by every model kind.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BaseModelParams {
    #[serde(default)]
    pub model: Option<String>,
    /// Credential forwarded to the provider; redacted in Debug output.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Parameters for a chat completion request.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChatModelParams {
    #[serde(flatten)]
    pub base: BaseModelParams,
    /// Ordered conversation messages.
    #[serde(default)]
    pub input: Vec<ChatMessage>,
    #[serde(default)]
    pub streaming: bool,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Opaque tool-choice directive; originates at untyped boundaries and is
    /// classified structurally (see `utils::detect`).
    #[serde(default)]
    pub tool_choice: Option<serde_json::Value>,
}

/// Parameters for an image generation request.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ImageGenerationParams {
    #[serde(flatten)]
    pub base: BaseModelParams,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub n: Option<u32>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub response_format: Option<String>,
}

/// Parameters for an image edit request. Binary inputs arrive through the
/// adapter's multipart handling, not the JSON body.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ImageEditParams {
    #[serde(flatten)]
    pub base: BaseModelParams,
    #[serde(default)]
    pub prompt: String,
    #[serde(skip)]
    pub image: Option<Blob>,
    #[serde(skip)]
    pub mask: Option<Blob>,
    #[serde(default)]
    pub size: Option<String>,
}

/// Embedding input: a single text or a batch.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Batch(Vec<String>),
}

impl Default for EmbeddingInput {
    fn default() -> Self {
        Self::Batch(Vec::new())
    }
}

/// Parameters for an embedding request.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EmbeddingParams {
    #[serde(flatten)]
    pub base: BaseModelParams,
    #[serde(default)]
    pub input: EmbeddingInput,
}

/// Parameters for an audio transcription request.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TranscriptionParams {
    #[serde(flatten)]
    pub base: BaseModelParams,
    #[serde(skip)]
    pub file: Option<Blob>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub response_format: Option<String>,
}
