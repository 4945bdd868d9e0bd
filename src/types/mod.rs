//! Core data types for the model service pipeline.

pub mod blob;
pub mod message;
pub mod params;
pub mod provider;
pub mod response;

pub use blob::Blob;
pub use message::{ChatMessage, MessageRole};
pub use params::{
    BaseModelParams, ChatModelParams, EmbeddingInput, EmbeddingParams, ImageEditParams,
    ImageGenerationParams, TranscriptionParams,
};
pub use provider::{GatewayParams, Provider};
pub use response::{
    ByteStream, ChatChunk, ChatOutput, ChatStream, EmbeddingOutput, GatewayResponse, ImageOutput,
    ResponseBody, TranscriptionOutput,
};
