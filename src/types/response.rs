//! Execution results and the outbound response shape.
//!
//! No result type crosses a pipeline boundary except through stage 4, which
//! reduces it to a [`GatewayResponse`].

use std::fmt;
use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LangException;
use crate::types::blob::Blob;

/// One streamed chat chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatChunk {
    pub content: String,
}

impl ChatChunk {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Lazy sequence of chat chunks.
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<ChatChunk, LangException>> + Send>>;

/// Lazy sequence of outbound body bytes.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, LangException>> + Send>>;

/// Chat execution result.
pub enum ChatOutput {
    Text(String),
    Chunk(ChatChunk),
    Stream(ChatStream),
}

impl fmt::Debug for ChatOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Chunk(chunk) => f.debug_tuple("Chunk").field(chunk).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Image generation / edit execution result: a hosted URL or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutput {
    Url(String),
    Blob(Blob),
}

/// Embedding execution result: one vector or a batch of vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddingOutput {
    Vector(Vec<f32>),
    Matrix(Vec<Vec<f32>>),
}

/// Transcription execution result. Vendor schema shapes are defined
/// externally and carried opaquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionOutput {
    Verbose(Value),
    Plain(Value),
}

/// Outbound response body.
pub enum ResponseBody {
    Json(Value),
    Binary(Bytes),
    Stream(ByteStream),
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Binary(bytes) => write!(f, "Binary({} bytes)", bytes.len()),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// The single outbound response representation produced by stage 4 (and by
/// the exception handler for failures).
#[derive(Debug)]
pub struct GatewayResponse {
    pub status: u16,
    pub content_type: String,
    pub body: ResponseBody,
}

impl GatewayResponse {
    pub fn json(value: Value) -> Self {
        Self {
            status: 200,
            content_type: "application/json".to_string(),
            body: ResponseBody::Json(value),
        }
    }

    pub fn binary(blob: Blob) -> Self {
        Self {
            status: 200,
            content_type: blob.content_type().to_string(),
            body: ResponseBody::Binary(Bytes::copy_from_slice(blob.data())),
        }
    }

    pub fn stream(stream: ByteStream, content_type: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: content_type.into(),
            body: ResponseBody::Stream(stream),
        }
    }

    pub fn error(status: u16, value: Value) -> Self {
        Self {
            status,
            content_type: "application/json".to_string(),
            body: ResponseBody::Json(value),
        }
    }
}
