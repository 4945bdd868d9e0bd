//! # Modelgate - A Uniform Model Service Pipeline
//!
//! Modelgate is the pipeline core of a multi-provider AI gateway: one
//! four-stage execution shape fronting heterogeneous model kinds (chat,
//! image generation, image editing, embeddings, audio transcription), plus
//! the binary/stream normalizers that make provider payloads
//! interchangeable at the boundary.
//!
#![deny(unsafe_code)]
//! ## Design
//!
//! - **One contract**: every pipeline implements [`ModelService`] — build
//!   typed params, apply provider-conditional adjustments, invoke the
//!   provider, deliver the outbound response. Stages run strictly in order
//!   via [`run_pipeline`].
//! - **Loud defaults**: stages with no safe generic behavior (1, 3, 4) fail
//!   with `NotImplemented` until a provider adapter supplies them; stage 2
//!   is the single home for cross-provider normalization.
//! - **One error door**: stages propagate [`LangException`]; only the
//!   [`ExceptionHandling`] contract renders client-facing errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modelgate::{ChatService, GatewayParams, ModelService, Provider, RequestContext};
//! use modelgate::types::ChatModelParams;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = RequestContext::new(
//!         serde_json::json!({"input": [{"role": "user", "content": "hi"}]}),
//!         GatewayParams::new(Provider::HuggingfaceHub),
//!     );
//!
//!     // The base pipeline normalizes params; adapters supply the rest.
//!     let params = ChatModelParams::default();
//!     let _ready = ChatService.ready_for_model(&ctx, params).await;
//! }
//! ```

pub mod context;
pub mod error;
pub mod exception;
pub mod service;
pub mod types;
pub mod utils;

pub use context::RequestContext;
pub use error::{ExceptionKind, LangException};
pub use exception::{ExceptionHandling, HttpExceptionHandler};
pub use service::{
    ChatService, EmbeddingService, ImageEditService, ImageGenerationService, ModelService,
    TranscriptionService, run_pipeline,
};
pub use types::{GatewayParams, GatewayResponse, Provider};
