//! Base embedding pipeline.

use async_trait::async_trait;

use crate::service::ModelService;
use crate::types::params::EmbeddingParams;
use crate::types::response::EmbeddingOutput;

/// Kind-level base for embedding pipelines. All stages keep the trait
/// defaults; no provider-conditional rule exists for this kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddingService;

#[async_trait]
impl ModelService for EmbeddingService {
    type Params = EmbeddingParams;
    type Output = EmbeddingOutput;
}
