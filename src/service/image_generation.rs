//! Base image generation pipeline.

use async_trait::async_trait;

use crate::service::ModelService;
use crate::types::params::ImageGenerationParams;
use crate::types::response::ImageOutput;

/// Kind-level base for image generation pipelines. All stages keep the
/// trait defaults; no provider-conditional rule exists for this kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageGenerationService;

#[async_trait]
impl ModelService for ImageGenerationService {
    type Params = ImageGenerationParams;
    type Output = ImageOutput;
}
