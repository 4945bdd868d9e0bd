//! Base image edit pipeline.

use async_trait::async_trait;

use crate::service::ModelService;
use crate::types::params::ImageEditParams;
use crate::types::response::ImageOutput;

/// Kind-level base for image edit pipelines. All stages keep the trait
/// defaults; no provider-conditional rule exists for this kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageEditService;

#[async_trait]
impl ModelService for ImageEditService {
    type Params = ImageEditParams;
    type Output = ImageOutput;
}
