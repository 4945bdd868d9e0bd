//! Base audio transcription pipeline.

use async_trait::async_trait;

use crate::service::ModelService;
use crate::types::params::TranscriptionParams;
use crate::types::response::TranscriptionOutput;

/// Kind-level base for transcription pipelines. All stages keep the trait
/// defaults; no provider-conditional rule exists for this kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptionService;

#[async_trait]
impl ModelService for TranscriptionService {
    type Params = TranscriptionParams;
    type Output = TranscriptionOutput;
}
