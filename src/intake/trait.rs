use crate::models::UploadedFile;
use anyhow::Result;

/// Trait for the asynchronous work run after a file is accepted.
/// Completion is what moves a workflow to `Processed`.
#[async_trait::async_trait]
pub trait Processor: Send + Sync {
    /// Process an accepted file
    async fn process(&self, file: &UploadedFile) -> Result<()>;
}
