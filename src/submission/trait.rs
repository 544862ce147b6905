use crate::submission::payload::SubmissionPayload;
use anyhow::Result;

/// Trait for destinations of reviewed data
#[async_trait::async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver a payload; an error means the submission did not go through
    async fn deliver(&self, payload: &SubmissionPayload) -> Result<()>;
}
