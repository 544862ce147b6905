use crate::models::{Record, WorkflowVariant};
use anyhow::Result;

/// Trait for providers of the records a workflow variant reviews
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the ordered records of a variant
    async fn records(&self, variant: WorkflowVariant) -> Result<Vec<Record>>;

    /// Check if this source can provide records for the variant
    fn supports_variant(&self, variant: WorkflowVariant) -> bool;
}
