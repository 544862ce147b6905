use crate::models::UploadedFile;
use anyhow::Result;

/// Trait for assistants answering questions about an attached document
#[async_trait::async_trait]
pub trait Responder: Send + Sync {
    /// Produce a reply to the user's message
    async fn reply(&self, message: &str, document: Option<&UploadedFile>) -> Result<String>;
}
