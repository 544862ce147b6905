use crate::submission::payload::SubmissionPayload;
use crate::submission::r#trait::SubmissionSink;
use anyhow::{Context, Result};

/// Sink that only reports the payload through tracing
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SubmissionSink for LogSink {
    async fn deliver(&self, payload: &SubmissionPayload) -> Result<()> {
        let json = serde_json::to_string(payload).context("Failed to serialize submission")?;
        tracing::info!(
            variant = %payload.variant,
            selected = payload.selection.len(),
            payload = %json,
            "Data submitted successfully"
        );
        Ok(())
    }
}
