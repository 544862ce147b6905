use crate::submission::payload::SubmissionPayload;
use crate::submission::r#trait::SubmissionSink;
use anyhow::Result;
use std::sync::{Mutex, PoisonError};

/// Sink that keeps every delivered payload in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    payloads: Mutex<Vec<SubmissionPayload>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads delivered so far, oldest first
    pub fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait::async_trait]
impl SubmissionSink for MemorySink {
    async fn deliver(&self, payload: &SubmissionPayload) -> Result<()> {
        self.payloads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payload.clone());
        Ok(())
    }
}
