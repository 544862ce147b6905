use crate::models::WorkflowVariant;
use crate::review::{EditOverlay, SelectionTracker};
use crate::submission::payload::SubmissionPayload;
use crate::submission::r#trait::SubmissionSink;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was selected; no payload was emitted
    Skipped,
    /// The sink accepted the payload
    Delivered,
}

/// Emits the selection and overrides to a sink, only when something is selected
pub struct SubmissionGate {
    sink: Arc<dyn SubmissionSink>,
}

impl SubmissionGate {
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Self { sink }
    }

    pub fn can_submit(&self, selection: &SelectionTracker) -> bool {
        !selection.is_empty()
    }

    /// Package and deliver a payload. Neither the selection nor the overrides
    /// are reset afterwards.
    pub async fn submit(
        &self,
        variant: WorkflowVariant,
        document: Option<&str>,
        selection: &SelectionTracker,
        overlay: &EditOverlay,
    ) -> Result<SubmitOutcome> {
        if !self.can_submit(selection) {
            tracing::debug!("Submit ignored: no records selected");
            return Ok(SubmitOutcome::Skipped);
        }

        let payload = SubmissionPayload::snapshot(variant, document, selection, overlay);
        self.sink
            .deliver(&payload)
            .await
            .context("Failed to deliver submission")?;

        Ok(SubmitOutcome::Delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::MemorySink;

    struct RejectingSink;

    #[async_trait::async_trait]
    impl SubmissionSink for RejectingSink {
        async fn deliver(&self, _payload: &SubmissionPayload) -> Result<()> {
            anyhow::bail!("backend offline")
        }
    }

    #[tokio::test]
    async fn test_submit_with_empty_selection_is_skipped() {
        let sink = Arc::new(MemorySink::new());
        let gate = SubmissionGate::new(sink.clone());
        let selection = SelectionTracker::new(["Total Amount"]);

        assert!(!gate.can_submit(&selection));
        let outcome = gate
            .submit(WorkflowVariant::Invoice, None, &selection, &EditOverlay::new())
            .await
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::Skipped);
        assert!(sink.payloads().is_empty());
    }

    #[tokio::test]
    async fn test_submit_delivers_and_keeps_state() {
        let sink = Arc::new(MemorySink::new());
        let gate = SubmissionGate::new(sink.clone());
        let mut selection = SelectionTracker::new(["Total Amount", "Due Date"]);
        selection.toggle("Total Amount").unwrap();
        let mut overlay = EditOverlay::new();
        overlay.set_override("Total Amount", None, "$1,150");

        assert!(gate.can_submit(&selection));
        for _ in 0..2 {
            let outcome = gate
                .submit(WorkflowVariant::Invoice, Some("invoice.pdf"), &selection, &overlay)
                .await
                .unwrap();
            assert_eq!(outcome, SubmitOutcome::Delivered);
        }

        let payloads = sink.payloads();
        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[0], payloads[1]);
        assert_eq!(payloads[0].selection, ["Total Amount"]);
        assert_eq!(selection.len(), 1);
        assert_eq!(overlay.len(), 1);
    }

    #[tokio::test]
    async fn test_sink_failure_is_reported() {
        let gate = SubmissionGate::new(Arc::new(RejectingSink));
        let mut selection = SelectionTracker::new(["Due Date"]);
        selection.toggle_all();

        let result = gate
            .submit(WorkflowVariant::Invoice, None, &selection, &EditOverlay::new())
            .await;
        assert!(result.is_err());
    }
}
