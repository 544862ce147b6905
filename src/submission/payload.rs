use crate::models::WorkflowVariant;
use crate::review::{EditOverlay, OverrideMap, SelectionTracker};
use serde::{Deserialize, Serialize};

/// Snapshot of a review handed to a submission sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub variant: WorkflowVariant,
    /// Name of the reviewed document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// Selected record keys, in record order
    pub selection: Vec<String>,
    /// Every override, whether or not its record is selected
    pub overrides: OverrideMap,
}

impl SubmissionPayload {
    pub fn snapshot(
        variant: WorkflowVariant,
        document: Option<&str>,
        selection: &SelectionTracker,
        overlay: &EditOverlay,
    ) -> Self {
        Self {
            variant,
            document: document.map(str::to_string),
            selection: selection.selected().into_iter().map(str::to_string).collect(),
            overrides: overlay.snapshot(),
        }
    }
}
