use crate::config::Config;
use crate::error::{IntakeError, ReviewError};
use crate::intake::{DelayProcessor, IntakeController, PreviewRef, PreviewRegistry};
use crate::models::{ProcessingStatus, Record, RecordShape, UploadedFile, WorkflowVariant};
use crate::records::{RecordSource, RecordStore};
use crate::review::{EditOverlay, SelectionTracker};
use crate::submission::{SubmissionGate, SubmissionSink, SubmitOutcome};
use anyhow::Result;
use std::sync::Arc;

/// One document review: intake, the variant's records, the highlighted
/// selection, user overrides and the submission gate.
///
/// State: no file -> file accepted -> processed. Selection and overrides can
/// change in any state; records are only shown once processed.
pub struct ReviewWorkflow {
    intake: IntakeController,
    store: RecordStore,
    selection: SelectionTracker,
    overlay: EditOverlay,
    gate: SubmissionGate,
}

impl ReviewWorkflow {
    pub fn new(intake: IntakeController, store: RecordStore, sink: Arc<dyn SubmissionSink>) -> Self {
        let selection = SelectionTracker::from_store(&store);
        Self {
            intake,
            store,
            selection,
            overlay: EditOverlay::new(),
            gate: SubmissionGate::new(sink),
        }
    }

    /// Build a workflow with the configured delay processor and a fresh
    /// preview registry
    pub async fn from_config(
        variant: WorkflowVariant,
        config: &Config,
        source: &dyn RecordSource,
        sink: Arc<dyn SubmissionSink>,
    ) -> Result<Self> {
        let store = RecordStore::load(source, variant).await?;
        let intake = IntakeController::from_config(
            &config.intake,
            Arc::new(DelayProcessor::from_config(&config.intake)),
            PreviewRegistry::new(),
        );
        Ok(Self::new(intake, store, sink))
    }

    pub fn variant(&self) -> WorkflowVariant {
        self.store.variant()
    }

    pub fn shape(&self) -> RecordShape {
        self.variant().shape()
    }

    pub fn accept_file(&mut self, file: UploadedFile) -> Result<&UploadedFile, IntakeError> {
        self.intake.accept_file(file)
    }

    pub fn status(&self) -> ProcessingStatus {
        self.intake.status()
    }

    pub fn is_processed(&self) -> bool {
        self.intake.is_processed()
    }

    pub async fn wait_processed(&self) -> Result<ProcessingStatus> {
        self.intake.wait_processed().await
    }

    pub fn document(&self) -> Option<&UploadedFile> {
        self.intake.file()
    }

    pub fn preview(&self) -> Option<&PreviewRef> {
        self.intake.preview()
    }

    pub fn previews(&self) -> &PreviewRegistry {
        self.intake.previews()
    }

    /// Every record of the variant
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    /// Records to display: empty until the document is processed
    pub fn visible_records(&self) -> &[Record] {
        if self.is_processed() {
            self.store.records()
        } else {
            &[]
        }
    }

    pub fn toggle(&mut self, key: &str) -> Result<bool, ReviewError> {
        self.selection.toggle(key)
    }

    pub fn toggle_all(&mut self) -> bool {
        self.selection.toggle_all()
    }

    pub fn all_selected(&self) -> bool {
        self.selection.all_selected()
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selection.is_selected(key)
    }

    pub fn selected(&self) -> Vec<&str> {
        self.selection.selected()
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn overlay(&self) -> &EditOverlay {
        &self.overlay
    }

    /// Set an override after checking the key exists and the field matches
    /// the record's shape
    pub fn set_override(
        &mut self,
        key: &str,
        field: Option<&str>,
        value: impl Into<String>,
    ) -> Result<(), ReviewError> {
        self.field_record(key, field)?;
        self.overlay.set_override(key, field, value);
        Ok(())
    }

    /// Override if present, otherwise the original value
    pub fn resolve(&self, key: &str, field: Option<&str>) -> Result<String, ReviewError> {
        let record = self.field_record(key, field)?;
        Ok(self.overlay.resolve(record, field).unwrap_or_default())
    }

    pub fn can_submit(&self) -> bool {
        self.gate.can_submit(&self.selection)
    }

    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let document = self.document().map(|f| f.name.as_str());
        self.gate
            .submit(self.variant(), document, &self.selection, &self.overlay)
            .await
    }

    fn field_record(&self, key: &str, field: Option<&str>) -> Result<&Record, ReviewError> {
        let record = self
            .store
            .get(key)
            .ok_or_else(|| ReviewError::UnknownRecord(key.to_string()))?;
        if !record.has_field(field) {
            return Err(ReviewError::UnknownField {
                key: key.to_string(),
                field: field.unwrap_or("<none>").to_string(),
            });
        }
        Ok(record)
    }
}
