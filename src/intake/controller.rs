use crate::config::IntakeConfig;
use crate::error::IntakeError;
use crate::intake::preview::{PreviewRef, PreviewRegistry};
use crate::intake::r#trait::Processor;
use crate::models::{ProcessingStatus, UploadedFile};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Status published by the controller. `generation` identifies the accepted
/// file a processing task belongs to; `settled` is false while it runs.
#[derive(Debug, Clone, Copy, Default)]
struct StatusCell {
    generation: u64,
    status: ProcessingStatus,
    settled: bool,
}

/// Accepts documents, owns the current one and drives its processing status
pub struct IntakeController {
    accepted_mime: String,
    processor: Arc<dyn Processor>,
    previews: PreviewRegistry,
    file: Option<UploadedFile>,
    preview: Option<PreviewRef>,
    status: Arc<watch::Sender<StatusCell>>,
    task: Option<JoinHandle<()>>,
}

impl IntakeController {
    /// Create a controller accepting `accepted_mime` files
    pub fn new(
        accepted_mime: impl Into<String>,
        processor: Arc<dyn Processor>,
        previews: PreviewRegistry,
    ) -> Self {
        let (tx, _) = watch::channel(StatusCell {
            settled: true,
            ..StatusCell::default()
        });
        Self {
            accepted_mime: accepted_mime.into(),
            processor,
            previews,
            file: None,
            preview: None,
            status: Arc::new(tx),
            task: None,
        }
    }

    pub fn from_config(
        config: &IntakeConfig,
        processor: Arc<dyn Processor>,
        previews: PreviewRegistry,
    ) -> Self {
        Self::new(config.accepted_mime.clone(), processor, previews)
    }

    /// Accept a file for review.
    ///
    /// Rejected files leave the current file, preview and status untouched.
    /// An accepted file replaces the previous one, releases its preview and
    /// restarts processing. Must be called from within a Tokio runtime.
    pub fn accept_file(&mut self, file: UploadedFile) -> Result<&UploadedFile, IntakeError> {
        if file.mime_type != self.accepted_mime {
            tracing::warn!(file = %file.name, mime_type = %file.mime_type, "Rejected upload");
            return Err(IntakeError::InvalidFileType {
                name: file.name,
                mime_type: file.mime_type,
            });
        }

        if let Some(task) = self.task.take() {
            task.abort();
        }
        if let Some(previous) = self.preview.take() {
            self.previews.release(&previous);
        }

        let preview = self.previews.acquire(&file);
        tracing::info!(file = %file.name, size = file.size, preview = %preview, "Accepted upload");

        let mut generation = 0;
        self.status.send_modify(|cell| {
            cell.generation += 1;
            cell.status = ProcessingStatus::Uploaded;
            cell.settled = false;
            generation = cell.generation;
        });

        self.task = Some(tokio::spawn(run_processor(
            self.processor.clone(),
            self.status.clone(),
            file.clone(),
            generation,
        )));
        self.preview = Some(preview);

        Ok(self.file.insert(file))
    }

    pub fn status(&self) -> ProcessingStatus {
        self.status.borrow().status
    }

    pub fn is_processed(&self) -> bool {
        self.status().is_processed()
    }

    /// The currently accepted file
    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    /// Preview reference of the currently accepted file
    pub fn preview(&self) -> Option<&PreviewRef> {
        self.preview.as_ref()
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    /// Wait until processing of the current file settles and return the
    /// resulting status. Returns immediately when no processing is pending.
    pub async fn wait_processed(&self) -> Result<ProcessingStatus> {
        let mut rx = self.status.subscribe();
        let cell = rx
            .wait_for(|cell| cell.settled)
            .await
            .context("Intake status channel closed")?;
        Ok(cell.status)
    }
}

impl Drop for IntakeController {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if let Some(preview) = self.preview.take() {
            self.previews.release(&preview);
        }
    }
}

async fn run_processor(
    processor: Arc<dyn Processor>,
    status: Arc<watch::Sender<StatusCell>>,
    file: UploadedFile,
    generation: u64,
) {
    status.send_if_modified(|cell| {
        if cell.generation != generation {
            return false;
        }
        cell.status = ProcessingStatus::Processing;
        true
    });

    let outcome = processor.process(&file).await;

    // A newer upload owns the status once the generation moves on
    status.send_if_modified(|cell| {
        if cell.generation != generation {
            return false;
        }
        match &outcome {
            Ok(()) => {
                tracing::info!(file = %file.name, "Successfully processed");
                cell.status = ProcessingStatus::Processed;
            }
            Err(e) => {
                tracing::error!(file = %file.name, "Processing failed: {:#}", e);
                cell.status = ProcessingStatus::Uploaded;
            }
        }
        cell.settled = true;
        true
    });
}
