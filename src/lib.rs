pub mod chat;
pub mod config;
pub mod constants;
pub mod error;
pub mod intake;
pub mod logging;
pub mod models;
pub mod records;
pub mod review;
pub mod submission;
pub mod utils;

pub use chat::ChatSession;
pub use config::Config;
pub use error::{IntakeError, ReviewError};
pub use intake::{IntakeController, Processor};
pub use models::{ProcessingStatus, Record, RecordValue, UploadedFile, WorkflowVariant};
pub use records::{RecordSource, RecordStore};
pub use review::ReviewWorkflow;
pub use submission::{SubmissionPayload, SubmissionSink, SubmitOutcome};
