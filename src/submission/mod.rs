pub mod gate;
pub mod log;
pub mod memory;
pub mod payload;
pub mod r#trait;

pub use gate::{SubmissionGate, SubmitOutcome};
pub use log::LogSink;
pub use memory::MemorySink;
pub use payload::SubmissionPayload;
pub use r#trait::SubmissionSink;
