pub mod controller;
pub mod delay;
pub mod preview;
pub mod r#trait;

pub use controller::IntakeController;
pub use delay::DelayProcessor;
pub use preview::{PreviewRef, PreviewRegistry};
pub use r#trait::Processor;
