pub mod overlay;
pub mod selection;
pub mod table;
pub mod workflow;

pub use overlay::{EditOverlay, OverrideMap};
pub use selection::SelectionTracker;
pub use workflow::ReviewWorkflow;
