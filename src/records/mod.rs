pub mod fixture;
pub mod store;
pub mod r#trait;

pub use fixture::FixtureSource;
pub use store::RecordStore;
pub use r#trait::RecordSource;
