use crate::error::ReviewError;
use crate::models::{Record, WorkflowVariant};
use crate::records::r#trait::RecordSource;
use anyhow::Result;
use std::collections::HashSet;

/// Read-only, ordered record set of one workflow variant
#[derive(Debug, Clone)]
pub struct RecordStore {
    variant: WorkflowVariant,
    records: Vec<Record>,
}

impl RecordStore {
    /// Build a store, rejecting duplicate keys
    pub fn new(variant: WorkflowVariant, records: Vec<Record>) -> Result<Self, ReviewError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.key.as_str()) {
                return Err(ReviewError::DuplicateKey(record.key.clone()));
            }
        }

        Ok(Self { variant, records })
    }

    /// Load the variant's records from a source
    pub async fn load(source: &dyn RecordSource, variant: WorkflowVariant) -> Result<Self> {
        if !source.supports_variant(variant) {
            anyhow::bail!("Record source does not provide {} records", variant);
        }
        let records = source.records(variant).await?;
        tracing::debug!(variant = %variant, count = records.len(), "Loaded records");

        Ok(Self::new(variant, records)?)
    }

    pub fn variant(&self) -> WorkflowVariant {
        self.variant
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Keys in display order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
