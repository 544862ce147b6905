use crate::constants::{
    CITY_CODE_FIELD, CONTRACT_FIELDS, INVOICE_FIELDS, INVOICE_ITEMS, INVOICE_ITEMS_KEY,
    RATE_CODE_FIELD, RATE_LOADING_CODES,
};
use crate::models::{Record, WorkflowVariant};
use crate::records::r#trait::RecordSource;
use anyhow::Result;

/// Record source backed by the built-in sample extraction results
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }

    /// Records of a variant, without going through the async trait
    pub fn records_for(variant: WorkflowVariant) -> Vec<Record> {
        match variant {
            WorkflowVariant::HotelContract => CONTRACT_FIELDS
                .iter()
                .map(|(key, value)| Record::single(*key, *value))
                .collect(),
            WorkflowVariant::Invoice => INVOICE_FIELDS
                .iter()
                .map(|(key, value)| Record::single(*key, *value))
                .chain(std::iter::once(Record::list(
                    INVOICE_ITEMS_KEY,
                    INVOICE_ITEMS.iter().copied(),
                )))
                .collect(),
            WorkflowVariant::RateLoading => RATE_LOADING_CODES
                .iter()
                .map(|(gds, rate_code, city_code)| {
                    Record::fields(
                        *gds,
                        [(RATE_CODE_FIELD, *rate_code), (CITY_CODE_FIELD, *city_code)],
                    )
                })
                .collect(),
        }
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RecordSource for FixtureSource {
    async fn records(&self, variant: WorkflowVariant) -> Result<Vec<Record>> {
        Ok(Self::records_for(variant))
    }

    fn supports_variant(&self, _variant: WorkflowVariant) -> bool {
        true
    }
}
