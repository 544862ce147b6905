use crate::constants::VALUE_FIELD;
use crate::models::Record;
use std::collections::BTreeMap;

/// Overrides keyed by record key, then field name.
/// Single-value and list records use the `value` field.
pub type OverrideMap = BTreeMap<String, BTreeMap<String, String>>;

/// User-entered replacement values, kept apart from the extracted records
#[derive(Debug, Clone, Default)]
pub struct EditOverlay {
    overrides: OverrideMap,
}

impl EditOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the latest value for a (key, field) pair, replacing any previous
    /// one. Returns the replaced value. Content is not validated; an empty
    /// string is a valid override.
    pub fn set_override(
        &mut self,
        key: &str,
        field: Option<&str>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.overrides
            .entry(key.to_string())
            .or_default()
            .insert(field.unwrap_or(VALUE_FIELD).to_string(), value.into())
    }

    /// The raw override for a (key, field) pair, if any
    pub fn get(&self, key: &str, field: Option<&str>) -> Option<&str> {
        self.overrides
            .get(key)
            .and_then(|fields| fields.get(field.unwrap_or(VALUE_FIELD)))
            .map(String::as_str)
    }

    /// The value to show for a field: the override if present, otherwise the
    /// record's original value
    pub fn resolve(&self, record: &Record, field: Option<&str>) -> Option<String> {
        match self.get(&record.key, field) {
            Some(value) => Some(value.to_string()),
            None => record.field_value(field),
        }
    }

    /// All overrides of one record
    pub fn overrides_for(&self, key: &str) -> Option<&BTreeMap<String, String>> {
        self.overrides.get(key)
    }

    /// Copy of every override, for submission
    pub fn snapshot(&self) -> OverrideMap {
        self.overrides.clone()
    }

    /// Number of (key, field) pairs with an override
    pub fn len(&self) -> usize {
        self.overrides.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
