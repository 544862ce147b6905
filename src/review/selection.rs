use crate::error::ReviewError;
use crate::records::RecordStore;
use std::collections::HashSet;

/// Tracks which records are highlighted for submission
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    keys: Vec<String>,
    selected: HashSet<String>,
    all_selected: bool,
}

impl SelectionTracker {
    /// Create a tracker over the given keys, with nothing selected
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            selected: HashSet::new(),
            all_selected: false,
        }
    }

    pub fn from_store(store: &RecordStore) -> Self {
        Self::new(store.keys())
    }

    /// Flip one key. Returns whether the key is selected afterwards.
    pub fn toggle(&mut self, key: &str) -> Result<bool, ReviewError> {
        if !self.keys.iter().any(|k| k == key) {
            return Err(ReviewError::UnknownRecord(key.to_string()));
        }

        let now_selected = if self.selected.remove(key) {
            false
        } else {
            self.selected.insert(key.to_string());
            true
        };
        self.all_selected = self.selected.len() == self.keys.len();

        Ok(now_selected)
    }

    /// Select every key, or clear the selection if every key is already
    /// selected. Returns the new "all selected" flag.
    pub fn toggle_all(&mut self) -> bool {
        if self.all_selected {
            self.selected.clear();
        } else {
            self.selected = self.keys.iter().cloned().collect();
        }
        self.all_selected = !self.all_selected;
        self.all_selected
    }

    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    /// Selected keys in record order
    pub fn selected(&self) -> Vec<&str> {
        self.keys
            .iter()
            .filter(|k| self.selected.contains(k.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
