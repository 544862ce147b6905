use crate::models::UploadedFile;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle to a previewable copy of an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewRef {
    id: u64,
    url: String,
}

impl PreviewRef {
    /// URL-like identifier handed to the presentation layer
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for PreviewRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

#[derive(Debug)]
struct PreviewEntry {
    name: String,
    content: Arc<[u8]>,
}

#[derive(Debug, Default)]
struct Previews {
    next_id: u64,
    entries: HashMap<u64, PreviewEntry>,
}

/// Registry of live preview references, shared between the intake controller
/// and whoever renders previews. A reference stays resolvable until released.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    inner: Arc<Mutex<Previews>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn previews(&self) -> MutexGuard<'_, Previews> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a new reference to the file's content
    pub fn acquire(&self, file: &UploadedFile) -> PreviewRef {
        let mut previews = self.previews();
        previews.next_id += 1;
        let id = previews.next_id;
        previews.entries.insert(
            id,
            PreviewEntry {
                name: file.name.clone(),
                content: file.shared_content(),
            },
        );

        let digest = file.hash.get(..16).unwrap_or(file.hash.as_str());
        PreviewRef {
            id,
            url: format!("preview://{}/{}", digest, id),
        }
    }

    /// Release a reference. Returns false if it was already released.
    pub fn release(&self, preview: &PreviewRef) -> bool {
        let released = self.previews().entries.remove(&preview.id).is_some();
        if released {
            tracing::debug!(url = %preview.url, "Released preview");
        }
        released
    }

    pub fn is_live(&self, preview: &PreviewRef) -> bool {
        self.previews().entries.contains_key(&preview.id)
    }

    /// Number of references not yet released
    pub fn live_count(&self) -> usize {
        self.previews().entries.len()
    }

    /// Content behind a live reference
    pub fn content(&self, preview: &PreviewRef) -> Option<Arc<[u8]>> {
        self.previews()
            .entries
            .get(&preview.id)
            .map(|entry| entry.content.clone())
    }

    /// File name behind a live reference
    pub fn name(&self, preview: &PreviewRef) -> Option<String> {
        self.previews()
            .entries
            .get(&preview.id)
            .map(|entry| entry.name.clone())
    }
}
