use crate::constants::{EXTENSION_MIME_TYPES, FALLBACK_MIME};
use anyhow::Result;
use std::path::Path;

/// Compute Blake3 hash of in-memory content
pub fn compute_content_hash(content: &[u8]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(content);
    hasher.finalize().to_hex().to_string()
}

/// Get file extension from path (without the dot)
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// MIME type a file picker would declare for this path
pub fn mime_type_for_path(path: &Path) -> String {
    get_extension(path)
        .and_then(|ext| {
            EXTENSION_MIME_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| mime.to_string())
        })
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}

/// Parse an override argument: `KEY=VALUE` or `KEY:FIELD=VALUE`
pub fn parse_override(arg: &str) -> Result<(String, Option<String>, String)> {
    let (target, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected KEY=VALUE or KEY:FIELD=VALUE, got {:?}", arg))?;

    let (key, field) = match target.split_once(':') {
        Some((key, field)) => (key.trim(), Some(field.trim().to_string())),
        None => (target.trim(), None),
    };
    if key.is_empty() {
        anyhow::bail!("Missing record key in {:?}", arg);
    }

    Ok((key.to_string(), field, value.to_string()))
}
