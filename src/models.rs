use crate::constants::{
    CITY_CODE_FIELD, PDF_MIME, RATE_CODE_FIELD, VALUE_FIELD,
};
use crate::utils;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// A file handed to intake by the user
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UploadedFile {
    /// Display name (file name without directories)
    pub name: String,
    /// MIME type declared for the file
    pub mime_type: String,
    /// Size of the content in bytes
    pub size: u64,
    /// Blake3 hash of the content
    pub hash: String,
    #[serde(skip)]
    content: Arc<[u8]>,
}

impl UploadedFile {
    /// Create an UploadedFile from in-memory content
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let content: Vec<u8> = content.into();
        let hash = utils::compute_content_hash(&content);
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size: content.len() as u64,
            hash,
            content: content.into(),
        }
    }

    /// Read a file from disk, declaring its MIME type from the extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = utils::mime_type_for_path(path);

        Ok(Self::new(name, mime_type, content))
    }

    /// Raw content
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub(crate) fn shared_content(&self) -> Arc<[u8]> {
        self.content.clone()
    }

    /// Whether the declared MIME type is PDF
    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME
    }
}

/// Where a workflow stands with respect to its uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    #[default]
    Idle,
    Uploaded,
    Processing,
    Processed,
}

impl ProcessingStatus {
    pub fn is_processed(&self) -> bool {
        matches!(self, ProcessingStatus::Processed)
    }

    /// True once a file has been accepted
    pub fn has_file(&self) -> bool {
        !matches!(self, ProcessingStatus::Idle)
    }
}

/// The kinds of document a review workflow can handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowVariant {
    /// Hotel contract extraction
    #[value(name = "contract")]
    HotelContract,
    /// Invoice data extraction
    Invoice,
    /// Corporate rate loading instruction (GDS rate and city codes)
    #[value(name = "rli")]
    RateLoading,
}

impl WorkflowVariant {
    pub const ALL: [WorkflowVariant; 3] = [
        WorkflowVariant::HotelContract,
        WorkflowVariant::Invoice,
        WorkflowVariant::RateLoading,
    ];

    /// Human readable name of the document kind
    pub fn title(&self) -> &'static str {
        match self {
            WorkflowVariant::HotelContract => "Hotel Contract",
            WorkflowVariant::Invoice => "Invoice",
            WorkflowVariant::RateLoading => "RLI",
        }
    }

    /// Column layout of the variant's records
    pub fn shape(&self) -> RecordShape {
        match self {
            WorkflowVariant::HotelContract | WorkflowVariant::Invoice => RecordShape {
                key_label: "Key",
                columns: &[(VALUE_FIELD, "Value")],
            },
            WorkflowVariant::RateLoading => RecordShape {
                key_label: "GDS",
                columns: &[
                    (RATE_CODE_FIELD, "Rate Code"),
                    (CITY_CODE_FIELD, "Pseudo City Code"),
                ],
            },
        }
    }
}

impl std::fmt::Display for WorkflowVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Describes how a variant's records are laid out for review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordShape {
    /// Header of the key column
    pub key_label: &'static str,
    /// (field name, header) for each value column
    pub columns: &'static [(&'static str, &'static str)],
}

/// A named sub-field of a multi-field record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// The extracted value(s) of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RecordValue {
    Single(String),
    List(Vec<String>),
    Fields(Vec<Field>),
}

/// One reviewable entry extracted from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub value: RecordValue,
}

impl Record {
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: RecordValue::Single(value.into()),
        }
    }

    pub fn list<I, S>(key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            value: RecordValue::List(items.into_iter().map(Into::into).collect()),
        }
    }

    pub fn fields<I, N, V>(key: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: RecordValue::Fields(
                fields
                    .into_iter()
                    .map(|(name, value)| Field {
                        name: name.into(),
                        value: value.into(),
                    })
                    .collect(),
            ),
        }
    }

    /// Whether `field` addresses a value of this record.
    /// Single and list records are addressed with no field (or `value`),
    /// multi-field records by sub-field name.
    pub fn has_field(&self, field: Option<&str>) -> bool {
        match (&self.value, field) {
            (RecordValue::Single(_) | RecordValue::List(_), None) => true,
            (RecordValue::Single(_) | RecordValue::List(_), Some(name)) => name == VALUE_FIELD,
            (RecordValue::Fields(fields), Some(name)) => fields.iter().any(|f| f.name == name),
            (RecordValue::Fields(_), None) => false,
        }
    }

    /// Original value of a field, as displayed
    pub fn field_value(&self, field: Option<&str>) -> Option<String> {
        if !self.has_field(field) {
            return None;
        }
        match &self.value {
            RecordValue::Single(value) => Some(value.clone()),
            RecordValue::List(items) => Some(items.join(", ")),
            RecordValue::Fields(fields) => field
                .and_then(|name| fields.iter().find(|f| f.name == name))
                .map(|f| f.value.clone()),
        }
    }

    /// Text shown in a one-line table cell
    pub fn display_value(&self) -> String {
        match &self.value {
            RecordValue::Single(value) => value.clone(),
            RecordValue::List(items) => items.join(", "),
            RecordValue::Fields(fields) => fields
                .iter()
                .map(|f| f.value.as_str())
                .collect::<Vec<_>>()
                .join(" / "),
        }
    }
}
