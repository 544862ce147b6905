use thiserror::Error;

/// Errors raised when a file is handed to intake
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// The file does not declare the accepted MIME type
    #[error("Please upload a valid PDF file ({name} was declared as {mime_type})")]
    InvalidFileType { name: String, mime_type: String },
}

/// Errors raised by the review workflow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// Key is not part of the loaded record set
    #[error("Unknown record: {0}")]
    UnknownRecord(String),

    /// Field address does not match the record's shape
    #[error("Record {key} has no field {field}")]
    UnknownField { key: String, field: String },

    /// A record source produced the same key twice
    #[error("Duplicate record key: {0}")]
    DuplicateKey(String),

    #[error(transparent)]
    Intake(#[from] IntakeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_file_type_message() {
        let err = IntakeError::InvalidFileType {
            name: "readme.txt".to_string(),
            mime_type: "text/plain".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("valid PDF"));
        assert!(message.contains("readme.txt"));
    }

    #[test]
    fn test_intake_error_converts_into_review_error() {
        let err: ReviewError = IntakeError::InvalidFileType {
            name: "a.png".to_string(),
            mime_type: "image/png".to_string(),
        }
        .into();
        assert!(matches!(err, ReviewError::Intake(_)));
    }
}
