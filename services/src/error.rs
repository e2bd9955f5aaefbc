use db::StoreError;
use thiserror::Error;

/// The caller sent something unusable. Detected before any store call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ValidationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("No file uploaded")]
    NoFileUploaded,

    #[error("File tidak dapat dibaca: {0}")]
    UnparseableFile(String),

    #[error("File XLS harus memiliki kolom 'name' dan 'course'")]
    MissingColumns,

    #[error(transparent)]
    Store(#[from] StoreError),
}
