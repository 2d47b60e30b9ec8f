//! Decode failures.
//!
//! Encoding never fails for an in-memory value, so every variant here describes something wrong
//! with input text. Unknown keys are not an error: they are skipped (and logged at `debug`).

use crate::json::FieldPath;

/// Errors returned when JSON cannot be decoded into a record.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON is well-formed but a value has the wrong shape for its field.
    #[error("schema mismatch at {path}: {message}")]
    SchemaMismatch { path: String, message: String },

    /// More than one alternative of a oneof group is present.
    #[error("malformed oneof '{group}' at {path}: both '{first}' and '{second}' are present")]
    MalformedOneof {
        path: String,
        group: &'static str,
        first: &'static str,
        second: &'static str,
    },

    /// A value cannot be represented exactly by its field type.
    #[error("precision loss at {path}: {message}")]
    PrecisionLoss { path: String, message: String },

    /// The requested schema version has no registry.
    #[error("unsupported schema version: {0}")]
    UnsupportedSchemaVersion(String),
}

impl CodecError {
    pub fn mismatch(path: &FieldPath, message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            path: path.to_string(),
            message: message.into(),
        }
    }

    pub fn precision_loss(path: &FieldPath, message: impl Into<String>) -> Self {
        Self::PrecisionLoss {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// The field path the error refers to, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::SchemaMismatch { path, .. }
            | Self::MalformedOneof { path, .. }
            | Self::PrecisionLoss { path, .. } => Some(path),
            Self::Parse(_) | Self::UnsupportedSchemaVersion(_) => None,
        }
    }
}

/// Type alias for Results that can fail with a [`CodecError`].
pub type CodecResult<T> = Result<T, CodecError>;
