//! Node error types

use thiserror::Error;

/// Errors raised while reading typed values out of a document tree
#[derive(Error, Debug)]
pub enum NodeError {
    /// A field the node kind requires is absent
    #[error("missing field `{field}`")]
    MissingField { field: String },

    /// A field is present but holds the wrong kind of value
    #[error("field `{field}` is not {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },

    /// The document text is not valid JSON
    #[error("invalid document json: {0}")]
    Parse(#[from] serde_json::Error),
}

impl NodeError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            field: field.into(),
            expected,
        }
    }
}

/// Result type for node operations
pub type Result<T> = std::result::Result<T, NodeError>;
