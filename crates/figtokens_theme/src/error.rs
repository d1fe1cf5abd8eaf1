//! Theme error types

use figtokens_core::NodeError;
use thiserror::Error;

use crate::naming::NamingError;

/// Errors raised while generating a theme
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The document is missing a field or holds a malformed value
    #[error(transparent)]
    Node(#[from] NodeError),

    /// A color could not be named
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// Theme options could not be parsed
    #[error("invalid theme options: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Theme options could not be written
    #[error("failed to serialize theme options: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The theme could not be written as JSON
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for theme operations
pub type ThemeResult<T> = std::result::Result<T, ThemeError>;
