//! Error types shared by all registries and validators.

use thiserror::Error;

/// Errors raised while building or querying master data tables.
///
/// These signal caller misuse or broken reference data, never an invalid
/// user-supplied value: checksum predicates answer `false` for those.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MasterDataError {
    /// An argument was outside the domain the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A registry received the same key twice.
    #[error("duplicate key '{key}' in {registry}")]
    DuplicateKey {
        /// Name of the registry (e.g. "postal codes").
        registry: &'static str,
        /// The offending key.
        key: String,
    },

    /// A required XML attribute was missing.
    #[error("element <{element}> is missing attribute '{attribute}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: &'static str,
    },

    /// XML resource could not be read.
    #[error("XML error: {0}")]
    Xml(String),

    /// A lookup that must yield at most one value found several.
    #[error("{what} '{key}' is ambiguous: {candidates:?}")]
    Ambiguous {
        /// What was looked up (e.g. "vehicle sign").
        what: &'static str,
        /// The lookup key.
        key: String,
        /// All matching values.
        candidates: Vec<String>,
    },
}

/// A single validation failure with field path, message and error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the validated field (e.g. "postal_code").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Stable error code for display-text lookup (e.g. "postal_code.invalid_format").
    pub code: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(code) = &self.code {
            write!(f, "[{}] {}: {}", code, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Create a validation error without an error code.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: None,
        }
    }

    /// Create a validation error with an error code.
    pub fn with_code(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: Some(code.into()),
        }
    }
}
