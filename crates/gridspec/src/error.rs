//! Error types for the gridspec crate.
//!
//! Building a table from resolved metadata never fails. Errors only come from
//! resolving a type name that nobody registered, and from loading or
//! registering metadata that breaks the registry's invariants.

use thiserror::Error;

/// Errors that can occur when resolving or registering sheet metadata.
#[derive(Debug, Error)]
pub enum GridSpecError {
    /// The introspector has no metadata for the requested type.
    #[error("unknown sheet type: '{0}'")]
    UnknownType(String),

    /// A type with the same name is already registered.
    #[error("sheet type '{0}' is already registered")]
    DuplicateType(String),

    /// Metadata violates a registration precondition.
    #[error("invalid metadata for '{type_name}': {reason}")]
    InvalidMetadata { type_name: String, reason: String },

    /// YAML schema could not be parsed.
    #[error("invalid YAML schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON schema could not be parsed.
    #[error("invalid JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema file could not be read.
    #[error("failed to read schema: {0}")]
    Io(#[from] std::io::Error),
}

impl GridSpecError {
    pub(crate) fn invalid(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        GridSpecError::InvalidMetadata {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for gridspec operations.
pub type Result<T> = std::result::Result<T, GridSpecError>;
