//! Error types for configuration validation
//!
//! Every variant is a static-configuration defect and therefore fatal at
//! startup; nothing here is transient or retriable.

use thiserror::Error;

/// Result type for configuration validation
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A URL field failed to parse or uses a disallowed scheme
    #[error("invalid URL in {field}: {details}")]
    InvalidUrl { field: String, details: String },

    /// A resource name collides with an existing registry entry
    #[error("duplicate protected resource: {name}")]
    DuplicateResource { name: String },

    /// A resource carries an empty or malformed scope list
    #[error("empty or malformed scope on resource {resource}")]
    EmptyScope { resource: String },

    /// A consent order references a name absent from the registry
    #[error("unknown protected resource: {name}")]
    UnknownResource { name: String },

    /// A mandatory client setting is empty
    #[error("missing required field: {field}")]
    MissingField { field: String },
}
