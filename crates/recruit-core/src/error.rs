//! Error types for the RecruitBook application.

use thiserror::Error;

/// A shared error type for the entire RecruitBook application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Every variant is recoverable:
/// nothing in the core is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecruitError {
    /// Malformed command text or arguments
    #[error("Invalid command format: {message}")]
    Parse { message: String },

    /// Keyword not legal in the current grammar stage
    #[error("Unknown command")]
    UnknownCommand,

    /// Mutation would violate a uniqueness invariant
    #[error("This {entity_type} already exists in the book")]
    DuplicateEntity { entity_type: &'static str },

    /// Referenced entity or index does not exist in the current view
    #[error("No such {entity_type}: {id}")]
    EntityNotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A session-held reference no longer resolves
    #[error("The selected {entity_type} '{id}' no longer exists")]
    StaleReference {
        entity_type: &'static str,
        id: String,
    },

    /// Persisted file exists but cannot be parsed into the expected shape
    #[error("Data file format error: {format} - {message}")]
    Format { format: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl RecruitError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates a DuplicateEntity error
    pub fn duplicate(entity_type: &'static str) -> Self {
        Self::DuplicateEntity { entity_type }
    }

    /// Creates an EntityNotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::EntityNotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a StaleReference error
    pub fn stale(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::StaleReference {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Format error
    pub fn format_error(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is a DuplicateEntity error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateEntity { .. })
    }

    /// Check if this is an EntityNotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntityNotFound { .. })
    }

    /// Check if this is a StaleReference error
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleReference { .. })
    }

    /// Check if this is a Format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for RecruitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for RecruitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for RecruitError {
    fn from(err: toml::de::Error) -> Self {
        Self::Format {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for RecruitError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Format {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, RecruitError>`.
pub type Result<T> = std::result::Result<T, RecruitError>;
