//! Error types for Venture Desk.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole assistant core.
///
/// The keyword extractor and the agent router are total and never produce
/// one of these; errors come from configuration loading, explicit actions
/// naming unknown entities, and a session that has already ended.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VentureError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Input rejected before any state was touched
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error (config file, keyword table, persona catalog)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// The chat session was ended and accepts no more messages
    #[error("Chat session has ended")]
    SessionEnded,

    /// No async runtime was available to schedule a deferred reply
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl VentureError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for VentureError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for VentureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for VentureError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for VentureError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, VentureError>`.
pub type Result<T> = std::result::Result<T, VentureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = VentureError::not_found("persona", "ghost");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: persona 'ghost'");
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let err: VentureError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, VentureError::Io { .. }));
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_toml_error_converts_to_serialization() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("= broken");
        let err: VentureError = parse.unwrap_err().into();
        assert!(err.is_serialization());
        assert!(err.to_string().contains("TOML"));
    }
}
