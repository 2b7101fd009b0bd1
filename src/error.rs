//! Error types for the ladder and league engines
//!
//! Core operations return the typed [`Result`] so callers can tell a
//! rejected form field from a rejected match. Outer layers (config loading,
//! the CLI) wrap these in `anyhow` the same way the rest of the binary does.

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, TournamentError>;

/// Custom error types for ladder and league operations
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TournamentError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Invalid match: {reason}")]
    InvalidMatch { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Script error: {message}")]
    ScriptError { message: String },
}

impl TournamentError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_match(reason: impl Into<String>) -> Self {
        Self::InvalidMatch {
            reason: reason.into(),
        }
    }

    /// Blank or malformed user input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Self-referential match or a reference to an unknown entity
    pub fn is_invalid_match(&self) -> bool {
        matches!(self, Self::InvalidMatch { .. })
    }
}
