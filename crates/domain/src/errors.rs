//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Bitacora
///
/// The first eight variants are the validation and credential conditions
/// raised by the core services. They are terminal: callers render the message
/// and never retry.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum BitacoraError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BitacoraError {
    /// Whether the error is a user-facing validation or credential condition
    /// (as opposed to an infrastructure failure).
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Self::Database(_) | Self::Config(_) | Self::Security(_) | Self::Internal(_)
        )
    }
}

/// Result type alias for Bitacora operations
pub type Result<T> = std::result::Result<T, BitacoraError>;
