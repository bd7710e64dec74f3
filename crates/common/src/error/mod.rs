//! Common error types and utilities
//!
//! `CommonError` covers the failures shared by several modules: configuration
//! parsing, serialization and credential hashing.
//!
//! Module-specific errors should **compose** with `CommonError` rather than
//! duplicating its variants:
//!
//! ```rust,ignore
//! #[derive(Debug, Error)]
//! pub enum ConfigError {
//!     #[error("No config file found")]
//!     Missing,
//!
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//! }
//! ```

use std::fmt;

/// Standard result type using CommonError
pub type CommonResult<T> = Result<T, CommonError>;

/// Common error variants that appear across multiple modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// Configuration-related errors
    Config { message: String },

    /// Serialization or deserialization errors
    Serialization { message: String, format: Option<String> },

    /// Credential hashing or verification failures
    Security { message: String },
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { message } => write!(f, "Configuration error: {}", message),
            Self::Serialization { message, format } => {
                if let Some(format) = format {
                    write!(f, "Serialization error ({}): {}", format, message)
                } else {
                    write!(f, "Serialization error: {}", message)
                }
            }
            Self::Security { message } => write!(f, "Security error: {}", message),
        }
    }
}

impl std::error::Error for CommonError {}

impl CommonError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create a serialization error with format information
    pub fn serialization_format<S: Into<String>, F: Into<String>>(format: F, message: S) -> Self {
        Self::Serialization { message: message.into(), format: Some(format.into()) }
    }

    /// Create a security error
    pub fn security<S: Into<String>>(message: S) -> Self {
        Self::Security { message: message.into() }
    }
}

// Standard conversions from common error types
impl From<serde_json::Error> for CommonError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_format("JSON", err.to_string())
    }
}

impl From<toml::de::Error> for CommonError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization_format("TOML", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_format() {
        let err = CommonError::serialization_format("TOML", "expected `=`");
        assert_eq!(err.to_string(), "Serialization error (TOML): expected `=`");

        let err = CommonError::config("Unsupported config format: yaml");
        assert_eq!(err.to_string(), "Configuration error: Unsupported config format: yaml");
    }

    #[test]
    fn json_errors_convert_to_serialization() {
        let err: CommonError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, CommonError::Serialization { format: Some(ref f), .. } if f == "JSON"));
    }

    #[test]
    fn toml_errors_convert_to_serialization() {
        let err: CommonError = toml::from_str::<toml::Value>("a = ").unwrap_err().into();
        assert!(matches!(err, CommonError::Serialization { format: Some(ref f), .. } if f == "TOML"));
    }
}
