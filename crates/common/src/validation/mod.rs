// Validation Module - field-level validation framework
use std::fmt;

mod validators;

pub use validators::{EmailValidator, FieldValidator, StringValidator};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError { field: field.into(), message: message.into() });
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of the fields that failed, in insertion order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    /// Get errors for a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            write!(f, "{}: {}", self.errors[0].field, self.errors[0].message)?;
        } else {
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Collects field errors and reports them all at once.
///
/// ```rust,ignore
/// use bitacora_common::validation::Validator;
///
/// let mut validator = Validator::new();
/// validator.validate_not_empty("supervisor", "  ");
/// validator.validate_not_empty("description", "Pump inspection");
///
/// let err = validator.finalize().unwrap_err();
/// assert_eq!(err.fields(), vec!["supervisor"]);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self { errors: ValidationError::new() }
    }

    /// Record an error for `field` directly
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add_field_error(field, message);
    }

    /// Validate string is not empty after trimming
    pub fn validate_not_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add_error(field, "cannot be empty");
        }
    }

    /// Run a reusable field validator
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V)
    where
        V: FieldValidator<T>,
    {
        if let Err(message) = validator.validate(value) {
            self.add_error(field, message);
        }
    }

    /// Finalize and return result
    pub fn finalize(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
