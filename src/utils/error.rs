use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardrailError {
    #[error("Cannot convert '{value}' to an integer: {reason}")]
    ConversionFailure { value: String, reason: String },

    // The io cause is intentionally dropped here: "file not found" needs no
    // technical chain, just the path the caller should check.
    #[error("Resource not found: '{path}'")]
    ResourceNotFound { path: String },

    #[error("Failed to read resource '{path}': {source}")]
    ResourceAccessFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Validation error for '{field}' (value: '{value}'): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Conversion,
    Resource,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GuardrailError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GuardrailError::ConversionFailure { .. } => ErrorCategory::Conversion,
            GuardrailError::ResourceNotFound { .. }
            | GuardrailError::ResourceAccessFailure { .. } => ErrorCategory::Resource,
            GuardrailError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Bad input: the caller can fix it and retry
            GuardrailError::ConversionFailure { .. } => ErrorSeverity::Medium,
            GuardrailError::ResourceNotFound { .. } => ErrorSeverity::Medium,
            // Resource exists but cannot be read; likely an environment problem
            GuardrailError::ResourceAccessFailure { .. } => ErrorSeverity::High,
            GuardrailError::ValidationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GuardrailError::ConversionFailure { value, .. } => format!(
                "Check that '{}' is a plain base-10 integer (e.g. '123'); \
                 fix the input at its source instead of substituting a default",
                value
            ),
            GuardrailError::ResourceNotFound { path } => format!(
                "Check that '{}' exists and that the path is spelled correctly \
                 (relative paths resolve against the working directory)",
                path
            ),
            GuardrailError::ResourceAccessFailure { path, .. } => format!(
                "Check read permissions on '{}' and that it is a regular text file",
                path
            ),
            GuardrailError::ValidationError { field, .. } => {
                format!("Correct the '{}' input and try again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GuardrailError::ConversionFailure { value, reason } => {
                format!("Could not interpret '{}' as an integer ({})", value, reason)
            }
            GuardrailError::ResourceNotFound { path } => {
                format!("The file '{}' does not exist", path)
            }
            GuardrailError::ResourceAccessFailure { path, .. } => {
                format!("The file '{}' exists but could not be read", path)
            }
            GuardrailError::ValidationError {
                field,
                value,
                reason,
            } => {
                format!("Invalid {} '{}': {}", field, value, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GuardrailError>;
