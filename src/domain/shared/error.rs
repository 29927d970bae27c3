//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The caller omitted a required field
    #[error("Validation error: {0}")]
    Validation(String),

    /// The deployment is missing required secrets
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The call-control provider rejected or failed the request
    #[error("Provider error: {message}")]
    Provider {
        message: String,
        /// Rendering of the raw provider error, for diagnostics
        details: Option<String>,
    },
}

impl DomainError {
    /// Message suitable for the `error` field of an API response
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg) | DomainError::Configuration(msg) => msg,
            DomainError::Provider { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_strips_kind_prefix() {
        let err = DomainError::Provider {
            message: "Invalid number".to_string(),
            details: Some("RestException [21211]: Invalid number".to_string()),
        };
        assert_eq!(err.message(), "Invalid number");
        assert_eq!(err.to_string(), "Provider error: Invalid number");

        let err = DomainError::Validation("Missing call SID".to_string());
        assert_eq!(err.message(), "Missing call SID");
    }
}
