//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn missing_setting<T: AsRef<str>>(key: T) -> Self {
        Self::Configuration(format!("{} is not set", key.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_setting_message() {
        let err = DomainError::missing_setting("MESSAGEBIRD_API_KEY");
        assert_eq!(
            err.to_string(),
            "Configuration error: MESSAGEBIRD_API_KEY is not set"
        );
    }
}
