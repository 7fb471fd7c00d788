//! Error types for the Model Information Service client.
//!
//! This module contains error types used for configuration and validation
//! errors. Errors raised while talking to the service live in
//! [`crate::clients`].
//!
//! # Example
//!
//! ```rust
//! use smis::{ConfigError, Endpoint};
//!
//! let result = Endpoint::new("svc.example.com");
//! assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://svc.example.com/api').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_error_message() {
        let error = ConfigError::InvalidEndpoint {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme and host"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "endpoint" };
        let message = error.to_string();
        assert!(message.contains("endpoint"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingRequiredField { field: "endpoint" };
        let _: &dyn std::error::Error = &error;
    }
}
