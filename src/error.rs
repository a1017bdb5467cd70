//! Error types for client configuration.
//!
//! This module contains the error type returned by configuration and
//! credential constructors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use snipcart_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Snipcart secret API key.")]
    EmptyApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://app.snipcart.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let error = ConfigError::EmptyApiKey;
        let message = error.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("Snipcart secret API key"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("valid URL with scheme"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiKey;
        // Verify it implements std::error::Error by using it as a dyn Error
        let _: &dyn std::error::Error = &error;
    }
}
