//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Snipcart secret API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use snipcart_api::ApiKey;
///
/// let key = ApiKey::new("S_NjQyZmZj...").unwrap();
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API base URL.
///
/// This newtype validates that the URL has a proper scheme and host, and
/// normalizes away any trailing slash so request paths can be appended
/// directly.
///
/// # Example
///
/// ```rust
/// use snipcart_api::BaseUrl;
///
/// let url = BaseUrl::new("https://app.snipcart.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://app.snipcart.com");
/// assert_eq!(url.scheme(), "https");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is missing a
    /// scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        // Find scheme
        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Host must be non-empty
        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
