//! API credential handling.
//!
//! Snipcart authenticates API calls with HTTP Basic authentication where the
//! username is the secret API key and the password is empty. [`Credentials`]
//! precomputes the `Authorization` header value once at construction so the
//! encoding cost is not paid per request.

use base64::prelude::*;

use crate::config::ApiKey;

/// An immutable API credential and its HTTP Basic authentication form.
///
/// Constructed once from an [`ApiKey`] and owned by the client for its
/// lifetime. The header value is `Basic ` followed by
/// `base64("{key}:")` — the key as the Basic-auth user with an empty
/// password.
///
/// # Example
///
/// ```rust
/// use snipcart_api::{ApiKey, Credentials};
///
/// let credentials = Credentials::new(ApiKey::new("test_key").unwrap());
/// assert_eq!(credentials.authorization_header(), "Basic dGVzdF9rZXk6");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: ApiKey,
    authorization: String,
}

impl Credentials {
    /// Creates credentials from a validated API key.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        let encoded = BASE64_STANDARD.encode(format!("{}:", api_key.as_ref()));
        Self {
            api_key,
            authorization: format!("Basic {encoded}"),
        }
    }

    /// Returns the complete `Authorization` header value.
    #[must_use]
    pub fn authorization_header(&self) -> &str {
        &self.authorization
    }

    /// Returns the underlying API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The authorization value is the key in another encoding; mask both.
        f.write_str("Credentials(*****)")
    }
}
