//! Configuration types for the Snipcart API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with Snipcart.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SnipcartConfig`]: The main configuration struct holding all client settings
//! - [`SnipcartConfigBuilder`]: A builder for constructing [`SnipcartConfig`] instances
//! - [`ApiKey`]: A validated secret API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! Configuration is instance-based and passed explicitly at client
//! construction. There are no process-wide URI constants, so tests can
//! point a client at a mock endpoint by overriding the base URL.
//!
//! # Example
//!
//! ```rust
//! use snipcart_api::{SnipcartConfig, BaseUrl};
//!
//! let config = SnipcartConfig::builder()
//!     .base_url(BaseUrl::new("https://app.snipcart.com").unwrap())
//!     .default_limit(25)
//!     .build();
//!
//! assert_eq!(config.default_limit(), 25);
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

/// The production Snipcart API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://app.snipcart.com";

/// Page-size limit applied to list operations when the caller sets none.
pub const DEFAULT_LIMIT: u32 = 50;

/// Configuration for the Snipcart API client.
///
/// Holds the API base URL, the default page-size limit for list operations,
/// and an optional user-agent prefix.
///
/// # Thread Safety
///
/// `SnipcartConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use snipcart_api::SnipcartConfig;
///
/// let config = SnipcartConfig::default();
/// assert_eq!(config.base_url().as_ref(), "https://app.snipcart.com");
/// assert_eq!(config.default_limit(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct SnipcartConfig {
    base_url: BaseUrl,
    default_limit: u32,
    user_agent_prefix: Option<String>,
}

impl SnipcartConfig {
    /// Creates a new builder for constructing a `SnipcartConfig`.
    #[must_use]
    pub fn builder() -> SnipcartConfigBuilder {
        SnipcartConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default page-size limit for list operations.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for SnipcartConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// Verify SnipcartConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SnipcartConfig>();
};

/// Builder for constructing [`SnipcartConfig`] instances.
///
/// All fields have sensible defaults, so `build()` is infallible.
///
/// # Defaults
///
/// - `base_url`: `https://app.snipcart.com`
/// - `default_limit`: 50
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use snipcart_api::{SnipcartConfig, BaseUrl};
///
/// let config = SnipcartConfig::builder()
///     .base_url(BaseUrl::new("http://127.0.0.1:8080").unwrap())
///     .user_agent_prefix("MyShop/1.0")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct SnipcartConfigBuilder {
    base_url: Option<BaseUrl>,
    default_limit: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl SnipcartConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the default page-size limit for list operations.
    #[must_use]
    pub const fn default_limit(mut self, limit: u32) -> Self {
        self.default_limit = Some(limit);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SnipcartConfig`].
    #[must_use]
    pub fn build(self) -> SnipcartConfig {
        let base_url = self.base_url.unwrap_or_else(|| {
            BaseUrl::new(DEFAULT_BASE_URL).expect("default base URL is valid")
        });

        SnipcartConfig {
            base_url,
            default_limit: self.default_limit.unwrap_or(DEFAULT_LIMIT),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
