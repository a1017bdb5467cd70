//! HTTP client for Snipcart API communication.
//!
//! This module provides the [`HttpClient`] type — the one authenticated
//! JSON transport every resource operation is built from.

use crate::auth::Credentials;
use crate::clients::errors::{HttpError, StatusError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::SnipcartConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making authenticated requests to the Snipcart API.
///
/// The client performs one synchronous round-trip per call:
///
/// - Sets `Authorization: Basic <credential>` and `Accept: application/json`
/// - Serializes an optional JSON body with `Content-Type: application/json`
/// - Percent-encodes query parameters onto the URI in caller-supplied order
/// - Classifies the response: status in `[200, 300)` is success, anything
///   else is a [`StatusError`] carrying the literal status text
///
/// Nothing is retried, cached, or rate-limited; network timeouts are left
/// to the underlying stack's defaults. The client holds no mutable state,
/// so a single instance can safely serve concurrent calls.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use snipcart_api::clients::{HttpClient, HttpRequest, HttpMethod};
/// use snipcart_api::{ApiKey, Credentials, SnipcartConfig};
///
/// let credentials = Credentials::new(ApiKey::new("key").unwrap());
/// let client = HttpClient::new(&credentials, &SnipcartConfig::default());
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/orders")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://app.snipcart.com`).
    base_url: String,
    /// Precomputed `Authorization` header value.
    authorization: String,
    /// `User-Agent` header value.
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given credentials and configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(credentials: &Credentials, config: &SnipcartConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Snipcart API Library v{SDK_VERSION} | Rust {rust_version}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            authorization: credentials.authorization_header().to_string(),
            user_agent,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the `User-Agent` header value for this client.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sends an HTTP request to the Snipcart API.
    ///
    /// The response body is read in full before this method returns, so the
    /// connection is released deterministically on every exit path. A
    /// returned [`HttpResponse`] always has a 2xx status; decoding it is
    /// the caller's step.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network or connection error occurs (`Network`)
    /// - A non-2xx response is received (`Status`, carrying the literal
    ///   status text)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_url, request.path);

        tracing::debug!(method = %request.http_method, url = %url, "sending request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        };

        req_builder = req_builder
            .header("Authorization", &self.authorization)
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent);

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let status = res.status().canonical_reason().map_or_else(
            || code.to_string(),
            |reason| format!("{code} {reason}"),
        );
        let body = res.bytes().await?.to_vec();

        let response = HttpResponse::new(code, status, body);

        if !response.is_ok() {
            tracing::warn!(
                code = response.code,
                status = %response.status,
                path = %request.path,
                "non-2xx response"
            );
            return Err(HttpError::Status(StatusError {
                code: response.code,
                status: response.status,
            }));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn create_test_client() -> HttpClient {
        let credentials = Credentials::new(ApiKey::new("test_key").unwrap());
        HttpClient::new(&credentials, &SnipcartConfig::default())
    }

    #[test]
    fn test_client_construction_with_default_config() {
        let client = create_test_client();
        assert_eq!(client.base_url(), "https://app.snipcart.com");
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let credentials = Credentials::new(ApiKey::new("test_key").unwrap());
        let config = SnipcartConfig::builder()
            .base_url(crate::config::BaseUrl::new("http://127.0.0.1:8080").unwrap())
            .build();
        let client = HttpClient::new(&credentials, &config);

        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();

        assert!(client.user_agent().contains("Snipcart API Library v"));
        assert!(client.user_agent().contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let credentials = Credentials::new(ApiKey::new("test_key").unwrap());
        let config = SnipcartConfig::builder()
            .user_agent_prefix("MyShop/1.0")
            .build();
        let client = HttpClient::new(&credentials, &config);

        assert!(client.user_agent().starts_with("MyShop/1.0 | "));
        assert!(client.user_agent().contains("Snipcart API Library"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
