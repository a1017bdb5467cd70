//! HTTP-specific error types for the Snipcart API client.
//!
//! This module contains error types for transport operations: non-2xx
//! responses, request validation failures, body decode failures, and
//! network errors.
//!
//! # Error Handling
//!
//! The client uses specific error types for different failure scenarios:
//!
//! - [`StatusError`]: Non-2xx HTTP responses, carrying the literal status text
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all transport-level errors
//!
//! All failures are terminal for the call — nothing is retried internally.
//!
//! # Example
//!
//! ```rust,ignore
//! use snipcart_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.code),
//!     Err(HttpError::Status(e)) => {
//!         println!("API error {}: {}", e.code, e.status);
//!     }
//!     Err(HttpError::Decode(e)) => {
//!         println!("Body did not match the expected shape: {e}");
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {e}");
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {e}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-2xx response.
///
/// Carries the numeric status code and the literal status text of the
/// response (e.g., `404 Not Found`), which is surfaced to the caller
/// unmodified.
///
/// # Example
///
/// ```rust
/// use snipcart_api::clients::StatusError;
///
/// let error = StatusError {
///     code: 404,
///     status: "404 Not Found".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "unexpected response received: 404 Not Found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unexpected response received: {status}")]
pub struct StatusError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The literal status line text, e.g. `404 Not Found`.
    pub status: String,
}

/// Error returned when an HTTP request fails validation before sending.
///
/// # Example
///
/// ```rust
/// use snipcart_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying a body.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was built without a body.
    #[error("Cannot use {method} without specifying a body.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for the authenticated JSON transport.
///
/// This enum provides a single error type for transport operations, making
/// it easy to handle errors at API boundaries while still allowing callers
/// to branch on kind. The four variants match the client's failure
/// taxonomy: transport, status, decode, and pre-send validation.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response was received.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// The response body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
