//! HTTP response types for the Snipcart API client.
//!
//! This module provides the [`HttpResponse`] type for accessing response
//! data and decoding JSON bodies into caller-supplied shapes.

use serde::de::DeserializeOwned;

/// An HTTP response from the Snipcart API.
///
/// Contains the response status code, the literal status text, and the raw
/// body bytes. The body is read in full before the response is returned, so
/// the underlying connection is released deterministically on every path —
/// including when a later [`json`](Self::json) call fails to decode.
///
/// # Example
///
/// ```rust
/// use snipcart_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, "200 OK".to_string(), br#"{"token":"abc"}"#.to_vec());
/// assert!(response.is_ok());
///
/// #[derive(serde::Deserialize)]
/// struct Body { token: String }
///
/// let body: Body = response.json().unwrap();
/// assert_eq!(body.token, "abc");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The literal status line text, e.g. `200 OK`.
    pub status: String,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, status: String, body: Vec<u8>) -> Self {
        Self { code, status, body }
    }

    /// Returns `true` if the response status code is in the `[200, 300)` range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Decodes the response body as JSON into the requested shape.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the body does not
    /// match the expected shape. Decode failures are distinct from
    /// transport and status failures.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}
