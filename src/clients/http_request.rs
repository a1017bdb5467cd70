//! HTTP request types for the Snipcart API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Snipcart API.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Snipcart API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// An HTTP request to be sent to the Snipcart API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder
/// pattern. Query parameters are kept as an ordered list: the wire
/// representation preserves exactly the order the caller supplied them in.
/// Bodies are always JSON; setting one implies the
/// `Content-Type: application/json` header.
///
/// # Example
///
/// ```rust
/// use snipcart_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// // GET request with query parameters
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/api/orders")
///     .query_param("status", "Processed")
///     .query_param("limit", "50")
///     .build()
///     .unwrap();
///
/// // PUT request with a JSON body
/// let put_request = HttpRequest::builder(HttpMethod::Put, "/api/orders/abc123")
///     .body(json!({"status": "Shipped"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters in caller-supplied order.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method for the request
    /// * `path` - The path (relative to the base URL) for the request
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if `http_method` is
    /// `Post` or `Put` but no body is set.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends a single query parameter.
    ///
    /// Parameters are encoded onto the URI in the order they are added.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends all query parameters from an iterator, preserving order.
    #[must_use]
    pub fn query_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
