//! HTTP transport types for Snipcart API communication.
//!
//! This module provides the authenticated JSON transport layer every
//! resource operation is built from. It handles Basic authentication,
//! query encoding, JSON bodies, and status classification.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response with status, literal status text, and body bytes
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT)
//! - [`HttpError`]: The transport failure taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use snipcart_api::clients::{HttpClient, HttpRequest, HttpMethod};
//! use snipcart_api::{ApiKey, Credentials, SnipcartConfig};
//!
//! let credentials = Credentials::new(ApiKey::new("key").unwrap());
//! let client = HttpClient::new(&credentials, &SnipcartConfig::default());
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/api/orders")
//!     .query_param("limit", "50")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! let orders: snipcart_api::OrderList = response.json()?;
//! ```
//!
//! # Failure Semantics
//!
//! Every failure is terminal for the call — nothing is retried:
//!
//! - **Network errors** propagate immediately as [`HttpError::Network`]
//! - **Non-2xx responses** propagate as [`HttpError::Status`] with the
//!   literal status text
//! - **Decode failures** propagate as [`HttpError::Decode`], distinct from
//!   transport and status failures

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError, StatusError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
