//! # Snipcart API Rust client
//!
//! A Rust client for the Snipcart REST API: retrieve and update orders,
//! fetch product and inventory data, send order notifications, generate a
//! scannable QR code for an order token, and validate inbound webhook
//! calls against the provider.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SnipcartConfig`] and [`SnipcartConfigBuilder`]
//! - Validated, masked credential handling via [`ApiKey`] and [`Credentials`]
//! - An authenticated JSON transport with a uniform failure taxonomy via [`clients`]
//! - Typed resource shapes mirroring the remote JSON schema via [`resources`]
//! - High-level resource operations via [`SnipcartClient`]
//! - Order-token QR rendering via [`barcode`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use snipcart_api::{ApiKey, OrderStatus, OrderUpdate, SnipcartClient};
//!
//! let client = SnipcartClient::new(ApiKey::new("S_NjQyZmZj...").unwrap());
//!
//! // Fetch a single order
//! let order = client.get_order("b35990df-c0ca-4014-94de-1caa7bd7bb51").await?;
//! println!("{}: {:?}", order.token, order.status);
//!
//! // List orders in a given status
//! let processed = client.get_orders_by_status(OrderStatus::Processed).await?;
//! println!("{} processed orders", processed.total_items);
//!
//! // Mark an order shipped with a tracking number
//! let update = OrderUpdate {
//!     status: OrderStatus::Shipped,
//!     tracking_number: Some("1Z999AA10123456784".to_string()),
//!     ..OrderUpdate::default()
//! };
//! let echoed = client.update_order(&order.token, &update).await?;
//! assert_eq!(echoed.status, Some(OrderStatus::Shipped));
//! ```
//!
//! ## Pointing at a Mock Endpoint
//!
//! Configuration is instance-based with no global state, so tests can
//! direct a client at a local mock server:
//!
//! ```rust
//! use snipcart_api::{ApiKey, BaseUrl, SnipcartClient, SnipcartConfig};
//!
//! let config = SnipcartConfig::builder()
//!     .base_url(BaseUrl::new("http://127.0.0.1:8080").unwrap())
//!     .default_limit(10)
//!     .build();
//!
//! let client = SnipcartClient::with_config(ApiKey::new("test-key").unwrap(), &config);
//! ```
//!
//! ## Webhook Validation
//!
//! Snipcart webhook deliveries carry a request token. Validation is a live
//! round-trip against the provider — any 2xx response confirms the token:
//!
//! ```rust,ignore
//! match client.validate_webhook(request_token).await {
//!     Ok(()) => { /* genuine delivery */ }
//!     Err(e) => eprintln!("rejected: {e}"),
//! }
//! ```
//!
//! ## Failure Semantics
//!
//! Every failure is terminal for the call and surfaces unmodified: network
//! errors, non-2xx statuses (with the literal status text), decode
//! failures, and operation-level validation errors (empty order token,
//! no matching product). Nothing is retried, cached, or rate-limited.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Credential and URL newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`; the client is stateless across calls
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Schema-shaped**: Resource records mirror the remote JSON schema and
//!   stay easy to extend; opaque remote values pass through unmodified

pub mod auth;
pub mod barcode;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use client::{SnipcartClient, SnipcartError};
pub use config::{ApiKey, BaseUrl, SnipcartConfig, SnipcartConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP transport types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, StatusError,
};

// Re-export resource shapes
pub use resources::{
    Address, CustomField, DeliveryMethod, Notification, NotificationList, NotificationReceipt,
    NotificationType, Order, OrderItem, OrderList, OrderListParams, OrderStatus, OrderUpdate,
    ParseStatusError, Product, ProductList, ProductListParams, ProductVariant, ShippingInformation,
    Tax, TaxResponse, TaxWebhook, WebhookContent,
};

// Re-export the QR helper error for matching
pub use barcode::BarcodeError;
