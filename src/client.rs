//! The Snipcart API client and its resource operations.
//!
//! Every operation is one stateless round-trip over the shared
//! authenticated JSON transport: build a path (optionally with a
//! path-embedded order token), attach query parameters, send, decode into
//! the matching shape. There is no session, retry, or multi-step protocol,
//! and no ordering guarantee between concurrent calls.

use thiserror::Error;

use crate::auth::Credentials;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::config::{ApiKey, SnipcartConfig};
use crate::resources::{
    Notification, NotificationList, NotificationReceipt, Order, OrderList, OrderListParams,
    OrderStatus, OrderUpdate, Product, ProductList, ProductListParams,
};

const ORDERS_PATH: &str = "/api/orders";
const PRODUCTS_PATH: &str = "/api/products";
const VALIDATION_PATH: &str = "/api/requestvalidation";

/// Error type for Snipcart API operations.
///
/// Wraps the transport failure taxonomy and adds the operation-level
/// validation errors. All variants are terminal for the call — nothing is
/// retried — and callers may treat them uniformly as "operation failed"
/// unless they need to branch on kind.
///
/// # Example
///
/// ```rust,ignore
/// use snipcart_api::{SnipcartError, clients::HttpError};
///
/// match client.get_order(token).await {
///     Ok(order) => println!("{order:?}"),
///     Err(SnipcartError::Http(HttpError::Status(e))) => {
///         println!("API error {}: {}", e.code, e.status);
///     }
///     Err(e) => println!("operation failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum SnipcartError {
    /// A transport-level failure: network, non-2xx status, decode, or
    /// request validation.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A token-taking operation was called with an empty order token.
    #[error("order token is empty")]
    EmptyOrderToken,

    /// A product lookup matched nothing.
    #[error("no products with id '{id}'")]
    NoProductWithId {
        /// The user-defined id that matched no product.
        id: String,
    },

    /// The provider rejected a webhook validation request.
    #[error("non-2XX status code for validating webhook: {code}")]
    WebhookValidation {
        /// The HTTP status code the provider returned.
        code: u16,
    },
}

impl From<serde_json::Error> for SnipcartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Http(HttpError::Decode(err))
    }
}

impl From<crate::clients::InvalidHttpRequestError> for SnipcartError {
    fn from(err: crate::clients::InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(err))
    }
}

/// Client for the Snipcart REST API.
///
/// Holds the immutable [`Credentials`] and the configured transport; it is
/// stateless across calls apart from that configuration, so one instance
/// per process is enough and concurrent calls on a shared instance are
/// safe.
///
/// # Example
///
/// ```rust,ignore
/// use snipcart_api::{ApiKey, OrderStatus, SnipcartClient};
///
/// let client = SnipcartClient::new(ApiKey::new("S_NjQyZmZj...").unwrap());
///
/// let orders = client.get_orders_by_status(OrderStatus::Processed).await?;
/// for order in &orders.items {
///     println!("{}: {:?}", order.token, order.status);
/// }
/// ```
#[derive(Debug)]
pub struct SnipcartClient {
    credentials: Credentials,
    http_client: HttpClient,
    default_limit: u32,
}

// Verify SnipcartClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SnipcartClient>();
};

impl SnipcartClient {
    /// Creates a client for the production Snipcart endpoint.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_config(api_key, &SnipcartConfig::default())
    }

    /// Creates a client with an explicit configuration.
    ///
    /// Overriding the base URL points every operation at a different
    /// endpoint, which is how tests target a mock server.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snipcart_api::{ApiKey, BaseUrl, SnipcartClient, SnipcartConfig};
    ///
    /// let config = SnipcartConfig::builder()
    ///     .base_url(BaseUrl::new("http://127.0.0.1:8080").unwrap())
    ///     .build();
    /// let client = SnipcartClient::with_config(ApiKey::new("key").unwrap(), &config);
    /// ```
    #[must_use]
    pub fn with_config(api_key: ApiKey, config: &SnipcartConfig) -> Self {
        let credentials = Credentials::new(api_key);
        let http_client = HttpClient::new(&credentials, config);

        Self {
            credentials,
            http_client,
            default_limit: config.default_limit(),
        }
    }

    /// Returns the credentials this client authenticates with.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Retrieves a single order by its token.
    ///
    /// # Errors
    ///
    /// Returns [`SnipcartError::EmptyOrderToken`] before any network call
    /// when `token` is empty, and transport/status/decode errors otherwise.
    pub async fn get_order(&self, token: &str) -> Result<Order, SnipcartError> {
        let token = require_token(token)?;

        let request = HttpRequest::builder(HttpMethod::Get, format!("{ORDERS_PATH}/{token}"))
            .build()?;
        let response = self.http_client.request(request).await?;

        Ok(response.json()?)
    }

    /// Lists orders, optionally filtered.
    ///
    /// Query parameters are sent in a stable order (`status`, `limit`,
    /// `offset`); when `params.limit` is unset the configured default
    /// limit applies.
    ///
    /// # Errors
    ///
    /// Returns transport, status, or decode errors from the round-trip.
    pub async fn get_orders(&self, params: &OrderListParams) -> Result<OrderList, SnipcartError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, ORDERS_PATH);
        if let Some(status) = params.status {
            builder = builder.query_param("status", status.as_str());
        }
        builder = builder.query_param(
            "limit",
            params.limit.unwrap_or(self.default_limit).to_string(),
        );
        if let Some(offset) = params.offset {
            builder = builder.query_param("offset", offset.to_string());
        }

        let response = self.http_client.request(builder.build()?).await?;

        Ok(response.json()?)
    }

    /// Lists orders with the given status.
    ///
    /// The typed [`OrderStatus`] cannot be unset; parsing a raw status
    /// string is the caller's step and an empty string fails there with
    /// "status is not set" before anything reaches the network.
    ///
    /// # Errors
    ///
    /// Returns transport, status, or decode errors from the round-trip.
    pub async fn get_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<OrderList, SnipcartError> {
        self.get_orders(&OrderListParams {
            status: Some(status),
            ..OrderListParams::default()
        })
        .await
    }

    /// Applies a partial update to an order and returns the echoed order.
    ///
    /// Unset optional fields of the update are omitted from the wire body.
    ///
    /// # Errors
    ///
    /// Returns [`SnipcartError::EmptyOrderToken`] before any network call
    /// when `token` is empty, and transport/status/decode errors otherwise.
    pub async fn update_order(
        &self,
        token: &str,
        update: &OrderUpdate,
    ) -> Result<Order, SnipcartError> {
        let token = require_token(token)?;

        let request = HttpRequest::builder(HttpMethod::Put, format!("{ORDERS_PATH}/{token}"))
            .body(serde_json::to_value(update)?)
            .build()?;
        let response = self.http_client.request(request).await?;

        Ok(response.json()?)
    }

    /// Sends a notification on an order.
    ///
    /// Returns the stored notification with its server-assigned id and
    /// timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`SnipcartError::EmptyOrderToken`] before any network call
    /// when `token` is empty, and transport/status/decode errors otherwise.
    pub async fn send_notification(
        &self,
        token: &str,
        notification: &Notification,
    ) -> Result<NotificationReceipt, SnipcartError> {
        let token = require_token(token)?;

        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("{ORDERS_PATH}/{token}/notifications"),
        )
        .body(serde_json::to_value(notification)?)
        .build()?;
        let response = self.http_client.request(request).await?;

        Ok(response.json()?)
    }

    /// Retrieves the notifications attached to an order.
    ///
    /// # Errors
    ///
    /// Returns [`SnipcartError::EmptyOrderToken`] before any network call
    /// when `token` is empty, and transport/status/decode errors otherwise.
    pub async fn get_notifications(
        &self,
        token: &str,
    ) -> Result<NotificationList, SnipcartError> {
        let token = require_token(token)?;

        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("{ORDERS_PATH}/{token}/notifications"),
        )
        .build()?;
        let response = self.http_client.request(request).await?;

        Ok(response.json()?)
    }

    /// Lists products, optionally filtered.
    ///
    /// Query parameters are sent in a stable order (`userDefinedId`,
    /// `keywords`, `archived`, `limit`, `offset`); when `params.limit` is
    /// unset the configured default limit applies.
    ///
    /// # Errors
    ///
    /// Returns transport, status, or decode errors from the round-trip.
    pub async fn get_products(
        &self,
        params: &ProductListParams,
    ) -> Result<ProductList, SnipcartError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, PRODUCTS_PATH);
        builder = apply_product_filters(builder, params);
        builder = builder.query_param(
            "limit",
            params.limit.unwrap_or(self.default_limit).to_string(),
        );
        if let Some(offset) = params.offset {
            builder = builder.query_param("offset", offset.to_string());
        }

        let response = self.http_client.request(builder.build()?).await?;

        Ok(response.json()?)
    }

    /// Finds the product with the given user-defined id.
    ///
    /// "Find by id" is a list call filtered on `userDefinedId`; the first
    /// matching item is returned. An empty result is an error, not an
    /// empty success.
    ///
    /// # Errors
    ///
    /// Returns [`SnipcartError::NoProductWithId`] when no product matches,
    /// and transport/status/decode errors otherwise.
    pub async fn get_product_by_id(&self, id: &str) -> Result<Product, SnipcartError> {
        let request = HttpRequest::builder(HttpMethod::Get, PRODUCTS_PATH)
            .query_param("userDefinedId", id)
            .build()?;
        let response = self.http_client.request(request).await?;

        let list: ProductList = response.json()?;
        list.items
            .into_iter()
            .next()
            .ok_or_else(|| SnipcartError::NoProductWithId { id: id.to_string() })
    }

    /// Validates an inbound webhook request token against the provider.
    ///
    /// This is a live round-trip check, not a signature verification: any
    /// 2xx response means the token is genuine. No response body is
    /// consumed.
    ///
    /// # Errors
    ///
    /// Returns [`SnipcartError::EmptyOrderToken`] before any network call
    /// when `token` is empty, [`SnipcartError::WebhookValidation`] with
    /// the failing status code when the provider rejects the token, and
    /// transport errors otherwise.
    pub async fn validate_webhook(&self, token: &str) -> Result<(), SnipcartError> {
        let token = require_token(token)?;

        let request =
            HttpRequest::builder(HttpMethod::Get, format!("{VALIDATION_PATH}/{token}")).build()?;

        match self.http_client.request(request).await {
            Ok(_) => Ok(()),
            Err(HttpError::Status(e)) => Err(SnipcartError::WebhookValidation { code: e.code }),
            Err(e) => Err(e.into()),
        }
    }
}

/// Rejects empty order tokens before any network activity.
fn require_token(token: &str) -> Result<&str, SnipcartError> {
    if token.is_empty() {
        return Err(SnipcartError::EmptyOrderToken);
    }
    Ok(token)
}

fn apply_product_filters(
    mut builder: HttpRequestBuilder,
    params: &ProductListParams,
) -> HttpRequestBuilder {
    if let Some(id) = &params.user_defined_id {
        builder = builder.query_param("userDefinedId", id);
    }
    if let Some(keywords) = &params.keywords {
        builder = builder.query_param("keywords", keywords);
    }
    if let Some(archived) = params.archived {
        builder = builder.query_param("archived", archived.to_string());
    }
    builder
}
