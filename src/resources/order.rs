//! Order resource shapes.
//!
//! Orders are the completed checkout transactions of a store. The remote
//! schema dictates the field set at this API version; the shapes here are
//! pure data records with no behavior beyond (de)serialization, kept easy
//! to extend as the schema drifts.
//!
//! # Example
//!
//! ```rust,ignore
//! use snipcart_api::{OrderStatus, OrderUpdate, SnipcartClient};
//!
//! let order = client.get_order("b3599...bb51").await?;
//! println!("{} — {:?}", order.invoice_number.as_deref().unwrap_or(""), order.status);
//!
//! let update = OrderUpdate {
//!     status: OrderStatus::Shipped,
//!     tracking_number: Some("1Z999AA10123456784".to_string()),
//!     ..OrderUpdate::default()
//! };
//! let echoed = client.update_order(&order.token, &update).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, CustomField};
use super::status::OrderStatus;

/// A line item within an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Server-assigned unique identifier of this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,

    /// The product's user-defined identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Quantity ordered.
    #[serde(default)]
    pub quantity: u32,

    /// Total weight of the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<f64>,

    /// Total price of the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,

    /// Buyer-supplied custom fields for this line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,

    /// Package length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    /// Package width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Package height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Package weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Whether this item requires shipping.
    #[serde(default)]
    pub shippable: bool,
}

/// A customer order.
///
/// One canonical shape per API version; `metadata` is an opaque JSON value
/// passed through unmodified, never interpreted by the client.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order token assigned by the remote system.
    pub token: String,

    /// When the order was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,

    /// When the order was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<DateTime<Utc>>,

    /// Invoice number assigned to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Order subtotal before shipping and taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,

    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Grand total charged for the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<f64>,

    /// Current processing status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    /// Total weight of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<f64>,

    /// Structured shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    /// Shipping recipient name (flattened form also sent by the API).
    #[serde(rename = "shippingAddressName", skip_serializing_if = "Option::is_none")]
    pub shipping_name: Option<String>,

    /// Shipping company name.
    #[serde(
        rename = "shippingAddressCompanyName",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_company: Option<String>,

    /// Shipping address line 1.
    #[serde(
        rename = "shippingAddressAddress1",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_address1: Option<String>,

    /// Shipping address line 2.
    #[serde(
        rename = "shippingAddressAddress2",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_address2: Option<String>,

    /// Shipping city.
    #[serde(rename = "shippingAddressCity", skip_serializing_if = "Option::is_none")]
    pub shipping_city: Option<String>,

    /// Shipping province or state.
    #[serde(
        rename = "shippingAddressProvince",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_province: Option<String>,

    /// Shipping country code.
    #[serde(
        rename = "shippingAddressCountry",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_country: Option<String>,

    /// Shipping postal code.
    #[serde(
        rename = "shippingAddressPostalCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_postal_code: Option<String>,

    /// Shipping phone number.
    #[serde(rename = "shippingAddressPhone", skip_serializing_if = "Option::is_none")]
    pub shipping_phone: Option<String>,

    /// Buyer email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Carrier tracking number, when assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// Carrier tracking URL, when assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,

    /// Shipping fees charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_fees: Option<f64>,

    /// Shipping provider name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_provider: Option<String>,

    /// Shipping method name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,

    /// User-defined identifier of the selected shipping rate.
    #[serde(
        rename = "shippingRateUserDefinedId",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_rate_id: Option<String>,

    /// Line items.
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Opaque merchant metadata, passed through unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A partial order update sent with a PUT request.
///
/// Unset optional fields are omitted from the wire representation.
///
/// # Example
///
/// ```rust
/// use snipcart_api::{OrderStatus, OrderUpdate};
///
/// let update = OrderUpdate {
///     status: OrderStatus::Shipped,
///     tracking_number: Some("1Z999AA10123456784".to_string()),
///     ..OrderUpdate::default()
/// };
///
/// let wire = serde_json::to_value(&update).unwrap();
/// assert_eq!(wire["status"], "Shipped");
/// assert!(wire.get("paymentStatus").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    /// The status to set.
    pub status: OrderStatus,

    /// Payment status to set (e.g., "Paid").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,

    /// Carrier tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// Carrier tracking URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,

    /// User-defined identifier of the shipping rate.
    #[serde(
        rename = "shippingRateUserDefinedId",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_rate_id: Option<String>,

    /// Opaque merchant metadata, passed through unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// The paginated envelope returned when listing orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderList {
    /// Total number of orders matching the query.
    #[serde(default)]
    pub total_items: u32,

    /// Offset of this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Page-size limit applied by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// The orders on this page.
    #[serde(default)]
    pub items: Vec<Order>,
}

/// Filters for listing orders.
///
/// Parameters are encoded onto the query string in declaration order:
/// `status`, then `limit`, then `offset`. When `limit` is unset the
/// client's configured default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// Restrict results to orders with this status.
    pub status: Option<OrderStatus>,
    /// Page-size limit.
    pub limit: Option<u32>,
    /// Page offset.
    pub offset: Option<u32>,
}
