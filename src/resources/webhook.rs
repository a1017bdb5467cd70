//! Webhook payload shapes.
//!
//! Snipcart delivers checkout events (shipping rate and tax requests,
//! order events) to a merchant-configured endpoint. The shapes here let a
//! webhook handler decode the delivered payload and build the tax response
//! Snipcart expects back. Authenticity of a delivery is confirmed with
//! [`SnipcartClient::validate_webhook`](crate::SnipcartClient::validate_webhook) —
//! a live round-trip against the provider, not a signature check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, CustomField};
use super::order::OrderItem;

/// Shipping details inside a webhook payload.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInformation {
    /// Shipping fees charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<f64>,

    /// Selected shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// The order snapshot delivered inside a tax or shipping webhook.
///
/// Collection-valued fields the client never interprets (`discounts`,
/// `plans`, `refunds`, `taxes`) are kept as opaque JSON values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookContent {
    /// When the order was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,

    /// When the order was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<DateTime<Utc>>,

    /// Order token.
    pub token: String,

    /// Buyer email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Whether the shipping address equals the billing address.
    #[serde(default)]
    pub ship_to_billing_address: bool,

    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    /// Invoice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Shipping details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_information: Option<ShippingInformation>,

    /// Line items.
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Opaque discount entries.
    #[serde(default)]
    pub discounts: Vec<serde_json::Value>,

    /// Buyer-supplied custom fields.
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,

    /// Opaque subscription plan entries.
    #[serde(default)]
    pub plans: Vec<serde_json::Value>,

    /// Opaque refund entries.
    #[serde(default)]
    pub refunds: Vec<serde_json::Value>,

    /// Opaque tax entries already on the order.
    #[serde(default)]
    pub taxes: Vec<serde_json::Value>,

    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Order total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,

    /// Total discounts applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts_total: Option<f64>,

    /// Total of the line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_total: Option<f64>,

    /// Total taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_total: Option<f64>,

    /// Total of subscription plans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plans_total: Option<f64>,

    /// Opaque tax provider descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_provider: Option<serde_json::Value>,

    /// Opaque merchant metadata, passed through unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A tax calculation webhook delivery.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxWebhook {
    /// The order snapshot the taxes apply to.
    pub content: WebhookContent,
}

/// One tax line in a tax webhook response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tax {
    /// Tax display name.
    pub name: String,

    /// Tax amount.
    pub amount: f64,

    /// Registration number to print on the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_for_invoice: Option<String>,

    /// Tax rate applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

/// The response a tax webhook handler returns to Snipcart.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxResponse {
    /// The taxes to apply to the order.
    pub taxes: Vec<Tax>,
}
