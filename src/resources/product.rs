//! Product and inventory shapes.
//!
//! Products carry stock levels and an opaque variant structure. Finding a
//! product "by id" is a list call filtered on the user-defined identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product variant with its own stock level.
///
/// The `variation` array is remote-defined and passed through unmodified.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Stock available for this variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,

    /// Opaque variation descriptors.
    #[serde(default)]
    pub variation: Vec<serde_json::Value>,

    /// Whether purchases are allowed when out of stock.
    #[serde(rename = "allowOutOfStockPurchases", default)]
    pub allow_backorder: bool,
}

/// A product with inventory information.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned product token.
    pub id: String,

    /// Merchant-defined product identifier (SKU).
    pub user_defined_id: String,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Stock available at the product level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,

    /// Total stock across variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_stock: Option<i32>,

    /// Whether purchases are allowed when out of stock.
    #[serde(rename = "allowOutOfStockPurchases", default)]
    pub allow_backorder: bool,

    /// Variants, when the product defines any.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

/// The envelope returned when listing products.
///
/// The server echoes the filters that were applied alongside the usual
/// pagination fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
    /// Echoed keyword filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    /// Echoed user-defined id filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_defined_id: Option<String>,

    /// Echoed archived filter.
    #[serde(default)]
    pub archived: bool,

    /// Echoed lower bound of the date filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,

    /// Echoed upper bound of the date filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,

    /// Echoed sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// Whether more pages are available.
    #[serde(default)]
    pub has_more_results: bool,

    /// Total number of products matching the query.
    #[serde(default)]
    pub total_items: u32,

    /// Offset of this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Page-size limit applied by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Opaque sort descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<serde_json::Value>,

    /// The products on this page.
    #[serde(default)]
    pub items: Vec<Product>,
}

/// Filters for listing products.
///
/// Parameters are encoded onto the query string in declaration order:
/// `userDefinedId`, `keywords`, `archived`, `limit`, `offset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Restrict results to the product with this merchant-defined id.
    pub user_defined_id: Option<String>,
    /// Keyword search.
    pub keywords: Option<String>,
    /// Include archived products.
    pub archived: Option<bool>,
    /// Page-size limit.
    pub limit: Option<u32>,
    /// Page offset.
    pub offset: Option<u32>,
}
