//! Shared data shapes used by several resources.

use serde::{Deserialize, Serialize};

/// A postal address as returned inside orders and webhook payloads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// The recipient's full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// The recipient's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The recipient's name as entered at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Company name, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// The full address as one formatted string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_address: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Province or state code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// VAT number, when collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
}

/// A buyer-supplied custom field attached to an item or order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    /// Field name.
    pub name: String,

    /// Field value.
    pub value: String,

    /// Field type (e.g., "dropdown").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// Allowed options for dropdown fields, pipe-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,

    /// Whether the field was required at checkout.
    #[serde(default)]
    pub required: bool,
}
