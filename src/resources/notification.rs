//! Order notification shapes.
//!
//! Notifications are messages attached to an order — comments, status
//! changes, tracking numbers — optionally delivered to the buyer by email.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::{DeliveryMethod, NotificationType};

/// A notification request to attach to an order.
///
/// # Example
///
/// ```rust
/// use snipcart_api::{DeliveryMethod, Notification, NotificationType};
///
/// let notification = Notification {
///     notification_type: NotificationType::Comment,
///     delivery_method: DeliveryMethod::Email,
///     message: Some("Your order left the warehouse.".to_string()),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// The kind of notification.
    #[serde(rename = "type")]
    pub notification_type: NotificationType,

    /// How the notification is delivered.
    pub delivery_method: DeliveryMethod,

    /// Free-form message shown to the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A notification as stored by the server, with its assigned id and
/// timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationReceipt {
    /// Server-assigned notification id.
    pub id: String,

    /// When the notification was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,

    /// The kind of notification.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<NotificationType>,

    /// How the notification was delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<DeliveryMethod>,

    /// Rendered notification body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Original message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Email subject, when delivered by email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// When the notification was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_on: Option<DateTime<Utc>>,
}

/// The paginated envelope returned when listing an order's notifications.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationList {
    /// Total number of notifications on the order.
    #[serde(default)]
    pub total_items: u32,

    /// Offset of this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Page-size limit applied by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// The notifications on this page.
    #[serde(default)]
    pub items: Vec<NotificationReceipt>,
}
