//! Status and notification enumerations.
//!
//! Wire values are fixed by the remote schema; serde serializes each
//! variant name verbatim (the API uses PascalCase values).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The processing status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    /// Order received and awaiting processing.
    #[default]
    Pending,
    /// Order has been processed.
    Processed,
    /// Order is disputed by the buyer.
    Disputed,
    /// Order has been shipped.
    Shipped,
    /// Order has been delivered.
    Delivered,
    /// Order has been cancelled.
    Cancelled,
    /// Order has been dispatched to the carrier.
    Dispatched,
}

impl OrderStatus {
    /// Returns the wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processed => "Processed",
            Self::Disputed => "Disputed",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Dispatched => "Dispatched",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a status or notification value fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseStatusError {
    /// The input was empty.
    #[error("status is not set")]
    NotSet,

    /// The input did not match any known order status.
    #[error("unknown order status '{0}'")]
    UnknownOrderStatus(String),

    /// The input did not match any known notification type.
    #[error("unknown notification type '{0}'")]
    UnknownNotificationType(String),
}

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    /// Parses a wire value into an [`OrderStatus`].
    ///
    /// An empty string fails with "status is not set" before anything else
    /// happens, so a status filter can never reach the network unset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ParseStatusError::NotSet),
            "Pending" => Ok(Self::Pending),
            "Processed" => Ok(Self::Processed),
            "Disputed" => Ok(Self::Disputed),
            "Shipped" => Ok(Self::Shipped),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            "Dispatched" => Ok(Self::Dispatched),
            other => Err(ParseStatusError::UnknownOrderStatus(other.to_string())),
        }
    }
}

/// The kind of notification attached to an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationType {
    /// A free-form comment.
    Comment,
    /// The order status changed.
    OrderStatusChanged,
    /// The order was shipped.
    OrderShipped,
    /// A tracking number was assigned.
    TrackingNumber,
    /// An invoice was issued.
    Invoice,
}

impl NotificationType {
    /// Returns the wire value for this notification type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "Comment",
            Self::OrderStatusChanged => "OrderStatusChanged",
            Self::OrderShipped => "OrderShipped",
            Self::TrackingNumber => "TrackingNumber",
            Self::Invoice => "Invoice",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Comment" => Ok(Self::Comment),
            "OrderStatusChanged" => Ok(Self::OrderStatusChanged),
            "OrderShipped" => Ok(Self::OrderShipped),
            "TrackingNumber" => Ok(Self::TrackingNumber),
            "Invoice" => Ok(Self::Invoice),
            other => Err(ParseStatusError::UnknownNotificationType(other.to_string())),
        }
    }
}

/// How a notification is delivered to the buyer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DeliveryMethod {
    /// Deliver by email.
    Email,
    /// Record the notification without delivering it.
    #[default]
    None,
}
