//! Data shapes mirroring the Snipcart API's JSON schema.
//!
//! Every type here is a pure data record with no behavior beyond
//! (de)serialization. The set of fields is dictated by the remote schema
//! at this API version: one canonical shape per resource, with optional
//! fields omitted from outgoing bodies when unset and remote-defined
//! dynamic values (`metadata`, variant `variation` arrays) carried as
//! opaque JSON.
//!
//! # Overview
//!
//! - [`Order`], [`OrderItem`], [`OrderUpdate`], [`OrderList`], [`OrderListParams`]
//! - [`Product`], [`ProductVariant`], [`ProductList`], [`ProductListParams`]
//! - [`Notification`], [`NotificationReceipt`], [`NotificationList`]
//! - [`TaxWebhook`], [`WebhookContent`], [`Tax`], [`TaxResponse`] for webhook handlers
//! - [`Address`], [`CustomField`] shared shapes
//! - [`OrderStatus`], [`NotificationType`], [`DeliveryMethod`] enumerations

mod common;
mod notification;
mod order;
mod product;
mod status;
mod webhook;

pub use common::{Address, CustomField};
pub use notification::{Notification, NotificationList, NotificationReceipt};
pub use order::{Order, OrderItem, OrderList, OrderListParams, OrderUpdate};
pub use product::{Product, ProductList, ProductListParams, ProductVariant};
pub use status::{DeliveryMethod, NotificationType, OrderStatus, ParseStatusError};
pub use webhook::{ShippingInformation, Tax, TaxResponse, TaxWebhook, WebhookContent};
