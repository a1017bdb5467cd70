//! Integration tests for the Snipcart client against a mock endpoint.
//!
//! These tests use wiremock to simulate Snipcart API responses. Response
//! shapes follow the Snipcart REST API reference:
//! https://docs.snipcart.com/v3/api-reference/introduction

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use snipcart_api::clients::HttpError;
use snipcart_api::{
    ApiKey, BaseUrl, DeliveryMethod, Notification, NotificationType, OrderListParams, OrderStatus,
    OrderUpdate, ProductListParams, SnipcartClient, SnipcartConfig, SnipcartError,
};

/// Creates a client pointed at the given mock server.
fn create_test_client(server: &MockServer) -> SnipcartClient {
    let config = SnipcartConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build();
    SnipcartClient::with_config(ApiKey::new("test_key").unwrap(), &config)
}

/// A representative single-order response body.
fn create_order_response(token: &str, status: &str) -> serde_json::Value {
    json!({
        "token": token,
        "creationDate": "2023-06-01T12:30:00Z",
        "modificationDate": "2023-06-02T08:00:00Z",
        "invoiceNumber": "SNIP-1042",
        "subtotal": 40.0,
        "currency": "usd",
        "grandTotal": 45.5,
        "status": status,
        "totalWeight": 250.0,
        "shippingAddressName": "Ada Lovelace",
        "shippingAddressCity": "London",
        "shippingAddressCountry": "GB",
        "email": "ada@example.com",
        "trackingNumber": "1Z999AA10123456784",
        "trackingUrl": "https://tracking.example.com/1Z999AA10123456784",
        "shippingFees": 5.5,
        "items": [
            {
                "uniqueId": "c1f62cb4",
                "id": "sku-001",
                "name": "Widget",
                "quantity": 2,
                "totalPrice": 40.0,
                "customFields": [],
                "shippable": true
            }
        ],
        "metadata": {"warehouse": "east"}
    })
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_requests_carry_basic_auth_and_accept_headers() {
    let mock_server = MockServer::start().await;

    // base64("test_key:") == dGVzdF9rZXk6
    Mock::given(method("GET"))
        .and(path("/api/orders/tok-1"))
        .and(header("Authorization", "Basic dGVzdF9rZXk6"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_order_response("tok-1", "Pending")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let order = client.get_order("tok-1").await.unwrap();

    assert_eq!(order.token, "tok-1");
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn test_get_order_decodes_full_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/b35990df-c0ca-4014-94de-1caa7bd7bb51"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_order_response(
            "b35990df-c0ca-4014-94de-1caa7bd7bb51",
            "Processed",
        )))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let order = client
        .get_order("b35990df-c0ca-4014-94de-1caa7bd7bb51")
        .await
        .unwrap();

    assert_eq!(order.status, Some(OrderStatus::Processed));
    assert_eq!(order.invoice_number.as_deref(), Some("SNIP-1042"));
    assert_eq!(order.grand_total, Some(45.5));
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.metadata.as_ref().unwrap()["warehouse"], "east");
}

#[tokio::test]
async fn test_get_orders_by_status_sends_filter_and_default_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(query_param("status", "Processed"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalItems": 1,
            "offset": 0,
            "limit": 50,
            "items": [create_order_response("tok-1", "Processed")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let orders = client
        .get_orders_by_status(OrderStatus::Processed)
        .await
        .unwrap();

    assert_eq!(orders.total_items, 1);
    assert_eq!(orders.items[0].status, Some(OrderStatus::Processed));
}

#[tokio::test]
async fn test_get_orders_applies_caller_limit_and_offset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalItems": 0,
            "items": []
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let orders = client
        .get_orders(&OrderListParams {
            status: None,
            limit: Some(5),
            offset: Some(10),
        })
        .await
        .unwrap();

    assert_eq!(orders.total_items, 0);
    assert!(orders.items.is_empty());
}

#[tokio::test]
async fn test_get_orders_uses_configured_default_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(query_param("limit", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalItems": 0,
            "items": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = SnipcartConfig::builder()
        .base_url(BaseUrl::new(mock_server.uri()).unwrap())
        .default_limit(7)
        .build();
    let client = SnipcartClient::with_config(ApiKey::new("test_key").unwrap(), &config);

    client
        .get_orders(&OrderListParams::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_order_round_trips_status() {
    let mock_server = MockServer::start().await;

    let update = OrderUpdate {
        status: OrderStatus::Shipped,
        tracking_number: Some("TRACK-9".to_string()),
        ..OrderUpdate::default()
    };

    // The wire body must carry exactly the set fields under wire names.
    Mock::given(method("PUT"))
        .and(path("/api/orders/tok-1"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "status": "Shipped",
            "trackingNumber": "TRACK-9"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_order_response("tok-1", "Shipped")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let echoed = client.update_order("tok-1", &update).await.unwrap();

    // The status set on the update survives the provider echo.
    assert_eq!(echoed.status, Some(update.status));
}

// ============================================================================
// Notifications
// ============================================================================

#[tokio::test]
async fn test_send_notification_returns_server_receipt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/orders/tok-1/notifications"))
        .and(body_json(json!({
            "type": "Comment",
            "deliveryMethod": "Email",
            "message": "Your order left the warehouse."
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "ntf_8c2d",
            "creationDate": "2023-06-01T12:30:00Z",
            "type": "Comment",
            "deliveryMethod": "Email",
            "message": "Your order left the warehouse.",
            "sentOn": "2023-06-01T12:30:05Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let notification = Notification {
        notification_type: NotificationType::Comment,
        delivery_method: DeliveryMethod::Email,
        message: Some("Your order left the warehouse.".to_string()),
    };
    let receipt = client
        .send_notification("tok-1", &notification)
        .await
        .unwrap();

    assert_eq!(receipt.id, "ntf_8c2d");
    assert_eq!(receipt.notification_type, Some(NotificationType::Comment));
    assert!(receipt.sent_on.is_some());
}

#[tokio::test]
async fn test_get_notifications_decodes_paginated_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/tok-1/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalItems": 2,
            "offset": 0,
            "limit": 20,
            "items": [
                {"id": "ntf_1", "type": "Comment"},
                {"id": "ntf_2", "type": "OrderShipped"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let list = client.get_notifications("tok-1").await.unwrap();

    assert_eq!(list.total_items, 2);
    assert_eq!(list.offset, Some(0));
    assert_eq!(list.limit, Some(20));
    assert_eq!(list.items[1].id, "ntf_2");
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_get_products_sends_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("keywords", "widget"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keywords": "widget",
            "totalItems": 1,
            "items": [{"id": "p-1", "userDefinedId": "sku-001", "stock": 4}]
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let list = client
        .get_products(&ProductListParams {
            keywords: Some("widget".to_string()),
            ..ProductListParams::default()
        })
        .await
        .unwrap();

    assert_eq!(list.total_items, 1);
    assert_eq!(list.items[0].stock, Some(4));
}

#[tokio::test]
async fn test_get_product_by_id_returns_first_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("userDefinedId", "sku-001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userDefinedId": "sku-001",
            "totalItems": 2,
            "items": [
                {"id": "p-1", "userDefinedId": "sku-001", "stock": 4},
                {"id": "p-2", "userDefinedId": "sku-001", "stock": 9}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let product = client.get_product_by_id("sku-001").await.unwrap();

    assert_eq!(product.id, "p-1");
    assert_eq!(product.stock, Some(4));
}

#[tokio::test]
async fn test_get_product_by_id_with_no_match_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("userDefinedId", "sku-404"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userDefinedId": "sku-404",
            "totalItems": 0,
            "items": []
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let error = client.get_product_by_id("sku-404").await.unwrap_err();

    assert!(matches!(
        &error,
        SnipcartError::NoProductWithId { id } if id == "sku-404"
    ));
    assert_eq!(error.to_string(), "no products with id 'sku-404'");
}

// ============================================================================
// Webhook validation
// ============================================================================

#[tokio::test]
async fn test_validate_webhook_accepts_any_2xx() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/requestvalidation/req-token"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.validate_webhook("req-token").await.is_ok());
}

#[tokio::test]
async fn test_validate_webhook_wraps_failing_status_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/requestvalidation/bogus"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let error = client.validate_webhook("bogus").await.unwrap_err();

    assert!(matches!(
        error,
        SnipcartError::WebhookValidation { code: 404 }
    ));
    assert_eq!(
        error.to_string(),
        "non-2XX status code for validating webhook: 404"
    );
}

// ============================================================================
// Failure classification
// ============================================================================

#[tokio::test]
async fn test_non_2xx_response_surfaces_literal_status_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/tok-1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let error = client.get_order("tok-1").await.unwrap_err();

    match error {
        SnipcartError::Http(HttpError::Status(e)) => {
            assert_eq!(e.code, 500);
            assert_eq!(e.status, "500 Internal Server Error");
            assert_eq!(
                e.to_string(),
                "unexpected response received: 500 Internal Server Error"
            );
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_is_a_failure_not_a_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let error = client.get_order("missing").await.unwrap_err();

    assert!(matches!(
        error,
        SnipcartError::Http(HttpError::Status(ref e)) if e.code == 404
    ));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway page</html>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let error = client.get_order("tok-1").await.unwrap_err();

    assert!(matches!(error, SnipcartError::Http(HttpError::Decode(_))));
}

#[tokio::test]
async fn test_connection_failure_is_a_network_error() {
    // Point the client at a server that is not there.
    let config = SnipcartConfig::builder()
        .base_url(BaseUrl::new("http://127.0.0.1:9").unwrap())
        .build();
    let client = SnipcartClient::with_config(ApiKey::new("test_key").unwrap(), &config);

    let error = client.get_order("tok-1").await.unwrap_err();
    assert!(matches!(error, SnipcartError::Http(HttpError::Network(_))));
}
