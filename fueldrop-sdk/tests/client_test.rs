//! HTTP client behavior against a mock order API.

use fueldrop_sdk::client::{AdminClient, ClientError, CustomerClient, StationClient};
use fueldrop_sdk::objects::order::{OrderStatus, PaymentStatus};
use fueldrop_sdk::session::{Session, SessionStore, UserRole};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn logged_in(role: UserRole) -> SessionStore {
    SessionStore::with_session(Session {
        access_token: "test-token".to_owned(),
        user_id: "user-1".to_owned(),
        role,
    })
}

fn order_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "fuelType": "diesel",
        "quantity": 25,
        "totalCost": 4300,
        "phone": "9810000000",
        "deliveryAddress": {
            "latitude": 27.7,
            "longitude": 85.3,
            "address": "Lalitpur"
        },
        "fuelStation": "st-1",
        "user": "user-1",
        "status": status,
        "paymentStatus": "PENDING"
    })
}

fn base_url(server: &MockServer) -> Url {
    Url::parse(&server.uri()).expect("mock server uri")
}

#[tokio::test]
async fn get_order_sends_bearer_and_parses_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders/getOrderByOrderId/ord-1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": order_json("ord-1", "PENDING")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CustomerClient::new(base_url(&server), logged_in(UserRole::Customer));
    let order = client.get_order("ord-1").await.expect("order");
    assert_eq!(order.id, "ord-1");
    assert_eq!(order.state(), Some(OrderStatus::Pending));
}

#[tokio::test]
async fn rejection_message_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders/getOrderByOrderId/missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Order not found"
        })))
        .mount(&server)
        .await;

    let client = CustomerClient::new(base_url(&server), logged_in(UserRole::Customer));
    let err = client.get_order("missing").await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));
    assert_eq!(err.to_string(), "Order not found");
}

#[tokio::test]
async fn non_2xx_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders/getuserOrders/user-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = CustomerClient::new(base_url(&server), logged_in(UserRole::Customer));
    match client.list_user_orders("user-1").await.unwrap_err() {
        ClientError::Api { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn user_scoped_calls_fail_early_without_a_token() {
    // No mock server needed; the call must not go out at all.
    let client = CustomerClient::new(
        Url::parse("http://127.0.0.1:9").expect("url"),
        SessionStore::new(),
    );
    let err = client.get_order("ord-1").await.unwrap_err();
    assert!(matches!(err, ClientError::NotAuthenticated));
}

#[tokio::test]
async fn station_listing_passes_status_filter_and_tolerates_no_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders/getFuelStationOrders/st-1"))
        .and(query_param("status", "PENDING"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [order_json("ord-1", "PENDING"), order_json("ord-2", "PENDING")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = StationClient::new(base_url(&server), SessionStore::new());
    let orders = client
        .list_station_orders("st-1", Some(OrderStatus::Pending))
        .await
        .expect("orders");
    assert_eq!(orders.len(), 2);
}

#[tokio::test]
async fn admin_updates_use_the_wire_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/orders/updateOrderStatus/ord-1"))
        .and(body_json(json!({"status": "COMPLETED"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": order_json("ord-1", "COMPLETED")
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/orders/updatePaymentStatus/ord-1"))
        .and(body_json(json!({"paymentStatus": "PAID"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = AdminClient::new(base_url(&server), logged_in(UserRole::Admin));
    let updated = client
        .update_order_status("ord-1", OrderStatus::Completed)
        .await
        .expect("status update");
    assert_eq!(updated.state(), Some(OrderStatus::Completed));
    client
        .update_payment_status("ord-1", PaymentStatus::Paid)
        .await
        .expect("payment update");
}

#[tokio::test]
async fn delete_accepts_ack_without_data() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/orders/deleteOrder/ord-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = CustomerClient::new(base_url(&server), logged_in(UserRole::Customer));
    client.delete_order("ord-9").await.expect("delete ack");
}
