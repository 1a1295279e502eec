use axum_test::TestServer;
use http::StatusCode;
use order_tracker_server::{
    adapters::inbound::http::{
        dto::{ErrorResponseDto, ListOrdersResponseDto, OrderDto},
        router::{AppState, create_router},
    },
    create_in_memory_app,
};
use serde_json::json;
use std::sync::Arc;

async fn setup_test_server() -> TestServer {
    let services = create_in_memory_app().await.unwrap();
    let state = AppState::new(Arc::new(services.order_tracker));

    TestServer::new(create_router(state)).unwrap()
}

async fn add(server: &TestServer, order_id: &str, status: Option<&str>) -> OrderDto {
    let mut body = json!({
        "order_id": order_id,
        "item_name": "Laptop",
        "quantity": 1,
        "customer_id": "CUST001"
    });
    if let Some(status) = status {
        body["status"] = json!(status);
    }

    let response = server.post("/api/orders").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<OrderDto>()
}

#[tokio::test]
async fn test_add_and_get_order() {
    let server = setup_test_server().await;

    let created = add(&server, "ORD001", None).await;
    assert_eq!(created.order_id, "ORD001");
    assert_eq!(created.status, "pending");

    let response = server.get("/api/orders/ORD001").await;
    response.assert_status_ok();
    assert_eq!(response.json::<OrderDto>(), created);
}

#[tokio::test]
async fn test_get_missing_order_is_not_found() {
    let server = setup_test_server().await;

    let response = server.get("/api/orders/ORD999").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let error = response.json::<ErrorResponseDto>();
    assert_eq!(error.error, "NotFound");
    assert!(error.message.contains("ORD999"));
}

#[tokio::test]
async fn test_add_duplicate_is_conflict() {
    let server = setup_test_server().await;
    add(&server, "ORD001", None).await;

    let response = server
        .post("/api/orders")
        .json(&json!({
            "order_id": "ORD001",
            "item_name": "Mouse",
            "quantity": 2,
            "customer_id": "CUST002"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<ErrorResponseDto>().error, "Conflict");
}

#[tokio::test]
async fn test_add_invalid_order_is_bad_request() {
    let server = setup_test_server().await;

    let body = |order_id: &str, item_name: &str, quantity: i64, customer_id: &str| {
        json!({
            "order_id": order_id,
            "item_name": item_name,
            "quantity": quantity,
            "customer_id": customer_id
        })
    };
    let mut bad_status = body("ORD1", "Laptop", 1, "C");
    bad_status["status"] = json!("lost");

    let cases = [
        (body("ORD1", "Laptop", 0, "C"), "quantity"),
        (body("", "Laptop", 1, "C"), "order_id"),
        (body("ORD1", "", 1, "C"), "item_name"),
        (body("ORD1", "Laptop", 1, ""), "customer_id"),
        (bad_status, "status"),
    ];

    for (body, field) in cases {
        let response = server.post("/api/orders").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let error = response.json::<ErrorResponseDto>();
        assert_eq!(error.error, "ValidationError");
        assert_eq!(
            error.details.unwrap()["field"],
            json!(field),
            "unexpected field for {body}"
        );
    }

    // Nothing was stored
    let list = server.get("/api/orders").await.json::<ListOrdersResponseDto>();
    assert_eq!(list.total_count, 0);
}

#[tokio::test]
async fn test_add_with_missing_field_is_rejected() {
    let server = setup_test_server().await;

    let response = server
        .post("/api/orders")
        .json(&json!({"order_id": "ORD1", "item_name": "Laptop"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let error = response.json::<ErrorResponseDto>();
    assert_eq!(error.error, "ValidationError");
    assert!(error.message.contains("quantity"), "{}", error.message);
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors() {
    let server = setup_test_server().await;
    add(&server, "ORD300", None).await;

    let wrong_type = server
        .post("/api/orders")
        .json(&json!({
            "order_id": "ORD1",
            "item_name": "Laptop",
            "quantity": "two",
            "customer_id": "CUST001"
        }))
        .await;
    wrong_type.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(wrong_type.json::<ErrorResponseDto>().error, "ValidationError");

    let not_json = server
        .put("/api/orders/ORD300/status")
        .text("shipped")
        .await;
    not_json.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(not_json.json::<ErrorResponseDto>().error, "ValidationError");

    let broken_syntax = server
        .put("/api/orders/ORD300/status")
        .content_type("application/json")
        .bytes("{\"status\": ".into())
        .await;
    broken_syntax.assert_status_bad_request();
    assert_eq!(
        broken_syntax.json::<ErrorResponseDto>().error,
        "ValidationError"
    );

    // The order was not touched
    let order = server.get("/api/orders/ORD300").await.json::<OrderDto>();
    assert_eq!(order.status, "pending");
}

#[tokio::test]
async fn test_order_id_with_reserved_characters() {
    let server = setup_test_server().await;
    add(&server, "A#1 ?x", None).await;

    let response = server.get("/api/orders/A%231%20%3Fx").await;
    response.assert_status_ok();
    assert_eq!(response.json::<OrderDto>().order_id, "A#1 ?x");
}

#[tokio::test]
async fn test_update_order_status() {
    let server = setup_test_server().await;
    add(&server, "ORD200", None).await;

    let response = server
        .put("/api/orders/ORD200/status")
        .json(&json!({"status": "shipped"}))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<OrderDto>().status, "shipped");

    let stored = server.get("/api/orders/ORD200").await.json::<OrderDto>();
    assert_eq!(stored.status, "shipped");
}

#[tokio::test]
async fn test_update_with_invalid_status() {
    let server = setup_test_server().await;
    add(&server, "ORD201", None).await;

    let response = server
        .put("/api/orders/ORD201/status")
        .json(&json!({"status": "not-a-real-status"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let stored = server.get("/api/orders/ORD201").await.json::<OrderDto>();
    assert_eq!(stored.status, "pending");
}

#[tokio::test]
async fn test_update_missing_order() {
    let server = setup_test_server().await;

    let response = server
        .put("/api/orders/ORD999/status")
        .json(&json!({"status": "shipped"}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_orders_with_filter() {
    let server = setup_test_server().await;
    add(&server, "ORD400", Some("shipped")).await;
    add(&server, "ORD401", Some("pending")).await;
    add(&server, "ORD402", Some("shipped")).await;

    let all = server.get("/api/orders").await.json::<ListOrdersResponseDto>();
    assert_eq!(all.total_count, 3);
    let ids: Vec<&str> = all.orders.iter().map(|o| o.order_id.as_str()).collect();
    assert_eq!(ids, vec!["ORD400", "ORD401", "ORD402"]);

    let shipped = server
        .get("/api/orders")
        .add_query_param("status", "shipped")
        .await
        .json::<ListOrdersResponseDto>();
    assert_eq!(shipped.total_count, 2);
    assert!(shipped.orders.iter().all(|o| o.status == "shipped"));

    let delivered = server
        .get("/api/orders")
        .add_query_param("status", "delivered")
        .await
        .json::<ListOrdersResponseDto>();
    assert!(delivered.orders.is_empty());
}

#[tokio::test]
async fn test_list_orders_with_invalid_filter() {
    let server = setup_test_server().await;

    let response = server
        .get("/api/orders")
        .add_query_param("status", "invalid_status")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
