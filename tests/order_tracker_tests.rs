use order_tracker_server::{
    CreateOrderRequest, OrderError, OrderStatus, ValidationError, create_database_app,
    create_in_memory_app, ports::services::OrderService,
};

fn create_request(order_id: &str, item_name: &str, quantity: i64) -> CreateOrderRequest {
    CreateOrderRequest {
        order_id: order_id.to_string(),
        item_name: item_name.to_string(),
        quantity,
        customer_id: "CUST001".to_string(),
        status: None,
    }
}

#[tokio::test]
async fn basic_add_get() {
    // Create application services with in-memory storage
    let services = create_in_memory_app().await.unwrap();

    let added = services
        .order_tracker
        .add_order(create_request("ORD001", "Laptop", 1))
        .await
        .unwrap();
    assert_eq!(added.status, OrderStatus::Pending);

    let fetched = services
        .order_tracker
        .get_order_by_id("ORD001")
        .await
        .unwrap()
        .expect("order should be stored");

    assert_eq!(fetched, added);
}

#[tokio::test]
async fn duplicate_order_rejected() {
    let services = create_in_memory_app().await.unwrap();

    services
        .order_tracker
        .add_order(create_request("ORD001", "Laptop", 1))
        .await
        .unwrap();

    let result = services
        .order_tracker
        .add_order(create_request("ORD001", "Mouse", 2))
        .await;

    assert!(matches!(result, Err(OrderError::AlreadyExists { .. })));

    // The original order is untouched
    let stored = services
        .order_tracker
        .get_order_by_id("ORD001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.item_name.as_str(), "Laptop");
}

#[tokio::test]
async fn status_lifecycle() {
    let services = create_in_memory_app().await.unwrap();
    let tracker = &services.order_tracker;

    tracker
        .add_order(create_request("ORD100", "Monitor", 1))
        .await
        .unwrap();

    for status in ["processing", "shipped", "delivered"] {
        let updated = tracker.update_order_status("ORD100", status).await.unwrap();
        assert_eq!(updated.status.as_str(), status);
    }

    let stored = tracker.get_order_by_id("ORD100").await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Delivered);
    assert!(stored.updated_at >= stored.created_at);
}

#[tokio::test]
async fn invalid_status_leaves_order_unchanged() {
    let services = create_in_memory_app().await.unwrap();
    let tracker = &services.order_tracker;

    tracker
        .add_order(create_request("ORD200", "Desk", 1))
        .await
        .unwrap();

    let err = tracker
        .update_order_status("ORD200", "not-a-real-status")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OrderError::Validation(ValidationError::InvalidStatus(_))
    ));

    let stored = tracker.get_order_by_id("ORD200").await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Pending);
}

#[tokio::test]
async fn update_missing_order() {
    let services = create_in_memory_app().await.unwrap();

    let err = services
        .order_tracker
        .update_order_status("ORD999", "shipped")
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::NotFound { .. }));
}

#[tokio::test]
async fn list_by_status() {
    let services = create_in_memory_app().await.unwrap();
    let tracker = &services.order_tracker;

    for (id, item) in [("ORD1", "Laptop"), ("ORD2", "Mouse"), ("ORD3", "Keyboard")] {
        tracker.add_order(create_request(id, item, 1)).await.unwrap();
    }
    tracker.update_order_status("ORD1", "shipped").await.unwrap();
    tracker.update_order_status("ORD3", "shipped").await.unwrap();

    let all = tracker.list_all_orders().await.unwrap();
    assert_eq!(all.len(), 3);

    let shipped: Vec<String> = tracker
        .list_orders_by_status("shipped")
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.order_id.to_string())
        .collect();
    assert_eq!(shipped, vec!["ORD1", "ORD3"]);

    let delivered = tracker.list_orders_by_status("delivered").await.unwrap();
    assert!(delivered.is_empty());
}

#[tokio::test]
async fn database_backend_behaves_like_memory() {
    let services = create_database_app("sqlite::memory:".to_string())
        .await
        .unwrap();
    let tracker = &services.order_tracker;

    tracker
        .add_order(create_request("ORD001", "Laptop", 4))
        .await
        .unwrap();
    tracker.update_order_status("ORD001", "processing").await.unwrap();

    let stored = tracker.get_order_by_id("ORD001").await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Processing);
    assert_eq!(stored.quantity.value(), 4);

    let duplicate = tracker
        .add_order(create_request("ORD001", "Laptop", 1))
        .await;
    assert!(matches!(duplicate, Err(OrderError::AlreadyExists { .. })));

    let processing = tracker.list_orders_by_status("processing").await.unwrap();
    assert_eq!(processing.len(), 1);
}

async fn concurrent_adds_with_same_id(tracker: order_tracker_server::OrderTracker) {
    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let tracker = tracker.clone();
            tokio::spawn(async move {
                tracker
                    .add_order(create_request("ORD-RACE", &format!("Item {i}"), 1))
                    .await
            })
        })
        .collect();

    let mut created = Vec::new();
    for task in tasks {
        match task.await.unwrap() {
            Ok(order) => created.push(order),
            Err(err) => assert!(matches!(err, OrderError::AlreadyExists { .. })),
        }
    }
    assert_eq!(created.len(), 1);

    // The winner is what got stored
    let stored = tracker.get_order_by_id("ORD-RACE").await.unwrap().unwrap();
    assert_eq!(stored.item_name, created[0].item_name);
}

#[tokio::test]
async fn concurrent_duplicate_adds_in_memory() {
    let services = create_in_memory_app().await.unwrap();
    concurrent_adds_with_same_id(services.order_tracker).await;
}

#[tokio::test]
async fn concurrent_duplicate_adds_in_database() {
    let services = create_database_app("sqlite::memory:".to_string())
        .await
        .unwrap();
    concurrent_adds_with_same_id(services.order_tracker).await;
}
