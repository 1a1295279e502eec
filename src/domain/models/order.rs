use chrono::{DateTime, Utc};

use crate::domain::value_objects::{CustomerId, ItemName, OrderId, OrderStatus, Quantity};

/// A tracked customer order
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: OrderId,
    pub item_name: ItemName,
    pub quantity: Quantity,
    pub customer_id: CustomerId,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order stamped with the current time
    pub fn new(
        order_id: OrderId,
        item_name: ItemName,
        quantity: Quantity,
        customer_id: CustomerId,
        status: OrderStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            order_id,
            item_name,
            quantity,
            customer_id,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move the order to a new status and refresh `updated_at`
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

/// Request to add a new order.
///
/// Fields hold raw, unvalidated input; the order tracker validates them.
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    pub order_id: String,
    pub item_name: String,
    pub quantity: i64,
    pub customer_id: String,
    pub status: Option<String>,
}
