use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    domain::{
        errors::{OrderError, OrderResult},
        models::{CreateOrderRequest, Order},
        value_objects::{CustomerId, ItemName, OrderId, OrderStatus, Quantity},
    },
    ports::{repositories::OrderRepository, services::OrderService},
};

/// Order tracker: validates input, then delegates to the injected repository
#[derive(Clone)]
pub struct OrderTracker {
    repository: Arc<dyn OrderRepository>,
}

impl OrderTracker {
    /// Create a new OrderTracker backed by `repository`
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Status for a new order; absent or blank means `pending`
    fn initial_status(status: Option<&str>) -> OrderResult<OrderStatus> {
        match status {
            Some(value) if !value.is_empty() => Ok(OrderStatus::parse(value)?),
            _ => Ok(OrderStatus::default()),
        }
    }
}

#[async_trait]
impl OrderService for OrderTracker {
    async fn add_order(&self, request: CreateOrderRequest) -> OrderResult<Order> {
        let order_id = OrderId::new(request.order_id)?;
        let item_name = ItemName::new(request.item_name)?;
        let quantity = Quantity::new(request.quantity)?;
        let customer_id = CustomerId::new(request.customer_id)?;
        let status = Self::initial_status(request.status.as_deref())?;

        let order = Order::new(order_id, item_name, quantity, customer_id, status);
        self.repository.insert_order(&order).await?;

        info!(order_id = %order.order_id, status = %order.status, "order added");
        Ok(order)
    }

    async fn get_order_by_id(&self, order_id: &str) -> OrderResult<Option<Order>> {
        let order_id = OrderId::new(order_id.to_string())?;
        self.repository.get_order(&order_id).await
    }

    async fn update_order_status(&self, order_id: &str, new_status: &str) -> OrderResult<Order> {
        let order_id = OrderId::new(order_id.to_string())?;
        let status = OrderStatus::parse(new_status)?;

        let mut order = self
            .repository
            .get_order(&order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_id: order_id.clone(),
            })?;

        let previous = order.status;
        order.set_status(status);
        self.repository.save_order(&order).await?;

        info!(
            order_id = %order.order_id,
            from = %previous,
            to = %order.status,
            "order status updated"
        );
        Ok(order)
    }

    async fn list_all_orders(&self) -> OrderResult<Vec<Order>> {
        self.repository.get_all_orders().await
    }

    async fn list_orders_by_status(&self, status: &str) -> OrderResult<Vec<Order>> {
        let status = OrderStatus::parse(status)?;

        let orders: Vec<Order> = self
            .repository
            .get_all_orders()
            .await?
            .into_iter()
            .filter(|order| order.status == status)
            .collect();

        debug!(status = %status, count = orders.len(), "listed orders by status");
        Ok(orders)
    }
}

/// Builder for OrderTracker
#[derive(Default)]
pub struct OrderTrackerBuilder {
    repository: Option<Arc<dyn OrderRepository>>,
}

impl OrderTrackerBuilder {
    pub fn new() -> Self {
        Self { repository: None }
    }

    pub fn repository(mut self, repository: Arc<dyn OrderRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn build(self) -> Result<OrderTracker, &'static str> {
        let repository = self.repository.ok_or("Repository is required")?;

        Ok(OrderTracker::new(repository))
    }
}
