use crate::domain::{
    errors::OrderResult,
    models::{CreateOrderRequest, Order},
};
use async_trait::async_trait;

/// Port for order tracking operations.
/// Every operation validates its input before touching storage.
#[async_trait]
pub trait OrderService: Send + Sync + 'static {
    /// Add a new order, defaulting its status to `pending`
    async fn add_order(&self, request: CreateOrderRequest) -> OrderResult<Order>;

    /// Get an order by id
    async fn get_order_by_id(&self, order_id: &str) -> OrderResult<Option<Order>>;

    /// Move an existing order to a new status
    async fn update_order_status(&self, order_id: &str, new_status: &str) -> OrderResult<Order>;

    /// List all orders
    async fn list_all_orders(&self) -> OrderResult<Vec<Order>>;

    /// List orders currently in the given status
    async fn list_orders_by_status(&self, status: &str) -> OrderResult<Vec<Order>>;
}
