use crate::domain::{
    errors::OrderResult,
    models::Order,
    value_objects::OrderId,
};
use async_trait::async_trait;

/// Storage abstraction for order records.
///
/// Implementations persist whole orders; validation belongs to the caller.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// Store a new order, failing with `AlreadyExists` if the id is taken.
    ///
    /// The existence check and the write happen as one step.
    async fn insert_order(&self, order: &Order) -> OrderResult<()>;

    /// Insert or replace the order stored under `order.order_id`
    async fn save_order(&self, order: &Order) -> OrderResult<()>;

    /// Retrieve one order, `None` if it is not stored
    async fn get_order(&self, order_id: &OrderId) -> OrderResult<Option<Order>>;

    /// Retrieve every stored order, ordered by order id
    async fn get_all_orders(&self) -> OrderResult<Vec<Order>>;
}
