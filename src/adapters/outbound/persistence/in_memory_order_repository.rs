use async_trait::async_trait;
use std::collections::{HashMap, hash_map::Entry};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::{OrderError, OrderResult},
        models::Order,
        value_objects::OrderId,
    },
    ports::repositories::OrderRepository,
};

/// In-memory implementation of OrderRepository for development and tests
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert_order(&self, order: &Order) -> OrderResult<()> {
        let mut orders = self.orders.write().await;
        match orders.entry(order.order_id.clone()) {
            Entry::Occupied(_) => Err(OrderError::AlreadyExists {
                order_id: order.order_id.clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(order.clone());
                Ok(())
            }
        }
    }

    async fn save_order(&self, order: &Order) -> OrderResult<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.order_id.clone(), order.clone());
        Ok(())
    }

    async fn get_order(&self, order_id: &OrderId) -> OrderResult<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(order_id).cloned())
    }

    async fn get_all_orders(&self) -> OrderResult<Vec<Order>> {
        let orders = self.orders.read().await;

        let mut all: Vec<Order> = orders.values().cloned().collect();

        // Sort for consistent results
        all.sort_by(|a, b| a.order_id.cmp(&b.order_id));

        Ok(all)
    }
}
