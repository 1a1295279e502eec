use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    Row,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
};
use std::{str::FromStr, time::Duration};
use tracing::debug;

use crate::{
    domain::{
        errors::{OrderError, OrderResult},
        models::Order,
        value_objects::{CustomerId, ItemName, OrderId, OrderStatus, Quantity},
    },
    ports::repositories::OrderRepository,
};

/// SQL-based implementation of OrderRepository using SQLite
#[derive(Clone)]
pub struct SqlOrderRepository {
    pool: SqlitePool,
}

impl SqlOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `url`, creating the database file if needed.
    ///
    /// In-memory databases live as long as their connection, so they get a
    /// single connection that is never recycled.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        debug!(url, "connected to order database");

        Ok(Self::new(pool))
    }

    /// Initialize database tables
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                order_id TEXT PRIMARY KEY NOT NULL,
                item_name TEXT NOT NULL,
                quantity INTEGER NOT NULL CHECK (quantity > 0),
                customer_id TEXT NOT NULL,
                status TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_orders_status ON orders(status)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    fn database_error(context: &str, error: sqlx::Error) -> OrderError {
        OrderError::storage(format!("{}: {}", context, error))
    }

    fn row_to_order(row: &SqliteRow) -> OrderResult<Order> {
        let column = |e: sqlx::Error| Self::database_error("Failed to read order row", e);

        let order_id: String = row.try_get("order_id").map_err(column)?;
        let item_name: String = row.try_get("item_name").map_err(column)?;
        let quantity: i64 = row.try_get("quantity").map_err(column)?;
        let customer_id: String = row.try_get("customer_id").map_err(column)?;
        let status: String = row.try_get("status").map_err(column)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(column)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(column)?;

        let corrupt = |e: crate::domain::errors::ValidationError| {
            OrderError::storage(format!("Corrupt order row '{}': {}", order_id, e))
        };

        Ok(Order {
            order_id: OrderId::new(order_id.clone()).map_err(corrupt)?,
            item_name: ItemName::new(item_name).map_err(corrupt)?,
            quantity: Quantity::new(quantity).map_err(corrupt)?,
            customer_id: CustomerId::new(customer_id).map_err(corrupt)?,
            status: OrderStatus::parse(&status).map_err(corrupt)?,
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl OrderRepository for SqlOrderRepository {
    async fn insert_order(&self, order: &Order) -> OrderResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO orders (
                order_id, item_name, quantity, customer_id,
                status, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(order.order_id.as_str())
        .bind(order.item_name.as_str())
        .bind(i64::from(order.quantity.value()))
        .bind(order.customer_id.as_str())
        .bind(order.status.as_str())
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(OrderError::AlreadyExists {
                    order_id: order.order_id.clone(),
                })
            }
            Err(e) => Err(Self::database_error("Database error inserting order", e)),
        }
    }

    async fn save_order(&self, order: &Order) -> OrderResult<()> {
        sqlx::query(
            r#"
            INSERT INTO orders (
                order_id, item_name, quantity, customer_id,
                status, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (order_id)
            DO UPDATE SET
                item_name = excluded.item_name,
                quantity = excluded.quantity,
                customer_id = excluded.customer_id,
                status = excluded.status,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(order.order_id.as_str())
        .bind(order.item_name.as_str())
        .bind(i64::from(order.quantity.value()))
        .bind(order.customer_id.as_str())
        .bind(order.status.as_str())
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::database_error("Database error saving order", e))?;

        Ok(())
    }

    async fn get_order(&self, order_id: &OrderId) -> OrderResult<Option<Order>> {
        let row = sqlx::query(
            r#"
            SELECT order_id, item_name, quantity, customer_id, status, created_at, updated_at
            FROM orders
            WHERE order_id = ?
            "#,
        )
        .bind(order_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::database_error("Database error retrieving order", e))?;

        row.as_ref().map(Self::row_to_order).transpose()
    }

    async fn get_all_orders(&self) -> OrderResult<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT order_id, item_name, quantity, customer_id, status, created_at, updated_at
            FROM orders
            ORDER BY order_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::database_error("Database error listing orders", e))?;

        rows.iter().map(Self::row_to_order).collect()
    }
}
