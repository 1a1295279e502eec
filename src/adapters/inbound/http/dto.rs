use chrono::{DateTime, Utc};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{
    errors::OrderError,
    models::{CreateOrderRequest, Order},
};

/// DTO for an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub order_id: String,
    pub item_name: String,
    pub quantity: u32,
    pub customer_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for adding an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderDto {
    pub order_id: String,
    pub item_name: String,
    pub quantity: i64,
    pub customer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// DTO for a status update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusDto {
    pub status: String,
}

/// Query parameters for listing orders
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOrdersDto {
    pub status: Option<String>,
}

/// DTO for order list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOrdersResponseDto {
    pub orders: Vec<OrderDto>,
    pub total_count: usize,
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
    pub timestamp: DateTime<Utc>,
}

// Conversion implementations

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        OrderDto {
            order_id: order.order_id.to_string(),
            item_name: order.item_name.to_string(),
            quantity: order.quantity.value(),
            customer_id: order.customer_id.to_string(),
            status: order.status.as_str().to_string(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl From<CreateOrderDto> for CreateOrderRequest {
    fn from(dto: CreateOrderDto) -> Self {
        CreateOrderRequest {
            order_id: dto.order_id,
            item_name: dto.item_name,
            quantity: dto.quantity,
            customer_id: dto.customer_id,
            status: dto.status,
        }
    }
}

impl From<Vec<Order>> for ListOrdersResponseDto {
    fn from(orders: Vec<Order>) -> Self {
        let orders: Vec<OrderDto> = orders.into_iter().map(OrderDto::from).collect();
        ListOrdersResponseDto {
            total_count: orders.len(),
            orders,
        }
    }
}

impl From<&OrderError> for StatusCode {
    fn from(error: &OrderError) -> Self {
        match error {
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::AlreadyExists { .. } => StatusCode::CONFLICT,
            OrderError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Error response helpers

impl ErrorResponseDto {
    pub fn from_order_error(error: &OrderError) -> Self {
        let mut details = HashMap::new();

        let kind = match error {
            OrderError::Validation(validation) => {
                details.insert(
                    "field".to_string(),
                    serde_json::Value::String(validation.field().to_string()),
                );
                "ValidationError"
            }
            OrderError::NotFound { order_id } => {
                details.insert(
                    "order_id".to_string(),
                    serde_json::Value::String(order_id.to_string()),
                );
                "NotFound"
            }
            OrderError::AlreadyExists { order_id } => {
                details.insert(
                    "order_id".to_string(),
                    serde_json::Value::String(order_id.to_string()),
                );
                "Conflict"
            }
            // Backend details stay in the server log
            OrderError::Storage { .. } => {
                return Self::internal_error("Storage backend failure");
            }
        };

        ErrorResponseDto {
            error: kind.to_string(),
            message: error.to_string(),
            details: if details.is_empty() {
                None
            } else {
                Some(details)
            },
            timestamp: Utc::now(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        ErrorResponseDto {
            error: "NotFound".to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Request body that could not be read as the expected JSON
    pub fn invalid_body(message: &str) -> Self {
        ErrorResponseDto {
            error: "ValidationError".to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn internal_error(message: &str) -> Self {
        ErrorResponseDto {
            error: "InternalServerError".to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }
}
