use crate::domain::{errors::ValidationError, value_objects::OrderId};

/// Errors that can occur while tracking orders
#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderError {
    /// Input rejected before any storage access
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An order with this id is already stored
    #[error("Order with ID '{order_id}' already exists")]
    AlreadyExists { order_id: OrderId },

    /// No order with this id is stored
    #[error("Order with ID '{order_id}' not found")]
    NotFound { order_id: OrderId },

    /// Storage backend failure
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl OrderError {
    pub fn storage(message: impl Into<String>) -> Self {
        OrderError::Storage {
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, OrderError::Validation(_))
    }
}

/// Result type for order tracking operations
pub type OrderResult<T> = Result<T, OrderError>;
