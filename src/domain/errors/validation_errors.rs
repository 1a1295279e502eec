/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // OrderId validation errors
    EmptyOrderId,
    OrderIdTooLong {
        actual: usize,
        max: usize,
    },
    InvalidOrderIdCharacter(char),

    // CustomerId validation errors
    EmptyCustomerId,
    CustomerIdTooLong {
        actual: usize,
        max: usize,
    },

    // ItemName validation errors
    EmptyItemName,
    ItemNameTooLong {
        actual: usize,
        max: usize,
    },

    // Quantity validation errors
    NonPositiveQuantity(i64),
    QuantityTooLarge {
        actual: i64,
        max: u32,
    },

    // OrderStatus validation errors
    EmptyStatus,
    InvalidStatus(String),
}

impl ValidationError {
    /// Name of the order field this error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyOrderId
            | ValidationError::OrderIdTooLong { .. }
            | ValidationError::InvalidOrderIdCharacter(_) => "order_id",
            ValidationError::EmptyCustomerId | ValidationError::CustomerIdTooLong { .. } => {
                "customer_id"
            }
            ValidationError::EmptyItemName | ValidationError::ItemNameTooLong { .. } => {
                "item_name"
            }
            ValidationError::NonPositiveQuantity(_) | ValidationError::QuantityTooLarge { .. } => {
                "quantity"
            }
            ValidationError::EmptyStatus | ValidationError::InvalidStatus(_) => "status",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // OrderId errors
            ValidationError::EmptyOrderId => write!(f, "order_id cannot be empty"),
            ValidationError::OrderIdTooLong { actual, max } => {
                write!(f, "order_id too long: {} characters (max: {})", actual, max)
            }
            ValidationError::InvalidOrderIdCharacter(c) => {
                write!(f, "Invalid character in order_id: {:?}", c)
            }

            // CustomerId errors
            ValidationError::EmptyCustomerId => write!(f, "customer_id cannot be empty"),
            ValidationError::CustomerIdTooLong { actual, max } => {
                write!(
                    f,
                    "customer_id too long: {} characters (max: {})",
                    actual, max
                )
            }

            // ItemName errors
            ValidationError::EmptyItemName => write!(f, "item_name cannot be empty"),
            ValidationError::ItemNameTooLong { actual, max } => {
                write!(
                    f,
                    "item_name too long: {} characters (max: {})",
                    actual, max
                )
            }

            // Quantity errors
            ValidationError::NonPositiveQuantity(value) => {
                write!(f, "Quantity must be a positive integer (got {})", value)
            }
            ValidationError::QuantityTooLarge { actual, max } => {
                write!(f, "Quantity too large: {} (max: {})", actual, max)
            }

            // Status errors
            ValidationError::EmptyStatus => write!(f, "status cannot be empty"),
            ValidationError::InvalidStatus(value) => {
                write!(
                    f,
                    "Invalid status: '{}' (expected one of: pending, processing, shipped, delivered)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
