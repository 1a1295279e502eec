use crate::domain::errors::ValidationError;

const MAX_ORDER_ID_LEN: usize = 128;

/// A validated order identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(String);

impl OrderId {
    /// Create a new OrderId with validation.
    ///
    /// Surrounding whitespace is trimmed before validation, so a blank id
    /// is rejected as empty.
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let value = value.trim();

        if value.is_empty() {
            return Err(ValidationError::EmptyOrderId);
        }

        let len = value.chars().count();
        if len > MAX_ORDER_ID_LEN {
            return Err(ValidationError::OrderIdTooLong {
                actual: len,
                max: MAX_ORDER_ID_LEN,
            });
        }

        // Ids travel in URL paths
        if let Some(c) = value.chars().find(|c| *c == '/' || c.is_control()) {
            return Err(ValidationError::InvalidOrderIdCharacter(c));
        }

        Ok(Self(value.to_string()))
    }

    /// Generate a fresh random order id
    pub fn generate() -> Self {
        Self(format!("ORD-{}", uuid::Uuid::new_v4().simple()))
    }

    /// Get the order id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for OrderId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        OrderId::new(value.to_string())
    }
}
