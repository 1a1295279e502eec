use crate::domain::errors::ValidationError;

const MAX_CUSTOMER_ID_LEN: usize = 128;

/// Reference to the customer who placed an order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let value = value.trim();

        if value.is_empty() {
            return Err(ValidationError::EmptyCustomerId);
        }

        let len = value.chars().count();
        if len > MAX_CUSTOMER_ID_LEN {
            return Err(ValidationError::CustomerIdTooLong {
                actual: len,
                max: MAX_CUSTOMER_ID_LEN,
            });
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
