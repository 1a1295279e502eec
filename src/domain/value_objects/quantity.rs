use crate::domain::errors::ValidationError;

/// Number of items in an order, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub const MAX: u32 = 1_000_000;

    /// Create a quantity from untrusted input
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NonPositiveQuantity(value));
        }

        if value > i64::from(Self::MAX) {
            return Err(ValidationError::QuantityTooLarge {
                actual: value,
                max: Self::MAX,
            });
        }

        Ok(Self(value as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
