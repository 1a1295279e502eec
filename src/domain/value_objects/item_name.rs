use crate::domain::errors::ValidationError;

const MAX_ITEM_NAME_LEN: usize = 256;

/// Name of the ordered item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let value = value.trim();

        if value.is_empty() {
            return Err(ValidationError::EmptyItemName);
        }

        let len = value.chars().count();
        if len > MAX_ITEM_NAME_LEN {
            return Err(ValidationError::ItemNameTooLong {
                actual: len,
                max: MAX_ITEM_NAME_LEN,
            });
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
