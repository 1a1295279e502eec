mod order_errors;
mod validation_errors;

pub use order_errors::*;
pub use validation_errors::*;
