pub mod order_handlers;

pub use order_handlers::*;
