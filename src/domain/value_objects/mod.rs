mod customer_id;
mod item_name;
mod order_id;
mod order_status;
mod quantity;

pub use customer_id::CustomerId;
pub use item_name::ItemName;
pub use order_id::OrderId;
pub use order_status::OrderStatus;
pub use quantity::Quantity;
