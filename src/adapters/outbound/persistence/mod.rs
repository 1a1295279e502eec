mod in_memory_order_repository;
mod sql_order_repository;

pub use in_memory_order_repository::InMemoryOrderRepository;
pub use sql_order_repository::SqlOrderRepository;
