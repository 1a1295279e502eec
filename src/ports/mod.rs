pub mod repositories;
pub mod services;

// Re-export all port traits for convenience
pub use repositories::OrderRepository;
pub use services::OrderService;
