pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    // Models
    CreateOrderRequest,
    // Value objects
    CustomerId,
    ItemName,
    Order,
    // Errors
    OrderError,
    OrderId,
    OrderResult,
    OrderStatus,
    Quantity,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{OrderRepository, OrderService};

// Service implementations - business logic
pub use services::{OrderTracker, OrderTrackerBuilder};

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppDependencies, AppError, AppServices, RepositoryBackend,
    create_app_from_env, create_database_app, create_in_memory_app,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::persistence::{InMemoryOrderRepository, SqlOrderRepository};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, AppServices, InMemoryOrderRepository, OrderId, OrderRepository,
        OrderService, OrderStatus, OrderTracker, SqlOrderRepository, create_in_memory_app,
    };
}
