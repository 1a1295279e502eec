use std::sync::Arc;
use tracing::info;

use crate::{
    adapters::outbound::persistence::{InMemoryOrderRepository, SqlOrderRepository},
    ports::repositories::OrderRepository,
    services::OrderTracker,
};

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub repository_backend: RepositoryBackend,
}

/// Repository backend configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RepositoryBackend {
    #[default]
    InMemory,
    /// SQLite database, e.g. `sqlite://orders.db` or `sqlite::memory:`
    Database { connection_string: String },
}

/// Application dependencies container
pub struct AppDependencies {
    pub order_repository: Arc<dyn OrderRepository>,
}

/// Application services container
pub struct AppServices {
    pub order_tracker: OrderTracker,
}

/// Application builder for dependency injection
#[derive(Default)]
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure repository backend
    pub fn with_repository_backend(mut self, backend: RepositoryBackend) -> Self {
        self.config.repository_backend = backend;
        self
    }

    /// Build the application dependencies
    pub async fn build_dependencies(self) -> Result<AppDependencies, AppError> {
        let order_repository = self.create_repository().await?;

        Ok(AppDependencies { order_repository })
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies().await?;

        Ok(AppServices {
            order_tracker: OrderTracker::new(deps.order_repository),
        })
    }

    /// Create the order repository based on configuration
    async fn create_repository(&self) -> Result<Arc<dyn OrderRepository>, AppError> {
        match &self.config.repository_backend {
            RepositoryBackend::InMemory => {
                info!("using in-memory order repository");
                Ok(Arc::new(InMemoryOrderRepository::new()))
            }
            RepositoryBackend::Database { connection_string } => {
                let repository = SqlOrderRepository::connect(connection_string)
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("Failed to connect to database: {}", e),
                    })?;

                repository
                    .migrate()
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("Failed to migrate database: {}", e),
                    })?;

                info!("using SQL order repository");
                Ok(Arc::new(repository))
            }
        }
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Repository initialization error: {message}")]
    RepositoryInit { message: String },
}

/// Convenience functions for common configurations
///
/// Create an in-memory application for testing and development
pub async fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_repository_backend(RepositoryBackend::InMemory)
        .build()
        .await
}

/// Create an application backed by a SQLite database
pub async fn create_database_app(connection_string: String) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_repository_backend(RepositoryBackend::Database { connection_string })
        .build()
        .await
}

impl RepositoryBackend {
    /// Resolve a backend name (`memory`, `database` or `db`) and an optional
    /// database URL. No name means in-memory.
    pub fn from_settings(
        backend: Option<&str>,
        database_url: Option<String>,
    ) -> Result<Self, AppError> {
        match backend {
            Some("database") | Some("db") => {
                let connection_string = database_url.ok_or_else(|| AppError::Configuration {
                    message: "DATABASE_URL is required for the database backend".to_string(),
                })?;
                Ok(RepositoryBackend::Database { connection_string })
            }
            Some("memory") | None => Ok(RepositoryBackend::InMemory),
            Some(other) => Err(AppError::Configuration {
                message: format!("Unknown repository backend: {}", other),
            }),
        }
    }
}

/// Read the repository backend from `REPOSITORY_BACKEND` and `DATABASE_URL`
pub fn repository_backend_from_env() -> Result<RepositoryBackend, AppError> {
    let backend = std::env::var("REPOSITORY_BACKEND").ok();
    RepositoryBackend::from_settings(backend.as_deref(), std::env::var("DATABASE_URL").ok())
}

/// Create application from environment variables
pub async fn create_app_from_env() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_repository_backend(repository_backend_from_env()?)
        .build()
        .await
}
