use anyhow::{Context, Result};
use clap::Parser;
use order_tracker_server::{
    adapters::inbound::http::router::{AppState, create_router, create_router_with_frontend},
    app::{AppBuilder, AppConfig, RepositoryBackend},
};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "order-tracker-server")]
#[command(about = "Order tracking REST backend with a static web frontend", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "8080")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Repository backend type (memory or database)
    #[arg(long, env = "REPOSITORY_BACKEND", default_value = "memory")]
    repository_backend: String,

    /// Database URL for the database backend (SQLite)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Directory holding the static frontend
    #[arg(long, env = "FRONTEND_DIR", default_value = "frontend")]
    frontend_dir: PathBuf,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let repository_backend = RepositoryBackend::from_settings(
            Some(self.repository_backend.as_str()),
            self.database_url.clone(),
        )?;

        Ok(AppConfig { repository_backend })
    }

    fn env_filter(&self) -> EnvFilter {
        let level = match self.log_level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => "info",
        };

        // RUST_LOG wins when set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "order_tracker_server={level},tower_http={level},warn"
            ))
        })
    }

    fn init_logging(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    info!("Starting Order Tracker Server");
    info!("Repository backend: {}", cli.repository_backend);

    let config = cli.to_app_config()?;

    let app_services = AppBuilder::new()
        .with_config(config)
        .build()
        .await
        .context("Failed to build application")?;

    let state = AppState::new(Arc::new(app_services.order_tracker));

    let router = if cli.frontend_dir.is_dir() {
        info!("Serving frontend from {}", cli.frontend_dir.display());
        create_router_with_frontend(state, &cli.frontend_dir)
    } else {
        warn!(
            "Frontend directory {} not found, serving API only",
            cli.frontend_dir.display()
        );
        create_router(state)
    };

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("Invalid listen address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to start server")?;

    Ok(())
}
