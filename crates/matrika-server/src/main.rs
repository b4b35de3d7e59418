//! Server entry point for the Matrika person registry.
//!
//! Wires the layers together: loads configuration, initializes logging,
//! connects to `PostgreSQL` and applies migrations, loads the HTML
//! views, and serves the list routes until terminated.

mod config;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use matrika_db::{PostgresConfig, PostgresPool};
use matrika_web::server::ServerConfig;
use matrika_web::{start_server, AppState, Templates};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Default configuration file path, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "matrika-config.yaml";

/// Application entry point.
///
/// Reads the config path from `MATRIKA_CONFIG` (falling back to
/// `matrika-config.yaml`), then starts the HTTP server.
///
/// # Errors
///
/// Returns an error if configuration, database setup, template loading,
/// or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path =
        std::env::var("MATRIKA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
    let config = if Path::new(&config_path).exists() {
        AppConfig::from_file(Path::new(&config_path))?
    } else {
        AppConfig::default()
    };

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_target(true)
        .init();

    info!(config_path, "matrika-server starting");

    let pg_config = PostgresConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections)
        .with_connect_timeout(Duration::from_secs(config.database.connect_timeout_secs))
        .with_idle_timeout(Duration::from_secs(config.database.idle_timeout_secs));
    let pool = PostgresPool::connect(&pg_config).await?;
    pool.run_migrations().await?;

    let templates = Templates::from_dir(&config.templates.dir)?;
    info!(templates_dir = config.templates.dir, "views loaded");

    let state = Arc::new(AppState::new(pool, templates));
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };

    start_server(&server_config, state).await?;

    Ok(())
}
