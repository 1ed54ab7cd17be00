//! inventur-server - inventory intake web service
//!
//! Collects asset inventories from municipal departments and offers a
//! protected admin area for review, archiving and CSV export.

use anyhow::{Context, Result};
use clap::Parser;
use inventur_common::config::{ConfigOverrides, ServerConfig};
use inventur_server::{build_router, db, AppState};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Command-line arguments; unset values fall back to environment, config file, defaults
#[derive(Debug, Parser)]
#[command(name = "inventur-server", version, about = "Inventory intake web service")]
struct Cli {
    /// Folder holding inventur.db (and optionally inventur.toml)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Admin username
    #[arg(long)]
    admin_user: Option<String>,

    /// Admin password
    #[arg(long)]
    admin_password: Option<String>,

    /// Explicit TOML config file
    #[arg(long, env = "INVENTUR_CONFIG")]
    config: Option<PathBuf>,
}

impl From<Cli> for ConfigOverrides {
    fn from(cli: Cli) -> Self {
        ConfigOverrides {
            data_dir: cli.data_dir,
            host: cli.host,
            port: cli.port,
            admin_user: cli.admin_user,
            admin_password: cli.admin_password,
            config_file: cli.config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification before anything that can fail
    info!(
        "Starting inventur-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = ServerConfig::resolve(Cli::parse().into()).context("Invalid configuration")?;

    if let Some(path) = &config.config_file {
        info!("Config file: {}", path.display());
    }
    if config.uses_default_password() {
        warn!("Admin password is the built-in default; set INVENTUR_ADMIN_PASSWORD");
    }

    let db_path = config.database_path();
    info!("Database path: {}", db_path.display());

    let pool = match db::init_database(&db_path).await {
        Ok(pool) => {
            info!("✓ Database ready");
            pool
        }
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(pool, config.credentials());
    let app = build_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("inventur-server listening on http://{}", address);
    info!("Health check: http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
