//! gigboard-web - Booking directory server
//!
//! Serves the venue/artist/show directory over HTTP backed by a SQLite
//! database in the resolved data folder.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing::{error, info};

use gigboard_common::config::{ensure_data_folder, resolve_data_folder, ServerConfig};
use gigboard_common::db::init_database;
use gigboard_web::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "gigboard-web", version, about = "Booking directory server")]
struct Args {
    /// Folder holding gigboard.db (overrides GIGBOARD_DATA and config file)
    #[arg(long)]
    data_folder: Option<String>,

    /// Bind address for the HTTP listener
    #[arg(long, env = "GIGBOARD_BIND", default_value = "127.0.0.1:5730")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting Gigboard (gigboard-web) v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let data_folder = resolve_data_folder(args.data_folder.as_deref(), "GIGBOARD_DATA")?;
    ensure_data_folder(&data_folder)?;

    let config = ServerConfig {
        bind_addr: args.bind,
        data_folder,
    };

    let db_path = config.database_path();
    info!("Database path: {}", db_path.display());

    let pool = match init_database(&db_path).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("gigboard-web listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
