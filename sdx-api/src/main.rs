//! sdx-api - character retrieval service entry point
//!
//! Connects to the document store, then serves the character API. A store
//! that cannot be reached at startup is fatal; store failures at request
//! time surface as 500 envelopes instead.

use anyhow::Result;
use clap::Parser;
use sdx_api::{build_router, db, AppState};
use sdx_common::config::ServerConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Command-line arguments for sdx-api
#[derive(Parser, Debug)]
#[command(name = "sdx-api")]
#[command(about = "Character database API for ShinobiDex")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides SDX_PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database file (overrides SDX_DATABASE and the config file)
    #[arg(short, long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting ShinobiDex API (sdx-api) v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = ServerConfig::resolve(args.database.as_deref(), args.port)?;
    info!("Database path: {}", config.database_path.display());

    let pool = db::init_database(&config.database_path).await?;
    info!("✓ Connected to document store");

    let state = AppState::new(pool);
    // Browser clients call cross-origin
    let app = build_router(state).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("sdx-api listening on http://127.0.0.1:{}", config.port);
    info!("Health check: http://127.0.0.1:{}/api/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
