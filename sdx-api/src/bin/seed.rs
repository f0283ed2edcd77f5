//! sdx-seed - re-seed the character store
//!
//! Operational tool: bulk-clears the characters table and inserts the
//! bundled legacy-shape sample set. The documents are stored exactly as
//! bundled (flat legacy shape); the read path normalizes them on the way
//! out, which is what exercises the normalization layer end to end.

use anyhow::{Context, Result};
use clap::Parser;
use sdx_api::db;
use sdx_common::config::resolve_database_path;
use serde_json::Value;
use tracing::info;

/// Bundled sample set, in the flat legacy shape
const SEED_DATA: &str = include_str!("../../data/seed.json");

#[derive(Parser, Debug)]
#[command(name = "sdx-seed")]
#[command(about = "Clear and re-seed the ShinobiDex character store")]
#[command(version)]
struct Args {
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

    let args = Args::parse();
    let db_path = resolve_database_path(args.database.as_deref());
    info!("Database path: {}", db_path.display());

    let pool = db::init_database(&db_path).await?;

    let documents: Vec<Value> =
        serde_json::from_str(SEED_DATA).context("Bundled seed data failed to parse")?;

    let removed = db::clear_all(&pool).await?;
    info!("Cleared {} existing characters", removed);

    for doc in &documents {
        db::insert_document(&pool, doc).await?;
        let name = doc.get("name").and_then(Value::as_str).unwrap_or("?");
        info!("Seeded: {}", name);
    }

    info!("Seeded {} characters", documents.len());
    Ok(())
}
