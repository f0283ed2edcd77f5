//! Document store access layer
//!
//! Characters are persisted as JSON documents in a single SQLite table.
//! The `doc` column holds the document verbatim; `id` and `name` are
//! extracted at insert time for addressing and the uniqueness constraint.
//! Read paths hand raw `serde_json::Value` trees to callers; shape
//! normalization happens above this layer, never inside it.

use sdx_common::normalize::synthesize_id;
use sdx_common::{Error, Result};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Initialize the database connection pool and create the schema if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_characters_table(&pool).await?;

    Ok(pool)
}

/// Create the characters table (idempotent)
pub async fn create_characters_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS characters (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            doc TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_characters_name ON characters(name)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Fetch every stored document (full scan)
pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Value>> {
    let rows: Vec<(String,)> = sqlx::query_as("SELECT doc FROM characters ORDER BY name")
        .fetch_all(pool)
        .await?;

    rows.iter().map(|(doc,)| parse_doc(doc)).collect()
}

/// Fetch one document by its identifier
pub async fn fetch_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Value>> {
    let row: Option<(String,)> = sqlx::query_as("SELECT doc FROM characters WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(|(doc,)| parse_doc(&doc)).transpose()
}

/// Fetch the first document whose name contains the fragment
/// (case-insensitive)
pub async fn fetch_by_name(pool: &SqlitePool, fragment: &str) -> Result<Option<Value>> {
    let row: Option<(String,)> = sqlx::query_as(
        "SELECT doc FROM characters WHERE name LIKE '%' || ?1 || '%' ORDER BY name LIMIT 1",
    )
    .bind(fragment)
    .fetch_optional(pool)
    .await?;

    row.map(|(doc,)| parse_doc(&doc)).transpose()
}

/// Fetch documents with an affiliation containing the fragment.
///
/// Matches against `basic_info.affiliations` only; flat legacy documents
/// store their village elsewhere and are not matched.
pub async fn fetch_by_affiliation(pool: &SqlitePool, fragment: &str) -> Result<Vec<Value>> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT doc FROM characters
        WHERE EXISTS (
            SELECT 1 FROM json_each(characters.doc, '$.basic_info.affiliations')
            WHERE json_each.value LIKE '%' || ?1 || '%'
        )
        ORDER BY name
        "#,
    )
    .bind(fragment)
    .fetch_all(pool)
    .await?;

    rows.iter().map(|(doc,)| parse_doc(doc)).collect()
}

/// Fetch documents whose `basic_info.rank` contains the fragment
pub async fn fetch_by_rank(pool: &SqlitePool, fragment: &str) -> Result<Vec<Value>> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT doc FROM characters
        WHERE json_extract(doc, '$.basic_info.rank') LIKE '%' || ?1 || '%'
        ORDER BY name
        "#,
    )
    .bind(fragment)
    .fetch_all(pool)
    .await?;

    rows.iter().map(|(doc,)| parse_doc(doc)).collect()
}

/// Insert a document exactly as supplied (no normalization).
///
/// The addressing columns are derived from the payload: `name` is required
/// and unique; `id` uses the payload's own id when present, else is
/// synthesized from the name. The stored document itself is untouched.
pub async fn insert_document(pool: &SqlitePool, doc: &Value) -> Result<()> {
    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| Error::InvalidInput("Character requires a non-empty name".to_string()))?;

    let id = match doc.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => synthesize_id(name),
    };

    let serialized = serde_json::to_string(doc)
        .map_err(|e| Error::InvalidInput(format!("Unserializable document: {}", e)))?;

    sqlx::query("INSERT INTO characters (id, name, doc) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(name)
        .bind(&serialized)
        .execute(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                Error::InvalidInput(format!("Character already exists: {}", name))
            } else {
                Error::Database(e)
            }
        })?;

    Ok(())
}

/// Delete every stored document; returns the number removed
pub async fn clear_all(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM characters").execute(pool).await?;
    Ok(result.rows_affected())
}

fn parse_doc(raw: &str) -> Result<Value> {
    serde_json::from_str(raw)
        .map_err(|e| Error::Internal(format!("Corrupt stored document: {}", e)))
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
