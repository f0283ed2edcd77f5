//! sdx-api library - character retrieval service
//!
//! Exposes the normalized character records over stateless JSON endpoints.
//! The store handle is constructed in `main` and passed in explicitly; no
//! ambient singleton.

use axum::http::StatusCode;
use axum::{Json, Router};
use sdx_common::api::Envelope;
use serde_json::Value;
use sqlx::SqlitePool;

pub mod api;
pub mod db;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Document store connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/characters", get(api::list_characters).post(api::create_character))
        .route("/api/characters/:id", get(api::get_character))
        .route("/api/characters/name/:name", get(api::get_character_by_name))
        .route("/api/characters/village/:village", get(api::get_characters_by_village))
        .route("/api/characters/rank/:rank", get(api::get_characters_by_rank))
        .merge(api::health_routes())
        .fallback(route_not_found)
        .with_state(state)
}

/// Unmatched routes return the failure envelope with 404
async fn route_not_found() -> (StatusCode, Json<Envelope<Value>>) {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::fail("Route not found")),
    )
}
