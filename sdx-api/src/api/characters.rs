//! Character endpoints
//!
//! Every read handler pulls raw documents from the store and runs each one
//! through the normalization layer before it leaves the boundary. The
//! create handler inserts its payload verbatim without normalizing, so a
//! legacy-shaped insert stays legacy until the next read.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sdx_common::api::Envelope;
use sdx_common::normalize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::db;
use crate::AppState;

/// GET /api/characters
///
/// Full scan, normalized; `count` always equals `data.len()`.
pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Value>>>, ApiError> {
    let docs = db::fetch_all(&state.db)
        .await
        .map_err(|e| ApiError::from_common("Error fetching characters", e))?;

    let characters: Vec<Value> = docs.into_iter().map(normalize).collect();
    Ok(Json(Envelope::ok_list(characters)))
}

/// GET /api/characters/:id
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let doc = db::fetch_by_id(&state.db, &id)
        .await
        .map_err(|e| ApiError::from_common("Error fetching character", e))?
        .ok_or_else(|| ApiError::not_found("Character not found"))?;

    Ok(Json(Envelope::ok(normalize(doc))))
}

/// GET /api/characters/name/:name
///
/// Case-insensitive substring match; returns the first match.
pub async fn get_character_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Envelope<Value>>, ApiError> {
    let doc = db::fetch_by_name(&state.db, &name)
        .await
        .map_err(|e| ApiError::from_common("Error fetching character", e))?
        .ok_or_else(|| ApiError::not_found("Character not found"))?;

    Ok(Json(Envelope::ok(normalize(doc))))
}

/// GET /api/characters/village/:village
///
/// Substring match over `basic_info.affiliations`.
pub async fn get_characters_by_village(
    State(state): State<AppState>,
    Path(village): Path<String>,
) -> Result<Json<Envelope<Vec<Value>>>, ApiError> {
    let docs = db::fetch_by_affiliation(&state.db, &village)
        .await
        .map_err(|e| ApiError::from_common("Error fetching characters by village", e))?;

    let characters: Vec<Value> = docs.into_iter().map(normalize).collect();
    Ok(Json(Envelope::ok_list(characters)))
}

/// GET /api/characters/rank/:rank
///
/// Substring match over `basic_info.rank`.
pub async fn get_characters_by_rank(
    State(state): State<AppState>,
    Path(rank): Path<String>,
) -> Result<Json<Envelope<Vec<Value>>>, ApiError> {
    let docs = db::fetch_by_rank(&state.db, &rank)
        .await
        .map_err(|e| ApiError::from_common("Error fetching characters by rank", e))?;

    let characters: Vec<Value> = docs.into_iter().map(normalize).collect();
    Ok(Json(Envelope::ok_list(characters)))
}

/// POST /api/characters
///
/// Raw insert; the response echoes the stored (un-normalized) payload.
pub async fn create_character(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Envelope<Value>>), ApiError> {
    db::insert_document(&state.db, &payload)
        .await
        .map_err(|e| ApiError::from_common("Error creating character", e))?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok_with_message(
            payload,
            "Character created successfully",
        )),
    ))
}
