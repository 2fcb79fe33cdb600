//! Handlers for the `/planets` resource.

use axum::extract::State;
use axum::Json;
use starchart_core::overlay::parse_destroyed_flag;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::PlanetResponse;
use crate::state::AppState;

/// GET /api/v1/planets/{id}
///
/// The catalog planet with its destruction status applied. Ids are
/// numeric, so `01` and `1` name the same planet and the same override.
pub async fn get_planet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> AppResult<Json<PlanetResponse>> {
    let planet = state.planets.resolve_planet(&id.to_string()).await?;
    Ok(Json(PlanetResponse { planet }))
}

/// PUT /api/v1/planets/{id}/destruction
///
/// Body: `{ "destroyed": bool }`. Any non-boolean value, or a body that is
/// not JSON at all, is a 400 and never reaches the catalog.
pub async fn update_destruction_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
    ApiJson(body): ApiJson<serde_json::Value>,
) -> AppResult<Json<PlanetResponse>> {
    let destroyed = parse_destroyed_flag(&body)?;
    let planet = state
        .planets
        .upsert_destruction_status(&id.to_string(), destroyed)
        .await?;
    Ok(Json(PlanetResponse { planet }))
}
