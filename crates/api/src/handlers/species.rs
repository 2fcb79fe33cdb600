//! Handlers for the `/species` resource.

use axum::extract::State;
use axum::Json;
use starchart_core::entities::Species;
use starchart_core::remote::Page;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery};
use crate::query::SpeciesListParams;
use crate::response::{SpeciesListResponse, SpeciesResponse};
use crate::state::AppState;

/// GET /api/v1/species
///
/// Every species in the catalog with homeworlds resolved, optionally
/// sorted (`?sort=average_height&order=desc`).
pub async fn list_species(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SpeciesListParams>,
) -> AppResult<Json<SpeciesListResponse>> {
    let sort = params.sort_key();
    if sort.is_none() {
        if let Some(key) = params.sort.as_deref() {
            tracing::debug!(sort = key, "Ignoring unknown sort key");
        }
    }

    let species = state.species.get_all_species(sort, params.order).await?;
    Ok(Json(SpeciesResponse { species }))
}

/// GET /api/v1/species/pages/{page}
///
/// One catalog page (1-based) with homeworlds resolved.
pub async fn get_species_page(
    State(state): State<AppState>,
    ApiPath(page): ApiPath<u32>,
) -> AppResult<Json<Page<Species>>> {
    if page == 0 {
        return Err(AppError::BadRequest("Page numbers start at 1".to_string()));
    }
    let page = state.species.get_species_page(page).await?;
    Ok(Json(page))
}

/// GET /api/v1/species/{id}
pub async fn get_species(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> AppResult<Json<SpeciesResponse<Species>>> {
    let species = state.species.get_species_by_id(&id.to_string()).await?;
    Ok(Json(SpeciesResponse { species }))
}
