//! Route definitions for the `/planets` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::planets;
use crate::state::AppState;

/// Routes mounted at `/planets`.
///
/// ```text
/// GET    /{id}               -> get_planet
/// PUT    /{id}/destruction   -> update_destruction_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(planets::get_planet))
        .route("/{id}/destruction", put(planets::update_destruction_status))
}
