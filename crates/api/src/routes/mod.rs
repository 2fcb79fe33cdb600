pub mod health;
pub mod planets;
pub mod species;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /species                                  all species (?sort=average_height&order=asc|desc)
/// /species/pages/{page}                     one catalog page
/// /species/{id}                             one species
///
/// /planets/{id}                             one planet with destruction overlay
/// /planets/{id}/destruction                 set destruction status (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/species", species::router())
        .nest("/planets", planets::router())
}
