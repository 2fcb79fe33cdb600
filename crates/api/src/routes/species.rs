//! Route definitions for the `/species` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::species;
use crate::state::AppState;

/// Routes mounted at `/species`.
///
/// ```text
/// GET    /                  -> list_species  (?sort=&order=)
/// GET    /pages/{page}      -> get_species_page
/// GET    /{id}              -> get_species
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(species::list_species))
        .route("/pages/{page}", get(species::get_species_page))
        .route("/{id}", get(species::get_species))
}
