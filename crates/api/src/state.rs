use std::sync::Arc;

use starchart_core::store::OverrideStore;
use starchart_enrichment::{PlanetService, SpeciesService};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Species enrichment (homeworld resolution, listings, ordering).
    pub species: SpeciesService,
    /// Planet overlay (destruction status).
    pub planets: PlanetService,
    /// Override store, kept here for health reporting.
    pub store: Arc<dyn OverrideStore>,
}
