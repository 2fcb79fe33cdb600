//! Enrichment and overlay services.
//!
//! [`PlanetService`] composes catalog planets with the local destruction
//! overlay. [`SpeciesService`] resolves species homeworlds through it, fans
//! out over pages and the whole catalog, and applies the species ordering.

pub mod planet;
pub mod species;

pub use planet::PlanetService;
pub use species::SpeciesService;
