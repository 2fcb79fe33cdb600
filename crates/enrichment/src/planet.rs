//! Planet overlay: catalog data joined with the local destruction status.

use std::sync::Arc;

use starchart_core::catalog::Catalog;
use starchart_core::entities::Planet;
use starchart_core::error::CoreResult;
use starchart_core::mappers::map_to_planet;
use starchart_core::store::OverrideStore;

/// Serves planets with the destruction overlay applied.
///
/// The composed [`Planet`] is never cached: catalog data and overlay can
/// change independently, so both are read on every call.
#[derive(Clone)]
pub struct PlanetService {
    catalog: Arc<dyn Catalog>,
    store: Arc<dyn OverrideStore>,
}

impl PlanetService {
    pub fn new(catalog: Arc<dyn Catalog>, store: Arc<dyn OverrideStore>) -> Self {
        Self { catalog, store }
    }

    /// Fetch a planet and apply its recorded destruction status
    /// (`false` when none was ever recorded). Never writes.
    pub async fn resolve_planet(&self, id: &str) -> CoreResult<Planet> {
        let remote = self.catalog.fetch_planet(id).await?;
        let destroyed = self.store.get(id).await?.unwrap_or(false);
        Ok(map_to_planet(remote, destroyed))
    }

    /// Record a planet's destruction status and return the planet with it
    /// applied.
    ///
    /// The planet must exist in the catalog; nothing is written otherwise.
    /// The returned `destroyed` is the value the store reports holding after
    /// the write. Repeating the call yields the same state and result.
    pub async fn upsert_destruction_status(
        &self,
        id: &str,
        destroyed: bool,
    ) -> CoreResult<Planet> {
        let remote = self.catalog.fetch_planet(id).await?;
        let stored = self.store.set(id, destroyed).await?;
        tracing::info!(
            planet_id = id,
            destroyed = stored,
            "Planet destruction status recorded"
        );
        Ok(map_to_planet(remote, stored))
    }
}
