//! Species enrichment: homeworld resolution, bulk fan-out and ordering.

use std::sync::Arc;

use futures::future::try_join_all;
use starchart_core::catalog::Catalog;
use starchart_core::entities::Species;
use starchart_core::error::{CoreError, CoreResult};
use starchart_core::mappers::map_to_species;
use starchart_core::reference::extract_id_from_url;
use starchart_core::remote::{Page, RemoteSpecies};
use starchart_core::sort::{sort_species, SortOrder, SpeciesSort};

use crate::planet::PlanetService;

/// Serves species with their homeworld resolved into a full planet.
#[derive(Clone)]
pub struct SpeciesService {
    catalog: Arc<dyn Catalog>,
    planets: PlanetService,
}

impl SpeciesService {
    pub fn new(catalog: Arc<dyn Catalog>, planets: PlanetService) -> Self {
        Self { catalog, planets }
    }

    /// Fetch one species and resolve its homeworld.
    pub async fn get_species_by_id(&self, id: &str) -> CoreResult<Species> {
        let remote = self.catalog.fetch_species(id).await?;
        self.enrich(remote).await
    }

    /// Fetch one page of species (1-based) and resolve every homeworld
    /// concurrently. Results keep the catalog's order; `count`, `next` and
    /// `previous` are passed through.
    pub async fn get_species_page(&self, page: u32) -> CoreResult<Page<Species>> {
        if page == 0 {
            return Err(CoreError::InvalidArgument(
                "page numbers start at 1".to_string(),
            ));
        }

        let mut remote = self.catalog.fetch_species_page(page).await?;
        let items = std::mem::take(&mut remote.results);
        let species = self.enrich_all(items).await?;
        tracing::debug!(page, items = species.len(), "Enriched species page");
        Ok(remote.with_results(species))
    }

    /// Fetch the whole catalog, resolve every homeworld concurrently and
    /// apply the optional sort.
    pub async fn get_all_species(
        &self,
        sort: Option<SpeciesSort>,
        order: SortOrder,
    ) -> CoreResult<Vec<Species>> {
        let remote = self.catalog.fetch_all_species().await?;
        let species = self.enrich_all(remote).await?;
        tracing::debug!(items = species.len(), ?sort, ?order, "Enriched species catalog");
        Ok(sort_species(species, sort, order))
    }

    // ---- private helpers ----

    /// Enrich a batch concurrently.
    ///
    /// Output position `i` always holds the enrichment of input `i`. The
    /// first failure fails the batch and drops the remaining fetches.
    async fn enrich_all(&self, items: Vec<RemoteSpecies>) -> CoreResult<Vec<Species>> {
        try_join_all(items.into_iter().map(|remote| self.enrich(remote))).await
    }

    /// Resolve the homeworld of one species and project it.
    ///
    /// A missing (or empty) homeworld reference maps to `None` without
    /// touching the planet path. A missing planet behind a present
    /// reference is an error, not an absent homeworld.
    async fn enrich(&self, remote: RemoteSpecies) -> CoreResult<Species> {
        let homeworld = match remote.homeworld.as_deref().filter(|url| !url.is_empty()) {
            None => None,
            Some(url) => {
                let planet_id = extract_id_from_url(url)?;
                Some(self.planets.resolve_planet(&planet_id.to_string()).await?)
            }
        };
        Ok(map_to_species(remote, homeworld))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;
    use starchart_core::fixtures::{self, FakeCatalog, FAKE_PAGE_SIZE};
    use starchart_core::store::{MemoryOverrideStore, OverrideStore};

    use super::*;

    struct Harness {
        service: SpeciesService,
        planets: PlanetService,
        catalog: Arc<FakeCatalog>,
        store: Arc<MemoryOverrideStore>,
    }

    fn harness(catalog: FakeCatalog) -> Harness {
        let catalog = Arc::new(catalog);
        let store = Arc::new(MemoryOverrideStore::new());
        let planets = PlanetService::new(catalog.clone(), store.clone());
        let service = SpeciesService::new(catalog.clone(), planets.clone());
        Harness {
            service,
            planets,
            catalog,
            store,
        }
    }

    fn names(species: &[Species]) -> Vec<&str> {
        species.iter().map(|s| s.name.as_str()).collect()
    }

    fn human_catalog() -> FakeCatalog {
        FakeCatalog::new()
            .with_species("1", fixtures::remote_species("1", "Human", "180", Some("1")))
            .with_species("2", fixtures::remote_species("2", "Droid", "n/a", None))
            .with_planet("1", fixtures::remote_planet("1", "Tatooine"))
    }

    // -- get_species_by_id --

    #[tokio::test]
    async fn species_without_homeworld_skips_planet_fetch() {
        let h = harness(human_catalog());

        let species = h.service.get_species_by_id("2").await.unwrap();

        assert_eq!(species.name, "Droid");
        assert_eq!(species.homeworld, None);
        assert!(h.catalog.planet_fetches().is_empty());
    }

    #[tokio::test]
    async fn empty_homeworld_reference_counts_as_absent() {
        let mut remote = fixtures::remote_species("3", "Ghost", "unknown", None);
        remote.homeworld = Some(String::new());
        let h = harness(FakeCatalog::new().with_species("3", remote));

        let species = h.service.get_species_by_id("3").await.unwrap();

        assert_eq!(species.homeworld, None);
        assert!(h.catalog.planet_fetches().is_empty());
    }

    #[tokio::test]
    async fn species_with_homeworld_embeds_catalog_planet() {
        let h = harness(human_catalog());

        let species = h.service.get_species_by_id("1").await.unwrap();

        let homeworld = species.homeworld.expect("homeworld resolved");
        let expected = fixtures::remote_planet("1", "Tatooine");
        assert_eq!(homeworld.name, expected.name);
        assert_eq!(homeworld.climate, expected.climate);
        assert_eq!(homeworld.residents, expected.residents);
        assert_eq!(homeworld.edited, expected.edited);
        assert!(!homeworld.destroyed);
        assert_eq!(h.catalog.planet_fetches(), ["1"]);
    }

    #[tokio::test]
    async fn destruction_shows_up_on_next_species_fetch() {
        let h = harness(human_catalog());
        let before = h.service.get_species_by_id("1").await.unwrap();
        assert_eq!(before.homeworld.as_ref().map(|p| p.destroyed), Some(false));

        h.planets.upsert_destruction_status("1", true).await.unwrap();
        let after = h.service.get_species_by_id("1").await.unwrap();

        let mut before_planet = before.homeworld.unwrap();
        let after_planet = after.homeworld.unwrap();
        assert!(after_planet.destroyed);
        before_planet.destroyed = true;
        assert_eq!(before_planet, after_planet, "only `destroyed` may change");
    }

    #[tokio::test]
    async fn missing_species_is_not_found() {
        let h = harness(human_catalog());

        let err = h.service.get_species_by_id("99").await.unwrap_err();

        assert_eq!(err.to_string(), "Species with ID 99 not found");
    }

    #[tokio::test]
    async fn missing_homeworld_planet_is_an_error_naming_the_planet() {
        let catalog = FakeCatalog::new().with_species(
            "1",
            fixtures::remote_species("1", "Human", "180", Some("404")),
        );
        let h = harness(catalog);

        let err = h.service.get_species_by_id("1").await.unwrap_err();

        assert_matches!(&err, CoreError::NotFound { entity: "Planet", id } if id == "404");
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn malformed_homeworld_reference_is_invalid_reference() {
        let mut remote = fixtures::remote_species("1", "Human", "180", None);
        remote.homeworld = Some("https://swapi.dev/api/planets//".to_string());
        let h = harness(FakeCatalog::new().with_species("1", remote));

        let err = h.service.get_species_by_id("1").await.unwrap_err();

        assert_matches!(err, CoreError::InvalidReference(_));
        assert!(h.catalog.planet_fetches().is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_on_homeworld_propagates_unchanged() {
        let failure = CoreError::FetchFailed {
            entity: "Planet",
            status: "Bad Gateway".to_string(),
        };
        let h = harness(human_catalog().with_planet_error("1", failure.clone()));

        let err = h.service.get_species_by_id("1").await.unwrap_err();

        assert_eq!(err, failure);
    }

    // -- get_species_page --

    #[tokio::test]
    async fn page_preserves_order_when_fetches_finish_in_reverse() {
        // Earlier items have slower homeworlds, so completion order is the
        // reverse of input order.
        let mut catalog = FakeCatalog::new();
        for i in 1..=5u64 {
            let id = i.to_string();
            catalog = catalog
                .with_species(&id, fixtures::remote_species(&id, &format!("S{i}"), "100", Some(&id)))
                .with_planet(&id, fixtures::remote_planet(&id, &format!("P{i}")))
                .with_planet_delay(&id, Duration::from_millis(20 * (6 - i)));
        }
        let h = harness(catalog);

        let page = h.service.get_species_page(1).await.unwrap();

        assert_eq!(names(&page.results), ["S1", "S2", "S3", "S4", "S5"]);
        let homeworlds: Vec<_> = page
            .results
            .iter()
            .map(|s| s.homeworld.as_ref().unwrap().name.as_str())
            .collect();
        assert_eq!(homeworlds, ["P1", "P2", "P3", "P4", "P5"]);
    }

    #[tokio::test]
    async fn page_passes_pagination_markers_through() {
        let mut catalog = FakeCatalog::new();
        for i in 0..FAKE_PAGE_SIZE + 3 {
            let id = (i + 1).to_string();
            catalog = catalog.with_species(&id, fixtures::remote_species(&id, &id, "100", None));
        }
        let h = harness(catalog);

        let first = h.service.get_species_page(1).await.unwrap();
        let second = h.service.get_species_page(2).await.unwrap();

        assert_eq!(first.count, (FAKE_PAGE_SIZE + 3) as u64);
        assert_eq!(first.results.len(), FAKE_PAGE_SIZE);
        assert_eq!(first.next.as_deref(), Some("https://swapi.dev/api/species/?page=2"));
        assert_eq!(first.previous, None);
        assert_eq!(second.count, first.count);
        assert_eq!(second.results.len(), 3);
        assert_eq!(second.next, None);
        assert_eq!(second.previous.as_deref(), Some("https://swapi.dev/api/species/?page=1"));
    }

    #[tokio::test]
    async fn page_fails_as_a_whole_when_one_item_fails() {
        let catalog = human_catalog()
            .with_species("3", fixtures::remote_species("3", "Wookie", "210", Some("14")));
        let h = harness(catalog);

        let err = h.service.get_species_page(1).await.unwrap_err();

        assert_matches!(err, CoreError::NotFound { entity: "Planet", .. });
    }

    #[tokio::test]
    async fn page_past_the_end_is_page_not_found() {
        let h = harness(human_catalog());

        let err = h.service.get_species_page(2).await.unwrap_err();

        assert_eq!(
            err,
            CoreError::PageNotFound {
                entity: "Species",
                page: 2,
            }
        );
        assert!(h.catalog.planet_fetches().is_empty());
    }

    #[tokio::test]
    async fn page_zero_is_rejected_before_fetching() {
        let h = harness(
            FakeCatalog::new().with_species_page_error(CoreError::Transport("unreachable".into())),
        );

        let err = h.service.get_species_page(0).await.unwrap_err();

        assert_matches!(err, CoreError::InvalidArgument(_));
    }

    // -- get_all_species --

    fn human_and_wookie() -> FakeCatalog {
        FakeCatalog::new()
            .with_species("1", fixtures::remote_species("1", "Human", "180", Some("1")))
            .with_species("3", fixtures::remote_species("3", "Wookie", "210", Some("14")))
            .with_planet("1", fixtures::remote_planet("1", "Tatooine"))
            .with_planet("14", fixtures::remote_planet("14", "Kashyyyk"))
    }

    #[tokio::test]
    async fn all_species_sorted_descending_by_height() {
        let h = harness(human_and_wookie());

        let species = h
            .service
            .get_all_species(Some(SpeciesSort::AverageHeight), SortOrder::Desc)
            .await
            .unwrap();

        assert_eq!(names(&species), ["Wookie", "Human"]);
    }

    #[tokio::test]
    async fn all_species_sorted_ascending_by_height() {
        let h = harness(human_and_wookie());

        let species = h
            .service
            .get_all_species(Some(SpeciesSort::AverageHeight), SortOrder::Asc)
            .await
            .unwrap();

        assert_eq!(names(&species), ["Human", "Wookie"]);
    }

    #[tokio::test]
    async fn all_species_unsorted_keeps_catalog_order() {
        let catalog = human_and_wookie()
            .with_species("2", fixtures::remote_species("2", "Droid", "n/a", None));
        let h = harness(catalog);

        let species = h.service.get_all_species(None, SortOrder::Desc).await.unwrap();

        assert_eq!(names(&species), ["Human", "Wookie", "Droid"]);
    }

    #[tokio::test]
    async fn all_species_reflects_overrides() {
        let h = harness(human_and_wookie());
        h.store.set("14", true).await.unwrap();

        let species = h.service.get_all_species(None, SortOrder::Asc).await.unwrap();

        let destroyed: Vec<_> = species
            .iter()
            .map(|s| s.homeworld.as_ref().unwrap().destroyed)
            .collect();
        assert_eq!(destroyed, [false, true]);
    }

    #[tokio::test]
    async fn all_species_propagates_listing_failure() {
        let failure = CoreError::Transport("dns error".to_string());
        let h = harness(FakeCatalog::new().with_species_page_error(failure.clone()));

        let err = h.service.get_all_species(None, SortOrder::Asc).await.unwrap_err();

        assert_eq!(err, failure);
    }
}
