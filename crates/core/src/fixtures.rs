//! Sample catalog records and an in-memory catalog for tests across the
//! workspace.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::entities::Species;
use crate::error::{CoreError, CoreResult};
use crate::mappers::map_to_species;
use crate::remote::{Page, RemotePlanet, RemoteSpecies};
use crate::types::{entity, Timestamp};

pub const CATALOG_BASE: &str = "https://swapi.dev/api";

fn timestamp(raw: &str) -> Timestamp {
    raw.parse().expect("fixture timestamps are RFC 3339")
}

/// Catalog URL of a planet.
pub fn planet_url(id: &str) -> String {
    format!("{CATALOG_BASE}/planets/{id}/")
}

/// Catalog URL of a species.
pub fn species_url(id: &str) -> String {
    format!("{CATALOG_BASE}/species/{id}/")
}

/// A remote species. `homeworld` is a planet id, turned into a catalog URL.
pub fn remote_species(
    id: &str,
    name: &str,
    height: &str,
    homeworld: Option<&str>,
) -> RemoteSpecies {
    RemoteSpecies {
        name: name.to_string(),
        classification: "mammal".to_string(),
        designation: "sentient".to_string(),
        average_height: height.to_string(),
        skin_colors: "caucasian, black, asian, hispanic".to_string(),
        hair_colors: "blonde, brown, black, red".to_string(),
        eye_colors: "brown, blue, green, hazel, grey, amber".to_string(),
        average_lifespan: "120".to_string(),
        homeworld: homeworld.map(planet_url),
        language: "Galactic Basic".to_string(),
        people: vec![format!("{CATALOG_BASE}/people/1/")],
        films: vec![format!("{CATALOG_BASE}/films/1/")],
        created: timestamp("2014-12-10T13:52:11.567000Z"),
        edited: timestamp("2014-12-20T21:36:42.136000Z"),
        url: species_url(id),
    }
}

/// A remote planet.
pub fn remote_planet(id: &str, name: &str) -> RemotePlanet {
    RemotePlanet {
        name: name.to_string(),
        rotation_period: "23".to_string(),
        orbital_period: "304".to_string(),
        diameter: "10465".to_string(),
        climate: "arid".to_string(),
        gravity: "1 standard".to_string(),
        terrain: "desert".to_string(),
        surface_water: "1".to_string(),
        population: "200000".to_string(),
        residents: vec![format!("{CATALOG_BASE}/people/1/")],
        films: vec![format!("{CATALOG_BASE}/films/1/")],
        created: timestamp("2014-12-09T13:50:49.641000Z"),
        edited: timestamp("2014-12-20T20:58:18.411000Z"),
        url: planet_url(id),
    }
}

/// An enriched species without a homeworld, for ordering tests.
pub fn species(name: &str, height: &str) -> Species {
    map_to_species(remote_species(name, name, height, None), None)
}

// ---------------------------------------------------------------------------
// In-memory catalog
// ---------------------------------------------------------------------------

/// Items per listing page served by [`FakeCatalog`].
pub const FAKE_PAGE_SIZE: usize = 10;

/// Scriptable in-memory [`Catalog`].
///
/// Species are served in insertion order. Planet fetches can be delayed or
/// made to fail per id, and every planet fetch is recorded.
#[derive(Default)]
pub struct FakeCatalog {
    species: Vec<(String, RemoteSpecies)>,
    planets: Mutex<HashMap<String, RemotePlanet>>,
    planet_delays: HashMap<String, Duration>,
    planet_errors: HashMap<String, CoreError>,
    species_page_error: Option<CoreError>,
    planet_fetches: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_species(mut self, id: &str, species: RemoteSpecies) -> Self {
        self.species.push((id.to_string(), species));
        self
    }

    pub fn with_planet(self, id: &str, planet: RemotePlanet) -> Self {
        self.set_planet(id, planet);
        self
    }

    /// Delay every fetch of the given planet.
    pub fn with_planet_delay(mut self, id: &str, delay: Duration) -> Self {
        self.planet_delays.insert(id.to_string(), delay);
        self
    }

    /// Make every fetch of the given planet fail.
    pub fn with_planet_error(mut self, id: &str, err: CoreError) -> Self {
        self.planet_errors.insert(id.to_string(), err);
        self
    }

    /// Make every listing request fail.
    pub fn with_species_page_error(mut self, err: CoreError) -> Self {
        self.species_page_error = Some(err);
        self
    }

    /// Replace a planet as if the catalog had been edited upstream.
    pub fn set_planet(&self, id: &str, planet: RemotePlanet) {
        self.planets
            .lock()
            .expect("planet table poisoned")
            .insert(id.to_string(), planet);
    }

    /// Ids of every planet fetched so far, in request order.
    pub fn planet_fetches(&self) -> Vec<String> {
        self.planet_fetches
            .lock()
            .expect("fetch log poisoned")
            .clone()
    }

    fn page_url(page: usize) -> String {
        format!("{CATALOG_BASE}/species/?page={page}")
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn fetch_species(&self, id: &str) -> CoreResult<RemoteSpecies> {
        self.species
            .iter()
            .find(|(species_id, _)| species_id == id)
            .map(|(_, species)| species.clone())
            .ok_or_else(|| CoreError::NotFound {
                entity: entity::SPECIES,
                id: id.to_string(),
            })
    }

    async fn fetch_planet(&self, id: &str) -> CoreResult<RemotePlanet> {
        self.planet_fetches
            .lock()
            .expect("fetch log poisoned")
            .push(id.to_string());

        if let Some(delay) = self.planet_delays.get(id) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(err) = self.planet_errors.get(id) {
            return Err(err.clone());
        }

        self.planets
            .lock()
            .expect("planet table poisoned")
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity: entity::PLANET,
                id: id.to_string(),
            })
    }

    async fn fetch_species_page(&self, page: u32) -> CoreResult<Page<RemoteSpecies>> {
        if let Some(err) = &self.species_page_error {
            return Err(err.clone());
        }

        let page = page as usize;
        let last_page = self.species.len().div_ceil(FAKE_PAGE_SIZE).max(1);
        if page == 0 || page > last_page {
            return Err(CoreError::PageNotFound {
                entity: entity::SPECIES,
                page: page as u32,
            });
        }

        let results = self
            .species
            .iter()
            .skip((page - 1) * FAKE_PAGE_SIZE)
            .take(FAKE_PAGE_SIZE)
            .map(|(_, species)| species.clone())
            .collect();

        Ok(Page {
            count: self.species.len() as u64,
            next: (page < last_page).then(|| Self::page_url(page + 1)),
            previous: (page > 1).then(|| Self::page_url(page - 1)),
            results,
        })
    }

    async fn fetch_all_species(&self) -> CoreResult<Vec<RemoteSpecies>> {
        if let Some(err) = &self.species_page_error {
            return Err(err.clone());
        }
        Ok(self.species.iter().map(|(_, s)| s.clone()).collect())
    }
}
