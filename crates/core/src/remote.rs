//! Wire records as the remote catalog serves them.
//!
//! Field names follow the catalog's snake_case JSON. These types are only
//! ever deserialised from the catalog and projected by [`crate::mappers`];
//! nothing outside the core should depend on their layout.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// A species record straight from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteSpecies {
    pub name: String,
    pub classification: String,
    pub designation: String,
    pub average_height: String,
    pub skin_colors: String,
    pub hair_colors: String,
    pub eye_colors: String,
    pub average_lifespan: String,
    /// URL of the homeworld planet, or `null` for species without one.
    #[serde(default)]
    pub homeworld: Option<String>,
    pub language: String,
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: Timestamp,
    pub edited: Timestamp,
    pub url: String,
}

/// A planet record straight from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePlanet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    #[serde(default)]
    pub residents: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: Timestamp,
    pub edited: Timestamp,
    pub url: String,
}

/// One page of a paginated listing.
///
/// `count` is the size of the whole collection, not of this page. `next` and
/// `previous` are opaque markers (the catalog uses absolute URLs) and are
/// `None` at the boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Replace the page items, keeping the pagination markers untouched.
    pub fn with_results<U>(self, results: Vec<U>) -> Page<U> {
        Page {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results,
        }
    }
}
