//! Entities served by this system.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// A planet with the local destruction overlay applied.
///
/// Every field except `destroyed` is what the catalog last reported.
/// `destroyed` comes from the override store and defaults to `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    pub residents: Vec<String>,
    pub films: Vec<String>,
    pub created: Timestamp,
    pub edited: Timestamp,
    pub url: String,
    pub destroyed: bool,
}

/// A species with its homeworld resolved into a full [`Planet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub classification: String,
    pub designation: String,
    /// Numeric text, or a sentinel such as `"n/a"` / `"unknown"`.
    pub average_height: String,
    pub skin_colors: String,
    pub hair_colors: String,
    pub eye_colors: String,
    pub average_lifespan: String,
    pub homeworld: Option<Planet>,
    pub language: String,
    pub people: Vec<String>,
    pub films: Vec<String>,
    pub created: Timestamp,
    pub edited: Timestamp,
    pub url: String,
}
