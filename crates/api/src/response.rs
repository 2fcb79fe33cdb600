//! Response envelopes for API handlers.
//!
//! Single entities and unpaginated lists are wrapped under a key naming the
//! resource (`{ "species": ... }`, `{ "planet": ... }`). Pages are returned
//! as the bare `Page` object so its markers stay at the top level.

use serde::Serialize;
use starchart_core::entities::{Planet, Species};

/// `{ "species": T }` envelope, for one species or a list of them.
#[derive(Debug, Serialize)]
pub struct SpeciesResponse<T: Serialize> {
    pub species: T,
}

/// `{ "planet": Planet }` envelope.
#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub planet: Planet,
}

pub type SpeciesListResponse = SpeciesResponse<Vec<Species>>;
