//! Projections from catalog wire records to served entities.

use crate::entities::{Planet, Species};
use crate::remote::{RemotePlanet, RemoteSpecies};

/// Project a catalog planet, stamping the given destruction status.
pub fn map_to_planet(remote: RemotePlanet, destroyed: bool) -> Planet {
    Planet {
        name: remote.name,
        rotation_period: remote.rotation_period,
        orbital_period: remote.orbital_period,
        diameter: remote.diameter,
        climate: remote.climate,
        gravity: remote.gravity,
        terrain: remote.terrain,
        surface_water: remote.surface_water,
        population: remote.population,
        residents: remote.residents,
        films: remote.films,
        created: remote.created,
        edited: remote.edited,
        url: remote.url,
        destroyed,
    }
}

/// Project a catalog species. `homeworld` is used as given; resolving the
/// reference is the caller's job.
pub fn map_to_species(remote: RemoteSpecies, homeworld: Option<Planet>) -> Species {
    Species {
        name: remote.name,
        classification: remote.classification,
        designation: remote.designation,
        average_height: remote.average_height,
        skin_colors: remote.skin_colors,
        hair_colors: remote.hair_colors,
        eye_colors: remote.eye_colors,
        average_lifespan: remote.average_lifespan,
        homeworld,
        language: remote.language,
        people: remote.people,
        films: remote.films,
        created: remote.created,
        edited: remote.edited,
        url: remote.url,
    }
}
