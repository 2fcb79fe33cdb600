pub mod planets;
pub mod species;
