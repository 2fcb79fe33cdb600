pub mod planet_override_repo;

pub use planet_override_repo::PlanetOverrideRepo;
