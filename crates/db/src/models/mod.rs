pub mod planet_override;
