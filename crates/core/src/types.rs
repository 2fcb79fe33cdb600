/// All catalog timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Entity names used when reporting catalog errors.
pub mod entity {
    pub const SPECIES: &str = "Species";
    pub const PLANET: &str = "Planet";
}
