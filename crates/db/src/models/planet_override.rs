//! Planet override model.

use serde::Serialize;
use sqlx::FromRow;
use starchart_core::types::Timestamp;

/// A row from the `planet_overrides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlanetOverride {
    pub planet_id: String,
    pub destroyed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
