//! Repository for the `planet_overrides` table.

use sqlx::PgPool;

use crate::models::planet_override::PlanetOverride;

/// Column list for `planet_overrides` queries.
const COLUMNS: &str = "planet_id, destroyed, created_at, updated_at";

/// Reads and upserts the destruction overlay.
pub struct PlanetOverrideRepo;

impl PlanetOverrideRepo {
    /// Find the override for a planet, if one was ever recorded.
    pub async fn find_by_planet_id(
        pool: &PgPool,
        planet_id: &str,
    ) -> Result<Option<PlanetOverride>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planet_overrides WHERE planet_id = $1");
        sqlx::query_as::<_, PlanetOverride>(&query)
            .bind(planet_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or overwrite the override for a planet and return the stored row.
    ///
    /// A single `ON CONFLICT` statement, so the returned row is exactly what
    /// the table holds after the write.
    pub async fn upsert(
        pool: &PgPool,
        planet_id: &str,
        destroyed: bool,
    ) -> Result<PlanetOverride, sqlx::Error> {
        let query = format!(
            "INSERT INTO planet_overrides (planet_id, destroyed) \
             VALUES ($1, $2) \
             ON CONFLICT (planet_id) DO UPDATE \
             SET destroyed = EXCLUDED.destroyed, updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlanetOverride>(&query)
            .bind(planet_id)
            .bind(destroyed)
            .fetch_one(pool)
            .await
    }
}
