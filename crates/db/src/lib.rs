//! PostgreSQL persistence for the planet destruction overlay.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use starchart_core::error::{CoreError, CoreResult};
use starchart_core::store::OverrideStore;

pub mod models;
pub mod repositories;

use repositories::PlanetOverrideRepo;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// [`OverrideStore`] backed by the `planet_overrides` table.
#[derive(Debug, Clone)]
pub struct PgOverrideStore {
    pool: DbPool,
}

impl PgOverrideStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Override store query failed");
    CoreError::Store(err.to_string())
}

#[async_trait]
impl OverrideStore for PgOverrideStore {
    async fn get(&self, planet_id: &str) -> CoreResult<Option<bool>> {
        let row = PlanetOverrideRepo::find_by_planet_id(&self.pool, planet_id)
            .await
            .map_err(store_error)?;
        Ok(row.map(|r| r.destroyed))
    }

    async fn set(&self, planet_id: &str, destroyed: bool) -> CoreResult<bool> {
        let row = PlanetOverrideRepo::upsert(&self.pool, planet_id, destroyed)
            .await
            .map_err(store_error)?;
        tracing::debug!(planet_id, destroyed = row.destroyed, "Planet override stored");
        Ok(row.destroyed)
    }

    async fn health_check(&self) -> CoreResult<()> {
        health_check(&self.pool).await.map_err(store_error)
    }
}
