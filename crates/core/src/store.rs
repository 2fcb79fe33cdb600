//! Override store contract and the in-process implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;

/// Keyed persistence for the planet destruction overlay.
#[async_trait]
pub trait OverrideStore: Send + Sync {
    /// The recorded status for a planet, or `None` if never written.
    async fn get(&self, planet_id: &str) -> CoreResult<Option<bool>>;

    /// Record a status (insert or overwrite) and return the value now held.
    async fn set(&self, planet_id: &str, destroyed: bool) -> CoreResult<bool>;

    /// Check that the backing storage is reachable.
    async fn health_check(&self) -> CoreResult<()> {
        Ok(())
    }
}

/// Override store held in process memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryOverrideStore {
    entries: RwLock<HashMap<String, bool>>,
}

impl MemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of planets with a recorded status.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl OverrideStore for MemoryOverrideStore {
    async fn get(&self, planet_id: &str) -> CoreResult<Option<bool>> {
        Ok(self.entries.read().await.get(planet_id).copied())
    }

    async fn set(&self, planet_id: &str, destroyed: bool) -> CoreResult<bool> {
        self.entries
            .write()
            .await
            .insert(planet_id.to_string(), destroyed);
        Ok(destroyed)
    }
}
