//! Contract of the remote, read-only catalog.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::remote::{Page, RemotePlanet, RemoteSpecies};

/// Read access to the remote catalog.
///
/// Implementations report a missing entity as [`CoreError::NotFound`],
/// any other non-success status as [`CoreError::FetchFailed`] and network
/// failures as [`CoreError::Transport`] with the original message.
///
/// [`CoreError::NotFound`]: crate::error::CoreError::NotFound
/// [`CoreError::FetchFailed`]: crate::error::CoreError::FetchFailed
/// [`CoreError::Transport`]: crate::error::CoreError::Transport
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn fetch_species(&self, id: &str) -> CoreResult<RemoteSpecies>;

    async fn fetch_planet(&self, id: &str) -> CoreResult<RemotePlanet>;

    /// Fetch one page of the species listing (1-based).
    async fn fetch_species_page(&self, page: u32) -> CoreResult<Page<RemoteSpecies>>;

    /// Walk every page of the species listing and return the items in
    /// catalog order. Fails as a whole if any page fails.
    async fn fetch_all_species(&self) -> CoreResult<Vec<RemoteSpecies>>;
}
