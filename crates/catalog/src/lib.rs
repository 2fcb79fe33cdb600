//! HTTP client for the remote species/planet catalog.
//!
//! Wraps the catalog's REST endpoints (single entity by id, paginated
//! listing) using [`reqwest`] and implements the core [`Catalog`] contract.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use starchart_core::catalog::Catalog;
use starchart_core::error::{CoreError, CoreResult};
use starchart_core::remote::{Page, RemotePlanet, RemoteSpecies};
use starchart_core::types::entity;

/// Default catalog base address.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Collections exposed by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Species,
    Planets,
}

impl Resource {
    /// URL path segment of the collection.
    pub fn path(self) -> &'static str {
        match self {
            Self::Species => "species",
            Self::Planets => "planets",
        }
    }

    /// Entity name used in error messages.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Species => entity::SPECIES,
            Self::Planets => entity::PLANET,
        }
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the catalog HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The catalog answered 404 for a single entity.
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The catalog answered 404 for a numbered listing page.
    #[error("{entity} page {page} not found")]
    PageNotFound { entity: &'static str, page: u32 },

    /// The catalog returned any other non-2xx status.
    #[error("Error fetching {entity}: {status_text}")]
    Status {
        entity: &'static str,
        status: u16,
        status_text: String,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Error decoding {entity}: {source}")]
    Decode {
        entity: &'static str,
        source: reqwest::Error,
    },
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Request(source) => CoreError::Transport(source.to_string()),
            CatalogError::NotFound { entity, id } => CoreError::NotFound { entity, id },
            CatalogError::PageNotFound { entity, page } => {
                CoreError::PageNotFound { entity, page }
            }
            CatalogError::Status {
                entity,
                status_text,
                ..
            } => CoreError::FetchFailed {
                entity,
                status: status_text,
            },
            CatalogError::Decode { entity, source } => CoreError::FetchFailed {
                entity,
                status: format!("invalid response body ({source})"),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client bound to one catalog base address.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client with its own connection pool and a per-request
    /// timeout.
    ///
    /// * `base_url` - e.g. `https://swapi.dev/api`; a trailing `/` is ignored.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single entity by identifier.
    ///
    /// Sends `GET {base}/{resource}/{id}/`. A 404 becomes
    /// [`CatalogError::NotFound`].
    pub async fn fetch_entity<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: &str,
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{}/{}/", self.base_url, resource.path(), id);
        tracing::debug!(%url, "Fetching catalog entity");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                entity: resource.entity(),
                id: id.to_string(),
            });
        }

        Self::parse_response(response, resource).await
    }

    /// Fetch one page of a listing (1-based).
    ///
    /// Sends `GET {base}/{resource}/?page={page}`. A 404 (past the last
    /// page) becomes [`CatalogError::PageNotFound`].
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        resource: Resource,
        page: u32,
    ) -> Result<Page<T>, CatalogError> {
        let url = format!("{}/{}/?page={}", self.base_url, resource.path(), page);
        tracing::debug!(%url, "Fetching catalog page");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::PageNotFound {
                entity: resource.entity(),
                page,
            });
        }

        Self::parse_response(response, resource).await
    }

    /// Fetch every item of a listing by following `next` links from the
    /// first page until the catalog reports no further page.
    ///
    /// Any failing page fails the whole walk; nothing partial is returned.
    /// A `next` link that answers 404 is an upstream failure, not a missing
    /// page.
    pub async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<Vec<T>, CatalogError> {
        let mut page: Page<T> = self.fetch_page(resource, 1).await?;
        let mut items = Vec::new();
        let mut pages = 1usize;

        loop {
            items.append(&mut page.results);
            let Some(next) = page.next.take() else {
                break;
            };
            page = self.fetch_page_url(resource, &next).await?;
            pages += 1;
        }

        tracing::debug!(
            resource = resource.path(),
            pages,
            items = items.len(),
            "Aggregated catalog listing"
        );
        Ok(items)
    }

    // ---- private helpers ----

    async fn fetch_page_url<T: DeserializeOwned>(
        &self,
        resource: Resource,
        url: &str,
    ) -> Result<Page<T>, CatalogError> {
        tracing::debug!(%url, "Fetching catalog page");
        let response = self.client.get(url).send().await?;
        Self::parse_response(response, resource).await
    }

    /// Ensure the response has a success status code, then decode the JSON
    /// body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
        resource: Resource,
    ) -> Result<T, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                entity: resource.entity(),
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| CatalogError::Decode {
                entity: resource.entity(),
                source,
            })
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn fetch_species(&self, id: &str) -> CoreResult<RemoteSpecies> {
        Ok(self.fetch_entity(Resource::Species, id).await?)
    }

    async fn fetch_planet(&self, id: &str) -> CoreResult<RemotePlanet> {
        Ok(self.fetch_entity(Resource::Planets, id).await?)
    }

    async fn fetch_species_page(&self, page: u32) -> CoreResult<Page<RemoteSpecies>> {
        Ok(self.fetch_page(Resource::Species, page).await?)
    }

    async fn fetch_all_species(&self) -> CoreResult<Vec<RemoteSpecies>> {
        Ok(self.fetch_all_pages(Resource::Species).await?)
    }
}
