/// Domain error shared by every layer of the enrichment pipeline.
///
/// Collaborator failures are surfaced unchanged in kind. The not-found and
/// `FetchFailed` variants carry context about which resource was being
/// fetched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A listing page past the end of the catalog.
    #[error("{entity} page {page} not found")]
    PageNotFound { entity: &'static str, page: u32 },

    #[error("Error fetching {entity}: {status}")]
    FetchFailed { entity: &'static str, status: String },

    /// Network-level failure; the message is the underlying cause verbatim.
    #[error("{0}")]
    Transport(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Override store error: {0}")]
    Store(String),
}

/// Result alias used throughout the core and its collaborators.
pub type CoreResult<T> = Result<T, CoreError>;
