//! Query parameter types for API handlers.

use serde::Deserialize;
use starchart_core::sort::{SortOrder, SpeciesSort};

/// Query parameters for the species listing (`?sort=&order=`).
///
/// An unknown `sort` key leaves the catalog order untouched; an unknown
/// `order` is rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct SpeciesListParams {
    pub sort: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
}

impl SpeciesListParams {
    pub fn sort_key(&self) -> Option<SpeciesSort> {
        self.sort.as_deref().and_then(SpeciesSort::parse)
    }
}
