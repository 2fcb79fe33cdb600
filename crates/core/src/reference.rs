//! Resolution of catalog references (URLs) to entity identifiers.

use crate::error::{CoreError, CoreResult};

/// Extract the numeric entity identifier from a catalog reference URL.
///
/// One trailing `/` is stripped, then the last path segment is taken, so
/// `https://swapi.dev/api/planets/1/` yields `1`. A segment that is empty or
/// not a decimal number is rejected.
pub fn extract_id_from_url(url: &str) -> CoreResult<u32> {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    let segment = trimmed.rsplit('/').next().unwrap_or_default();

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidReference(format!(
            "cannot extract an identifier from {url:?}"
        )));
    }
    segment.parse().map_err(|_| {
        CoreError::InvalidReference(format!("identifier out of range in {url:?}"))
    })
}
