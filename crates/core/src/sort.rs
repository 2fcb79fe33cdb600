//! Deterministic ordering of enriched species.
//!
//! Heights are free text in the catalog. Values with a numeric prefix are
//! ordered numerically in the requested direction; everything else
//! ("n/a", "unknown", "indefinite") sinks to the end in both directions,
//! keeping its input order.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::entities::Species;

// ---------------------------------------------------------------------------
// Sort parameters
// ---------------------------------------------------------------------------

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Keys the species listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesSort {
    AverageHeight,
}

impl SpeciesSort {
    /// Parse a sort key as it appears in a query string.
    ///
    /// Unknown keys yield `None`; callers treat that as "no sort".
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "average_height" => Some(Self::AverageHeight),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Apply an optional sort to a list of species.
pub fn sort_species(
    species: Vec<Species>,
    sort: Option<SpeciesSort>,
    order: SortOrder,
) -> Vec<Species> {
    match sort {
        Some(SpeciesSort::AverageHeight) => sort_species_by_average_height(species, order),
        None => species,
    }
}

/// Stable sort by numeric `average_height`, unparseable heights last.
pub fn sort_species_by_average_height(
    mut species: Vec<Species>,
    order: SortOrder,
) -> Vec<Species> {
    species.sort_by(|a, b| {
        compare_heights(
            parse_height(&a.average_height),
            parse_height(&b.average_height),
            order,
        )
    });
    species
}

/// Compare two parsed heights. A missing value is greater than any present
/// one regardless of `order`; two missing values are equal.
fn compare_heights(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match order {
            SortOrder::Asc => a.total_cmp(&b),
            SortOrder::Desc => b.total_cmp(&a),
        },
    }
}

/// Parse the leading numeric content of a height.
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction and exponent, or `Infinity`. Trailing text is ignored
/// (`"180cm"` is 180). Returns `None` when there is no numeric prefix.
pub fn parse_height(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
