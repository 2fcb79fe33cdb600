//! Domain core of the species enrichment service.
//!
//! Holds the served entities, the catalog wire records and their mappers,
//! the error taxonomy, the species ordering rules and the contracts of the
//! two collaborators (catalog and override store). No I/O happens here.

pub mod catalog;
pub mod entities;
pub mod error;
pub mod mappers;
pub mod overlay;
pub mod reference;
pub mod remote;
pub mod sort;
pub mod store;
pub mod types;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;
