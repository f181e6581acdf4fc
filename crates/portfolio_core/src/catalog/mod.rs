//! Validated, immutable content datasets.
//!
//! # Responsibility
//! - Hold each dataset as an ordered, read-only sequence of entries.
//! - Validate ids and dates once, at construction.
//!
//! # Invariants
//! - Catalog order is the authored order and is never mutated.
//! - No two entries in one catalog share an id.

pub mod entry_catalog;

pub use entry_catalog::{Catalog, CatalogEntry, CatalogError, EntryRepository};

use crate::model::project::ProjectEntry;
use crate::model::timeline::TimelineEntry;

pub type ProjectCatalog = Catalog<ProjectEntry>;
pub type TimelineCatalog = Catalog<TimelineEntry>;
