//! Generic catalog container and repository contract.

use crate::model::date::{format_entry_date, EntryPeriod};
use crate::model::project::ProjectEntry;
use crate::model::timeline::TimelineEntry;
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog construction errors.
#[derive(Debug)]
pub enum CatalogError {
    /// Dataset text is not a valid entry list (includes rejected dates).
    Parse(serde_json::Error),
    /// Entry at `index` has a blank id.
    EmptyId { index: usize },
    DuplicateId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid dataset: {err}"),
            Self::EmptyId { index } => write!(f, "entry #{index} has an empty id"),
            Self::DuplicateId(id) => write!(f, "duplicate entry id: `{id}`"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::EmptyId { .. } | Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Record type that can live in a `Catalog`.
pub trait CatalogEntry: DeserializeOwned {
    /// Dataset name used in log events.
    const DATASET: &'static str;

    fn id(&self) -> &str;
    fn period(&self) -> &EntryPeriod;
}

impl CatalogEntry for ProjectEntry {
    const DATASET: &'static str = "projects";

    fn id(&self) -> &str {
        &self.id
    }

    fn period(&self) -> &EntryPeriod {
        &self.period
    }
}

impl CatalogEntry for TimelineEntry {
    const DATASET: &'static str = "timeline";

    fn id(&self) -> &str {
        &self.id
    }

    fn period(&self) -> &EntryPeriod {
        &self.period
    }
}

/// Read-only access to an ordered entry sequence.
pub trait EntryRepository<T> {
    /// Entries in authored order.
    fn entries(&self) -> &[T];
}

impl<T, R: EntryRepository<T> + ?Sized> EntryRepository<T> for &R {
    fn entries(&self) -> &[T] {
        (**self).entries()
    }
}

/// Ordered dataset whose entries passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<T> {
    entries: Vec<T>,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Builds a catalog from entries, keeping their order.
    ///
    /// # Errors
    /// - `EmptyId` when an id is blank.
    /// - `DuplicateId` when two entries share an id.
    ///
    /// Periods whose end precedes their start are accepted and logged.
    pub fn new(entries: Vec<T>) -> Result<Self, CatalogError> {
        validate_entries(&entries)?;
        info!(
            "event=catalog_load module=catalog status=ok dataset={} entries={}",
            T::DATASET,
            entries.len()
        );
        Ok(Self { entries })
    }

    /// Parses a JSON entry list and validates it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<T> = serde_json::from_str(json)?;
        Self::new(entries)
    }
}

impl<T> Catalog<T> {
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_entries<T: CatalogEntry>(entries: &[T]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let id = entry.id();
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyId { index });
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }

        let period = entry.period();
        if period.is_reversed() {
            warn!(
                "event=catalog_validate module=catalog status=warn dataset={} id={} \
                 reason=end_before_start start={} end={}",
                T::DATASET,
                id,
                format_entry_date(period.start),
                period.end.date().map(format_entry_date).unwrap_or_default()
            );
        }
    }
    Ok(())
}

impl<T> EntryRepository<T> for Catalog<T> {
    fn entries(&self) -> &[T] {
        &self.entries
    }
}
