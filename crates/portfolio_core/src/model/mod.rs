//! Record schemas for the portfolio content tables.
//!
//! # Responsibility
//! - Define the canonical shapes of project and timeline entries.
//! - Keep wire naming (camelCase, kebab-case status values) in one place.
//!
//! # Invariants
//! - Every entry is identified by an id unique within its dataset.
//! - "Ongoing" and "not featured" are typed values, never implicit absence.

pub mod date;
pub mod project;
pub mod timeline;

/// Closed enumeration with a stable wire string per variant.
pub trait WireValue: Copy + Sized + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Stable wire string for this variant.
    fn as_str(self) -> &'static str;

    /// Exact, case-sensitive lookup by wire string.
    fn from_wire(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
    }
}
