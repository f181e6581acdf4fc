//! Filter argument parsing shared by category and type queries.

use crate::model::WireValue;

/// Sentinel filter value selecting every entry.
pub const SELECT_ALL: &str = "all";

/// Parsed filter argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    /// No filter, or the `all` sentinel.
    All,
    Only(T),
    /// Value names no known variant; selects nothing.
    Unmatched,
}

impl<T: WireValue> Selector<T> {
    /// Parses an optional filter argument.
    ///
    /// Matching is exact and case-sensitive. Unknown values never error.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(SELECT_ALL) => Self::All,
            Some(other) => T::from_wire(other).map_or(Self::Unmatched, Self::Only),
        }
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
            Self::Unmatched => false,
        }
    }
}
