//! Timeline entry schema.

use crate::model::date::EntryPeriod;
use crate::model::WireValue;
use serde::{Deserialize, Serialize};

/// Kind of life event a timeline entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Education,
    Work,
    Project,
    Achievement,
}

impl WireValue for TimelineKind {
    const ALL: &'static [Self] = &[
        Self::Education,
        Self::Work,
        Self::Project,
        Self::Achievement,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Work => "work",
            Self::Project => "project",
            Self::Achievement => "achievement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Website,
    Certificate,
    Project,
    Other,
}

/// External reference attached to a timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineLink {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

/// One timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: TimelineKind,
    #[serde(flatten)]
    pub period: EntryPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<TimelineLink>,
    /// Iconify icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl TimelineEntry {
    /// Creates a non-featured entry with no display metadata.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: TimelineKind,
        period: EntryPeriod,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            kind,
            period,
            location: None,
            organization: None,
            position: None,
            skills: Vec::new(),
            achievements: Vec::new(),
            links: Vec::new(),
            icon: None,
            color: None,
            featured: false,
        }
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    /// An entry without an end date continues to the present.
    pub fn is_ongoing(&self) -> bool {
        self.period.is_ongoing()
    }
}
