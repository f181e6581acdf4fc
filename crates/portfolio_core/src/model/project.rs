//! Project entry schema.

use crate::model::date::EntryPeriod;
use crate::model::WireValue;
use serde::{Deserialize, Serialize};

/// Platform a project targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Desktop,
    Other,
}

impl WireValue for ProjectCategory {
    const ALL: &'static [Self] = &[Self::Web, Self::Mobile, Self::Desktop, Self::Other];

    fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Other => "other",
        }
    }
}

/// Delivery state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl WireValue for ProjectStatus {
    const ALL: &'static [Self] = &[Self::Completed, Self::InProgress, Self::Planned];

    fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }
}

/// One portfolio project.
///
/// `image`, `live_demo`, `source_code` and `tags` are display metadata only;
/// no query reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: ProjectCategory,
    /// Ordered as authored; may repeat values used by other entries.
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
    #[serde(flatten)]
    pub period: EntryPeriod,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ProjectEntry {
    /// Creates a non-featured entry with no display metadata.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: ProjectCategory,
        status: ProjectStatus,
        period: EntryPeriod,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image: None,
            category,
            tech_stack: Vec::new(),
            status,
            live_demo: None,
            source_code: None,
            period,
            featured: false,
            tags: Vec::new(),
        }
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn is_ongoing(&self) -> bool {
        self.period.is_ongoing()
    }
}
