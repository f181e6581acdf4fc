//! Project query service.
//!
//! # Responsibility
//! - Status counts, category filtering, featured subset, tech-stack union.
//!
//! # Invariants
//! - Filtered views keep authored order.
//! - Tech-stack output is deduplicated and ascending.

use crate::catalog::EntryRepository;
use crate::model::project::{ProjectCategory, ProjectEntry, ProjectStatus};
use crate::service::selector::Selector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-status project counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub completed: usize,
    pub in_progress: usize,
    pub planned: usize,
}

impl StatusBreakdown {
    pub fn count(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Completed => self.completed,
            ProjectStatus::InProgress => self.in_progress,
            ProjectStatus::Planned => self.planned,
        }
    }

    fn record(&mut self, status: ProjectStatus) {
        match status {
            ProjectStatus::Completed => self.completed += 1,
            ProjectStatus::InProgress => self.in_progress += 1,
            ProjectStatus::Planned => self.planned += 1,
        }
    }
}

/// Dataset size plus status breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: usize,
    pub by_status: StatusBreakdown,
}

/// Counts entries overall and per status.
pub fn project_stats(entries: &[ProjectEntry]) -> ProjectStats {
    let mut by_status = StatusBreakdown::default();
    for entry in entries {
        by_status.record(entry.status);
    }
    ProjectStats {
        total: entries.len(),
        by_status,
    }
}

/// Entries whose category matches `selector`, in authored order.
pub fn select_projects<'a>(
    entries: &'a [ProjectEntry],
    selector: &Selector<ProjectCategory>,
) -> Vec<&'a ProjectEntry> {
    entries
        .iter()
        .filter(|entry| selector.matches(&entry.category))
        .collect()
}

/// Entries filtered by a raw category argument (`None` or `all` keeps everything).
pub fn projects_by_category<'a>(
    entries: &'a [ProjectEntry],
    category: Option<&str>,
) -> Vec<&'a ProjectEntry> {
    select_projects(entries, &Selector::parse(category))
}

pub fn featured_projects(entries: &[ProjectEntry]) -> Vec<&ProjectEntry> {
    entries.iter().filter(|entry| entry.is_featured()).collect()
}

/// Union of every entry's tech stack, deduplicated and sorted ascending.
pub fn all_tech_stack(entries: &[ProjectEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.tech_stack.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn find_project<'a>(entries: &'a [ProjectEntry], id: &str) -> Option<&'a ProjectEntry> {
    entries.iter().find(|entry| entry.id == id)
}

/// Query service wrapper over a project repository.
pub struct ProjectService<R: EntryRepository<ProjectEntry>> {
    repo: R,
}

impl<R: EntryRepository<ProjectEntry>> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn stats(&self) -> ProjectStats {
        project_stats(self.repo.entries())
    }

    pub fn by_category(&self, category: Option<&str>) -> Vec<&ProjectEntry> {
        projects_by_category(self.repo.entries(), category)
    }

    pub fn select(&self, selector: &Selector<ProjectCategory>) -> Vec<&ProjectEntry> {
        select_projects(self.repo.entries(), selector)
    }

    pub fn featured(&self) -> Vec<&ProjectEntry> {
        featured_projects(self.repo.entries())
    }

    pub fn all_tech_stack(&self) -> Vec<String> {
        all_tech_stack(self.repo.entries())
    }

    pub fn find(&self, id: &str) -> Option<&ProjectEntry> {
        find_project(self.repo.entries(), id)
    }
}
