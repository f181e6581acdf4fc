//! Hand-authored portfolio datasets bundled with the crate.
//!
//! # Responsibility
//! - Embed the project and timeline tables at compile time.
//! - Expose them as process-wide immutable catalogs.
//! - Offer zero-argument queries over those catalogs.
//!
//! # Invariants
//! - Each catalog is parsed and validated once, on first access.
//! - An invalid shipped dataset is a fatal configuration error.
//! - Callers only ever receive shared references; stored order never changes.

use crate::catalog::{CatalogError, ProjectCatalog, TimelineCatalog};
use crate::model::project::ProjectEntry;
use crate::model::timeline::TimelineEntry;
use crate::service::project_service::{ProjectService, ProjectStats};
use crate::service::timeline_service::{TimelineService, TimelineStats, WorkExperience};
use crate::service::{project_service as project_queries, timeline_service as timeline_queries};
use chrono::Utc;
use log::error;
use once_cell::sync::Lazy;

/// Raw project table as authored.
pub const PROJECTS_JSON: &str = include_str!("../data/projects.json");
/// Raw timeline table as authored.
pub const TIMELINE_JSON: &str = include_str!("../data/timeline.json");

static PROJECT_CATALOG: Lazy<ProjectCatalog> = Lazy::new(|| {
    ProjectCatalog::from_json(PROJECTS_JSON).unwrap_or_else(|err| fatal_dataset("projects", &err))
});

static TIMELINE_CATALOG: Lazy<TimelineCatalog> = Lazy::new(|| {
    TimelineCatalog::from_json(TIMELINE_JSON).unwrap_or_else(|err| fatal_dataset("timeline", &err))
});

fn fatal_dataset(dataset: &str, err: &CatalogError) -> ! {
    error!(
        "event=catalog_load module=catalog status=error dataset={} error={}",
        dataset, err
    );
    panic!("shipped {dataset} dataset is invalid: {err}");
}

/// Parses and validates both shipped datasets without touching the globals.
///
/// Binaries call this at startup to surface a broken dataset as an error
/// instead of a panic on first query.
pub fn validate_shipped_datasets() -> Result<(), CatalogError> {
    ProjectCatalog::from_json(PROJECTS_JSON)?;
    TimelineCatalog::from_json(TIMELINE_JSON)?;
    Ok(())
}

pub fn project_catalog() -> &'static ProjectCatalog {
    &PROJECT_CATALOG
}

pub fn timeline_catalog() -> &'static TimelineCatalog {
    &TIMELINE_CATALOG
}

pub fn project_service() -> ProjectService<&'static ProjectCatalog> {
    ProjectService::new(project_catalog())
}

pub fn timeline_service() -> TimelineService<&'static TimelineCatalog> {
    TimelineService::new(timeline_catalog())
}

pub fn project_stats() -> ProjectStats {
    project_queries::project_stats(project_catalog().entries())
}

/// Projects in `category`; `None` or `"all"` returns the whole table.
pub fn projects_by_category(category: Option<&str>) -> Vec<&'static ProjectEntry> {
    project_queries::projects_by_category(project_catalog().entries(), category)
}

pub fn featured_projects() -> Vec<&'static ProjectEntry> {
    project_queries::featured_projects(project_catalog().entries())
}

pub fn all_tech_stack() -> Vec<String> {
    project_queries::all_tech_stack(project_catalog().entries())
}

pub fn timeline_stats() -> TimelineStats {
    timeline_queries::timeline_stats(timeline_catalog().entries())
}

/// Timeline entries of `kind`, most recent first; `None` or `"all"` keeps every type.
pub fn timeline_by_type(kind: Option<&str>) -> Vec<&'static TimelineEntry> {
    timeline_queries::timeline_by_type(timeline_catalog().entries(), kind)
}

pub fn featured_timeline() -> Vec<&'static TimelineEntry> {
    timeline_queries::featured_timeline(timeline_catalog().entries())
}

pub fn current_items() -> Vec<&'static TimelineEntry> {
    timeline_queries::current_items(timeline_catalog().entries())
}

pub fn total_work_experience() -> WorkExperience {
    timeline_queries::total_work_experience_at(timeline_catalog().entries(), Utc::now())
}
