//! Portfolio content tables and the pure queries over them.
//! This crate is the single source of truth for the shipped project and
//! timeline data.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod service;
pub mod shipped;

pub use catalog::{
    Catalog, CatalogEntry, CatalogError, EntryRepository, ProjectCatalog, TimelineCatalog,
};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::date::{
    parse_entry_date, DateParseError, EntryEnd, EntryPeriod, PeriodError, APPROX_MONTH_MILLIS,
};
pub use model::project::{ProjectCategory, ProjectEntry, ProjectStatus};
pub use model::timeline::{LinkKind, TimelineEntry, TimelineKind, TimelineLink};
pub use model::WireValue;
pub use service::project_service::{ProjectService, ProjectStats, StatusBreakdown};
pub use service::selector::{Selector, SELECT_ALL};
pub use service::timeline_service::{
    KindBreakdown, TimelineService, TimelineStats, WorkExperience,
};
pub use shipped::{
    all_tech_stack, current_items, featured_projects, featured_timeline, project_catalog,
    project_service, project_stats, projects_by_category, timeline_by_type, timeline_catalog,
    timeline_service, timeline_stats, total_work_experience, validate_shipped_datasets,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
