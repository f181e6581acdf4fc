//! Timeline query service.
//!
//! # Responsibility
//! - Per-type counts, type filtering, featured and ongoing subsets.
//! - Approximate total work experience.
//!
//! # Invariants
//! - Type and featured views are ordered by start date, most recent first.
//! - Sorting happens on a fresh view; ties keep authored order.
//! - Experience totals treat a month as exactly 30 days.

use crate::catalog::EntryRepository;
use crate::model::timeline::{TimelineEntry, TimelineKind};
use crate::service::selector::Selector;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Per-type timeline counts; types without entries report zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindBreakdown {
    pub education: usize,
    pub work: usize,
    pub project: usize,
    pub achievement: usize,
}

impl KindBreakdown {
    pub fn count(&self, kind: TimelineKind) -> usize {
        match kind {
            TimelineKind::Education => self.education,
            TimelineKind::Work => self.work,
            TimelineKind::Project => self.project,
            TimelineKind::Achievement => self.achievement,
        }
    }

    pub fn sum(&self) -> usize {
        self.education + self.work + self.project + self.achievement
    }

    fn record(&mut self, kind: TimelineKind) {
        match kind {
            TimelineKind::Education => self.education += 1,
            TimelineKind::Work => self.work += 1,
            TimelineKind::Project => self.project += 1,
            TimelineKind::Achievement => self.achievement += 1,
        }
    }
}

/// Dataset size plus type breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStats {
    pub total: usize,
    pub by_type: KindBreakdown,
}

/// Summed work experience split into whole years and leftover months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub years: u64,
    pub months: u64,
}

impl WorkExperience {
    pub fn from_months(total_months: u64) -> Self {
        Self {
            years: total_months / 12,
            months: total_months % 12,
        }
    }

    pub fn total_months(&self) -> u64 {
        self.years * 12 + self.months
    }
}

pub fn timeline_stats(entries: &[TimelineEntry]) -> TimelineStats {
    let mut by_type = KindBreakdown::default();
    for entry in entries {
        by_type.record(entry.kind);
    }
    TimelineStats {
        total: entries.len(),
        by_type,
    }
}

/// Stable sort, most recent start first.
fn most_recent_first(mut items: Vec<&TimelineEntry>) -> Vec<&TimelineEntry> {
    items.sort_by(|a, b| b.period.start.cmp(&a.period.start));
    items
}

/// Entries whose type matches `selector`, most recent first.
pub fn select_timeline<'a>(
    entries: &'a [TimelineEntry],
    selector: &Selector<TimelineKind>,
) -> Vec<&'a TimelineEntry> {
    most_recent_first(
        entries
            .iter()
            .filter(|entry| selector.matches(&entry.kind))
            .collect(),
    )
}

/// Entries filtered by a raw type argument (`None` or `all` keeps everything).
pub fn timeline_by_type<'a>(
    entries: &'a [TimelineEntry],
    kind: Option<&str>,
) -> Vec<&'a TimelineEntry> {
    select_timeline(entries, &Selector::parse(kind))
}

pub fn featured_timeline(entries: &[TimelineEntry]) -> Vec<&TimelineEntry> {
    most_recent_first(entries.iter().filter(|entry| entry.is_featured()).collect())
}

/// Ongoing entries, in authored order.
pub fn current_items(entries: &[TimelineEntry]) -> Vec<&TimelineEntry> {
    entries.iter().filter(|entry| entry.is_ongoing()).collect()
}

/// Sums 30-day months over `work` entries, measuring ongoing ones up to `now`.
pub fn total_work_experience_at(entries: &[TimelineEntry], now: DateTime<Utc>) -> WorkExperience {
    let total_months: u64 = entries
        .iter()
        .filter(|entry| entry.kind == TimelineKind::Work)
        .map(|entry| entry.period.approx_months(now))
        .sum();
    debug!(
        "event=work_experience module=service status=ok total_months={}",
        total_months
    );
    WorkExperience::from_months(total_months)
}

pub fn find_timeline_entry<'a>(
    entries: &'a [TimelineEntry],
    id: &str,
) -> Option<&'a TimelineEntry> {
    entries.iter().find(|entry| entry.id == id)
}

/// Query service wrapper over a timeline repository.
pub struct TimelineService<R: EntryRepository<TimelineEntry>> {
    repo: R,
}

impl<R: EntryRepository<TimelineEntry>> TimelineService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn stats(&self) -> TimelineStats {
        timeline_stats(self.repo.entries())
    }

    pub fn by_type(&self, kind: Option<&str>) -> Vec<&TimelineEntry> {
        timeline_by_type(self.repo.entries(), kind)
    }

    pub fn select(&self, selector: &Selector<TimelineKind>) -> Vec<&TimelineEntry> {
        select_timeline(self.repo.entries(), selector)
    }

    pub fn featured(&self) -> Vec<&TimelineEntry> {
        featured_timeline(self.repo.entries())
    }

    pub fn current(&self) -> Vec<&TimelineEntry> {
        current_items(self.repo.entries())
    }

    /// Work experience measured against the system clock.
    pub fn total_work_experience(&self) -> WorkExperience {
        self.total_work_experience_at(Utc::now())
    }

    pub fn total_work_experience_at(&self, now: DateTime<Utc>) -> WorkExperience {
        total_work_experience_at(self.repo.entries(), now)
    }

    pub fn find(&self, id: &str) -> Option<&TimelineEntry> {
        find_timeline_entry(self.repo.entries(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::{timeline_by_type, total_work_experience_at, WorkExperience};
    use crate::model::date::EntryPeriod;
    use crate::model::timeline::{TimelineEntry, TimelineKind};
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, kind: TimelineKind, start: &str, end: Option<&str>) -> TimelineEntry {
        TimelineEntry::new(
            id,
            id,
            kind,
            EntryPeriod::parse(start, end).expect("valid period"),
        )
    }

    #[test]
    fn work_experience_splits_years_and_months() {
        assert_eq!(WorkExperience::from_months(0), WorkExperience::default());
        assert_eq!(
            WorkExperience::from_months(27),
            WorkExperience { years: 2, months: 3 }
        );
        assert_eq!(WorkExperience::from_months(27).total_months(), 27);
    }

    #[test]
    fn work_experience_sums_only_work_entries() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let entries = vec![
            // 360 days -> 12 months exactly.
            entry("job-a", TimelineKind::Work, "2020-01-01", Some("2020-12-26")),
            // 31 days -> rounds up to 2 months.
            entry("job-b", TimelineKind::Work, "2022-01-01", Some("2022-02-01")),
            entry("school", TimelineKind::Education, "2010-01-01", Some("2019-01-01")),
        ];
        assert_eq!(
            total_work_experience_at(&entries, now),
            WorkExperience { years: 1, months: 2 }
        );
    }

    #[test]
    fn ongoing_work_is_measured_to_now() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        // 2024-01-01 .. 2024-03-01 is 60 days.
        let entries = vec![entry("job", TimelineKind::Work, "2024-01-01", None)];
        assert_eq!(
            total_work_experience_at(&entries, now),
            WorkExperience { years: 0, months: 2 }
        );
    }

    #[test]
    fn equal_start_dates_keep_authored_order() {
        let entries = vec![
            entry("first", TimelineKind::Project, "2024-01-01", None),
            entry("older", TimelineKind::Project, "2023-01-01", None),
            entry("second", TimelineKind::Project, "2024-01-01", None),
            entry("newest", TimelineKind::Project, "2024-05-01", None),
        ];
        let ids: Vec<&str> = timeline_by_type(&entries, Some("project"))
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["newest", "first", "second", "older"]);
    }

    #[test]
    fn unknown_type_yields_empty_view() {
        let entries = vec![entry("a", TimelineKind::Work, "2024-01-01", None)];
        assert!(timeline_by_type(&entries, Some("hobby")).is_empty());
    }
}
