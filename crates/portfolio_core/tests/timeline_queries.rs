use chrono::{TimeZone, Utc};
use portfolio_core::{
    current_items, featured_timeline, timeline_by_type, timeline_catalog, timeline_service,
    timeline_stats, total_work_experience, EntryEnd, EntryPeriod, KindBreakdown, Selector,
    TimelineCatalog, TimelineEntry, TimelineKind, TimelineService, TimelineStats, WireValue,
    WorkExperience,
};

fn ids<'a>(entries: impl IntoIterator<Item = &'a TimelineEntry>) -> Vec<&'a str> {
    entries.into_iter().map(|entry| entry.id.as_str()).collect()
}

fn assert_most_recent_first(entries: &[&TimelineEntry]) {
    for pair in entries.windows(2) {
        assert!(
            pair[0].period.start >= pair[1].period.start,
            "`{}` should not precede `{}`",
            pair[0].id,
            pair[1].id
        );
    }
}

#[test]
fn shipped_stats_cover_every_type() {
    let stats = timeline_stats();
    assert_eq!(
        stats,
        TimelineStats {
            total: 7,
            by_type: KindBreakdown {
                education: 3,
                work: 0,
                project: 3,
                achievement: 1,
            },
        }
    );
    assert_eq!(stats.total, stats.by_type.sum());
}

#[test]
fn stats_serialize_with_by_type_key() {
    let json = serde_json::to_value(timeline_stats()).unwrap();
    assert_eq!(json["byType"]["work"], 0);
    assert_eq!(json["byType"]["education"], 3);
}

#[test]
fn all_types_sorted_most_recent_first() {
    let all = timeline_by_type(None);
    assert_eq!(
        ids(all.iter().copied()),
        vec![
            "wechat",
            "easytest",
            "english-certificate",
            "student-management-system",
            "first-programming-experience",
            "current-study",
            "high-school-graduation",
        ]
    );
    assert_eq!(ids(timeline_by_type(Some("all"))), ids(all.iter().copied()));
}

#[test]
fn type_filter_returns_sorted_matching_entries() {
    for kind in TimelineKind::ALL {
        let view = timeline_by_type(Some(kind.as_str()));
        assert!(view.iter().all(|entry| entry.kind == *kind));
        assert_eq!(view.len(), timeline_stats().by_type.count(*kind));
        assert_most_recent_first(&view);
    }
    assert_eq!(
        ids(timeline_by_type(Some("education"))),
        vec![
            "first-programming-experience",
            "current-study",
            "high-school-graduation",
        ]
    );
    assert!(timeline_by_type(Some("volunteering")).is_empty());
}

#[test]
fn sorted_queries_do_not_reorder_the_catalog() {
    let before = ids(timeline_catalog().entries());
    let _ = timeline_by_type(None);
    let _ = featured_timeline();
    assert_eq!(ids(timeline_catalog().entries()), before);
    assert_eq!(before.first().copied(), Some("current-study"));
}

#[test]
fn featured_timeline_is_current_study() {
    assert_eq!(ids(featured_timeline()), vec!["current-study"]);
}

#[test]
fn current_items_are_entries_without_end_date() {
    assert_eq!(
        ids(current_items()),
        vec!["current-study", "first-programming-experience"]
    );
    assert!(current_items().iter().all(|entry| entry.period.end.date().is_none()));
}

#[test]
fn shipped_work_experience_is_zero() {
    assert_eq!(total_work_experience(), WorkExperience::default());
}

#[test]
fn reversed_shipped_period_is_kept() {
    let wechat = timeline_catalog()
        .entries()
        .iter()
        .find(|entry| entry.id == "wechat")
        .expect("wechat entry");
    assert!(wechat.period.is_reversed());
}

#[test]
fn service_over_custom_catalog_reports_work_experience() {
    let mut ongoing = TimelineEntry::new(
        "current-job",
        "Backend engineer",
        TimelineKind::Work,
        EntryPeriod::parse("2024-01-01", None).unwrap(),
    );
    ongoing.featured = true;
    let finished = TimelineEntry::new(
        "internship",
        "Intern",
        TimelineKind::Work,
        EntryPeriod::parse("2023-01-01", Some("2023-07-20")).unwrap(),
    );
    let catalog = TimelineCatalog::new(vec![finished, ongoing]).unwrap();
    let service = TimelineService::new(&catalog);

    // 200 days -> 7 months; 2024-01-01 .. 2025-01-01 is 366 days -> 13 months.
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(
        service.total_work_experience_at(now),
        WorkExperience { years: 1, months: 8 }
    );
    assert_eq!(ids(service.featured()), vec!["current-job"]);
    assert_eq!(ids(service.current()), vec!["current-job"]);
    assert_eq!(ids(service.by_type(Some("work"))), vec!["current-job", "internship"]);
    assert_eq!(service.find("internship").map(|e| e.title.as_str()), Some("Intern"));
    assert!(service.find("missing").is_none());
}

fn featured_entry(id: &str, start: &str) -> TimelineEntry {
    let mut entry = TimelineEntry::new(
        id,
        id,
        TimelineKind::Project,
        EntryPeriod::parse(start, None).unwrap(),
    );
    entry.featured = true;
    entry
}

#[test]
fn featured_timeline_is_newest_first_with_stable_ties() {
    let plain = TimelineEntry::new(
        "not-featured",
        "not featured",
        TimelineKind::Work,
        EntryPeriod::parse("2030-01-01", None).unwrap(),
    );
    let catalog = TimelineCatalog::new(vec![
        featured_entry("oldest", "2020-01-01"),
        featured_entry("tie-first", "2022-06-01"),
        plain,
        featured_entry("newest", "2024-1-1"),
        featured_entry("tie-second", "2022-6-1"),
    ])
    .unwrap();
    let service = TimelineService::new(&catalog);

    assert_eq!(
        ids(service.featured()),
        vec!["newest", "tie-first", "tie-second", "oldest"]
    );
    assert_eq!(
        ids(catalog.entries()),
        vec!["oldest", "tie-first", "not-featured", "newest", "tie-second"]
    );
}

#[test]
fn shipped_service_agrees_with_free_queries() {
    let service = timeline_service();

    assert_eq!(service.stats(), timeline_stats());
    assert_eq!(ids(service.featured()), ids(featured_timeline()));
    assert_eq!(ids(service.current()), ids(current_items()));
    assert_eq!(service.total_work_experience(), total_work_experience());
    for kind in [None, Some("all"), Some("project"), Some("work"), Some("hobby")] {
        assert_eq!(ids(service.by_type(kind)), ids(timeline_by_type(kind)));
    }
    assert_eq!(
        ids(service.select(&Selector::Only(TimelineKind::Project))),
        vec!["wechat", "easytest", "student-management-system"]
    );
    assert_eq!(ids(service.select(&Selector::All)), ids(timeline_by_type(None)));
    assert!(service.select(&Selector::Unmatched).is_empty());
}

#[test]
fn certificate_is_a_point_in_time_achievement() {
    let service = timeline_service();
    let certificate = service
        .find("english-certificate")
        .expect("certificate entry");
    assert_eq!(certificate.kind, TimelineKind::Achievement);
    assert_eq!(certificate.period.end, EntryEnd::Ended(certificate.period.start));
    assert!(!certificate.is_ongoing());
}
