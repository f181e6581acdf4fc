//! CLI smoke entry point.
//!
//! # Responsibility
//! - Validate the shipped datasets and print their summaries.
//! - Optionally start file logging when given an absolute log directory.
//!
//! Usage: `portfolio_cli [LOG_DIR]`

use log::info;
use portfolio_core::{
    all_tech_stack, current_items, default_log_level, featured_projects, init_logging,
    project_stats, timeline_stats, total_work_experience, validate_shipped_datasets, LogConfig,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Some(log_dir) = std::env::args().nth(1) {
        let started = LogConfig::new(default_log_level(), &log_dir)
            .and_then(|config| init_logging(&config));
        if let Err(err) = started {
            eprintln!("portfolio_cli: {err}");
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = validate_shipped_datasets() {
        eprintln!("portfolio_cli: {err}");
        return ExitCode::FAILURE;
    }

    let projects = project_stats();
    println!(
        "projects total={} completed={} in_progress={} planned={}",
        projects.total,
        projects.by_status.completed,
        projects.by_status.in_progress,
        projects.by_status.planned
    );
    println!(
        "projects featured={}",
        join_ids(featured_projects().iter().map(|entry| entry.id.as_str()))
    );
    println!("tech_stack={}", all_tech_stack().join(","));

    let timeline = timeline_stats();
    println!(
        "timeline total={} education={} work={} project={} achievement={}",
        timeline.total,
        timeline.by_type.education,
        timeline.by_type.work,
        timeline.by_type.project,
        timeline.by_type.achievement
    );
    println!(
        "timeline current={}",
        join_ids(current_items().iter().map(|entry| entry.id.as_str()))
    );

    let experience = total_work_experience();
    println!(
        "work_experience years={} months={}",
        experience.years, experience.months
    );

    info!(
        "event=cli_summary module=cli status=ok version={}",
        portfolio_core::core_version()
    );
    ExitCode::SUCCESS
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    ids.collect::<Vec<_>>().join(",")
}
