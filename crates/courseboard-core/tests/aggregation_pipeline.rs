//! End-to-end aggregation tests: decoded payloads through the derivation layer
//!
//! Mirrors what the Progress and Tech Stack views do with real responses,
//! without touching the network.

use chrono::NaiveDate;
use courseboard_core::models::{DayDetail, ProgressSummary, TechStackSummary};
use courseboard_core::{percentage, top_n_by, CalendarGrid, ChartSeries, WeekStart};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const PROGRESS_SUMMARY: &str = r#"{
    "total_projects": 12,
    "tracking_start_date": "2025-07-09",
    "tracking_end_date": "2025-07-15",
    "total_days": 7,
    "projects_with_activity": 5,
    "total_commits": 23,
    "total_issues_created": 6,
    "total_issues_closed": 4,
    "daily_activity_summary": [
        {"date": "2025-07-10", "projects_with_commits": 1, "total_commits": 2,
         "total_lines_added": 80, "total_issues_created": 0, "total_issues_closed": 0},
        {"date": "2025-07-14", "projects_with_commits": 4, "total_commits": 21,
         "total_lines_added": 900, "total_issues_created": 6, "total_issues_closed": 4}
    ],
    "project_activity_ranking": [
        {"project_name": "chat-app", "github_url": "", "active_days": 4, "total_commits": 12,
         "total_lines_added": 600, "total_issues_created": 3, "total_issues_closed": 2},
        {"project_name": "ml-notes", "github_url": "", "active_days": 2, "total_commits": 5,
         "total_lines_added": 200, "total_issues_created": 2, "total_issues_closed": 1},
        {"project_name": "todo-cli", "github_url": "", "active_days": 3, "total_commits": 5,
         "total_lines_added": 180, "total_issues_created": 1, "total_issues_closed": 1},
        {"project_name": "web-game", "github_url": "", "active_days": 1, "total_commits": 1,
         "total_lines_added": 20, "total_issues_created": 0, "total_issues_closed": 0}
    ]
}"#;

const CALENDAR_DAYS: &str = r#"[
    {"date": "2025-07-10", "projects_with_commits": 1, "total_commits": 2,
     "total_lines_added": 80, "total_issues_created": 0, "total_issues_closed": 0,
     "project_details": [
        {"project_id": 1, "project_name": "chat-app", "github_url": "",
         "has_commit": true, "commit_count": 2, "lines_added": 80,
         "issues_created": 0, "issues_closed": 0}
     ]}
]"#;

#[test]
fn progress_calendar_from_decoded_payload() {
    let summary: ProgressSummary = serde_json::from_str(PROGRESS_SUMMARY).unwrap();
    let days: Vec<DayDetail> = serde_json::from_str(CALENDAR_DAYS).unwrap();

    let grid = CalendarGrid::build(
        summary.tracking_start_date,
        summary.tracking_end_date,
        WeekStart::Sunday,
        &days,
        |d| d.date,
    )
    .unwrap();

    assert_eq!(grid.cell_count(), summary.total_days as usize);
    assert_eq!(grid.record_for(date(2025, 7, 10)).unwrap().total_commits, 2);
    assert!(grid.record_for(date(2025, 7, 9)).is_none());

    // Detail panel data comes straight off the attached record
    let detail = grid.record_for(date(2025, 7, 10)).unwrap();
    assert_eq!(detail.project_details[0].project_name, "chat-app");
}

#[test]
fn progress_ranking_is_stable_top_n() {
    let summary: ProgressSummary = serde_json::from_str(PROGRESS_SUMMARY).unwrap();

    let top = top_n_by(&summary.project_activity_ranking, 3, |p| p.total_commits);
    let names: Vec<_> = top.iter().map(|p| p.project_name.as_str()).collect();
    // ml-notes and todo-cli tie at 5 commits and keep their fetch order
    assert_eq!(names, vec!["chat-app", "ml-notes", "todo-cli"]);

    // Active-days ratio bar input
    assert_eq!(percentage(top[0].active_days, summary.total_days), 57.1);
}

#[test]
fn tech_stack_series_from_decoded_payload() {
    let json = r#"{
        "total_projects": 8,
        "language_summary": {"Python": 5, "JavaScript": 3, "Go": 3},
        "framework_summary": {"FastAPI": 4},
        "ai_summary": {"projects_with_ai": 6, "ai_models": {}, "ai_libraries": {}},
        "project_details": {}
    }"#;
    let summary: TechStackSummary = serde_json::from_str(json).unwrap();

    let series = ChartSeries::from_map(&summary.language_summary, summary.total_projects, 10);
    assert_eq!(series.entries[0].name, "Python");
    assert_eq!(series.entries[0].percentage, 62.5);
    assert_eq!(series.entries.len(), 3);
    assert_eq!(
        percentage(summary.ai_summary.projects_with_ai, summary.total_projects),
        75.0
    );
}
