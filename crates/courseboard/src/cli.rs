//! Terminal commands: cohort summary tables and the sync trigger

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use courseboard_core::models::{DashboardSummary, ProgressSummary, StatusSummary, TestSummary};
use courseboard_core::{percentage, top_n_by, ApiClient, ChartSeries, DEFAULT_SERIES_CAP};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const RANKING_LIMIT: usize = 10;

/// Print the cohort summary, either as tables or as a JSON document.
pub async fn run_summary(client: &ApiClient, json: bool) -> Result<()> {
    let spinner = cli_spinner("Fetching cohort summary...");
    let fetched = tokio::try_join!(
        client.dashboard_summary(),
        client.progress_summary(),
        client.status_summary(),
        client.test_summary(),
    );
    spinner.finish_and_clear();
    let (dashboard, progress, status, tests) = fetched?;

    if json {
        let doc = serde_json::json!({
            "dashboard": dashboard,
            "progress": progress,
            "status": status,
            "tests": tests,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    print_overview(&dashboard, &progress, &status, &tests);
    print_ranking(&progress);
    print_languages(&status);

    Ok(())
}

/// Trigger a progress sync and every re-analysis action on the service.
/// Steps run sequentially; the service serializes its own recomputation.
pub async fn run_sync(client: &ApiClient) -> Result<()> {
    let spinner = cli_spinner("Syncing progress data...");
    let progress = client.progress_sync().await;
    spinner.set_message("Analyzing git workflows...");
    let workflow = client.workflow_analyze().await;
    spinner.set_message("Analyzing repository status...");
    let status = client.status_analyze().await;
    spinner.set_message("Analyzing test practices...");
    let tests = client.test_analyze_all().await;
    spinner.finish_and_clear();

    let steps = [
        ("Progress sync", progress),
        ("Workflow analysis", workflow),
        ("Status analysis", status),
        ("Test analysis", tests),
    ];

    let mut failed = false;
    for (label, outcome) in steps {
        match outcome {
            Ok(outcome) => println!(
                "✓ {}",
                outcome.message.unwrap_or_else(|| format!("{label} finished"))
            ),
            Err(e) => {
                failed = true;
                println!("✗ {label}: {e}");
            }
        }
    }

    if failed {
        anyhow::bail!("one or more sync steps failed");
    }
    Ok(())
}

fn print_overview(
    dashboard: &DashboardSummary,
    progress: &ProgressSummary,
    status: &StatusSummary,
    tests: &TestSummary,
) {
    let mut table = base_table(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Projects"),
        Cell::new(dashboard.total_projects).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Students"),
        Cell::new(dashboard.total_students).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Commits"),
        Cell::new(dashboard.total_commits).fg(Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Issues"),
        Cell::new(dashboard.total_issues).fg(Color::Magenta),
    ]);
    table.add_row(vec![
        Cell::new("Active projects"),
        Cell::new(format!(
            "{}/{} ({}%)",
            progress.projects_with_activity,
            progress.total_projects,
            percentage(progress.projects_with_activity, progress.total_projects)
        ))
        .fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("README coverage"),
        Cell::new(format!("{}%", status.readme_coverage)).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Avg quality score"),
        Cell::new(format!("{:.1}", status.avg_quality_score)),
    ]);
    table.add_row(vec![
        Cell::new("Avg test coverage"),
        Cell::new(format!("{:.1}%", tests.summary.avg_test_coverage)),
    ]);

    println!("Cohort Overview");
    println!("{table}");
    println!();
}

fn print_ranking(progress: &ProgressSummary) {
    let top = top_n_by(&progress.project_activity_ranking, RANKING_LIMIT, |p| {
        p.total_commits
    });
    if top.is_empty() {
        return;
    }

    let mut table = base_table(vec!["#", "Project", "Commits", "Active Days", "Lines", "Issues"]);
    for (i, project) in top.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&project.project_name),
            Cell::new(project.total_commits).fg(Color::Yellow),
            Cell::new(format!(
                "{} ({}%)",
                project.active_days,
                percentage(project.active_days, progress.total_days)
            )),
            Cell::new(format!("+{}", project.total_lines_added)).fg(Color::Green),
            Cell::new(format!(
                "{}/{}",
                project.total_issues_created, project.total_issues_closed
            )),
        ]);
    }

    println!("Most Active Projects");
    println!("{table}");
    println!();
}

fn print_languages(status: &StatusSummary) {
    let series = ChartSeries::from_map(
        &status.language_distribution,
        status.total_projects,
        DEFAULT_SERIES_CAP,
    );
    if series.is_empty() {
        return;
    }

    let mut table = base_table(vec!["Language", "Projects", "Share"]);
    for entry in &series.entries {
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(entry.value),
            Cell::new(format!("{}%", entry.percentage)).fg(Color::Cyan),
        ]);
    }

    println!("Languages");
    println!("{table}");
}

fn base_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn cli_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("valid spinner template")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());
    spinner
}
