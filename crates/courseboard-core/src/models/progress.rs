//! Project progress payloads: tracking summary, daily series, calendar days

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Progress tracking summary: global counters, the daily activity series and
/// the ranked project activity list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummary {
    #[serde(default)]
    pub total_projects: u64,
    pub tracking_start_date: NaiveDate,
    pub tracking_end_date: NaiveDate,
    #[serde(default)]
    pub total_days: u64,
    #[serde(default)]
    pub projects_with_activity: u64,
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub total_issues_created: u64,
    #[serde(default)]
    pub total_issues_closed: u64,
    #[serde(default)]
    pub daily_activity_summary: Vec<DailyActivityRecord>,
    #[serde(default)]
    pub project_activity_ranking: Vec<ProjectActivity>,
}

/// Aggregate counts for one calendar day across all projects.
/// At most one record per date per fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivityRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub projects_with_commits: u64,
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub total_lines_added: u64,
    #[serde(default)]
    pub total_issues_created: u64,
    #[serde(default)]
    pub total_issues_closed: u64,
}

/// One project's totals over the tracking window, used for ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectActivity {
    pub project_name: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub active_days: u64,
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub total_lines_added: u64,
    #[serde(default)]
    pub total_issues_created: u64,
    #[serde(default)]
    pub total_issues_closed: u64,
}

/// Calendar endpoint payload: a daily record plus its per-project breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayDetail {
    pub date: NaiveDate,
    #[serde(default)]
    pub projects_with_commits: u64,
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub total_lines_added: u64,
    #[serde(default)]
    pub total_issues_created: u64,
    #[serde(default)]
    pub total_issues_closed: u64,
    #[serde(default)]
    pub project_details: Vec<ProjectDayDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDayDetail {
    #[serde(default)]
    pub project_id: u64,
    pub project_name: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub has_commit: bool,
    #[serde(default)]
    pub commit_count: u64,
    #[serde(default)]
    pub lines_added: u64,
    #[serde(default)]
    pub issues_created: u64,
    #[serde(default)]
    pub issues_closed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_day_detail() {
        let json = r#"{
            "date": "2025-07-10",
            "projects_with_commits": 3,
            "total_commits": 8,
            "total_lines_added": 412,
            "total_issues_created": 2,
            "total_issues_closed": 1,
            "project_details": [
                {
                    "project_id": 4,
                    "project_name": "chat-app",
                    "github_url": "https://github.com/cohort/chat-app",
                    "has_commit": true,
                    "commit_count": 5,
                    "lines_added": 300,
                    "issues_created": 1,
                    "issues_closed": 0
                }
            ]
        }"#;

        let day: DayDetail = serde_json::from_str(json).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 7, 10).unwrap());
        assert_eq!(day.project_details[0].commit_count, 5);
    }

    #[test]
    fn test_decode_progress_summary_minimal() {
        // Service omits empty collections
        let json = r#"{
            "total_projects": 12,
            "tracking_start_date": "2025-07-09",
            "tracking_end_date": "2025-08-13",
            "total_days": 36,
            "projects_with_activity": 9,
            "total_commits": 400,
            "total_issues_created": 80,
            "total_issues_closed": 55
        }"#;

        let summary: ProgressSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_days, 36);
        assert!(summary.daily_activity_summary.is_empty());
        assert!(summary.project_activity_ranking.is_empty());
    }
}
