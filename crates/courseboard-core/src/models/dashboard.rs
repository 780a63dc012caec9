//! Cohort dashboard summary payload

use serde::{Deserialize, Serialize};

/// Top-level dashboard summary: global counters, per-student breakdowns and
/// the recent activity feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_projects: u64,
    #[serde(default)]
    pub total_students: u64,
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub total_issues: u64,
    #[serde(default)]
    pub commits_by_student: Vec<StudentCommits>,
    #[serde(default)]
    pub issues_by_student: Vec<StudentIssues>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentCommits {
    pub name: String,
    #[serde(default)]
    pub github_username: String,
    #[serde(default)]
    pub commit_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentIssues {
    pub name: String,
    #[serde(default)]
    pub github_username: String,
    #[serde(default)]
    pub issue_count: u64,
}

/// One row of the recent-activity feed (commit or issue event).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// "commit" or "issue"
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dashboard_summary() {
        let json = r#"{
            "total_projects": 14,
            "total_students": 28,
            "total_commits": 1203,
            "total_issues": 310,
            "commits_by_student": [
                {"name": "Alice", "github_username": "alice-dev", "commit_count": 120}
            ],
            "issues_by_student": [
                {"name": "Alice", "github_username": "alice-dev", "issue_count": 31}
            ],
            "recent_activity": [
                {"type": "commit", "title": "Fix login redirect", "student_name": "Alice", "date": "2025-08-12"}
            ]
        }"#;

        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_projects, 14);
        assert_eq!(summary.commits_by_student[0].commit_count, 120);
        assert_eq!(summary.recent_activity[0].kind, "commit");
    }
}
