//! Git workflow analysis payloads

use serde::{Deserialize, Serialize};

/// Per-project branching/merge metrics with the upstream-computed score and
/// workflow style label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowProject {
    pub project_name: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub total_branches: u64,
    #[serde(default)]
    pub main_branch_name: String,
    #[serde(default)]
    pub feature_branches: u64,
    #[serde(default)]
    pub hotfix_branches: u64,
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub commits_on_main: u64,
    #[serde(default)]
    pub commits_on_branches: u64,
    #[serde(default)]
    pub merge_commits: u64,
    #[serde(default)]
    pub rebase_commits: u64,
    #[serde(default)]
    pub has_pull_requests: bool,
    #[serde(default)]
    pub pull_request_count: u64,
    #[serde(default)]
    pub merged_pull_requests: u64,
    #[serde(default)]
    pub uses_feature_branches: bool,
    #[serde(default)]
    pub uses_main_branch_merges: bool,
    #[serde(default)]
    pub uses_rebase: bool,
    #[serde(default)]
    pub uses_pull_requests: bool,
    #[serde(default)]
    pub workflow_score: f64,
    /// e.g. "Git Flow", "Feature Branch", "Trunk Based"
    #[serde(default)]
    pub workflow_style: String,
    #[serde(default)]
    pub analyzed_at: String,
}

/// Cohort-wide workflow summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowSummary {
    #[serde(default)]
    pub total_projects: u64,
    #[serde(default)]
    pub workflow_statistics: WorkflowStatistics,
    #[serde(default)]
    pub analysis_time: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowStatistics {
    #[serde(default)]
    pub workflow_styles: std::collections::HashMap<String, u64>,
    #[serde(default)]
    pub feature_branch_usage: UsageStat,
    #[serde(default)]
    pub merge_usage: UsageStat,
    #[serde(default)]
    pub rebase_usage: UsageStat,
    #[serde(default)]
    pub pull_request_usage: UsageStat,
    #[serde(default)]
    pub average_score: f64,
}

/// How many projects use a given practice, with the upstream percentage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UsageStat {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub percentage: f64,
}

/// Wire envelope for the project list: `{"projects": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WorkflowProjectsEnvelope {
    pub projects: Vec<WorkflowProject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_summary() {
        let json = r#"{
            "total_projects": 12,
            "workflow_statistics": {
                "workflow_styles": {"Git Flow": 4, "Feature Branch": 6, "Trunk Based": 2},
                "feature_branch_usage": {"count": 10, "percentage": 83.3},
                "merge_usage": {"count": 8, "percentage": 66.7},
                "rebase_usage": {"count": 2, "percentage": 16.7},
                "pull_request_usage": {"count": 7, "percentage": 58.3},
                "average_score": 64.2
            },
            "analysis_time": "2025-08-12T10:00:00"
        }"#;

        let summary: WorkflowSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.workflow_statistics.workflow_styles["Git Flow"], 4);
        assert_eq!(summary.workflow_statistics.feature_branch_usage.count, 10);
        assert!((summary.workflow_statistics.average_score - 64.2).abs() < 1e-9);
    }

    #[test]
    fn test_decode_projects_envelope() {
        let json = r#"{
            "projects": [
                {
                    "project_name": "chat-app",
                    "github_url": "https://github.com/cohort/chat-app",
                    "total_branches": 5,
                    "main_branch_name": "main",
                    "workflow_score": 78.0,
                    "workflow_style": "Feature Branch"
                }
            ]
        }"#;

        let envelope: WorkflowProjectsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.projects.len(), 1);
        assert_eq!(envelope.projects[0].workflow_style, "Feature Branch");
        // Omitted fields default rather than fail the decode
        assert_eq!(envelope.projects[0].pull_request_count, 0);
    }
}
