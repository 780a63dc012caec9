//! Project status payloads: repository health and quality metrics

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One project's repository health snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectStatus {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub project_id: u64,
    pub project_name: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub has_readme: bool,
    #[serde(default)]
    pub readme_files: Vec<String>,
    #[serde(default)]
    pub total_files: u64,
    #[serde(default)]
    pub code_files: u64,
    #[serde(default)]
    pub doc_files: u64,
    #[serde(default)]
    pub config_files: u64,
    #[serde(default)]
    pub project_size_kb: f64,
    #[serde(default)]
    pub main_language: String,
    #[serde(default)]
    pub commit_count: u64,
    #[serde(default)]
    pub contributors: u64,
    #[serde(default)]
    pub last_commit: String,
    #[serde(default)]
    pub current_branch: String,
    #[serde(default)]
    pub has_package_json: bool,
    #[serde(default)]
    pub has_requirements_txt: bool,
    #[serde(default)]
    pub has_dockerfile: bool,
    /// Upstream-computed, in [0, 100]
    #[serde(default)]
    pub quality_score: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Cohort-wide status aggregates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusSummary {
    #[serde(default)]
    pub total_projects: u64,
    #[serde(default)]
    pub projects_with_readme: u64,
    /// Upstream-computed percentage in [0, 100]
    #[serde(default)]
    pub readme_coverage: f64,
    #[serde(default)]
    pub avg_quality_score: f64,
    #[serde(default)]
    pub language_distribution: HashMap<String, u64>,
    #[serde(default)]
    pub avg_project_size: f64,
    #[serde(default)]
    pub avg_commit_count: f64,
    #[serde(default)]
    pub avg_contributors: f64,
    /// Score band label ("75-100", "50-74", ...) -> project count
    #[serde(default)]
    pub projects_by_score: HashMap<String, u64>,
}
