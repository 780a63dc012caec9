//! Test practice analysis payloads

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One project's test practice snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestProject {
    pub project_name: String,
    #[serde(default)]
    pub has_unit_tests: bool,
    #[serde(default)]
    pub has_test_plan: bool,
    #[serde(default)]
    pub has_test_documentation: bool,
    #[serde(default)]
    pub uses_tdd: bool,
    /// Upstream-estimated, in [0, 100]
    #[serde(default)]
    pub test_coverage: f64,
    #[serde(default)]
    pub test_files: Vec<String>,
    #[serde(default)]
    pub test_directories: Vec<String>,
    #[serde(default)]
    pub test_frameworks: Vec<String>,
    #[serde(default)]
    pub test_metrics: TestMetrics,
    #[serde(default)]
    pub analysis_time: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestMetrics {
    #[serde(default)]
    pub total_test_files: u64,
    #[serde(default)]
    pub total_test_functions: u64,
    #[serde(default)]
    pub test_file_types: HashMap<String, u64>,
    #[serde(default)]
    pub test_documentation_files: Vec<String>,
}

/// Cohort-wide test practice summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestSummary {
    #[serde(default)]
    pub summary: TestTotals,
    #[serde(default)]
    pub framework_distribution: Vec<FrameworkCount>,
    #[serde(default)]
    pub coverage_distribution: Vec<CoverageCount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestTotals {
    #[serde(default)]
    pub total_projects: u64,
    #[serde(default)]
    pub projects_with_unit_tests: u64,
    #[serde(default)]
    pub projects_with_test_plan: u64,
    #[serde(default)]
    pub projects_with_test_docs: u64,
    #[serde(default)]
    pub projects_using_tdd: u64,
    #[serde(default)]
    pub avg_test_coverage: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameworkCount {
    pub framework: String,
    #[serde(default)]
    pub project_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverageCount {
    /// Band label, e.g. "75-100"
    pub coverage_level: String,
    #[serde(default)]
    pub project_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_test_summary() {
        let json = r#"{
            "summary": {
                "total_projects": 12,
                "projects_with_unit_tests": 8,
                "projects_with_test_plan": 5,
                "projects_with_test_docs": 4,
                "projects_using_tdd": 2,
                "avg_test_coverage": 43.7
            },
            "framework_distribution": [
                {"framework": "pytest", "project_count": 6},
                {"framework": "jest", "project_count": 3}
            ],
            "coverage_distribution": [
                {"coverage_level": "75-100", "project_count": 2},
                {"coverage_level": "0-24", "project_count": 5}
            ]
        }"#;

        let summary: TestSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.summary.projects_with_unit_tests, 8);
        assert_eq!(summary.framework_distribution[0].framework, "pytest");
        assert_eq!(summary.coverage_distribution[1].project_count, 5);
    }

    #[test]
    fn test_decode_test_project() {
        let json = r#"{
            "project_name": "chat-app",
            "has_unit_tests": true,
            "test_coverage": 62.0,
            "test_files": ["tests/test_api.py"],
            "test_frameworks": ["pytest"],
            "test_metrics": {
                "total_test_files": 4,
                "total_test_functions": 31,
                "test_file_types": {".py": 4}
            }
        }"#;

        let project: TestProject = serde_json::from_str(json).unwrap();
        assert!(project.has_unit_tests);
        assert_eq!(project.test_metrics.total_test_functions, 31);
        assert!(!project.uses_tdd);
    }
}
