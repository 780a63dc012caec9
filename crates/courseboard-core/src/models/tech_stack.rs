//! Tech stack summary payload

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Language / framework / AI usage distributions plus per-project details.
///
/// The distribution maps are multi-label: one project can contribute to
/// several languages, so values need not sum to `total_projects`. Each
/// individual percentage is still computed against `total_projects`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechStackSummary {
    #[serde(default)]
    pub total_projects: u64,
    #[serde(default)]
    pub language_summary: HashMap<String, u64>,
    #[serde(default)]
    pub framework_summary: HashMap<String, u64>,
    #[serde(default)]
    pub ai_summary: AiSummary,
    #[serde(default)]
    pub project_details: HashMap<String, ProjectTechDetail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiSummary {
    #[serde(default)]
    pub projects_with_ai: u64,
    #[serde(default)]
    pub ai_models: HashMap<String, u64>,
    #[serde(default)]
    pub ai_libraries: HashMap<String, u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectTechDetail {
    #[serde(default)]
    pub primary_language: String,
    #[serde(default)]
    pub language_count: u64,
    #[serde(default)]
    pub framework_count: u64,
    #[serde(default)]
    pub main_frameworks: Vec<String>,
    #[serde(default)]
    pub has_ai: bool,
    #[serde(default)]
    pub ai_models: Vec<String>,
    #[serde(default)]
    pub ai_libraries: Vec<String>,
}

/// Wire envelope: the service wraps the summary in `{"summary": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TechStackEnvelope {
    pub summary: TechStackSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let json = r#"{
            "summary": {
                "total_projects": 8,
                "language_summary": {"Python": 5, "JavaScript": 3, "Go": 3},
                "framework_summary": {"FastAPI": 4, "React": 3},
                "ai_summary": {
                    "projects_with_ai": 6,
                    "ai_models": {"gpt-4": 3, "claude": 2},
                    "ai_libraries": {"openai": 4}
                },
                "project_details": {
                    "chat-app": {
                        "primary_language": "Python",
                        "language_count": 2,
                        "framework_count": 1,
                        "main_frameworks": ["FastAPI"],
                        "has_ai": true,
                        "ai_models": ["gpt-4"],
                        "ai_libraries": ["openai"]
                    }
                }
            }
        }"#;

        let envelope: TechStackEnvelope = serde_json::from_str(json).unwrap();
        let summary = envelope.summary;
        assert_eq!(summary.total_projects, 8);
        assert_eq!(summary.language_summary["Python"], 5);
        assert!(summary.project_details["chat-app"].has_ai);
    }
}
