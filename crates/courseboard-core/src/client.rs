//! Analytics service API client
//!
//! One method per logical endpoint. Every payload is decoded into the typed
//! models; failures map onto the transport/status/decode taxonomy in
//! [`CoreError`]. The client holds no cache and performs no dedup — each view
//! fetch is a fresh round-trip.

use chrono::NaiveDate;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{CoreError, Result};
use crate::models::tech_stack::TechStackEnvelope;
use crate::models::workflow::WorkflowProjectsEnvelope;
use crate::models::{
    DashboardSummary, DayDetail, ProgressSummary, ProjectStatus, StatusSummary, TechStackSummary,
    TestProject, TestSummary, WorkflowProject, WorkflowSummary,
};

/// Default analytics service address (the service's dev default).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Outcome of a fire-and-forget action endpoint.
///
/// Actions carry no data; success means "re-fetch the corresponding summary".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionOutcome {
    #[serde(default)]
    pub message: Option<String>,
}

/// HTTP client for the analytics service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // A trailing slash keeps Url::join from eating the last path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|e| CoreError::InvalidConfig {
            message: format!("invalid API URL {base_url:?}: {e}"),
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| CoreError::InvalidConfig {
                message: format!("invalid endpoint path {path:?}: {e}"),
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, mut url: Url, query: &[(&str, String)]) -> Result<T> {
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| CoreError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| CoreError::Http {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|e| CoreError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    async fn post_action(&self, url: Url) -> Result<ActionOutcome> {
        tracing::debug!(%url, "POST");

        let response = self
            .http
            .post(url.clone())
            .send()
            .await
            .map_err(|source| CoreError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Status {
                url: url.to_string(),
                status,
            });
        }

        // The action body is `{"message": ...}` when present; tolerate empty.
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    // ===================
    // Dashboard
    // ===================

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        self.get_json(self.url("api/analytics/dashboard")?, &[]).await
    }

    // ===================
    // Tech stack
    // ===================

    pub async fn tech_stack_summary(&self) -> Result<TechStackSummary> {
        let envelope: TechStackEnvelope = self
            .get_json(self.url("api/analytics/tech-stack-summary")?, &[])
            .await?;
        Ok(envelope.summary)
    }

    // ===================
    // Git workflow
    // ===================

    pub async fn workflow_summary(&self) -> Result<WorkflowSummary> {
        self.get_json(self.url("api/git-workflow/summary")?, &[]).await
    }

    pub async fn workflow_projects(&self) -> Result<Vec<WorkflowProject>> {
        let envelope: WorkflowProjectsEnvelope = self
            .get_json(self.url("api/git-workflow/projects")?, &[])
            .await?;
        Ok(envelope.projects)
    }

    pub async fn workflow_analyze(&self) -> Result<ActionOutcome> {
        self.post_action(self.url("api/git-workflow/analyze")?).await
    }

    // ===================
    // Project progress
    // ===================

    pub async fn progress_summary(&self) -> Result<ProgressSummary> {
        self.get_json(self.url("api/project-progress/summary")?, &[])
            .await
    }

    /// Sparse per-day records for `[start, end]` (inclusive ISO dates).
    pub async fn progress_calendar(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayDetail>> {
        if start > end {
            return Err(CoreError::InvalidDateRange { start, end });
        }
        self.get_json(
            self.url("api/project-progress/calendar")?,
            &date_range_query(start, end),
        )
        .await
    }

    pub async fn progress_sync(&self) -> Result<ActionOutcome> {
        self.post_action(self.url("api/project-progress/sync")?).await
    }

    // ===================
    // Project status
    // ===================

    pub async fn status_list(&self) -> Result<Vec<ProjectStatus>> {
        self.get_json(self.url("api/project-status/")?, &[]).await
    }

    pub async fn status_summary(&self) -> Result<StatusSummary> {
        self.get_json(self.url("api/project-status/summary/overview")?, &[])
            .await
    }

    pub async fn status_analyze(&self) -> Result<ActionOutcome> {
        self.post_action(self.url("api/project-status/analyze")?).await
    }

    pub async fn status_update_repos(&self) -> Result<ActionOutcome> {
        self.post_action(self.url("api/project-status/update-repos")?)
            .await
    }

    // ===================
    // Test analysis
    // ===================

    pub async fn test_projects(&self) -> Result<Vec<TestProject>> {
        self.get_json(self.url("api/test-analysis/projects")?, &[]).await
    }

    pub async fn test_summary(&self) -> Result<TestSummary> {
        self.get_json(self.url("api/test-analysis/summary")?, &[]).await
    }

    pub async fn test_analyze_all(&self) -> Result<ActionOutcome> {
        self.post_action(self.url("api/test-analysis/analyze-all")?)
            .await
    }

    /// Re-analyze a single project. The name is path-encoded, so names with
    /// spaces or slashes survive the round-trip.
    pub async fn test_refresh(&self, project_name: &str) -> Result<ActionOutcome> {
        let mut url = self.url("api/test-analysis/refresh")?;
        url.path_segments_mut()
            .map_err(|_| CoreError::InvalidConfig {
                message: "API URL cannot be a base".into(),
            })?
            .push(project_name);
        self.post_action(url).await
    }
}

fn date_range_query(start: NaiveDate, end: NaiveDate) -> [(&'static str, String); 2] {
    [
        ("start_date", start.format("%Y-%m-%d").to_string()),
        ("end_date", end.format("%Y-%m-%d").to_string()),
    ]
}
