//! Typed payloads from the analytics service
//!
//! Field names mirror the service's JSON exactly; everything here is decoded
//! wholesale on fetch and never mutated in place.

pub mod dashboard;
pub mod progress;
pub mod status;
pub mod tech_stack;
pub mod testing;
pub mod workflow;

pub use dashboard::{ActivityEvent, DashboardSummary, StudentCommits, StudentIssues};
pub use progress::{
    DailyActivityRecord, DayDetail, ProgressSummary, ProjectActivity, ProjectDayDetail,
};
pub use status::{ProjectStatus, StatusSummary};
pub use tech_stack::{AiSummary, ProjectTechDetail, TechStackSummary};
pub use testing::{TestMetrics, TestProject, TestSummary, TestTotals};
pub use workflow::{UsageStat, WorkflowProject, WorkflowStatistics, WorkflowSummary};
