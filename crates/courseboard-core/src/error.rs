//! Error types for courseboard-core
//!
//! One thiserror hierarchy for everything the core can fail on. Views decide
//! how to recover; the aggregation functions never catch errors themselves.

use chrono::NaiveDate;
use thiserror::Error;

/// Core error type for courseboard operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Transport Errors
    // ===================
    #[error("Request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    // ===================
    // Decode Errors
    // ===================
    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    // ===================
    // Usage Errors
    // ===================
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid threshold table: {message}")]
    InvalidThresholds { message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CoreError {
    /// Whether a user-triggered retry can reasonably succeed.
    ///
    /// Transport and decode failures are retryable (the service may recover or
    /// redeploy); usage errors are caller bugs and are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CoreError::Http { .. } | CoreError::Status { .. } | CoreError::Decode { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
