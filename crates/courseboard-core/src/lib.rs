//! courseboard-core - Core library for courseboard
//!
//! Provides the analytics API client, typed payload models, and the pure
//! aggregation layer (derived metrics, rankings, calendar grids, chart series).

pub mod calendar;
pub mod charts;
pub mod client;
pub mod error;
pub mod metrics;
pub mod models;
pub mod preferences;
pub mod ranking;

pub use calendar::{CalendarCell, CalendarGrid, WeekStart};
pub use charts::{ChartSeries, SeriesEntry, DEFAULT_SERIES_CAP};
pub use client::{ActionOutcome, ApiClient, DEFAULT_API_URL};
pub use error::{CoreError, Result};
pub use metrics::{percentage, Severity, ThresholdTable};
pub use preferences::Preferences;
pub use ranking::top_n_by;
