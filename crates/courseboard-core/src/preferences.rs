//! User preferences persistence for courseboard
//!
//! Stores the presentation choices that the original views hard-coded
//! (week-start convention, chart legend cap, threshold tables, tracking date
//! range) in `~/.config/courseboard/preferences.json`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::calendar::WeekStart;
use crate::charts::DEFAULT_SERIES_CAP;
use crate::metrics::ThresholdTable;

/// courseboard-specific user preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// First day of displayed calendar weeks
    pub week_start: WeekStart,
    /// Legend size bound for distribution charts
    pub series_cap: usize,
    /// Default tracking window for the progress calendar
    pub tracking_start: NaiveDate,
    pub tracking_end: NaiveDate,
    /// Threshold tables, overridable per metric
    pub quality_thresholds: ThresholdTable,
    pub workflow_thresholds: ThresholdTable,
    pub coverage_thresholds: ThresholdTable,
    pub intensity_thresholds: ThresholdTable,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Sunday,
            series_cap: DEFAULT_SERIES_CAP,
            tracking_start: NaiveDate::from_ymd_opt(2025, 7, 9).expect("valid date"),
            tracking_end: NaiveDate::from_ymd_opt(2025, 8, 13).expect("valid date"),
            quality_thresholds: ThresholdTable::quality_score(),
            workflow_thresholds: ThresholdTable::workflow_score(),
            coverage_thresholds: ThresholdTable::test_coverage(),
            intensity_thresholds: ThresholdTable::commit_intensity(),
        }
    }
}

impl Preferences {
    /// Default config location: `<config_dir>/courseboard/preferences.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("courseboard").join("preferences.json"))
    }

    /// Load preferences from `path`.
    /// Returns defaults on any I/O or parse error (graceful degradation).
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed preferences at {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Load from the default location, or defaults when it does not exist.
    pub fn load_default() -> Self {
        Self::default_path()
            .map(|p| Self::load(&p))
            .unwrap_or_default()
    }

    /// Persist preferences to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create preferences directory")?;
        }
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize preferences")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write preferences to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Severity;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.week_start, WeekStart::Sunday);
        assert_eq!(prefs.series_cap, 10);
        assert!(prefs.tracking_start < prefs.tracking_end);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"week_start": "monday", "series_cap": 5}"#).unwrap();
        assert_eq!(prefs.week_start, WeekStart::Monday);
        assert_eq!(prefs.series_cap, 5);
        assert_eq!(prefs.quality_thresholds.classify(80.0), Severity::Success);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let prefs = Preferences::load(Path::new("/nonexistent/preferences.json"));
        assert_eq!(prefs.series_cap, DEFAULT_SERIES_CAP);
    }

    #[test]
    fn test_roundtrip() {
        let prefs = Preferences::default();
        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back.week_start, prefs.week_start);
        assert_eq!(back.tracking_start, prefs.tracking_start);
    }
}
