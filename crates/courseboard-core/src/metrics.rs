//! Derived metrics: percentages, averages, threshold bucketing
//!
//! Pure transformations over raw counts coming back from the analytics
//! service. The threshold tables mirror the coloring rules the service's web
//! views used, but live here as data so every view (and the preferences file)
//! shares one encoding instead of re-hardcoding bounds per call site.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Percentage of `count` over `total`, rounded to one decimal place.
///
/// A zero total yields 0.0 rather than a division fault; callers never need to
/// guard the empty-cohort case themselves.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(count as f64 / total as f64 * 100.0)
}

/// Mean of `sum` over `count`, rounded to one decimal place. 0.0 when empty.
pub fn average(sum: f64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round1(sum / count as f64)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Severity label produced by threshold bucketing.
///
/// Closed set so the TUI theme can map labels to colors exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
    /// No activity / not applicable (zero commits, unanalyzed project)
    None,
}

/// Ordered `(lower bound inclusive, label)` table.
///
/// `classify` walks bounds from highest to lowest and returns the first label
/// whose bound the value meets. Construction sorts descending, so callers may
/// pass entries in any order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, Severity)>", into = "Vec<(f64, Severity)>")]
pub struct ThresholdTable {
    entries: Vec<(f64, Severity)>,
}

impl TryFrom<Vec<(f64, Severity)>> for ThresholdTable {
    type Error = CoreError;

    fn try_from(entries: Vec<(f64, Severity)>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<ThresholdTable> for Vec<(f64, Severity)> {
    fn from(table: ThresholdTable) -> Self {
        table.entries
    }
}

impl ThresholdTable {
    pub fn new(mut entries: Vec<(f64, Severity)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CoreError::InvalidThresholds {
                message: "threshold table must have at least one entry".into(),
            });
        }
        if entries.iter().any(|(bound, _)| bound.is_nan()) {
            return Err(CoreError::InvalidThresholds {
                message: "threshold bounds must not be NaN".into(),
            });
        }
        entries.sort_by(|a, b| b.0.total_cmp(&a.0));
        Ok(Self { entries })
    }

    /// Label for `value`: first entry (highest bound first) with bound <= value.
    /// Values below every bound fall through to the last (lowest) label.
    pub fn classify(&self, value: f64) -> Severity {
        self.entries
            .iter()
            .find(|(bound, _)| *bound <= value)
            .map(|(_, label)| *label)
            .unwrap_or_else(|| self.entries[self.entries.len() - 1].1)
    }

    /// Project quality score coloring: 75+ success, 50+ warning, else danger.
    pub fn quality_score() -> Self {
        Self::new(vec![
            (75.0, Severity::Success),
            (50.0, Severity::Warning),
            (0.0, Severity::Danger),
        ])
        .expect("preset table is valid")
    }

    /// Git workflow score coloring: 80+ success, 60+ info, 40+ warning, else danger.
    pub fn workflow_score() -> Self {
        Self::new(vec![
            (80.0, Severity::Success),
            (60.0, Severity::Info),
            (40.0, Severity::Warning),
            (0.0, Severity::Danger),
        ])
        .expect("preset table is valid")
    }

    /// Test coverage coloring: 75+ success, 50+ warning, 25+ info, else danger.
    pub fn test_coverage() -> Self {
        Self::new(vec![
            (75.0, Severity::Success),
            (50.0, Severity::Warning),
            (25.0, Severity::Info),
            (0.0, Severity::Danger),
        ])
        .expect("preset table is valid")
    }

    /// Daily commit intensity for the activity calendar:
    /// 0 none, 1-2 success, 3-5 warning, 6+ danger.
    pub fn commit_intensity() -> Self {
        Self::new(vec![
            (6.0, Severity::Danger),
            (3.0, Severity::Warning),
            (1.0, Severity::Success),
            (0.0, Severity::None),
        ])
        .expect("preset table is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_basic() {
        assert_eq!(percentage(5, 8), 62.5);
        assert_eq!(percentage(3, 8), 37.5);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(percentage(0, 10), 0.0);
        assert_eq!(percentage(10, 10), 100.0);
        for count in 0..=20 {
            let pct = percentage(count, 20);
            assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(42, 0), 0.0);
    }

    #[test]
    fn test_average_zero_count() {
        assert_eq!(average(100.0, 0), 0.0);
        assert_eq!(average(150.0, 4), 37.5);
    }

    #[test]
    fn test_quality_score_buckets() {
        let table = ThresholdTable::quality_score();
        assert_eq!(table.classify(90.0), Severity::Success);
        assert_eq!(table.classify(75.0), Severity::Success);
        assert_eq!(table.classify(74.9), Severity::Warning);
        assert_eq!(table.classify(50.0), Severity::Warning);
        assert_eq!(table.classify(10.0), Severity::Danger);
        assert_eq!(table.classify(0.0), Severity::Danger);
    }

    #[test]
    fn test_commit_intensity_buckets() {
        let table = ThresholdTable::commit_intensity();
        assert_eq!(table.classify(0.0), Severity::None);
        assert_eq!(table.classify(1.0), Severity::Success);
        assert_eq!(table.classify(2.0), Severity::Success);
        assert_eq!(table.classify(3.0), Severity::Warning);
        assert_eq!(table.classify(5.0), Severity::Warning);
        assert_eq!(table.classify(6.0), Severity::Danger);
        assert_eq!(table.classify(40.0), Severity::Danger);
    }

    #[test]
    fn test_table_accepts_unordered_entries() {
        let table = ThresholdTable::new(vec![
            (0.0, Severity::Danger),
            (75.0, Severity::Success),
            (50.0, Severity::Warning),
        ])
        .unwrap();
        assert_eq!(table.classify(80.0), Severity::Success);
        assert_eq!(table.classify(60.0), Severity::Warning);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(ThresholdTable::new(vec![]).is_err());
    }

    #[test]
    fn test_deserialized_table_is_validated_and_sorted() {
        let table: ThresholdTable =
            serde_json::from_str(r#"[[0.0, "danger"], [75.0, "success"]]"#).unwrap();
        assert_eq!(table.classify(90.0), Severity::Success);
        assert!(serde_json::from_str::<ThresholdTable>("[]").is_err());
    }

    #[test]
    fn test_value_below_all_bounds_uses_floor_label() {
        let table = ThresholdTable::new(vec![(10.0, Severity::Success), (5.0, Severity::Warning)])
            .unwrap();
        assert_eq!(table.classify(1.0), Severity::Warning);
    }
}
