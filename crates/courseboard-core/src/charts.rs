//! Chart series transformer
//!
//! Reshapes label->count summaries (language, framework, AI model, workflow
//! style distributions) into ordered series for gauges and legends. The
//! transformer imposes its own sort so output never depends on how the source
//! mapping happens to iterate.

use std::collections::HashMap;

use crate::metrics::percentage;
use crate::ranking::top_n_by;

/// Display cap used by all the distribution charts (legend size bound).
pub const DEFAULT_SERIES_CAP: usize = 10;

/// One legend entry: label, raw count, share of the project total.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub name: String,
    pub value: u64,
    pub percentage: f64,
}

/// Ordered, capped chart series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub entries: Vec<SeriesEntry>,
}

impl ChartSeries {
    /// Build from ordered `(label, count)` pairs.
    ///
    /// Stable descending sort by count (ties keep the given pair order),
    /// truncated to `cap`. Percentages are computed against `total`, which for
    /// multi-label categories can be less than the sum of counts.
    pub fn from_pairs<I, S>(pairs: I, total: u64, cap: usize) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let entries: Vec<SeriesEntry> = pairs
            .into_iter()
            .map(|(name, value)| SeriesEntry {
                name: name.into(),
                value,
                percentage: percentage(value, total),
            })
            .collect();

        Self {
            entries: top_n_by(&entries, cap, |e| e.value),
        }
    }

    /// Build from an unordered map.
    ///
    /// Hash maps iterate in arbitrary order, so the pairs are canonicalized by
    /// name first; identical maps always produce identical series.
    pub fn from_map(counts: &HashMap<String, u64>, total: u64, cap: usize) -> Self {
        let mut pairs: Vec<(String, u64)> =
            counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        Self::from_pairs(pairs, total, cap)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest count in the series (gauge scale), at least 1.
    pub fn max_value(&self) -> u64 {
        self.entries.iter().map(|e| e.value).max().unwrap_or(0).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_value_descending() {
        let series = ChartSeries::from_pairs(
            vec![("Python", 5), ("JavaScript", 3), ("Go", 3)],
            8,
            10,
        );
        let names: Vec<_> = series.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "JavaScript", "Go"]);
        assert_eq!(series.entries[0].percentage, 62.5);
        assert_eq!(series.entries[1].percentage, 37.5);
        assert_eq!(series.entries[2].percentage, 37.5);
    }

    #[test]
    fn test_cap_bounds_output() {
        let pairs: Vec<(String, u64)> = (0..25).map(|i| (format!("lang-{i}"), i)).collect();
        let series = ChartSeries::from_pairs(pairs, 25, DEFAULT_SERIES_CAP);
        assert_eq!(series.entries.len(), 10);
        assert_eq!(series.entries[0].value, 24);
    }

    #[test]
    fn test_map_input_is_order_independent() {
        let mut forward = HashMap::new();
        forward.insert("Python".to_string(), 5);
        forward.insert("JavaScript".to_string(), 3);
        forward.insert("Go".to_string(), 3);

        let mut reverse = HashMap::new();
        reverse.insert("Go".to_string(), 3);
        reverse.insert("JavaScript".to_string(), 3);
        reverse.insert("Python".to_string(), 5);

        let a = ChartSeries::from_map(&forward, 8, 10);
        let b = ChartSeries::from_map(&reverse, 8, 10);
        assert_eq!(a, b);
        assert_eq!(a.entries[0].name, "Python");
    }

    #[test]
    fn test_zero_total_yields_zero_percentages() {
        let series = ChartSeries::from_pairs(vec![("Rust", 4)], 0, 10);
        assert_eq!(series.entries[0].percentage, 0.0);
    }

    #[test]
    fn test_empty_input() {
        let series = ChartSeries::from_pairs(Vec::<(String, u64)>::new(), 10, 10);
        assert!(series.is_empty());
        assert_eq!(series.max_value(), 1);
    }
}
