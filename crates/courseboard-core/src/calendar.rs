//! Calendar grid builder for the activity heatmap
//!
//! Bins a contiguous date range plus sparse per-day records into weeks of
//! seven cells for a calendar display. A cell without a record means "no
//! activity that day", which callers must keep distinct from a record whose
//! counts are all zero.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// First day of a displayed week.
///
/// The service's own calendar view is Sunday-first; this stays configurable
/// because it is a presentation choice, not a data property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column index 0..=6 of `date` under this convention.
    fn day_index(self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }
}

/// One day in the grid: the date plus the day's record, if any arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell<R> {
    pub date: NaiveDate,
    pub record: Option<R>,
}

/// Week-bucketed calendar over an inclusive date range.
#[derive(Debug, Clone)]
pub struct CalendarGrid<R> {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub week_start: WeekStart,
    pub weeks: Vec<Vec<CalendarCell<R>>>,
}

impl<R: Clone> CalendarGrid<R> {
    /// Build the grid from sparse records keyed by `date_of`.
    ///
    /// Walks `[start, end]` day by day; a week closes when the day lands on
    /// the last column or the range ends, so the final week may be short.
    /// Duplicate dates in `records` keep the first occurrence.
    pub fn build<F>(
        start: NaiveDate,
        end: NaiveDate,
        week_start: WeekStart,
        records: &[R],
        date_of: F,
    ) -> Result<Self>
    where
        F: Fn(&R) -> NaiveDate,
    {
        if start > end {
            return Err(CoreError::InvalidDateRange { start, end });
        }

        let mut by_date: HashMap<NaiveDate, &R> = HashMap::new();
        for record in records {
            by_date.entry(date_of(record)).or_insert(record);
        }

        let mut weeks = Vec::new();
        let mut current_week = Vec::new();

        for date in start.iter_days().take_while(|d| *d <= end) {
            current_week.push(CalendarCell {
                date,
                record: by_date.get(&date).map(|r| (*r).clone()),
            });

            if week_start.day_index(date) == 6 || date == end {
                weeks.push(std::mem::take(&mut current_week));
            }
        }

        Ok(Self {
            start,
            end,
            week_start,
            weeks,
        })
    }

    /// Total number of day cells across all weeks.
    pub fn cell_count(&self) -> usize {
        self.weeks.iter().map(|w| w.len()).sum()
    }

    /// Record for a specific date, if that day is in range and has activity.
    /// Drives the selected-date detail panel; `None` means the panel is
    /// omitted rather than shown empty.
    pub fn record_for(&self, date: NaiveDate) -> Option<&R> {
        self.weeks
            .iter()
            .flatten()
            .find(|cell| cell.date == date)
            .and_then(|cell| cell.record.as_ref())
    }

    /// Iterate all cells in chronological order.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell<R>> {
        self.weeks.iter().flatten()
    }

    /// Date at (week, day) grid coordinates, for cursor-driven selection.
    pub fn date_at(&self, week: usize, day: usize) -> Option<NaiveDate> {
        self.weeks.get(week).and_then(|w| w.get(day)).map(|c| c.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct DayRecord {
        date: NaiveDate,
        commits: u64,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn build(
        start: NaiveDate,
        end: NaiveDate,
        records: &[DayRecord],
    ) -> Result<CalendarGrid<DayRecord>> {
        CalendarGrid::build(start, end, WeekStart::Sunday, records, |r| r.date)
    }

    #[test]
    fn test_cell_count_matches_range() {
        // 2025-07-09 (Wed) .. 2025-08-13 (Wed): 36 days, default tracking range
        let grid = build(date(2025, 7, 9), date(2025, 8, 13), &[]).unwrap();
        assert_eq!(grid.cell_count(), 36);
        assert_eq!(grid.cells().next().unwrap().date, date(2025, 7, 9));
        assert_eq!(grid.cells().last().unwrap().date, date(2025, 8, 13));
    }

    #[test]
    fn test_weeks_are_seven_days_except_last() {
        let grid = build(date(2025, 7, 9), date(2025, 8, 13), &[]).unwrap();
        let (last, full) = grid.weeks.split_last().unwrap();
        // First week is partial too when the range starts mid-week, but every
        // week that closed on a Saturday has exactly 7 cells.
        for week in full.iter().skip(1) {
            assert_eq!(week.len(), 7);
        }
        assert!((1..=7).contains(&last.len()));
    }

    #[test]
    fn test_single_week_with_sparse_activity() {
        // Wed 2025-07-09 .. Tue 2025-07-15, commits only on the 10th
        let records = vec![DayRecord {
            date: date(2025, 7, 10),
            commits: 2,
        }];
        let grid = build(date(2025, 7, 9), date(2025, 7, 15), &records).unwrap();

        // Wed..Sat closes one week, Sun..Tue the trailing partial week
        assert_eq!(grid.cell_count(), 7);
        assert_eq!(grid.weeks.len(), 2);
        assert_eq!(grid.weeks[0].len(), 4);
        assert_eq!(grid.weeks[1].len(), 3);

        for cell in grid.cells() {
            if cell.date == date(2025, 7, 10) {
                assert_eq!(cell.record.as_ref().unwrap().commits, 2);
            } else {
                assert!(cell.record.is_none(), "{} should have no data", cell.date);
            }
        }
    }

    #[test]
    fn test_no_data_distinct_from_zero_activity() {
        let records = vec![DayRecord {
            date: date(2025, 7, 10),
            commits: 0,
        }];
        let grid = build(date(2025, 7, 9), date(2025, 7, 11), &records).unwrap();

        assert!(grid.record_for(date(2025, 7, 9)).is_none());
        // Zero commits is still a record, not "no data"
        assert_eq!(grid.record_for(date(2025, 7, 10)).unwrap().commits, 0);
    }

    #[test]
    fn test_week_closes_on_saturday() {
        // 2025-07-12 is a Saturday
        let grid = build(date(2025, 7, 6), date(2025, 7, 19), &[]).unwrap();
        assert_eq!(grid.weeks.len(), 2);
        assert_eq!(grid.weeks[0].last().unwrap().date, date(2025, 7, 12));
    }

    #[test]
    fn test_monday_first_convention() {
        // 2025-07-13 is a Sunday; under Monday-first it is the last column
        let grid =
            CalendarGrid::build(date(2025, 7, 7), date(2025, 7, 20), WeekStart::Monday, &[], |r: &DayRecord| r.date)
                .unwrap();
        assert_eq!(grid.weeks.len(), 2);
        assert_eq!(grid.weeks[0].last().unwrap().date, date(2025, 7, 13));
    }

    #[test]
    fn test_single_day_range() {
        let grid = build(date(2025, 7, 9), date(2025, 7, 9), &[]).unwrap();
        assert_eq!(grid.cell_count(), 1);
        assert_eq!(grid.weeks.len(), 1);
    }

    #[test]
    fn test_reversed_range_fails_fast() {
        let err = build(date(2025, 8, 13), date(2025, 7, 9), &[]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_duplicate_dates_keep_first() {
        let records = vec![
            DayRecord {
                date: date(2025, 7, 10),
                commits: 2,
            },
            DayRecord {
                date: date(2025, 7, 10),
                commits: 9,
            },
        ];
        let grid = build(date(2025, 7, 10), date(2025, 7, 10), &records).unwrap();
        assert_eq!(grid.record_for(date(2025, 7, 10)).unwrap().commits, 2);
    }

    #[test]
    fn test_date_at_coordinates() {
        let grid = build(date(2025, 7, 9), date(2025, 7, 15), &[]).unwrap();
        assert_eq!(grid.date_at(0, 0), Some(date(2025, 7, 9)));
        assert_eq!(grid.date_at(1, 2), Some(date(2025, 7, 15)));
        assert_eq!(grid.date_at(1, 3), None);
    }
}
