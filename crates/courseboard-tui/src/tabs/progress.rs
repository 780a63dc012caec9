//! Progress tab - activity calendar heatmap, day detail, project ranking

use chrono::{Datelike, NaiveDate};
use courseboard_core::{percentage, top_n_by, ThresholdTable};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Sparkline, Table},
    Frame,
};

use crate::app::ProgressData;
use crate::theme::{intensity_glyph, severity_color};

use super::{format_number, render_hint, render_stat_card, stat_row};

const RANKING_LIMIT: usize = 10;

pub struct ProgressTab;

impl ProgressTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &ProgressData,
        selected: Option<NaiveDate>,
        intensity: &ThresholdTable,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(9),
                Constraint::Length(RANKING_LIMIT as u16 + 3),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_stats(frame, chunks[0], data);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        self.render_calendar(frame, columns[0], data, selected, intensity);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(6)])
            .split(columns[1]);
        self.render_day_detail(frame, right[0], data, selected);
        self.render_daily_commits(frame, right[1], data);

        self.render_ranking(frame, chunks[2], data);
        render_hint(
            frame,
            chunks[3],
            "←/→/↑/↓ select day · s sync · r refresh",
        );
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, data: &ProgressData) {
        let summary = &data.summary;
        let cards = stat_row(area, 4);
        render_stat_card(
            frame,
            cards[0],
            "▶ Commits",
            &format_number(summary.total_commits),
            Color::Yellow,
            &format!("over {} days", summary.total_days),
        );
        let active_pct = percentage(summary.projects_with_activity, summary.total_projects);
        render_stat_card(
            frame,
            cards[1],
            "◆ Active",
            &format!(
                "{}/{}",
                summary.projects_with_activity, summary.total_projects
            ),
            Color::Cyan,
            &format!("{active_pct}% of projects"),
        );
        render_stat_card(
            frame,
            cards[2],
            "◉ Opened",
            &format_number(summary.total_issues_created),
            Color::Magenta,
            "issues",
        );
        render_stat_card(
            frame,
            cards[3],
            "✓ Closed",
            &format_number(summary.total_issues_closed),
            Color::Green,
            "issues",
        );
    }

    /// Week-per-row heatmap. A dot means no record for that day, which is not
    /// the same thing as a record with zero commits.
    fn render_calendar(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &ProgressData,
        selected: Option<NaiveDate>,
        intensity: &ThresholdTable,
    ) {
        let grid = &data.grid;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" Activity {} → {} ", grid.start, grid.end),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));

        let mut lines = Vec::with_capacity(grid.weeks.len() + 1);
        lines.push(Line::from(Span::styled(
            match grid.week_start {
                courseboard_core::WeekStart::Sunday => "         Su Mo Tu We Th Fr Sa",
                courseboard_core::WeekStart::Monday => "         Mo Tu We Th Fr Sa Su",
            },
            Style::default().fg(Color::DarkGray),
        )));

        for week in &grid.weeks {
            let mut spans = Vec::with_capacity(week.len() + 2);
            let first = week.first().map(|c| c.date);
            spans.push(Span::styled(
                first.map_or_else(String::new, |d| format!("{:>3} {:>2}   ", month_abbr(d), d.day())),
                Style::default().fg(Color::DarkGray),
            ));
            // Leading weeks can be short; pad so columns line up.
            if let Some(first) = first {
                let offset = day_column(grid.week_start, first);
                spans.push(Span::raw("   ".repeat(offset)));
            }
            for cell in week {
                let commits = cell.record.as_ref().map(|r| r.total_commits);
                let severity = intensity.classify(commits.unwrap_or(0) as f64);
                let glyph = cell_glyph(commits, severity);
                let mut style = Style::default().fg(severity_color(severity));
                if selected == Some(cell.date) {
                    style = style
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(format!(" {glyph} "), style));
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Per-project breakdown for the selected day. Days without a record get
    /// a placeholder instead of an empty table.
    fn render_day_detail(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &ProgressData,
        selected: Option<NaiveDate>,
    ) {
        let title = match selected {
            Some(date) => format!(" {date} "),
            None => " Day Detail ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));

        let record = selected.and_then(|date| data.grid.record_for(date));
        let Some(day) = record else {
            let hint = if selected.is_some() {
                "No activity recorded for this day"
            } else {
                "Select a day with the arrow keys"
            };
            frame.render_widget(
                Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
                    .block(block),
                area,
            );
            return;
        };

        let mut items = vec![ListItem::new(Line::from(vec![
            Span::styled(
                format!("{} commits", day.total_commits),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!(
                " · +{} lines · {} opened / {} closed",
                day.total_lines_added, day.total_issues_created, day.total_issues_closed
            )),
        ]))];
        items.extend(day.project_details.iter().map(project_line));

        frame.render_widget(List::new(items).block(block), area);
    }

    /// Commit volume per day from the summary's daily series. The series is
    /// sparse; days it skips render as zero-height bars.
    fn render_daily_commits(&self, frame: &mut Frame, area: Rect, data: &ProgressData) {
        let grid = &data.grid;
        let mut by_date: std::collections::HashMap<_, u64> = std::collections::HashMap::new();
        for day in &data.summary.daily_activity_summary {
            by_date.insert(day.date, day.total_commits);
        }
        let values: Vec<u64> = grid
            .cells()
            .map(|cell| by_date.get(&cell.date).copied().unwrap_or(0))
            .collect();

        let sparkline = Sparkline::default()
            .data(&values)
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        " Daily Commits ",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )),
            );
        frame.render_widget(sparkline, area);
    }

    fn render_ranking(&self, frame: &mut Frame, area: Rect, data: &ProgressData) {
        let summary = &data.summary;
        let top = top_n_by(&summary.project_activity_ranking, RANKING_LIMIT, |p| {
            p.total_commits
        });

        let rows: Vec<Row> = top
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let days_pct = percentage(project.active_days, summary.total_days);
                Row::new(vec![
                    format!("{:>2}", i + 1),
                    project.project_name.clone(),
                    format_number(project.total_commits),
                    format!("{} ({days_pct}%)", project.active_days),
                    format!("+{}", format_number(project.total_lines_added)),
                    format!(
                        "{}/{}",
                        project.total_issues_created, project.total_issues_closed
                    ),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Min(18),
                Constraint::Length(8),
                Constraint::Length(14),
                Constraint::Length(8),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(vec!["#", "Project", "Commits", "Active Days", "Lines", "Issues"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Most Active Projects ",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
        );

        frame.render_widget(table, area);
    }
}

fn project_line(detail: &courseboard_core::models::ProjectDayDetail) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled("▪ ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("{:<20} ", detail.project_name)),
        Span::styled(
            format!("{} commits", detail.commit_count),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(" +{}", detail.lines_added),
            Style::default().fg(Color::Green),
        ),
    ]))
}

/// Heatmap glyph for one cell. A day the service reported with zero commits
/// is not the same as a day it never reported, so the two get distinct marks.
fn cell_glyph(commits: Option<u64>, severity: courseboard_core::Severity) -> &'static str {
    match commits {
        None => "·",
        Some(0) => "○",
        Some(_) => intensity_glyph(severity),
    }
}

fn month_abbr(date: NaiveDate) -> &'static str {
    match date.month() {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

fn day_column(week_start: courseboard_core::WeekStart, date: NaiveDate) -> usize {
    match week_start {
        courseboard_core::WeekStart::Sunday => date.weekday().num_days_from_sunday() as usize,
        courseboard_core::WeekStart::Monday => date.weekday().num_days_from_monday() as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_abbr() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 9).unwrap();
        assert_eq!(month_abbr(date), "Jul");
    }

    #[test]
    fn test_zero_commit_record_renders_unlike_missing_record() {
        use courseboard_core::{Severity, ThresholdTable};

        let intensity = ThresholdTable::commit_intensity();
        let no_record = cell_glyph(None, intensity.classify(0.0));
        let zero_commits = cell_glyph(Some(0), intensity.classify(0.0));
        assert_ne!(no_record, zero_commits);
        assert_eq!(cell_glyph(Some(2), Severity::Success), "▪");
    }

    #[test]
    fn test_day_column_sunday_first() {
        // 2025-07-09 is a Wednesday
        let date = NaiveDate::from_ymd_opt(2025, 7, 9).unwrap();
        assert_eq!(day_column(courseboard_core::WeekStart::Sunday, date), 3);
        assert_eq!(day_column(courseboard_core::WeekStart::Monday, date), 2);
    }
}
