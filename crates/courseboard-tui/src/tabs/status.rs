//! Status tab - repository health and quality scores

use courseboard_core::{ChartSeries, ThresholdTable};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Row, Table},
    Frame,
};

use crate::app::StatusData;
use crate::theme::severity_color;

use super::{format_number, render_hint, render_stat_card, stat_row};
use super::tech_stack::render_distribution;

pub struct StatusTab;

impl StatusTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &StatusData,
        selected: usize,
        thresholds: &ThresholdTable,
        series_cap: usize,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(8),
                Constraint::Min(6),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_stats(frame, chunks[0], data, thresholds);

        let series = ChartSeries::from_map(
            &data.summary.language_distribution,
            data.summary.total_projects,
            series_cap,
        );
        render_distribution(frame, chunks[1], " Languages ", &series);

        self.render_projects(frame, chunks[2], data, selected, thresholds);
        render_hint(
            frame,
            chunks[3],
            "j/k select · a analyze · u update repos · r refresh",
        );
    }

    fn render_stats(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &StatusData,
        thresholds: &ThresholdTable,
    ) {
        let summary = &data.summary;
        let cards = stat_row(area, 4);
        render_stat_card(
            frame,
            cards[0],
            "◆ Projects",
            &format_number(summary.total_projects),
            Color::Cyan,
            "tracked",
        );
        render_stat_card(
            frame,
            cards[1],
            "▤ README",
            &format!("{}%", summary.readme_coverage),
            Color::Green,
            &format!("{} projects", summary.projects_with_readme),
        );
        let avg = summary.avg_quality_score;
        render_stat_card(
            frame,
            cards[2],
            "◎ Quality",
            &format!("{avg:.1}"),
            severity_color(thresholds.classify(avg)),
            "average score",
        );
        render_stat_card(
            frame,
            cards[3],
            "▶ Commits",
            &format!("{:.1}", summary.avg_commit_count),
            Color::Yellow,
            "avg per project",
        );
    }

    fn render_projects(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &StatusData,
        selected: usize,
        thresholds: &ThresholdTable,
    ) {
        let rows: Vec<Row> = data
            .statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let quality_style =
                    Style::default().fg(severity_color(thresholds.classify(status.quality_score)));
                let readme = if status.has_readme {
                    Span::styled("✓", Style::default().fg(Color::Green))
                } else {
                    Span::styled("✗", Style::default().fg(Color::Red))
                };
                let mut row = Row::new(vec![
                    Span::raw(status.project_name.clone()),
                    Span::raw(status.main_language.clone()),
                    readme,
                    Span::raw(format_number(status.code_files)),
                    Span::raw(format_number(status.commit_count)),
                    Span::raw(status.contributors.to_string()),
                    Span::styled(format!("{:.0}", status.quality_score), quality_style),
                ]);
                if i == selected {
                    row = row.style(Style::default().add_modifier(Modifier::REVERSED));
                }
                row
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(18),
                Constraint::Length(12),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(7),
            ],
        )
        .header(
            Row::new(vec![
                "Project", "Language", "README", "Code", "Commits", "People", "Quality",
            ])
            .style(Style::default().fg(Color::DarkGray)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Repository Health ",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
        );

        frame.render_widget(table, area);
    }
}
