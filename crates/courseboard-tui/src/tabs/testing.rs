//! Testing tab - test practice summary with per-project drill-down

use courseboard_core::models::TestProject;
use courseboard_core::{percentage, ChartSeries, ThresholdTable};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Row, Table},
    Frame,
};

use crate::app::TestingData;
use crate::theme::severity_color;

use super::{format_number, render_hint, render_stat_card, stat_row};
use super::tech_stack::render_distribution;

pub struct TestingTab;

impl TestingTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &TestingData,
        selected: usize,
        thresholds: &ThresholdTable,
        series_cap: usize,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_stats(frame, chunks[0], data, thresholds);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        self.render_projects(frame, columns[0], data, selected, thresholds);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);
        self.render_detail(frame, right[0], data.projects.get(selected));

        let frameworks = ChartSeries::from_pairs(
            data.summary
                .framework_distribution
                .iter()
                .map(|f| (f.framework.clone(), f.project_count)),
            data.summary.summary.total_projects,
            series_cap,
        );
        render_distribution(frame, right[1], " Frameworks ", &frameworks);

        render_hint(
            frame,
            chunks[2],
            "j/k select · a analyze all · f refresh project · r refresh",
        );
    }

    fn render_stats(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &TestingData,
        thresholds: &ThresholdTable,
    ) {
        let totals = &data.summary.summary;
        let cards = stat_row(area, 4);
        let tested_pct = percentage(totals.projects_with_unit_tests, totals.total_projects);
        render_stat_card(
            frame,
            cards[0],
            "✓ Tested",
            &format!(
                "{}/{}",
                totals.projects_with_unit_tests, totals.total_projects
            ),
            Color::Green,
            &format!("{tested_pct}% have unit tests"),
        );
        let avg = totals.avg_test_coverage;
        render_stat_card(
            frame,
            cards[1],
            "◎ Coverage",
            &format!("{avg:.1}%"),
            severity_color(thresholds.classify(avg)),
            "average",
        );
        render_stat_card(
            frame,
            cards[2],
            "▤ Test Plans",
            &format_number(totals.projects_with_test_plan),
            Color::Cyan,
            "projects",
        );
        render_stat_card(
            frame,
            cards[3],
            "↻ TDD",
            &format_number(totals.projects_using_tdd),
            Color::Magenta,
            "projects",
        );
    }

    fn render_projects(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &TestingData,
        selected: usize,
        thresholds: &ThresholdTable,
    ) {
        let rows: Vec<Row> = data
            .projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let coverage_style =
                    Style::default().fg(severity_color(thresholds.classify(project.test_coverage)));
                let tests = if project.has_unit_tests {
                    Span::styled("✓", Style::default().fg(Color::Green))
                } else {
                    Span::styled("✗", Style::default().fg(Color::Red))
                };
                let mut row = Row::new(vec![
                    Span::raw(project.project_name.clone()),
                    tests,
                    Span::raw(project.test_metrics.total_test_files.to_string()),
                    Span::raw(project.test_metrics.total_test_functions.to_string()),
                    Span::raw(project.test_frameworks.join(", ")),
                    Span::styled(format!("{:.0}%", project.test_coverage), coverage_style),
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
                Constraint::Min(16),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(16),
                Constraint::Length(9),
            ],
        )
        .header(
            Row::new(vec!["Project", "Tests", "Files", "Fns", "Frameworks", "Coverage"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Test Practices ",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
        );

        frame.render_widget(table, area);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, project: Option<&TestProject>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                match project {
                    Some(p) => format!(" {} ", p.project_name),
                    None => " Project Detail ".to_string(),
                },
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));

        let Some(project) = project else {
            frame.render_widget(
                List::new(vec![ListItem::new(Span::styled(
                    "No project selected",
                    Style::default().fg(Color::DarkGray),
                ))])
                .block(block),
                area,
            );
            return;
        };

        let flag = |set: bool, label: &str| {
            Line::from(vec![
                if set {
                    Span::styled("✓ ", Style::default().fg(Color::Green))
                } else {
                    Span::styled("✗ ", Style::default().fg(Color::Red))
                },
                Span::raw(label.to_string()),
            ])
        };

        let mut items = vec![
            ListItem::new(flag(project.has_unit_tests, "unit tests")),
            ListItem::new(flag(project.has_test_plan, "test plan")),
            ListItem::new(flag(project.has_test_documentation, "test documentation")),
            ListItem::new(flag(project.uses_tdd, "test-driven development")),
        ];
        if !project.test_files.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                "Test files:",
                Style::default().fg(Color::DarkGray),
            ))));
            items.extend(project.test_files.iter().map(|file| {
                ListItem::new(Line::from(Span::raw(format!("  {file}"))))
            }));
        }

        frame.render_widget(List::new(items).block(block), area);
    }
}
