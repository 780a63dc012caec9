//! Git Workflow tab - branching practice summary and per-project scores

use courseboard_core::models::UsageStat;
use courseboard_core::ThresholdTable;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Row, Table},
    Frame,
};

use crate::app::WorkflowData;
use crate::theme::{severity_color, workflow_style_color};

use super::{format_number, render_hint, render_stat_card, stat_row};

pub struct WorkflowTab;

impl WorkflowTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &WorkflowData,
        selected: usize,
        thresholds: &ThresholdTable,
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
        self.render_projects(frame, chunks[1], data, selected, thresholds);
        render_hint(frame, chunks[2], "j/k select · a analyze · r refresh");
    }

    fn render_stats(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &WorkflowData,
        thresholds: &ThresholdTable,
    ) {
        let stats = &data.summary.workflow_statistics;
        let cards = stat_row(area, 4);
        render_stat_card(
            frame,
            cards[0],
            "◆ Projects",
            &format_number(data.summary.total_projects),
            Color::Cyan,
            "analyzed",
        );
        let avg = stats.average_score;
        render_stat_card(
            frame,
            cards[1],
            "◎ Avg Score",
            &format!("{avg:.1}"),
            severity_color(thresholds.classify(avg)),
            "out of 100",
        );
        render_stat_card(
            frame,
            cards[2],
            "⎇ Branches",
            &usage_display(&stats.feature_branch_usage),
            Color::Green,
            "feature branches",
        );
        render_stat_card(
            frame,
            cards[3],
            "⇄ PRs",
            &usage_display(&stats.pull_request_usage),
            Color::Yellow,
            "pull requests",
        );
    }

    fn render_projects(
        &self,
        frame: &mut Frame,
        area: Rect,
        data: &WorkflowData,
        selected: usize,
        thresholds: &ThresholdTable,
    ) {
        let rows: Vec<Row> = data
            .projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let score_style =
                    Style::default().fg(severity_color(thresholds.classify(project.workflow_score)));
                let style_color = workflow_style_color(&project.workflow_style);
                let mut row = Row::new(vec![
                    Span::raw(project.project_name.clone()),
                    Span::styled(project.workflow_style.clone(), Style::default().fg(style_color)),
                    Span::raw(project.total_branches.to_string()),
                    Span::raw(format!(
                        "{}/{}",
                        project.commits_on_branches, project.total_commits
                    )),
                    Span::raw(format!(
                        "{}/{}",
                        project.merged_pull_requests, project.pull_request_count
                    )),
                    Span::styled(format!("{:.0}", project.workflow_score), score_style),
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
                Constraint::Length(16),
                Constraint::Length(9),
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec![
                "Project",
                "Style",
                "Branches",
                "On Branch",
                "PRs",
                "Score",
            ])
            .style(Style::default().fg(Color::DarkGray)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Workflow by Project ",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
        );

        frame.render_widget(table, area);
    }
}

fn usage_display(usage: &UsageStat) -> String {
    format!("{} ({}%)", usage.count, usage.percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_display() {
        let usage = UsageStat {
            count: 10,
            percentage: 83.3,
        };
        assert_eq!(usage_display(&usage), "10 (83.3%)");
    }
}
