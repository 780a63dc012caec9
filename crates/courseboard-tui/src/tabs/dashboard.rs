//! Dashboard tab - cohort overview with per-student rankings and activity feed

use courseboard_core::models::DashboardSummary;
use courseboard_core::top_n_by;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::{format_number, render_stat_card, stat_row};

const RANKING_LIMIT: usize = 10;

pub struct DashboardTab;

impl DashboardTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Length(8),
            ])
            .split(area);

        self.render_stats(frame, chunks[0], summary);
        self.render_rankings(frame, chunks[1], summary);
        self.render_activity_feed(frame, chunks[2], summary);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
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
            "● Students",
            &format_number(summary.total_students),
            Color::Green,
            "enrolled",
        );
        render_stat_card(
            frame,
            cards[2],
            "▶ Commits",
            &format_number(summary.total_commits),
            Color::Yellow,
            "total",
        );
        render_stat_card(
            frame,
            cards[3],
            "◉ Issues",
            &format_number(summary.total_issues),
            Color::Magenta,
            "total",
        );
    }

    fn render_rankings(&self, frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let top_committers = top_n_by(&summary.commits_by_student, RANKING_LIMIT, |s| {
            s.commit_count
        });
        let items: Vec<ListItem> = top_committers
            .iter()
            .enumerate()
            .map(|(i, student)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>2}. ", i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format!("{:<20} ", student.name)),
                    Span::styled(
                        format_number(student.commit_count),
                        Style::default().fg(Color::Yellow),
                    ),
                ]))
            })
            .collect();
        frame.render_widget(
            List::new(items).block(titled_block(" Commits by Student ", Color::Yellow)),
            columns[0],
        );

        let top_issue_authors =
            top_n_by(&summary.issues_by_student, RANKING_LIMIT, |s| s.issue_count);
        let items: Vec<ListItem> = top_issue_authors
            .iter()
            .enumerate()
            .map(|(i, student)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>2}. ", i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format!("{:<20} ", student.name)),
                    Span::styled(
                        format_number(student.issue_count),
                        Style::default().fg(Color::Magenta),
                    ),
                ]))
            })
            .collect();
        frame.render_widget(
            List::new(items).block(titled_block(" Issues by Student ", Color::Magenta)),
            columns[1],
        );
    }

    fn render_activity_feed(&self, frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
        let items: Vec<ListItem> = summary
            .recent_activity
            .iter()
            .map(|event| {
                let (icon, color) = match event.kind.as_str() {
                    "commit" => ("▶", Color::Yellow),
                    "issue" => ("◉", Color::Magenta),
                    _ => ("·", Color::DarkGray),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{icon} "), Style::default().fg(color)),
                    Span::styled(
                        format!("{:<10} ", event.date),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format!("{:<16} ", event.student_name)),
                    Span::raw(event.title.clone()),
                ]))
            })
            .collect();

        frame.render_widget(
            List::new(items).block(titled_block(" Recent Activity ", Color::White)),
            area,
        );
    }
}

fn titled_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
}
