//! Tech Stack tab - language/framework/AI distributions

use courseboard_core::models::TechStackSummary;
use courseboard_core::{percentage, ChartSeries};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::TechView;
use crate::theme::GAUGE_COLORS;

use super::{format_number, render_hint, render_stat_card, stat_row};

pub struct TechStackTab;

impl TechStackTab {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        summary: &TechStackSummary,
        view: TechView,
        series_cap: usize,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(6),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_stats(frame, chunks[0], summary);

        match view {
            TechView::Languages => {
                let series =
                    ChartSeries::from_map(&summary.language_summary, summary.total_projects, series_cap);
                render_distribution(frame, chunks[1], " Languages ", &series);
            }
            TechView::Frameworks => {
                let series = ChartSeries::from_map(
                    &summary.framework_summary,
                    summary.total_projects,
                    series_cap,
                );
                render_distribution(frame, chunks[1], " Frameworks ", &series);
            }
            TechView::Ai => self.render_ai(frame, chunks[1], summary, series_cap),
        }

        render_hint(frame, chunks[2], "←/→ switch view · r refresh");
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, summary: &TechStackSummary) {
        let cards = stat_row(area, 4);
        render_stat_card(
            frame,
            cards[0],
            "◆ Projects",
            &format_number(summary.total_projects),
            Color::Cyan,
            "analyzed",
        );
        render_stat_card(
            frame,
            cards[1],
            "≡ Languages",
            &format_number(summary.language_summary.len() as u64),
            Color::Green,
            "distinct",
        );
        render_stat_card(
            frame,
            cards[2],
            "▣ Frameworks",
            &format_number(summary.framework_summary.len() as u64),
            Color::Yellow,
            "distinct",
        );
        let ai_pct = percentage(summary.ai_summary.projects_with_ai, summary.total_projects);
        render_stat_card(
            frame,
            cards[3],
            "✦ AI Usage",
            &format!("{ai_pct}%"),
            Color::Magenta,
            "of projects",
        );
    }

    fn render_ai(&self, frame: &mut Frame, area: Rect, summary: &TechStackSummary, cap: usize) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let (models, libraries) = ai_series(summary, cap);
        render_distribution(frame, columns[0], " AI Models ", &models);
        render_distribution(frame, columns[1], " AI Libraries ", &libraries);
    }
}

/// AI model and library series. Like every category distribution, shares are
/// computed against the whole cohort, not just the AI-using projects.
fn ai_series(summary: &TechStackSummary, cap: usize) -> (ChartSeries, ChartSeries) {
    (
        ChartSeries::from_map(&summary.ai_summary.ai_models, summary.total_projects, cap),
        ChartSeries::from_map(&summary.ai_summary.ai_libraries, summary.total_projects, cap),
    )
}

/// Horizontal bar list for a capped distribution series.
pub(crate) fn render_distribution(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &ChartSeries,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));

    if series.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No data",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    let max = series.max_value();
    let bar_width = area.width.saturating_sub(40).max(10) as u64;

    let items: Vec<ListItem> = series
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let color = GAUGE_COLORS[i % GAUGE_COLORS.len()];
            let filled = (entry.value * bar_width / max) as usize;
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<18} ", truncate(&entry.name, 17))),
                Span::styled("█".repeat(filled.max(1)), Style::default().fg(color)),
                Span::styled(
                    format!(" {} ({}%)", entry.value, entry.percentage),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_names() {
        assert_eq!(truncate("Python", 17), "Python");
        assert_eq!(truncate("a-very-long-framework-name", 10), "a-very-lo…");
    }

    #[test]
    fn test_ai_series_percentages_use_cohort_total() {
        use courseboard_core::models::AiSummary;
        use std::collections::HashMap;

        let mut ai_models = HashMap::new();
        ai_models.insert("gpt-4".to_string(), 3);
        let mut ai_libraries = HashMap::new();
        ai_libraries.insert("openai".to_string(), 2);

        let summary = TechStackSummary {
            total_projects: 8,
            ai_summary: AiSummary {
                projects_with_ai: 4,
                ai_models,
                ai_libraries,
            },
            ..Default::default()
        };

        let (models, libraries) = ai_series(&summary, 10);
        // 3 of 8 projects, not 3 of the 4 AI-using ones
        assert_eq!(models.entries[0].percentage, 37.5);
        assert_eq!(libraries.entries[0].percentage, 25.0);
    }
}
