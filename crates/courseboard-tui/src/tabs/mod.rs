//! Tab implementations

pub mod dashboard;
pub mod progress;
pub mod status;
pub mod tech_stack;
pub mod testing;
pub mod workflow;

pub use dashboard::DashboardTab;
pub use progress::ProgressTab;
pub use status::StatusTab;
pub use tech_stack::TechStackTab;
pub use testing::TestingTab;
pub use workflow::WorkflowTab;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered stat card: bold value, dim subtitle.
pub(crate) fn render_stat_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    color: Color,
    subtitle: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let value_widget = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(value_widget, inner_chunks[1]);

    let subtitle_widget = Paragraph::new(Line::from(Span::styled(
        subtitle.to_string(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle_widget, inner_chunks[2]);
}

/// Evenly split a row into `n` stat card slots.
pub(crate) fn stat_row(area: Rect, n: u16) -> std::rc::Rc<[Rect]> {
    let share = 100 / n;
    let constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Percentage(share)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
}

/// Dim single-line key hint at the bottom of a tab.
pub(crate) fn render_hint(frame: &mut Frame, area: Rect, hint: &str) {
    let widget = Paragraph::new(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// 1203 -> "1.2K", 42 -> "42"
pub(crate) fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1_203), "1.2K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }
}
