//! Error panel shown when a view's fetch failed

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Full-pane error display with the failure message and the retry hint.
/// Replaces the view body entirely; stale data is never shown behind it.
pub fn render_error_panel(frame: &mut Frame, area: Rect, message: &str, title: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("✗ ", Style::default().fg(Color::Red)),
            Span::raw(message.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'r' to retry",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(body, area);
}
