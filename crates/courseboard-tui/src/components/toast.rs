//! Toast notifications for action outcomes

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Warning,
    Error,
}

impl ToastType {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }
}

/// Single toast message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            message: message.into(),
            toast_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(4),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }
}

/// Holds active toasts and renders them stacked at the bottom of the frame.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn clear_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.clear_expired();
        if self.toasts.is_empty() {
            return;
        }

        let max_visible = 4;
        let visible: Vec<_> = self.toasts.iter().rev().take(max_visible).rev().collect();

        let toast_height: u16 = 3;
        let mut y_offset = area
            .height
            .saturating_sub(visible.len() as u16 * toast_height + 1);

        for toast in visible {
            let toast_width = (toast.message.len() as u16 + 8).min(area.width);
            let x_offset = area.width.saturating_sub(toast_width) / 2;

            let toast_area = Rect {
                x: area.x + x_offset,
                y: area.y + y_offset,
                width: toast_width,
                height: toast_height,
            };

            let color = toast.toast_type.color();
            let body = Paragraph::new(Line::from(vec![
                Span::styled(toast.toast_type.icon(), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(
                    toast.message.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

            frame.render_widget(Clear, toast_area);
            frame.render_widget(body, toast_area);

            y_offset += toast_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_is_not_expired() {
        assert!(!Toast::success("done").is_expired());
    }

    #[test]
    fn test_clear_expired_keeps_fresh_toasts() {
        let mut manager = ToastManager::new();
        manager.push(Toast::success("sync finished"));
        manager.push(Toast::error("analysis failed"));
        manager.clear_expired();
        assert_eq!(manager.len(), 2);
    }
}
