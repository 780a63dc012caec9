//! Color language for the courseboard TUI
//!
//! Severity labels come out of the core threshold tables; this module is the
//! single place they turn into terminal colors.

use courseboard_core::Severity;
use ratatui::style::Color;

/// Map a metric severity label to its display color.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
        Severity::None => Color::DarkGray,
    }
}

/// Calendar heatmap glyph for a day's commit intensity.
pub fn intensity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::None => "·",
        Severity::Success => "▪",
        Severity::Info | Severity::Warning => "◼",
        Severity::Danger => "█",
    }
}

/// Workflow style accent colors (matches the web views' badge scheme).
pub fn workflow_style_color(style: &str) -> Color {
    if style.contains("Git Flow") {
        Color::Blue
    } else if style.contains("Feature Branch") {
        Color::Cyan
    } else if style.contains("Trunk Based") {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

/// Rotating palette for distribution gauges.
pub const GAUGE_COLORS: [Color; 5] = [
    Color::Magenta,
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Blue,
];
