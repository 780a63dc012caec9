//! Animated spinner for loading and busy indicators

use ratatui::{
    style::{Color, Style},
    text::Span,
};
use std::time::{Duration, Instant};

/// Braille-dot spinner, ticked once per render.
#[derive(Debug)]
pub struct Spinner {
    frames: &'static [&'static str],
    current_frame: usize,
    last_update: Instant,
    frame_duration: Duration,
    color: Color,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            frames: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            current_frame: 0,
            last_update: Instant::now(),
            frame_duration: Duration::from_millis(80),
            color: Color::Cyan,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Advance the animation when enough time has passed.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_update) >= self.frame_duration {
            self.current_frame = (self.current_frame + 1) % self.frames.len();
            self.last_update = now;
        }
    }

    pub fn render(&self) -> Span<'static> {
        Span::styled(
            self.frames[self.current_frame],
            Style::default().fg(self.color),
        )
    }

    pub fn current_frame(&self) -> &'static str {
        self.frames[self.current_frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_does_not_advance_before_frame_duration() {
        let mut spinner = Spinner::new();
        let first = spinner.current_frame();
        spinner.tick();
        assert_eq!(spinner.current_frame(), first);
    }
}
