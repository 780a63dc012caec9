//! courseboard-tui - TUI frontend for courseboard using Ratatui

pub mod app;
pub mod components;
pub mod tabs;
pub mod theme;
pub mod ui;
pub mod view;

pub use app::App;

use anyhow::Result;
use courseboard_core::{ApiClient, Preferences};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the TUI application until the user quits.
pub async fn run(client: ApiClient, prefs: Preferences) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client, prefs);
    let mut ui = ui::Ui::new();

    // The first view fetches immediately; the rest mount on first visit.
    app.mount_if_idle();

    let result = run_loop(&mut terminal, &mut app, &mut ui).await;

    // Restore terminal even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ui: &mut ui::Ui,
) -> Result<()> {
    loop {
        app.poll();
        terminal.draw(|frame| ui.render(frame, app))?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(..) => {}
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
