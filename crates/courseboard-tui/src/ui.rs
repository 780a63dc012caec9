//! Top-level frame layout: tab bar, active view, toasts

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Tab};
use crate::components::{render_error_panel, Spinner};
use crate::tabs::{
    DashboardTab, ProgressTab, StatusTab, TechStackTab, TestingTab, WorkflowTab,
};
use crate::view::ViewState;

pub struct Ui {
    spinner: Spinner,
    dashboard: DashboardTab,
    tech_stack: TechStackTab,
    workflow: WorkflowTab,
    progress: ProgressTab,
    status: StatusTab,
    testing: TestingTab,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self {
            spinner: Spinner::new(),
            dashboard: DashboardTab::new(),
            tech_stack: TechStackTab::new(),
            workflow: WorkflowTab::new(),
            progress: ProgressTab::new(),
            status: StatusTab::new(),
            testing: TestingTab::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        self.spinner.tick();

        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        self.render_tab_bar(frame, chunks[0], app);
        self.render_active_view(frame, chunks[1], app);

        app.toasts.render(frame, area);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect, app: &App) {
        let titles: Vec<Line> = Tab::all()
            .iter()
            .map(|tab| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", tab.shortcut()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(tab.name()),
                ])
            })
            .collect();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(28)])
            .split(area);

        let tabs = Tabs::new(titles)
            .select(app.active_tab.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        " courseboard ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )),
            );
        frame.render_widget(tabs, columns[0]);

        // Busy indicator for the one running action, if any.
        let status = match app.action.busy_label() {
            Some(label) => Line::from(vec![
                self.spinner.render(),
                Span::raw(" "),
                Span::styled(label, Style::default().fg(Color::Yellow)),
            ]),
            None => Line::from(Span::styled(
                "q quit · Tab next",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(
            Paragraph::new(status)
                .alignment(Alignment::Right)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                ),
            columns[1],
        );
    }

    fn render_active_view(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        match app.active_tab {
            Tab::Dashboard => match &app.dashboard.state {
                ViewState::Loaded(summary) => self.dashboard.render(frame, area, summary),
                state => self.render_placeholder(frame, area, state_kind(state), "Dashboard"),
            },
            Tab::TechStack => match &app.tech_stack.state {
                ViewState::Loaded(summary) => self.tech_stack.render(
                    frame,
                    area,
                    summary,
                    app.tech_view,
                    app.prefs.series_cap,
                ),
                state => self.render_placeholder(frame, area, state_kind(state), "Tech Stack"),
            },
            Tab::Workflow => match &app.workflow.state {
                ViewState::Loaded(data) => self.workflow.render(
                    frame,
                    area,
                    data,
                    app.workflow_selected,
                    &app.prefs.workflow_thresholds,
                ),
                state => self.render_placeholder(frame, area, state_kind(state), "Git Workflow"),
            },
            Tab::Progress => match &app.progress.state {
                ViewState::Loaded(data) => self.progress.render(
                    frame,
                    area,
                    data,
                    app.selected_date,
                    &app.prefs.intensity_thresholds,
                ),
                state => self.render_placeholder(frame, area, state_kind(state), "Progress"),
            },
            Tab::Status => match &app.status.state {
                ViewState::Loaded(data) => self.status.render(
                    frame,
                    area,
                    data,
                    app.status_selected,
                    &app.prefs.quality_thresholds,
                    app.prefs.series_cap,
                ),
                state => self.render_placeholder(frame, area, state_kind(state), "Status"),
            },
            Tab::Testing => match &app.testing.state {
                ViewState::Loaded(data) => self.testing.render(
                    frame,
                    area,
                    data,
                    app.testing_selected,
                    &app.prefs.coverage_thresholds,
                    app.prefs.series_cap,
                ),
                state => self.render_placeholder(frame, area, state_kind(state), "Testing"),
            },
        }
    }

    fn render_placeholder(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: StateKind<'_>,
        title: &str,
    ) {
        match state {
            StateKind::Failed(message) => render_error_panel(frame, area, message, title),
            StateKind::Pending => {
                let body = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(vec![
                        self.spinner.render(),
                        Span::raw(" Loading "),
                        Span::raw(title.to_string()),
                        Span::raw("..."),
                    ]),
                ])
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                );
                frame.render_widget(body, area);
            }
        }
    }
}

enum StateKind<'a> {
    Pending,
    Failed(&'a str),
}

fn state_kind<T>(state: &ViewState<T>) -> StateKind<'_> {
    match state {
        ViewState::Failed(message) => StateKind::Failed(message),
        _ => StateKind::Pending,
    }
}
