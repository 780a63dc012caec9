//! TUI application state and key handling

use chrono::NaiveDate;
use courseboard_core::models::{
    DashboardSummary, DayDetail, ProgressSummary, ProjectStatus, StatusSummary, TechStackSummary,
    TestProject, TestSummary, WorkflowProject, WorkflowSummary,
};
use courseboard_core::{ApiClient, CalendarGrid, Preferences};
use crossterm::event::{KeyCode, KeyEvent};

use crate::components::toast::{Toast, ToastManager};
use crate::view::{ActionSlot, ViewSlot};

/// Active tab in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    TechStack,
    Workflow,
    Progress,
    Status,
    Testing,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Dashboard,
            Tab::TechStack,
            Tab::Workflow,
            Tab::Progress,
            Tab::Status,
            Tab::Testing,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::TechStack => 1,
            Tab::Workflow => 2,
            Tab::Progress => 3,
            Tab::Status => 4,
            Tab::Testing => 5,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Tab::Dashboard,
            1 => Tab::TechStack,
            2 => Tab::Workflow,
            3 => Tab::Progress,
            4 => Tab::Status,
            5 => Tab::Testing,
            _ => Tab::Dashboard,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::TechStack => "Tech Stack",
            Tab::Workflow => "Git Workflow",
            Tab::Progress => "Progress",
            Tab::Status => "Status",
            Tab::Testing => "Testing",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Dashboard => '1',
            Tab::TechStack => '2',
            Tab::Workflow => '3',
            Tab::Progress => '4',
            Tab::Status => '5',
            Tab::Testing => '6',
        }
    }
}

/// Tech stack sub-view cycled with Left/Right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TechView {
    #[default]
    Languages,
    Frameworks,
    Ai,
}

impl TechView {
    pub fn next(self) -> Self {
        match self {
            TechView::Languages => TechView::Frameworks,
            TechView::Frameworks => TechView::Ai,
            TechView::Ai => TechView::Languages,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            TechView::Languages => TechView::Ai,
            TechView::Frameworks => TechView::Languages,
            TechView::Ai => TechView::Frameworks,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TechView::Languages => "Languages",
            TechView::Frameworks => "Frameworks",
            TechView::Ai => "AI Usage",
        }
    }
}

/// Everything the Git Workflow view needs, fetched together.
#[derive(Debug)]
pub struct WorkflowData {
    pub summary: WorkflowSummary,
    pub projects: Vec<WorkflowProject>,
}

/// Progress view snapshot: summary plus the calendar grid built from the
/// per-day records over the configured tracking window.
#[derive(Debug)]
pub struct ProgressData {
    pub summary: ProgressSummary,
    pub grid: CalendarGrid<DayDetail>,
}

#[derive(Debug)]
pub struct StatusData {
    pub statuses: Vec<ProjectStatus>,
    pub summary: StatusSummary,
}

#[derive(Debug)]
pub struct TestingData {
    pub projects: Vec<TestProject>,
    pub summary: TestSummary,
}

/// TUI application state
pub struct App {
    pub client: ApiClient,
    pub prefs: Preferences,

    pub active_tab: Tab,
    pub should_quit: bool,

    // One slot per tab; each is mounted lazily on first visit.
    pub dashboard: ViewSlot<DashboardSummary>,
    pub tech_stack: ViewSlot<TechStackSummary>,
    pub workflow: ViewSlot<WorkflowData>,
    pub progress: ViewSlot<ProgressData>,
    pub status: ViewSlot<StatusData>,
    pub testing: ViewSlot<TestingData>,

    // One mutation at a time across the whole app.
    pub action: ActionSlot,
    action_refreshes: Option<Tab>,

    pub toasts: ToastManager,

    // Per-tab cursor state
    pub tech_view: TechView,
    pub selected_date: Option<NaiveDate>,
    pub status_selected: usize,
    pub testing_selected: usize,
    pub workflow_selected: usize,
}

impl App {
    pub fn new(client: ApiClient, prefs: Preferences) -> Self {
        Self {
            client,
            prefs,
            active_tab: Tab::Dashboard,
            should_quit: false,
            dashboard: ViewSlot::new(),
            tech_stack: ViewSlot::new(),
            workflow: ViewSlot::new(),
            progress: ViewSlot::new(),
            status: ViewSlot::new(),
            testing: ViewSlot::new(),
            action: ActionSlot::new(),
            action_refreshes: None,
            toasts: ToastManager::new(),
            tech_view: TechView::default(),
            selected_date: None,
            status_selected: 0,
            testing_selected: 0,
            workflow_selected: 0,
        }
    }

    // ===================
    // View mounting
    // ===================

    /// Mount the active tab's view if it has never been fetched.
    pub fn mount_if_idle(&mut self) {
        let idle = match self.active_tab {
            Tab::Dashboard => matches!(self.dashboard.state, crate::view::ViewState::Idle),
            Tab::TechStack => matches!(self.tech_stack.state, crate::view::ViewState::Idle),
            Tab::Workflow => matches!(self.workflow.state, crate::view::ViewState::Idle),
            Tab::Progress => matches!(self.progress.state, crate::view::ViewState::Idle),
            Tab::Status => matches!(self.status.state, crate::view::ViewState::Idle),
            Tab::Testing => matches!(self.testing.state, crate::view::ViewState::Idle),
        };
        if idle {
            self.mount_active();
        }
    }

    /// (Re)fetch the active tab's data, replacing any in-flight fetch.
    pub fn mount_active(&mut self) {
        self.mount_tab(self.active_tab);
    }

    fn mount_tab(&mut self, tab: Tab) {
        let client = self.client.clone();
        match tab {
            Tab::Dashboard => {
                self.dashboard
                    .mount(async move { client.dashboard_summary().await });
            }
            Tab::TechStack => {
                self.tech_stack
                    .mount(async move { client.tech_stack_summary().await });
            }
            Tab::Workflow => {
                self.workflow.mount(async move {
                    let (summary, projects) =
                        tokio::try_join!(client.workflow_summary(), client.workflow_projects())?;
                    Ok(WorkflowData { summary, projects })
                });
            }
            Tab::Progress => {
                let week_start = self.prefs.week_start;
                let start = self.prefs.tracking_start;
                let end = self.prefs.tracking_end;
                self.progress.mount(async move {
                    let (summary, days) = tokio::try_join!(
                        client.progress_summary(),
                        client.progress_calendar(start, end)
                    )?;
                    let grid = CalendarGrid::build(start, end, week_start, &days, |d| d.date)?;
                    Ok(ProgressData { summary, grid })
                });
            }
            Tab::Status => {
                self.status.mount(async move {
                    let (statuses, summary) =
                        tokio::try_join!(client.status_list(), client.status_summary())?;
                    Ok(StatusData { statuses, summary })
                });
            }
            Tab::Testing => {
                self.testing.mount(async move {
                    let (projects, summary) =
                        tokio::try_join!(client.test_projects(), client.test_summary())?;
                    Ok(TestingData { projects, summary })
                });
            }
        }
    }

    /// Drive all in-flight fetches and the action slot. Call once per tick.
    pub fn poll(&mut self) {
        self.dashboard.poll();
        self.tech_stack.poll();
        self.workflow.poll();
        self.progress.poll();
        self.status.poll();
        self.testing.poll();

        if let Some(result) = self.action.poll() {
            match result.outcome {
                Ok(message) => {
                    let text = if message.is_empty() {
                        format!("{} finished", result.label)
                    } else {
                        message
                    };
                    self.toasts.push(Toast::success(text));
                    // A finished mutation invalidates its view's snapshot.
                    if let Some(tab) = self.action_refreshes.take() {
                        self.mount_tab(tab);
                    }
                }
                Err(message) => {
                    self.action_refreshes = None;
                    self.toasts
                        .push(Toast::error(format!("{} failed: {message}", result.label)));
                }
            }
        }
    }

    // ===================
    // Key handling
    // ===================

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.switch_tab(Tab::from_index((self.active_tab.index() + 1) % Tab::all().len()));
            }
            KeyCode::BackTab => {
                let count = Tab::all().len();
                self.switch_tab(Tab::from_index((self.active_tab.index() + count - 1) % count));
            }
            KeyCode::Char(c @ '1'..='6') => {
                self.switch_tab(Tab::from_index(c as usize - '1' as usize));
            }
            KeyCode::Char('r') | KeyCode::F(5) => self.mount_active(),
            _ => self.handle_tab_key(key),
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        // Leaving a still-loading view cancels its fetch; loaded snapshots stay.
        self.abort_if_loading(self.active_tab);
        self.active_tab = tab;
        self.mount_if_idle();
    }

    fn abort_if_loading(&mut self, tab: Tab) {
        use crate::view::{ViewSlot, ViewState};
        fn reset<T: Send + 'static>(slot: &mut ViewSlot<T>) {
            if slot.state.is_loading() {
                slot.abort();
                slot.state = ViewState::Idle;
            }
        }
        match tab {
            Tab::Dashboard => reset(&mut self.dashboard),
            Tab::TechStack => reset(&mut self.tech_stack),
            Tab::Workflow => reset(&mut self.workflow),
            Tab::Progress => reset(&mut self.progress),
            Tab::Status => reset(&mut self.status),
            Tab::Testing => reset(&mut self.testing),
        }
    }

    fn handle_tab_key(&mut self, key: KeyEvent) {
        match self.active_tab {
            Tab::TechStack => match key.code {
                KeyCode::Right => self.tech_view = self.tech_view.next(),
                KeyCode::Left => self.tech_view = self.tech_view.prev(),
                _ => {}
            },
            Tab::Workflow => match key.code {
                KeyCode::Char('a') => self.trigger_workflow_analyze(),
                KeyCode::Down | KeyCode::Char('j') => {
                    let len = self.workflow.state.data().map_or(0, |d| d.projects.len());
                    move_cursor(&mut self.workflow_selected, len, 1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    let len = self.workflow.state.data().map_or(0, |d| d.projects.len());
                    move_cursor(&mut self.workflow_selected, len, -1);
                }
                _ => {}
            },
            Tab::Progress => match key.code {
                KeyCode::Char('s') => self.trigger_progress_sync(),
                KeyCode::Left => self.move_selected_date(-1),
                KeyCode::Right => self.move_selected_date(1),
                KeyCode::Up => self.move_selected_date(-7),
                KeyCode::Down => self.move_selected_date(7),
                _ => {}
            },
            Tab::Status => match key.code {
                KeyCode::Char('a') => self.trigger_status_analyze(),
                KeyCode::Char('u') => self.trigger_status_update_repos(),
                KeyCode::Down | KeyCode::Char('j') => {
                    let len = self.status.state.data().map_or(0, |d| d.statuses.len());
                    move_cursor(&mut self.status_selected, len, 1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    let len = self.status.state.data().map_or(0, |d| d.statuses.len());
                    move_cursor(&mut self.status_selected, len, -1);
                }
                _ => {}
            },
            Tab::Testing => match key.code {
                KeyCode::Char('a') => self.trigger_test_analyze_all(),
                KeyCode::Char('f') => self.trigger_test_refresh_selected(),
                KeyCode::Down | KeyCode::Char('j') => {
                    let len = self.testing.state.data().map_or(0, |d| d.projects.len());
                    move_cursor(&mut self.testing_selected, len, 1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    let len = self.testing.state.data().map_or(0, |d| d.projects.len());
                    move_cursor(&mut self.testing_selected, len, -1);
                }
                _ => {}
            },
            Tab::Dashboard => {}
        }
    }

    /// Move the calendar cursor by `days`, clamped to the tracking window.
    fn move_selected_date(&mut self, days: i64) {
        let Some(data) = self.progress.state.data() else {
            return;
        };
        let (start, end) = (data.grid.start, data.grid.end);
        let current = self.selected_date.unwrap_or(start);
        let next = current + chrono::Duration::days(days);
        self.selected_date = Some(next.clamp(start, end));
    }

    // ===================
    // Actions
    // ===================

    fn trigger_workflow_analyze(&mut self) {
        let client = self.client.clone();
        self.start_action(Tab::Workflow, "Workflow analysis", async move {
            let outcome = client.workflow_analyze().await?;
            Ok(outcome.message.unwrap_or_default())
        });
    }

    fn trigger_progress_sync(&mut self) {
        let client = self.client.clone();
        self.start_action(Tab::Progress, "Progress sync", async move {
            let outcome = client.progress_sync().await?;
            Ok(outcome.message.unwrap_or_default())
        });
    }

    fn trigger_status_analyze(&mut self) {
        let client = self.client.clone();
        self.start_action(Tab::Status, "Status analysis", async move {
            let outcome = client.status_analyze().await?;
            Ok(outcome.message.unwrap_or_default())
        });
    }

    fn trigger_status_update_repos(&mut self) {
        let client = self.client.clone();
        self.start_action(Tab::Status, "Repository update", async move {
            let outcome = client.status_update_repos().await?;
            Ok(outcome.message.unwrap_or_default())
        });
    }

    fn trigger_test_analyze_all(&mut self) {
        let client = self.client.clone();
        self.start_action(Tab::Testing, "Test analysis", async move {
            let outcome = client.test_analyze_all().await?;
            Ok(outcome.message.unwrap_or_default())
        });
    }

    fn trigger_test_refresh_selected(&mut self) {
        let Some(name) = self
            .testing
            .state
            .data()
            .and_then(|d| d.projects.get(self.testing_selected))
            .map(|p| p.project_name.clone())
        else {
            return;
        };
        let client = self.client.clone();
        self.start_action(Tab::Testing, "Test refresh", async move {
            let outcome = client.test_refresh(&name).await?;
            Ok(outcome.message.unwrap_or_default())
        });
    }

    fn start_action<F>(&mut self, refreshes: Tab, label: &'static str, action: F)
    where
        F: std::future::Future<Output = courseboard_core::Result<String>> + Send + 'static,
    {
        if self.action.trigger(label, action) {
            self.action_refreshes = Some(refreshes);
        } else {
            self.toasts.push(Toast::warning(format!(
                "{} still running",
                self.action.busy_label().unwrap_or("an action")
            )));
        }
    }
}

fn move_cursor(selected: &mut usize, len: usize, delta: isize) {
    if len == 0 {
        *selected = 0;
        return;
    }
    let next = selected.saturating_add_signed(delta);
    *selected = next.min(len - 1);
}
