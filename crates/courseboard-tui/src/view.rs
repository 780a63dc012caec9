//! Per-view request lifecycle
//!
//! Each tab owns a `ViewSlot` holding its fetched snapshot. Mounting spawns a
//! task for all of the view's requests; the result comes back over a oneshot
//! channel polled from the render loop. Remounting or dropping the slot aborts
//! the in-flight task, so no request outlives the view that issued it.

use std::future::Future;

use courseboard_core::CoreError;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Request lifecycle state for one view.
#[derive(Debug, Default)]
pub enum ViewState<T> {
    /// Not mounted yet
    #[default]
    Idle,
    /// Requests in flight
    Loading,
    /// All required requests resolved
    Loaded(T),
    /// At least one required request failed; holds the first failure message
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Owns one view's snapshot and its in-flight fetch task.
#[derive(Debug, Default)]
pub struct ViewSlot<T> {
    pub state: ViewState<T>,
    rx: Option<oneshot::Receiver<Result<T, CoreError>>>,
    task: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> ViewSlot<T> {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            rx: None,
            task: None,
        }
    }

    /// Mount (or remount) the view: abort any in-flight fetch and spawn a
    /// fresh one. Partial results are never kept — the previous snapshot is
    /// replaced wholesale once the new fetch settles.
    pub fn mount<F>(&mut self, fetch: F)
    where
        F: Future<Output = Result<T, CoreError>> + Send + 'static,
    {
        self.abort();
        let (tx, rx) = oneshot::channel();
        self.task = Some(tokio::spawn(async move {
            let _ = tx.send(fetch.await);
        }));
        self.rx = Some(rx);
        self.state = ViewState::Loading;
    }

    /// Non-blocking poll; call once per render tick.
    pub fn poll(&mut self) {
        let Some(rx) = self.rx.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(data)) => {
                self.state = ViewState::Loaded(data);
                self.rx = None;
                self.task = None;
            }
            Ok(Err(err)) => {
                tracing::warn!("view fetch failed: {err}");
                self.state = ViewState::Failed(err.to_string());
                self.rx = None;
                self.task = None;
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                self.state = ViewState::Failed("request task stopped unexpectedly".to_string());
                self.rx = None;
                self.task = None;
            }
        }
    }

    /// Cancel the in-flight fetch, if any.
    pub fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.rx = None;
    }
}

impl<T> Drop for ViewSlot<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// A user-triggered action (re-analysis, sync) in flight.
///
/// Mutually exclusive with itself: while busy, further triggers are ignored
/// and the UI shows a busy indicator. The outcome does not clear any
/// displayed data; callers refetch on success.
#[derive(Debug, Default)]
pub struct ActionSlot {
    label: Option<&'static str>,
    rx: Option<oneshot::Receiver<Result<String, CoreError>>>,
    task: Option<JoinHandle<()>>,
}

/// Settled action outcome, consumed by the app loop.
#[derive(Debug)]
pub struct ActionResult {
    pub label: &'static str,
    pub outcome: Result<String, String>,
}

impl ActionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.label.is_some()
    }

    /// Label of the action in flight, for the busy indicator.
    pub fn busy_label(&self) -> Option<&'static str> {
        self.label
    }

    /// Start `action` unless one is already running. Returns false if busy.
    pub fn trigger<F>(&mut self, label: &'static str, action: F) -> bool
    where
        F: Future<Output = Result<String, CoreError>> + Send + 'static,
    {
        if self.is_busy() {
            return false;
        }
        let (tx, rx) = oneshot::channel();
        self.task = Some(tokio::spawn(async move {
            let _ = tx.send(action.await);
        }));
        self.rx = Some(rx);
        self.label = Some(label);
        true
    }

    /// Non-blocking poll; yields the result exactly once when settled.
    pub fn poll(&mut self) -> Option<ActionResult> {
        let rx = self.rx.as_mut()?;
        let outcome = match rx.try_recv() {
            Ok(Ok(message)) => Ok(message),
            Ok(Err(err)) => Err(err.to_string()),
            Err(oneshot::error::TryRecvError::Empty) => return None,
            Err(oneshot::error::TryRecvError::Closed) => {
                Err("action task stopped unexpectedly".to_string())
            }
        };
        let label = self.label.take().unwrap_or("action");
        self.rx = None;
        self.task = None;
        Some(ActionResult { label, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn settle<T: Send + 'static>(slot: &mut ViewSlot<T>) {
        for _ in 0..100 {
            slot.poll();
            if !matches!(slot.state, ViewState::Loading) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn test_mount_and_load() {
        let mut slot: ViewSlot<u32> = ViewSlot::new();
        assert!(matches!(slot.state, ViewState::Idle));

        slot.mount(async { Ok(42u32) });
        assert!(slot.state.is_loading());

        settle(&mut slot).await;
        assert_eq!(slot.state.data(), Some(&42));
    }

    #[tokio::test]
    async fn test_failed_fetch_carries_message() {
        let mut slot: ViewSlot<u32> = ViewSlot::new();
        slot.mount(async {
            Err(CoreError::Decode {
                url: "http://localhost:8000/api/analytics/dashboard".into(),
                message: "unexpected end of input".into(),
            })
        });

        settle(&mut slot).await;
        let error = slot.state.error().unwrap();
        assert!(error.contains("decode"));
        assert!(error.contains("dashboard"));
    }

    #[tokio::test]
    async fn test_remount_replaces_in_flight_fetch() {
        let mut slot: ViewSlot<u32> = ViewSlot::new();
        slot.mount(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(1u32)
        });
        slot.mount(async { Ok(2u32) });

        settle(&mut slot).await;
        assert_eq!(slot.state.data(), Some(&2));
    }

    #[tokio::test]
    async fn test_action_slot_mutual_exclusion() {
        let mut slot = ActionSlot::new();
        assert!(slot.trigger("sync", async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok("done".to_string())
        }));
        assert!(slot.is_busy());
        // Second trigger while busy is refused
        assert!(!slot.trigger("sync", async { Ok(String::new()) }));

        let mut result = None;
        for _ in 0..100 {
            if let Some(r) = slot.poll() {
                result = Some(r);
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        let result = result.expect("action should settle");
        assert_eq!(result.label, "sync");
        assert_eq!(result.outcome.unwrap(), "done");
        assert!(!slot.is_busy());
    }
}
