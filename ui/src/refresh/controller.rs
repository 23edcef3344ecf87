//! Per-dataset refresh state machine.
//!
//! ```text
//! Idle ──load()──▶ Loading ──ok──▶ Ready
//!   Ready/Failed ──refresh()──▶ Loading ──err──▶ Failed (rows kept)
//! ```
//!
//! A controller owns exactly one dataset. `load()` and `refresh()` share one
//! guard: while the status is `Loading` both return
//! [`RefreshOutcome::AlreadyLoading`] without touching the network, so there
//! is never more than one request chain in flight and a slow response can
//! never overwrite a newer one.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, info, warn};
use time::OffsetDateTime;

use crate::core::timing;
use crate::source::{DataSource, DatasetKind, DatasetRows, FetchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Snapshot of one dataset as seen by the views.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetState {
    pub kind: DatasetKind,
    /// Last successfully fetched rows; kept across failures.
    pub rows: Option<DatasetRows>,
    pub status: Status,
    pub last_error: Option<String>,
    pub last_updated_at: Option<OffsetDateTime>,
}

impl DatasetState {
    pub fn idle(kind: DatasetKind) -> Self {
        Self {
            kind,
            rows: None,
            status: Status::Idle,
            last_error: None,
            last_updated_at: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    fn begin_loading(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.status = Status::Loading;
        true
    }

    fn complete(&mut self, rows: DatasetRows, at: OffsetDateTime) {
        self.rows = Some(rows);
        self.status = Status::Ready;
        self.last_error = None;
        self.last_updated_at = Some(at);
    }

    fn fail(&mut self, err: &FetchError) {
        self.status = Status::Failed;
        self.last_error = Some(err.to_string());
    }
}

/// Result of a `load()` / `refresh()` call.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Ready,
    Failed(FetchError),
    /// A request chain was already in flight; nothing was issued.
    AlreadyLoading,
    /// The controller was torn down; the response (if any) was dropped.
    Discarded,
}

type Observer = Rc<dyn Fn(&DatasetState)>;

pub struct RefreshController<S> {
    source: Rc<S>,
    state: Rc<RefCell<DatasetState>>,
    torn_down: Rc<Cell<bool>>,
    observer: Option<Observer>,
}

impl<S> Clone for RefreshController<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            state: Rc::clone(&self.state),
            torn_down: Rc::clone(&self.torn_down),
            observer: self.observer.clone(),
        }
    }
}

impl<S> fmt::Debug for RefreshController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshController")
            .field("state", &self.state.borrow())
            .field("torn_down", &self.torn_down.get())
            .finish_non_exhaustive()
    }
}

impl<S: DataSource> RefreshController<S> {
    pub fn new(kind: DatasetKind, source: Rc<S>) -> Self {
        Self {
            source,
            state: Rc::new(RefCell::new(DatasetState::idle(kind))),
            torn_down: Rc::new(Cell::new(false)),
            observer: None,
        }
    }

    /// Register a callback invoked with the new state after every transition.
    pub fn with_observer(mut self, observer: impl Fn(&DatasetState) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    pub fn kind(&self) -> DatasetKind {
        self.state.borrow().kind
    }

    pub fn status(&self) -> Status {
        self.state.borrow().status
    }

    pub fn snapshot(&self) -> DatasetState {
        self.state.borrow().clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.get()
    }

    /// Detach from the view. Responses arriving afterwards are dropped.
    pub fn teardown(&self) {
        if !self.torn_down.replace(true) {
            debug!(dataset = %self.kind(), "controller torn down");
        }
    }

    /// Initial population: fetch without asking the backend to reparse.
    pub async fn load(&self) -> RefreshOutcome {
        if let Err(outcome) = self.try_begin() {
            return outcome;
        }
        let result = self.source.fetch_dataset(self.kind()).await;
        self.settle(result)
    }

    /// Reparse server logs, then refetch this dataset.
    ///
    /// The reparse and the refetch form one `Loading` interval. A failure in
    /// either step marks the dataset `Failed` and keeps the previous rows.
    pub async fn refresh(&self) -> RefreshOutcome {
        if let Err(outcome) = self.try_begin() {
            return outcome;
        }
        let kind = self.kind();

        let result = match self.source.trigger_reparse(timing::nonce_millis()).await {
            Ok(ack) => {
                debug!(dataset = %kind, message = ?ack.message, "reparse acknowledged");
                if self.is_torn_down() {
                    return RefreshOutcome::Discarded;
                }
                self.source.fetch_dataset(kind).await
            }
            Err(err) => Err(err),
        };

        self.settle(result)
    }

    fn try_begin(&self) -> Result<(), RefreshOutcome> {
        if self.is_torn_down() {
            return Err(RefreshOutcome::Discarded);
        }
        if !self.state.borrow_mut().begin_loading() {
            debug!(dataset = %self.kind(), "request already in flight");
            return Err(RefreshOutcome::AlreadyLoading);
        }
        self.notify();
        Ok(())
    }

    fn settle(&self, result: Result<DatasetRows, FetchError>) -> RefreshOutcome {
        if self.is_torn_down() {
            debug!(dataset = %self.kind(), "dropping response for torn-down controller");
            return RefreshOutcome::Discarded;
        }

        let outcome = {
            let mut state = self.state.borrow_mut();
            match result {
                Ok(rows) if rows.kind() == state.kind => {
                    state.complete(rows, timing::now_utc());
                    info!(dataset = %state.kind, "dataset ready");
                    RefreshOutcome::Ready
                }
                Ok(rows) => {
                    let err = FetchError::Parse(format!(
                        "expected {} rows, received {}",
                        state.kind,
                        rows.kind()
                    ));
                    warn!(dataset = %state.kind, error = %err, "dataset failed");
                    state.fail(&err);
                    RefreshOutcome::Failed(err)
                }
                Err(err) => {
                    warn!(dataset = %state.kind, reason = ?err.reason(), error = %err, "dataset failed");
                    state.fail(&err);
                    RefreshOutcome::Failed(err)
                }
            }
        };

        self.notify();
        outcome
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.snapshot();
            observer(&snapshot);
        }
    }
}
