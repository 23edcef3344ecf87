//! Deterministic [`DataSource`] fake for driving refresh controllers on
//! `futures::executor::block_on`.
//!
//! Every call suspends at least once so that concurrently joined futures
//! observe each other's in-flight state. Gates hold a call open until the
//! test releases it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

use crate::source::{
    DataSource, DatasetKind, DatasetRows, FetchError, PlayerRoster, ReparseAck, TimeSpentRow,
};

/// Returns `Pending` exactly once, waking itself immediately.
#[derive(Default)]
pub(crate) struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// One-shot latch that keeps a fake call suspended until opened.
pub(crate) struct Gate {
    tx: RefCell<Option<oneshot::Sender<()>>>,
    rx: RefCell<Option<oneshot::Receiver<()>>>,
}

impl Gate {
    pub(crate) fn new() -> Self {
        let (tx, rx) = oneshot::channel();
        Self {
            tx: RefCell::new(Some(tx)),
            rx: RefCell::new(Some(rx)),
        }
    }

    pub(crate) fn receiver(&self) -> oneshot::Receiver<()> {
        self.rx.borrow_mut().take().expect("gate receiver already taken")
    }

    pub(crate) fn open(&self) {
        if let Some(tx) = self.tx.borrow_mut().take() {
            let _ = tx.send(());
        }
    }
}

#[derive(Default)]
pub(crate) struct ScriptedSource {
    fetches: RefCell<VecDeque<Result<DatasetRows, FetchError>>>,
    reparses: RefCell<VecDeque<Result<ReparseAck, FetchError>>>,
    fetch_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    reparse_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    calls: RefCell<Vec<&'static str>>,
    nonces: RefCell<Vec<i64>>,
}

impl ScriptedSource {
    /// Queue the next fetch result. An empty queue yields empty rows of the requested kind.
    pub(crate) fn push_fetch(&self, result: Result<DatasetRows, FetchError>) {
        self.fetches.borrow_mut().push_back(result);
    }

    /// Queue the next reparse result. An empty queue acknowledges successfully.
    pub(crate) fn push_reparse(&self, result: Result<ReparseAck, FetchError>) {
        self.reparses.borrow_mut().push_back(result);
    }

    pub(crate) fn gate_next_fetch(&self, gate: oneshot::Receiver<()>) {
        self.fetch_gates.borrow_mut().push_back(gate);
    }

    pub(crate) fn gate_next_reparse(&self, gate: oneshot::Receiver<()>) {
        self.reparse_gates.borrow_mut().push_back(gate);
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.calls.borrow().iter().filter(|c| **c == "fetch").count()
    }

    pub(crate) fn reparse_calls(&self) -> usize {
        self.calls.borrow().iter().filter(|c| **c == "reparse").count()
    }

    pub(crate) fn nonces(&self) -> Vec<i64> {
        self.nonces.borrow().clone()
    }
}

async fn suspend(gate: Option<oneshot::Receiver<()>>) {
    match gate {
        Some(rx) => {
            let _ = rx.await;
        }
        None => YieldNow::default().await,
    }
}

impl DataSource for ScriptedSource {
    async fn fetch_dataset(&self, kind: DatasetKind) -> Result<DatasetRows, FetchError> {
        self.calls.borrow_mut().push("fetch");
        let gate = self.fetch_gates.borrow_mut().pop_front();
        suspend(gate).await;
        let next = self.fetches.borrow_mut().pop_front();
        next.unwrap_or_else(|| Ok(empty_rows(kind)))
    }

    async fn trigger_reparse(&self, nonce: i64) -> Result<ReparseAck, FetchError> {
        self.calls.borrow_mut().push("reparse");
        self.nonces.borrow_mut().push(nonce);
        let gate = self.reparse_gates.borrow_mut().pop_front();
        suspend(gate).await;
        let next = self.reparses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Ok(ReparseAck::default()))
    }
}

pub(crate) fn empty_rows(kind: DatasetKind) -> DatasetRows {
    match kind {
        DatasetKind::TopTimeSpent => DatasetRows::TopTimeSpent(Vec::new()),
        DatasetKind::CountryDistribution => DatasetRows::CountryDistribution(Vec::new()),
        DatasetKind::PlayerRoster => DatasetRows::PlayerRoster(PlayerRoster::default()),
        DatasetKind::OnlineConcurrency => DatasetRows::OnlineConcurrency(Vec::new()),
    }
}

pub(crate) fn time_spent_rows(rows: &[(&str, f64)]) -> DatasetRows {
    DatasetRows::TopTimeSpent(
        rows.iter()
            .map(|(nickname, hours)| TimeSpentRow {
                nickname: (*nickname).to_string(),
                time_spent_hours: *hours,
            })
            .collect(),
    )
}
