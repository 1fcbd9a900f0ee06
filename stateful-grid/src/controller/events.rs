//! src/controller/events.rs
//! ============================================================================
//! # Completion and retry handles
//!
//! Host load callbacks never see the controller. They get an owned handle
//! that, when resolved, posts a `ControllerEvent` into the controller's
//! channel. The controller drains the channel on its own thread, so a
//! resolution coming from a background task is applied exactly where every
//! other transition happens.
//!
//! If the controller has been dropped the send fails and the resolution is
//! discarded; nothing else holds it alive.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::model::outcome::{LoadError, LoadOutcome, PagedOutcome};

/// Message delivered from handles to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    InitialLoadResolved(LoadOutcome),
    RefreshResolved(LoadOutcome),
    PageResolved(PagedOutcome),
    RetryInitialLoad,
    RetryLoadMore,
}

/// Which flow a [`LoadCompletion`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    Initial,
    Refresh,
}

pub(crate) fn channel() -> (
    mpsc::UnboundedSender<ControllerEvent>,
    mpsc::UnboundedReceiver<ControllerEvent>,
) {
    mpsc::unbounded_channel()
}

fn post(tx: &mpsc::UnboundedSender<ControllerEvent>, event: ControllerEvent) {
    if let Err(err) = tx.send(event) {
        debug!(event = ?err.0, "controller gone, event discarded");
    }
}

/// Completion for an initial load or a pull-to-refresh.
///
/// Consumed by `resolve`, so each load resolves at most once.
#[must_use = "dropping a completion leaves the controller loading"]
#[derive(Debug)]
pub struct LoadCompletion {
    tx: Option<mpsc::UnboundedSender<ControllerEvent>>,
    kind: LoadKind,
}

impl LoadCompletion {
    pub(crate) fn new(tx: mpsc::UnboundedSender<ControllerEvent>, kind: LoadKind) -> Self {
        Self { tx: Some(tx), kind }
    }

    pub const fn kind(&self) -> LoadKind {
        self.kind
    }

    pub fn resolve(self, is_empty: bool, error: Option<LoadError>) {
        self.resolve_with(LoadOutcome { is_empty, error });
    }

    pub fn resolve_with(mut self, outcome: LoadOutcome) {
        let Some(tx) = self.tx.take() else {
            return;
        };
        let event = match self.kind {
            LoadKind::Initial => ControllerEvent::InitialLoadResolved(outcome),
            LoadKind::Refresh => ControllerEvent::RefreshResolved(outcome),
        };
        post(&tx, event);
    }
}

impl Drop for LoadCompletion {
    fn drop(&mut self) {
        if self.tx.is_some() {
            warn!(kind = ?self.kind, "load completion dropped unresolved; controller stays loading");
        }
    }
}

/// Completion for a page-more load.
#[must_use = "dropping a completion leaves the controller paging"]
#[derive(Debug)]
pub struct PagedCompletion {
    tx: Option<mpsc::UnboundedSender<ControllerEvent>>,
}

impl PagedCompletion {
    pub(crate) fn new(tx: mpsc::UnboundedSender<ControllerEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    pub fn resolve(self, can_load_more: bool, error: Option<LoadError>, show_error: bool) {
        self.resolve_with(PagedOutcome {
            can_load_more,
            error,
            show_error,
        });
    }

    pub fn resolve_with(mut self, outcome: PagedOutcome) {
        if let Some(tx) = self.tx.take() {
            post(&tx, ControllerEvent::PageResolved(outcome));
        }
    }
}

impl Drop for PagedCompletion {
    fn drop(&mut self) {
        if self.tx.is_some() {
            warn!("paged completion dropped unresolved; controller stays paging");
        }
    }
}

/// What a retry button re-triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryTarget {
    InitialLoad,
    LoadMore,
}

/// Handle given to retryable views. Can fire any number of times; the
/// controller's guards decide whether a retry actually starts a load.
#[derive(Debug, Clone)]
pub struct RetryHandle {
    tx: mpsc::UnboundedSender<ControllerEvent>,
    target: RetryTarget,
}

impl RetryHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<ControllerEvent>, target: RetryTarget) -> Self {
        Self { tx, target }
    }

    pub const fn target(&self) -> RetryTarget {
        self.target
    }

    pub fn fire(&self) {
        let event = match self.target {
            RetryTarget::InitialLoad => ControllerEvent::RetryInitialLoad,
            RetryTarget::LoadMore => ControllerEvent::RetryLoadMore,
        };
        post(&self.tx, event);
    }
}
