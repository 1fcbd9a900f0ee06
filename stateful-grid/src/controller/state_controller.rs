//! src/controller/state_controller.rs
//! ============================================================================
//! # StateController: loading / refresh / paging state machine over a grid
//!
//! Owns the grid, the current [`GridState`], the content slot and the
//! trailing footer. Behaviour is split across capability traits, each in its
//! own module:
//!
//! - [`InitialLoad`](crate::controller::traits::InitialLoad) in `initial_load.rs`
//! - [`PullToRefresh`](crate::controller::traits::PullToRefresh) in `pull_to_refresh.rs`
//! - [`Paging`](crate::controller::traits::Paging) in `paging.rs`
//! - [`StateManagement`](crate::controller::traits::StateManagement) in `state_management.rs`
//!
//! Host callbacks resolve owned handles that post into this controller's
//! channel. Nothing is applied until the host drains it with
//! [`StateController::process_events`] (or awaits
//! [`StateController::next_event`]), so every transition runs on the thread
//! that owns the controller.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::config::ControllerConfig;
use crate::controller::delegate::LoadDelegate;
use crate::controller::events::{self, ControllerEvent, RetryHandle, RetryTarget};
use crate::controller::traits::{InitialLoad, Paging};
use crate::grid::facade::GridFacade;
use crate::model::grid_state::{GridState, ViewMode};
use crate::model::snapshot::{ControllerSnapshot, FooterKind};
use crate::view::components::activity_indicator::ActivityIndicator;
use crate::view::presenter::{ContentPresenter, DefaultPresenter};
use crate::view::theme;
use crate::view::traits::{BoxedView, ContentView};

pub struct StateController<G> {
    pub(super) grid: G,
    pub(super) config: ControllerConfig,

    pub(super) state: GridState,
    pub(super) view_mode: ViewMode,

    /// Loading or empty/error view; hidden while `view_mode` is `Grid`
    pub(super) content: Option<BoxedView>,

    pub(super) footer: Option<BoxedView>,
    pub(super) footer_kind: FooterKind,

    pub(super) refresh_indicator: Option<ActivityIndicator>,

    /// Last page load reported more pages
    pub(super) can_load_more: bool,
    /// Trailing edge was within the paging threshold at the last scroll
    pub(super) past_threshold: bool,

    pub(super) tx: mpsc::UnboundedSender<ControllerEvent>,
    rx: mpsc::UnboundedReceiver<ControllerEvent>,

    pub(super) delegate: Option<Box<dyn LoadDelegate>>,
    pub(super) presenter: Box<dyn ContentPresenter>,
}

impl<G: GridFacade> StateController<G> {
    pub fn new(grid: G, config: ControllerConfig) -> Self {
        info!(
            pull_to_refresh = config.can_pull_to_refresh,
            paging = config.paging.enabled,
            "creating state controller"
        );
        let (tx, rx) = events::channel();
        let presenter = Box::new(DefaultPresenter::new(&config));

        Self {
            grid,
            config,
            state: GridState::Idle,
            view_mode: ViewMode::Grid,
            content: None,
            footer: None,
            footer_kind: FooterKind::Hidden,
            refresh_indicator: None,
            can_load_more: true,
            past_threshold: false,
            tx,
            rx,
            delegate: None,
            presenter,
        }
    }

    #[must_use]
    pub fn with_delegate(mut self, delegate: impl LoadDelegate + 'static) -> Self {
        self.set_delegate(delegate);
        self
    }

    #[must_use]
    pub fn with_presenter(mut self, presenter: impl ContentPresenter + 'static) -> Self {
        self.presenter = Box::new(presenter);
        self
    }

    pub fn set_delegate(&mut self, delegate: impl LoadDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn into_grid(self) -> G {
        self.grid
    }

    pub const fn footer(&self) -> FooterKind {
        self.footer_kind
    }

    pub fn is_refreshing_indicator_visible(&self) -> bool {
        self.refresh_indicator.is_some()
    }

    /// The mounted content view, if the content slot is visible.
    pub fn content_view(&self) -> Option<&dyn ContentView> {
        if self.view_mode.content_slot_hidden() {
            return None;
        }
        self.content.as_deref()
    }

    pub fn footer_view(&self) -> Option<&dyn ContentView> {
        self.footer.as_deref()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            state: self.state,
            view_mode: self.view_mode,
            can_pull_to_refresh: self.config.can_pull_to_refresh,
            paging_enabled: self.config.paging.enabled,
            can_load_more: self.can_load_more,
            footer: self.footer_kind,
            refreshing_indicator: self.refresh_indicator.is_some(),
        }
    }

    /// Applies every pending resolution and retry. Returns how many events
    /// were handled.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply_event(event);
            handled += 1;
        }
        if handled > 0 {
            trace!(handled, "processed controller events");
        }
        handled
    }

    /// Waits for the next event, applies it and returns it.
    ///
    /// Cancel-safe, so it can sit in a `tokio::select!` next to terminal
    /// input.
    pub async fn next_event(&mut self) -> Option<ControllerEvent> {
        let event = self.rx.recv().await?;
        self.apply_event(event.clone());
        Some(event)
    }

    fn apply_event(&mut self, event: ControllerEvent) {
        debug!(?event, state = %self.state, "applying controller event");
        match event {
            ControllerEvent::InitialLoadResolved(outcome) => self.finish_initial_load(outcome),
            ControllerEvent::RefreshResolved(outcome) => self.finish_refresh(outcome),
            ControllerEvent::PageResolved(outcome) => self.finish_load_more(outcome),
            ControllerEvent::RetryInitialLoad => {
                if !self.trigger_initial_load(false) {
                    debug!(state = %self.state, "initial load retry ignored");
                }
            }
            ControllerEvent::RetryLoadMore => {
                if !self.retry_load_more() {
                    debug!(state = %self.state, "load more retry ignored");
                }
            }
        }
    }

    /// Routes a key to the footer, then to the content slot when visible.
    /// Both follow `render`: the footer only takes keys in grid mode.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        if self.view_mode == ViewMode::Grid
            && let Some(footer) = self.footer.as_mut()
            && footer.handle_input(key)
        {
            return true;
        }

        if self.view_mode.content_slot_hidden() {
            return false;
        }
        self.content
            .as_mut()
            .is_some_and(|content| content.handle_input(key))
    }

    /// Advances spinner frames of every mounted view.
    pub fn tick(&mut self) {
        if let Some(content) = self.content.as_mut() {
            content.tick();
        }
        if let Some(footer) = self.footer.as_mut() {
            footer.tick();
        }
        if let Some(indicator) = self.refresh_indicator.as_mut() {
            indicator.tick();
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let refresh_rows = u16::from(self.refresh_indicator.is_some());
        let footer_rows = match self.view_mode {
            ViewMode::Grid => u16::from(self.footer.is_some()),
            ViewMode::Static => 0,
        };

        let [refresh_area, body, footer_area] = Layout::vertical([
            Constraint::Length(refresh_rows),
            Constraint::Fill(1),
            Constraint::Length(footer_rows),
        ])
        .areas(area);

        trace!(mode = ?self.view_mode, ?body, "rendering controller");

        if let Some(indicator) = &self.refresh_indicator {
            indicator.render(refresh_area, buf);
        }

        match self.view_mode {
            ViewMode::Grid => self.grid.render(body, buf),
            ViewMode::Static => match &self.content {
                Some(content) => content.render(body, buf),
                None => buf.set_style(body, theme::content_slot_style()),
            },
        }

        if footer_rows > 0
            && let Some(footer) = &self.footer
        {
            footer.render(footer_area, buf);
        }
    }

    pub(super) fn retry_handle(&self, target: RetryTarget) -> RetryHandle {
        RetryHandle::new(self.tx.clone(), target)
    }

    pub(super) fn mount_content(&mut self, view: BoxedView) {
        debug!(view = view.name(), "mounting content view");
        self.content = Some(view);
    }

    pub(super) fn set_footer(&mut self, kind: FooterKind, view: BoxedView) {
        debug!(?kind, view = view.name(), "mounting footer view");
        self.footer_kind = kind;
        self.footer = Some(view);
    }

    pub(super) fn clear_footer(&mut self) {
        if self.footer.take().is_some() {
            debug!("footer cleared");
        }
        self.footer_kind = FooterKind::Hidden;
    }

    pub(super) fn apply_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            debug!(from = ?self.view_mode, to = ?mode, "view mode changed");
        }
        self.view_mode = mode;
    }
}

impl<G> std::fmt::Debug for StateController<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateController")
            .field("state", &self.state)
            .field("view_mode", &self.view_mode)
            .field("footer", &self.footer_kind)
            .field("can_load_more", &self.can_load_more)
            .finish_non_exhaustive()
    }
}
