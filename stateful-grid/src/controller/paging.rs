//! src/controller/paging.rs
//! ============================================================================
//! "Load more" paging. Enabled per controller through `PagingConfig`; with
//! paging disabled every trigger is rejected and scrolling never requests a
//! page.

use tracing::{debug, instrument, trace};

use crate::controller::events::{PagedCompletion, RetryTarget};
use crate::controller::state_controller::StateController;
use crate::controller::traits::{Paging, StateManagement};
use crate::grid::facade::GridFacade;
use crate::model::grid_state::GridState;
use crate::model::outcome::PagedOutcome;
use crate::model::snapshot::FooterKind;

impl<G: GridFacade> Paging for StateController<G> {
    fn can_load_more_pages(&self) -> bool {
        self.config.paging.enabled && self.can_load_more
    }

    #[instrument(level = "debug", skip(self))]
    fn trigger_load_more(&mut self) -> bool {
        if self.state.is_loading() || !self.can_load_more_pages() {
            debug!(
                state = %self.state,
                enabled = self.config.paging.enabled,
                can_load_more = self.can_load_more,
                "load more rejected"
            );
            return false;
        }

        self.set_state(GridState::Paging, true, None);
        let footer = self.presenter.paging_loading_view(&self.snapshot());
        self.set_footer(FooterKind::Loading, footer);

        let snapshot = self.snapshot();
        match self.delegate.as_mut() {
            Some(delegate) => {
                delegate.load_more_pages(&snapshot, PagedCompletion::new(self.tx.clone()));
            }
            None => debug!("no load delegate installed"),
        }
        true
    }

    fn did_scroll(&mut self) {
        if !self.config.paging.enabled {
            return;
        }

        let trailing_edge = self.grid.content_offset() + self.grid.viewport_len();
        let remaining = self.grid.content_size().saturating_sub(trailing_edge);
        let within = remaining <= self.config.paging.threshold;

        let crossed = within && !self.past_threshold;
        self.past_threshold = within;
        if !crossed {
            return;
        }

        trace!(remaining, "paging threshold crossed");
        if self.footer_kind == FooterKind::Error {
            // only the footer's retry resumes paging after a visible error
            trace!("scroll trigger suppressed by paging error");
            return;
        }
        self.trigger_load_more();
    }
}

impl<G: GridFacade> StateController<G> {
    /// Retry from the paging error footer. The footer is an explicit request,
    /// so a failed page that reported no further pages can still be retried.
    pub(super) fn retry_load_more(&mut self) -> bool {
        if self.footer_kind == FooterKind::Error
            && self.config.paging.enabled
            && !self.state.is_loading()
        {
            self.can_load_more = true;
        }
        self.trigger_load_more()
    }

    pub(super) fn finish_load_more(&mut self, outcome: PagedOutcome) {
        if self.state != GridState::Paging {
            debug!(state = %self.state, "stale page resolution discarded");
            return;
        }

        self.can_load_more = outcome.can_load_more;
        if !outcome.can_load_more {
            debug!("no further pages");
        }

        self.set_state(GridState::Idle, true, None);
        match outcome.visible_error() {
            Some(error) => {
                let retry = self.retry_handle(RetryTarget::LoadMore);
                let footer =
                    self.presenter
                        .paging_error_view(&self.snapshot(), error.clone(), retry);
                self.set_footer(FooterKind::Error, footer);
            }
            None => {
                if let Some(error) = &outcome.error {
                    debug!(%error, "page load failed; error not shown");
                }
                self.clear_footer();
            }
        }
        self.grid.reload_all();
    }
}
