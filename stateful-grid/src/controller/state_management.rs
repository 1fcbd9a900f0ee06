//! src/controller/state_management.rs

use tracing::{debug, warn};

use crate::controller::events::RetryTarget;
use crate::controller::state_controller::StateController;
use crate::controller::traits::StateManagement;
use crate::grid::facade::GridFacade;
use crate::model::grid_state::{GridState, ViewMode};
use crate::model::outcome::{LoadError, LoadOutcome};

impl<G: GridFacade> StateManagement for StateController<G> {
    fn state(&self) -> GridState {
        self.state
    }

    fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    fn set_state(&mut self, new_state: GridState, update_mode: bool, error: Option<LoadError>) {
        let previous = self.state;
        self.state = new_state;
        debug!(from = %previous, to = %new_state, update_mode, "state transition");

        match new_state {
            GridState::LoadingInitially => {
                let view = self.presenter.loading_view(&self.snapshot());
                self.mount_content(view);
            }
            GridState::EmptyOrError => {
                let retry = self.retry_handle(RetryTarget::InitialLoad);
                let view = self
                    .presenter
                    .empty_or_error_view(&self.snapshot(), error, retry);
                self.mount_content(view);
            }
            _ => {}
        }

        if update_mode {
            self.apply_view_mode(new_state.view_mode());
        }
    }
}

impl<G: GridFacade> StateController<G> {
    /// Applies the outcome of an initial load or refresh that is still
    /// current.
    pub(super) fn settle_load(&mut self, outcome: LoadOutcome) {
        // a new dataset starts a new page sequence
        self.can_load_more = true;
        self.past_threshold = false;
        self.clear_footer();

        let LoadOutcome { is_empty, error } = outcome;
        if is_empty {
            self.set_state(GridState::EmptyOrError, true, error);
        } else {
            if let Some(error) = error {
                warn!(
                    domain = %error.domain,
                    code = error.code,
                    %error,
                    "load returned items and an error; error dropped"
                );
            }
            self.set_state(GridState::Idle, true, None);
        }
        self.grid.reload_all();
    }
}
