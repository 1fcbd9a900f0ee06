//! src/controller/initial_load.rs

use tracing::{debug, instrument};

use crate::controller::events::{LoadCompletion, LoadKind};
use crate::controller::state_controller::StateController;
use crate::controller::traits::{InitialLoad, StateManagement};
use crate::grid::facade::GridFacade;
use crate::model::grid_state::GridState;
use crate::model::outcome::LoadOutcome;

impl<G: GridFacade> InitialLoad for StateController<G> {
    #[instrument(level = "debug", skip(self))]
    fn trigger_initial_load(&mut self, show_grid_during_load: bool) -> bool {
        if self.state.is_loading() {
            debug!(state = %self.state, "initial load rejected: already loading");
            return false;
        }

        let next = if show_grid_during_load {
            GridState::LoadingInitiallyWithGridVisible
        } else {
            GridState::LoadingInitially
        };
        self.set_state(next, true, None);

        let snapshot = self.snapshot();
        match self.delegate.as_mut() {
            Some(delegate) => {
                let completion = LoadCompletion::new(self.tx.clone(), LoadKind::Initial);
                delegate.initial_load(&snapshot, completion);
            }
            None => debug!("no load delegate installed"),
        }
        true
    }
}

impl<G: GridFacade> StateController<G> {
    pub(super) fn finish_initial_load(&mut self, outcome: LoadOutcome) {
        if !self.state.is_loading_initially() {
            debug!(state = %self.state, "stale initial load resolution discarded");
            return;
        }
        self.settle_load(outcome);
    }
}
