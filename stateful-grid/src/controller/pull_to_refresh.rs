//! src/controller/pull_to_refresh.rs

use tracing::{debug, instrument};

use crate::controller::events::{LoadCompletion, LoadKind};
use crate::controller::state_controller::StateController;
use crate::controller::traits::{PullToRefresh, StateManagement};
use crate::grid::facade::GridFacade;
use crate::model::grid_state::GridState;
use crate::model::outcome::LoadOutcome;
use crate::view::components::activity_indicator::ActivityIndicator;

impl<G: GridFacade> PullToRefresh for StateController<G> {
    fn can_pull_to_refresh(&self) -> bool {
        self.config.can_pull_to_refresh
    }

    #[instrument(level = "debug", skip(self))]
    fn trigger_pull_to_refresh(&mut self) -> bool {
        if self.state.is_loading() || !self.config.can_pull_to_refresh {
            debug!(
                state = %self.state,
                enabled = self.config.can_pull_to_refresh,
                "refresh rejected"
            );
            return false;
        }

        // grid stays as it is; only the leading spinner appears
        self.set_state(GridState::Refreshing, false, None);
        self.begin_refreshing();

        let snapshot = self.snapshot();
        match self.delegate.as_mut() {
            Some(delegate) => {
                let completion = LoadCompletion::new(self.tx.clone(), LoadKind::Refresh);
                delegate.refresh(&snapshot, completion);
            }
            None => debug!("no load delegate installed"),
        }
        true
    }

    fn handle_pull_gesture(&mut self) {
        if self.trigger_pull_to_refresh() {
            return;
        }
        // a running refresh keeps its spinner
        if self.state != GridState::Refreshing {
            self.end_refreshing();
        }
    }
}

impl<G: GridFacade> StateController<G> {
    fn begin_refreshing(&mut self) {
        let indicator = ActivityIndicator::inline(
            self.config.messages.refreshing.clone(),
            self.config.spinner_interval,
        );
        self.refresh_indicator = Some(indicator);
    }

    fn end_refreshing(&mut self) {
        if self.refresh_indicator.take().is_some() {
            debug!("refresh spinner stopped");
        }
    }

    pub(super) fn finish_refresh(&mut self, outcome: LoadOutcome) {
        self.end_refreshing();

        if self.state != GridState::Refreshing {
            debug!(state = %self.state, "stale refresh resolution discarded");
            return;
        }
        self.settle_load(outcome);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{buffer::Buffer, layout::Rect};

    use super::*;
    use crate::config::ControllerConfig;
    use crate::controller::traits::InitialLoad;
    use crate::model::grid_state::ViewMode;
    use crate::testing::{buffer_text, controller};

    fn refreshable() -> ControllerConfig {
        ControllerConfig::default().with_pull_to_refresh(true)
    }

    #[test]
    fn test_disabled_refresh_always_rejected() {
        for state in GridState::ALL {
            let (mut controller, delegate) = controller(ControllerConfig::default());
            controller.set_state(state, true, None);

            assert!(!controller.trigger_pull_to_refresh(), "{state}");
            assert_eq!(controller.state(), state);
            assert_eq!(delegate.refresh_calls(), 0);
        }
    }

    #[test]
    fn test_refresh_to_empty_scenario() {
        let (mut controller, delegate) = controller(refreshable());

        assert!(controller.trigger_pull_to_refresh());
        assert_eq!(controller.state(), GridState::Refreshing);
        assert_eq!(controller.view_mode(), ViewMode::Grid);
        assert!(controller.is_refreshing_indicator_visible());

        delegate.take_refresh().resolve(true, None);
        controller.process_events();

        assert_eq!(controller.state(), GridState::EmptyOrError);
        assert_eq!(controller.view_mode(), ViewMode::Static);
        assert!(!controller.is_refreshing_indicator_visible());

        let area = Rect::new(0, 0, 40, 7);
        let mut buf = Buffer::empty(area);
        controller.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("No items found."));
        assert!(!text.contains("Try Again"));
    }

    #[test]
    fn test_refresh_keeps_view_mode() {
        let (mut controller, delegate) = controller(refreshable());
        controller.trigger_initial_load(false);
        delegate.take_initial().resolve(true, None);
        controller.process_events();
        assert_eq!(controller.view_mode(), ViewMode::Static);

        assert!(controller.trigger_pull_to_refresh());
        assert_eq!(controller.view_mode(), ViewMode::Static);

        delegate.take_refresh().resolve(false, None);
        controller.process_events();
        assert_eq!(controller.state(), GridState::Idle);
        assert_eq!(controller.view_mode(), ViewMode::Grid);
    }

    #[test]
    fn test_stale_refresh_still_stops_spinner() {
        let (mut controller, delegate) = controller(refreshable());
        controller.trigger_pull_to_refresh();
        controller.set_state(GridState::Idle, true, None);

        delegate.take_refresh().resolve(true, None);
        controller.process_events();

        assert_eq!(controller.state(), GridState::Idle);
        assert!(!controller.is_refreshing_indicator_visible());
        assert_eq!(controller.grid().reloads, 0);
    }

    #[test]
    fn test_pull_gesture() {
        let (mut disabled, _) = controller(ControllerConfig::default());
        disabled.handle_pull_gesture();
        assert_eq!(disabled.state(), GridState::Idle);
        assert!(!disabled.is_refreshing_indicator_visible());

        let (mut controller, delegate) = controller(refreshable());
        controller.handle_pull_gesture();
        assert_eq!(controller.state(), GridState::Refreshing);

        // a second pull during the refresh is a no-op
        controller.handle_pull_gesture();
        assert!(controller.is_refreshing_indicator_visible());
        assert_eq!(delegate.refresh_calls(), 1);
    }

    #[test]
    fn test_spinner_row_above_grid() {
        let (mut controller, _delegate) = controller(refreshable());
        controller.trigger_pull_to_refresh();

        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        controller.render(area, &mut buf);

        let first_row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(first_row.contains("Refreshing"));
        assert_eq!(buf[(0, 1)].symbol(), "G");
        assert_eq!(controller.grid().renders, 1);
    }
}
