//! src/controller/traits.rs
//! ============================================================================
//! Capability traits. Each behaviour of the controller is its own trait so
//! hosts can depend on exactly the surface they drive.

use crate::model::grid_state::{GridState, ViewMode};
use crate::model::outcome::LoadError;

pub trait InitialLoad {
    /// Starts the initial load. Returns false, and changes nothing, while
    /// any load is in flight.
    fn trigger_initial_load(&mut self, show_grid_during_load: bool) -> bool;
}

pub trait PullToRefresh {
    fn can_pull_to_refresh(&self) -> bool;

    /// Starts a refresh. Returns false while loading or when refresh is
    /// disabled.
    fn trigger_pull_to_refresh(&mut self) -> bool;

    /// The user released a pull gesture on the grid.
    fn handle_pull_gesture(&mut self);
}

pub trait Paging {
    /// Paging enabled and the last page load reported more pages.
    fn can_load_more_pages(&self) -> bool;

    /// Requests the next page. Returns false while loading, when paging is
    /// disabled, or when no pages remain.
    fn trigger_load_more(&mut self) -> bool;

    /// Re-evaluates the scroll threshold after the grid's offset changed.
    fn did_scroll(&mut self);
}

pub trait StateManagement {
    fn state(&self) -> GridState;

    fn view_mode(&self) -> ViewMode;

    /// The single mutation point of the state machine.
    fn set_state(&mut self, new_state: GridState, update_mode: bool, error: Option<LoadError>);
}
