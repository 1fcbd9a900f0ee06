//! src/model/snapshot.rs
//! ============================================================
//! Immutable copy of a controller's observable state.
//!
//! Delegates and customization hooks receive a snapshot instead of
//! the controller itself, so they can never re-enter it while a
//! transition is in progress.

use crate::model::grid_state::{GridState, ViewMode};

/// What the trailing footer currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FooterKind {
    #[default]
    Hidden,
    Loading,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSnapshot {
    pub state: GridState,

    pub view_mode: ViewMode,

    pub can_pull_to_refresh: bool,

    pub paging_enabled: bool,

    /// Last page load reported more pages
    pub can_load_more: bool,

    pub footer: FooterKind,

    pub refreshing_indicator: bool,
}

impl ControllerSnapshot {
    #[inline]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
