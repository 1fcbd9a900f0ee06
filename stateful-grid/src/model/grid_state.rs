//! src/model/grid_state.rs
//! ============================================================================
//! # Grid states and the view mode derived from them
//!
//! `GridState` is the single authoritative state of a controller. Which
//! content is visible (`ViewMode`) is never stored on its own; it is always
//! recomputed from the state through [`GridState::view_mode`].

use std::fmt;

/// Finite set of controller states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GridState {
    #[default]
    Idle = 0,
    /// First load, content slot shows the loading view
    LoadingInitially = 1,
    /// First load, grid stays visible
    LoadingInitiallyWithGridVisible = 2,
    Refreshing = 3,
    Paging = 4,
    EmptyOrError = 5,
}

impl GridState {
    pub const ALL: [Self; 6] = [
        Self::Idle,
        Self::LoadingInitially,
        Self::LoadingInitiallyWithGridVisible,
        Self::Refreshing,
        Self::Paging,
        Self::EmptyOrError,
    ];

    #[inline]
    pub const fn is_loading(self) -> bool {
        matches!(
            self,
            Self::LoadingInitially
                | Self::LoadingInitiallyWithGridVisible
                | Self::Refreshing
                | Self::Paging
        )
    }

    #[inline]
    pub const fn is_loading_initially(self) -> bool {
        matches!(
            self,
            Self::LoadingInitially | Self::LoadingInitiallyWithGridVisible
        )
    }

    /// Refreshing and paging keep the grid on screen with an affordance on
    /// top; only a blocking first load and the empty/error screen take over
    /// the content slot.
    #[inline]
    pub const fn view_mode(self) -> ViewMode {
        match self {
            Self::LoadingInitially | Self::EmptyOrError => ViewMode::Static,
            _ => ViewMode::Grid,
        }
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'_ str = match self {
            Self::Idle => "idle",
            Self::LoadingInitially => "loading_initially",
            Self::LoadingInitiallyWithGridVisible => "loading_initially_with_grid_visible",
            Self::Refreshing => "refreshing",
            Self::Paging => "paging",
            Self::EmptyOrError => "empty_or_error",
        };

        write!(f, "{s}")
    }
}

/// Which of the two stacked layers is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ViewMode {
    #[default]
    Grid = 0,
    /// The content slot (loading / empty / error view) covers the grid
    Static = 1,
}

impl ViewMode {
    #[inline]
    pub const fn content_slot_hidden(self) -> bool {
        matches!(self, Self::Grid)
    }
}
