pub mod error;
pub use error::GridError;

pub mod config;
pub use config::{ControllerConfig, LogConfig, MessagesConfig, PagingConfig};

pub mod logging;
pub use logging::Logger;

pub mod model {
    pub mod grid_state;
    pub use grid_state::{GridState, ViewMode};

    pub mod outcome;
    pub use outcome::{LoadError, LoadOutcome, PagedOutcome};

    pub mod snapshot;
    pub use snapshot::{ControllerSnapshot, FooterKind};
}

pub mod grid {
    pub mod facade;
    pub use facade::{EdgeInsets, GridFacade, GridLayout, IndexPath, ScrollPosition};

    pub mod item_grid;
    pub use item_grid::ItemGrid;
}

pub mod controller {
    pub mod delegate;
    pub use delegate::LoadDelegate;

    pub mod events;
    pub use events::{
        ControllerEvent, LoadCompletion, LoadKind, PagedCompletion, RetryHandle, RetryTarget,
    };

    pub mod traits;
    pub use traits::{InitialLoad, Paging, PullToRefresh, StateManagement};

    pub mod state_controller;
    pub use state_controller::StateController;

    mod grid_passthrough;
    mod initial_load;
    mod paging;
    mod pull_to_refresh;
    mod state_management;
}

pub mod view {
    pub mod theme;

    pub mod traits;
    pub use traits::{BoxedView, ContentView};

    pub mod presenter;
    pub use presenter::{ContentPresenter, Customization, DefaultPresenter};

    pub mod components {
        pub mod activity_indicator;
        pub use activity_indicator::ActivityIndicator;
        pub mod initial_load_error_view;
        pub use initial_load_error_view::InitialLoadErrorView;
        pub mod paging_footer;
        pub use paging_footer::PagingErrorView;
    }
}

pub use controller::*;
pub use grid::*;
pub use model::*;

#[cfg(test)]
pub(crate) mod testing;
