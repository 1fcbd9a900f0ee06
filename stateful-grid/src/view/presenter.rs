//! src/view/presenter.rs
//! ============================================================================
//! # Content Presenter
//!
//! Decides which view occupies the content slot (or the trailing footer) for
//! a given controller state. The controller asks the presenter for a view at
//! each mounting transition and never looks inside what it gets back.
//!
//! `DefaultPresenter` is the explicit default object. Hosts that only want to
//! decorate the stock views install [`Customization`] hooks on it; hosts that
//! want full control implement [`ContentPresenter`] themselves.

use std::time::Duration;

use crate::config::{ControllerConfig, MessagesConfig};
use crate::controller::events::RetryHandle;
use crate::model::{outcome::LoadError, snapshot::ControllerSnapshot};
use crate::view::components::{
    activity_indicator::ActivityIndicator, initial_load_error_view::InitialLoadErrorView,
    paging_footer::PagingErrorView,
};
use crate::view::traits::BoxedView;

/// Source of every view the controller mounts.
pub trait ContentPresenter: Send {
    /// Content slot view while in `LoadingInitially`.
    fn loading_view(&self, snapshot: &ControllerSnapshot) -> BoxedView;

    /// Content slot view for `EmptyOrError`. `retry` re-triggers the
    /// initial load when fired.
    fn empty_or_error_view(
        &self,
        snapshot: &ControllerSnapshot,
        error: Option<LoadError>,
        retry: RetryHandle,
    ) -> BoxedView;

    /// Footer shown while a page is loading.
    fn paging_loading_view(&self, snapshot: &ControllerSnapshot) -> BoxedView;

    /// Footer shown when a page load failed with `show_error` set.
    fn paging_error_view(
        &self,
        snapshot: &ControllerSnapshot,
        error: LoadError,
        retry: RetryHandle,
    ) -> BoxedView;
}

pub type LoadingViewHook = Box<dyn Fn(&ControllerSnapshot, BoxedView) -> BoxedView + Send>;

pub type ErrorViewHook =
    Box<dyn Fn(&ControllerSnapshot, Option<&LoadError>, BoxedView) -> BoxedView + Send>;

pub type PagingErrorViewHook =
    Box<dyn Fn(&ControllerSnapshot, &LoadError, BoxedView) -> BoxedView + Send>;

/// Hooks receiving the stock view and returning the view to mount.
///
/// `Customization::default()` installs identity hooks.
pub struct Customization {
    loading_view: LoadingViewHook,
    initial_load_error_view: ErrorViewHook,
    paging_error_view: PagingErrorViewHook,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            loading_view: Box::new(|_: &ControllerSnapshot, view: BoxedView| view),
            initial_load_error_view: Box::new(
                |_: &ControllerSnapshot, _: Option<&LoadError>, view: BoxedView| view,
            ),
            paging_error_view: Box::new(
                |_: &ControllerSnapshot, _: &LoadError, view: BoxedView| view,
            ),
        }
    }
}

impl Customization {
    #[must_use]
    pub fn on_loading_view<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ControllerSnapshot, BoxedView) -> BoxedView + Send + 'static,
    {
        self.loading_view = Box::new(hook);
        self
    }

    #[must_use]
    pub fn on_initial_load_error_view<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ControllerSnapshot, Option<&LoadError>, BoxedView) -> BoxedView + Send + 'static,
    {
        self.initial_load_error_view = Box::new(hook);
        self
    }

    #[must_use]
    pub fn on_paging_error_view<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ControllerSnapshot, &LoadError, BoxedView) -> BoxedView + Send + 'static,
    {
        self.paging_error_view = Box::new(hook);
        self
    }
}

impl std::fmt::Debug for Customization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Customization").finish_non_exhaustive()
    }
}

/// Stock presenter built from the controller's configuration.
#[derive(Debug)]
pub struct DefaultPresenter {
    messages: MessagesConfig,
    spinner_interval: Duration,
    customization: Customization,
}

impl DefaultPresenter {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            messages: config.messages.clone(),
            spinner_interval: config.spinner_interval,
            customization: Customization::default(),
        }
    }

    #[must_use]
    pub fn with_customization(mut self, customization: Customization) -> Self {
        self.customization = customization;
        self
    }
}

impl ContentPresenter for DefaultPresenter {
    fn loading_view(&self, snapshot: &ControllerSnapshot) -> BoxedView {
        let stock: BoxedView = Box::new(ActivityIndicator::new(
            self.messages.loading.clone(),
            self.spinner_interval,
        ));
        (self.customization.loading_view)(snapshot, stock)
    }

    fn empty_or_error_view(
        &self,
        snapshot: &ControllerSnapshot,
        error: Option<LoadError>,
        retry: RetryHandle,
    ) -> BoxedView {
        let stock: BoxedView = Box::new(InitialLoadErrorView::new(
            error.clone(),
            retry,
            &self.messages,
        ));
        (self.customization.initial_load_error_view)(snapshot, error.as_ref(), stock)
    }

    fn paging_loading_view(&self, _snapshot: &ControllerSnapshot) -> BoxedView {
        Box::new(ActivityIndicator::inline(
            self.messages.paging_loading.clone(),
            self.spinner_interval,
        ))
    }

    fn paging_error_view(
        &self,
        snapshot: &ControllerSnapshot,
        error: LoadError,
        retry: RetryHandle,
    ) -> BoxedView {
        let stock: BoxedView =
            Box::new(PagingErrorView::new(error.clone(), retry, &self.messages));
        (self.customization.paging_error_view)(snapshot, &error, stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::{RetryTarget, channel};
    use crate::model::grid_state::GridState;
    use crate::model::snapshot::FooterKind;

    fn snapshot(state: GridState) -> ControllerSnapshot {
        ControllerSnapshot {
            state,
            view_mode: state.view_mode(),
            can_pull_to_refresh: false,
            paging_enabled: false,
            can_load_more: true,
            footer: FooterKind::Hidden,
            refreshing_indicator: false,
        }
    }

    #[test]
    fn test_default_views() {
        let (tx, _rx) = channel();
        let presenter = DefaultPresenter::new(&ControllerConfig::default());

        let loading = presenter.loading_view(&snapshot(GridState::LoadingInitially));
        assert_eq!(loading.name(), "ActivityIndicator");

        let empty = presenter.empty_or_error_view(
            &snapshot(GridState::EmptyOrError),
            None,
            RetryHandle::new(tx.clone(), RetryTarget::InitialLoad),
        );
        assert_eq!(empty.name(), "InitialLoadErrorView");

        let footer = presenter.paging_error_view(
            &snapshot(GridState::Idle),
            LoadError::new("api", 1, "boom"),
            RetryHandle::new(tx, RetryTarget::LoadMore),
        );
        assert_eq!(footer.name(), "PagingErrorView");
    }

    #[test]
    fn test_hooks_see_stock_view_and_error() {
        struct Banner;
        impl crate::view::traits::ContentView for Banner {
            fn name(&self) -> &'static str {
                "Banner"
            }
            fn render(&self, _area: ratatui::layout::Rect, _buf: &mut ratatui::buffer::Buffer) {}
            fn handle_input(&mut self, _key: crossterm::event::KeyEvent) -> bool {
                false
            }
            fn tick(&mut self) {}
        }

        let (tx, _rx) = channel();
        let presenter = DefaultPresenter::new(&ControllerConfig::default()).with_customization(
            Customization::default()
                .on_loading_view(|_, stock| {
                    assert_eq!(stock.name(), "ActivityIndicator");
                    Box::new(Banner) as BoxedView
                })
                .on_initial_load_error_view(|snap, error, stock| {
                    assert_eq!(snap.state, GridState::EmptyOrError);
                    match error {
                        Some(err) if err.code == 7 => Box::new(Banner) as BoxedView,
                        _ => stock,
                    }
                }),
        );

        let loading = presenter.loading_view(&snapshot(GridState::LoadingInitially));
        assert_eq!(loading.name(), "Banner");

        let replaced = presenter.empty_or_error_view(
            &snapshot(GridState::EmptyOrError),
            Some(LoadError::new("api", 7, "nope")),
            RetryHandle::new(tx.clone(), RetryTarget::InitialLoad),
        );
        assert_eq!(replaced.name(), "Banner");

        let kept = presenter.empty_or_error_view(
            &snapshot(GridState::EmptyOrError),
            None,
            RetryHandle::new(tx, RetryTarget::InitialLoad),
        );
        assert_eq!(kept.name(), "InitialLoadErrorView");
    }
}
