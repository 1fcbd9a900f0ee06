//! src/testing.rs
//! Test doubles shared by the controller tests.

use std::sync::{Arc, Mutex, MutexGuard};

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::ControllerConfig;
use crate::controller::delegate::LoadDelegate;
use crate::controller::events::{LoadCompletion, PagedCompletion};
use crate::controller::state_controller::StateController;
use crate::grid::facade::{
    EdgeInsets, GridFacade, GridLayout, IndexPath, ScrollPosition, VisibleItems,
};
use crate::model::snapshot::ControllerSnapshot;

/// Grid with directly settable geometry that counts reloads and renders.
#[derive(Debug, Default)]
pub(crate) struct MockGrid {
    pub offset: usize,
    pub size: usize,
    pub viewport: usize,
    pub inset: EdgeInsets,
    pub layout: GridLayout,
    pub selectable: bool,
    pub selected: Option<IndexPath>,
    pub batch_depth: u32,
    pub reloads: usize,
    pub renders: usize,
}

impl MockGrid {
    pub fn with_geometry(size: usize, viewport: usize) -> Self {
        Self {
            size,
            viewport,
            selectable: true,
            ..Self::default()
        }
    }
}

impl GridFacade for MockGrid {
    fn reload_all(&mut self) {
        self.reloads += 1;
    }

    fn reload_sections(&mut self, _sections: &[usize]) {
        self.reloads += 1;
    }

    fn reload_items(&mut self, _items: &[IndexPath]) {
        self.reloads += 1;
    }

    fn content_offset(&self) -> usize {
        self.offset
    }

    fn set_content_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    fn content_size(&self) -> usize {
        self.size
    }

    fn content_inset(&self) -> EdgeInsets {
        self.inset
    }

    fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.inset = inset;
    }

    fn viewport_len(&self) -> usize {
        self.viewport
    }

    fn number_of_sections(&self) -> usize {
        1
    }

    fn number_of_items(&self, section: usize) -> usize {
        if section == 0 { self.size } else { 0 }
    }

    fn index_paths_for_visible_items(&self) -> VisibleItems {
        let end = (self.offset + self.viewport).min(self.size);
        (self.offset..end).map(|item| IndexPath::new(0, item)).collect()
    }

    fn allows_selection(&self) -> bool {
        self.selectable
    }

    fn set_allows_selection(&mut self, allows: bool) {
        self.selectable = allows;
    }

    fn select_item(&mut self, index: IndexPath, _scroll: Option<ScrollPosition>) {
        if self.selectable {
            self.selected = Some(index);
        }
    }

    fn deselect_item(&mut self, index: IndexPath) {
        if self.selected == Some(index) {
            self.selected = None;
        }
    }

    fn selected_item(&self) -> Option<IndexPath> {
        self.selected
    }

    fn scroll_to_item(&mut self, index: IndexPath, _position: ScrollPosition) {
        self.offset = index.item;
    }

    fn begin_updates(&mut self) {
        self.batch_depth += 1;
    }

    fn end_updates(&mut self) {
        self.batch_depth = self.batch_depth.saturating_sub(1);
    }

    fn has_uncommitted_updates(&self) -> bool {
        self.batch_depth > 0
    }

    fn layout(&self) -> &GridLayout {
        &self.layout
    }

    fn set_layout(&mut self, layout: GridLayout) {
        self.layout = layout;
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.renders += 1;
        buf.set_string(area.x, area.y, "GRID", ratatui::style::Style::default());
    }
}

#[derive(Default)]
struct Recorded {
    initial: Vec<LoadCompletion>,
    refresh: Vec<LoadCompletion>,
    pages: Vec<PagedCompletion>,
    snapshots: Vec<ControllerSnapshot>,
}

/// Delegate that parks every completion so a test can resolve it later,
/// in any order.
#[derive(Clone, Default)]
pub(crate) struct RecordingDelegate {
    recorded: Arc<Mutex<Recorded>>,
}

impl RecordingDelegate {
    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().expect("recording delegate poisoned")
    }

    pub fn initial_calls(&self) -> usize {
        self.lock().initial.len()
    }

    pub fn refresh_calls(&self) -> usize {
        self.lock().refresh.len()
    }

    pub fn page_calls(&self) -> usize {
        self.lock().pages.len()
    }

    pub fn last_snapshot(&self) -> Option<ControllerSnapshot> {
        self.lock().snapshots.last().copied()
    }

    /// Oldest unresolved initial-load completion.
    pub fn take_initial(&self) -> LoadCompletion {
        let mut recorded = self.lock();
        assert!(!recorded.initial.is_empty(), "no pending initial load");
        recorded.initial.remove(0)
    }

    pub fn take_refresh(&self) -> LoadCompletion {
        let mut recorded = self.lock();
        assert!(!recorded.refresh.is_empty(), "no pending refresh");
        recorded.refresh.remove(0)
    }

    pub fn take_page(&self) -> PagedCompletion {
        let mut recorded = self.lock();
        assert!(!recorded.pages.is_empty(), "no pending page load");
        recorded.pages.remove(0)
    }
}

impl LoadDelegate for RecordingDelegate {
    fn initial_load(&mut self, snapshot: &ControllerSnapshot, completion: LoadCompletion) {
        let mut recorded = self.lock();
        recorded.snapshots.push(*snapshot);
        recorded.initial.push(completion);
    }

    fn refresh(&mut self, snapshot: &ControllerSnapshot, completion: LoadCompletion) {
        let mut recorded = self.lock();
        recorded.snapshots.push(*snapshot);
        recorded.refresh.push(completion);
    }

    fn load_more_pages(&mut self, snapshot: &ControllerSnapshot, completion: PagedCompletion) {
        let mut recorded = self.lock();
        recorded.snapshots.push(*snapshot);
        recorded.pages.push(completion);
    }
}

/// Controller over a `MockGrid` with a `RecordingDelegate` installed.
pub(crate) fn controller(
    config: ControllerConfig,
) -> (StateController<MockGrid>, RecordingDelegate) {
    controller_with_grid(MockGrid::with_geometry(40, 10), config)
}

pub(crate) fn controller_with_grid(
    grid: MockGrid,
    config: ControllerConfig,
) -> (StateController<MockGrid>, RecordingDelegate) {
    let delegate = RecordingDelegate::default();
    let controller = StateController::new(grid, config).with_delegate(delegate.clone());
    (controller, delegate)
}

pub(crate) fn buffer_text(buf: &Buffer) -> String {
    buf.content.iter().map(|cell| cell.symbol()).collect()
}
