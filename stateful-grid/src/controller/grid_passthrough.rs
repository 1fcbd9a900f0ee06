//! src/controller/grid_passthrough.rs
//! ============================================================================
//! `GridFacade` on the controller itself, forwarding every call to the
//! wrapped grid unchanged. Rendering is the one exception: the controller's
//! `render` composes the content slot and footers around the grid.

use ratatui::{buffer::Buffer, layout::Rect};

use crate::controller::state_controller::StateController;
use crate::grid::facade::{
    EdgeInsets, GridFacade, GridLayout, IndexPath, ScrollPosition, VisibleItems,
};

impl<G: GridFacade> GridFacade for StateController<G> {
    fn reload_all(&mut self) {
        self.grid.reload_all();
    }

    fn reload_sections(&mut self, sections: &[usize]) {
        self.grid.reload_sections(sections);
    }

    fn reload_items(&mut self, items: &[IndexPath]) {
        self.grid.reload_items(items);
    }

    fn content_offset(&self) -> usize {
        self.grid.content_offset()
    }

    fn set_content_offset(&mut self, offset: usize) {
        self.grid.set_content_offset(offset);
    }

    fn content_size(&self) -> usize {
        self.grid.content_size()
    }

    fn content_inset(&self) -> EdgeInsets {
        self.grid.content_inset()
    }

    fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.grid.set_content_inset(inset);
    }

    fn viewport_len(&self) -> usize {
        self.grid.viewport_len()
    }

    fn number_of_sections(&self) -> usize {
        self.grid.number_of_sections()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.grid.number_of_items(section)
    }

    fn index_paths_for_visible_items(&self) -> VisibleItems {
        self.grid.index_paths_for_visible_items()
    }

    fn allows_selection(&self) -> bool {
        self.grid.allows_selection()
    }

    fn set_allows_selection(&mut self, allows: bool) {
        self.grid.set_allows_selection(allows);
    }

    fn select_item(&mut self, index: IndexPath, scroll: Option<ScrollPosition>) {
        self.grid.select_item(index, scroll);
    }

    fn deselect_item(&mut self, index: IndexPath) {
        self.grid.deselect_item(index);
    }

    fn selected_item(&self) -> Option<IndexPath> {
        self.grid.selected_item()
    }

    fn scroll_to_item(&mut self, index: IndexPath, position: ScrollPosition) {
        self.grid.scroll_to_item(index, position);
    }

    fn begin_updates(&mut self) {
        self.grid.begin_updates();
    }

    fn end_updates(&mut self) {
        self.grid.end_updates();
    }

    fn has_uncommitted_updates(&self) -> bool {
        self.grid.has_uncommitted_updates()
    }

    fn layout(&self) -> &GridLayout {
        self.grid.layout()
    }

    fn set_layout(&mut self, layout: GridLayout) {
        self.grid.set_layout(layout);
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        StateController::render(self, area, buf);
    }
}
