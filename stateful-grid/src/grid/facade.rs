//! src/grid/facade.rs
//! ============================================================================
//! # GridFacade: the narrow surface onto the underlying item grid
//!
//! The controller never lays out or recycles cells itself. It only asks the
//! grid to redraw after a load resolved and reads the scroll geometry to
//! decide when the next page is due. Everything else here exists so that
//! hosts can reach the grid through the controller, 1:1.
//!
//! Geometry is measured in rows: `content_offset` is the first visible row,
//! `content_size` the total number of rows, `viewport_len` the number of rows
//! that fit on screen.

use ratatui::{buffer::Buffer, layout::Rect};
use smallvec::SmallVec;

/// Position of an item inside a sectioned grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// Extra rows reserved before and after the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeInsets {
    pub top: u16,
    pub bottom: u16,
}

/// Where `scroll_to_item` should place the item inside the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollPosition {
    Top,
    CenteredVertically,
    Bottom,
    /// Scroll only as far as needed to make the item visible
    #[default]
    Nearest,
}

/// Swappable layout description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    /// Items per row
    pub columns: u16,
    /// Blank columns between cells
    pub column_spacing: u16,
    /// Optional header row text
    pub header: Option<String>,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 1,
            column_spacing: 1,
            header: None,
        }
    }
}

/// Buffer type for visible index paths; most viewports hold fewer than 32.
pub type VisibleItems = SmallVec<[IndexPath; 32]>;

/// Pass-through surface onto a concrete grid widget.
pub trait GridFacade {
    // Reloading content
    fn reload_all(&mut self);

    fn reload_sections(&mut self, sections: &[usize]);

    fn reload_items(&mut self, items: &[IndexPath]);

    // Scroll geometry
    fn content_offset(&self) -> usize;

    fn set_content_offset(&mut self, offset: usize);

    fn content_size(&self) -> usize;

    fn content_inset(&self) -> EdgeInsets;

    fn set_content_inset(&mut self, inset: EdgeInsets);

    fn viewport_len(&self) -> usize;

    // Getting the state of the grid
    fn number_of_sections(&self) -> usize;

    fn number_of_items(&self, section: usize) -> usize;

    fn index_paths_for_visible_items(&self) -> VisibleItems;

    // Managing the selection
    fn allows_selection(&self) -> bool;

    fn set_allows_selection(&mut self, allows: bool);

    fn select_item(&mut self, index: IndexPath, scroll: Option<ScrollPosition>);

    fn deselect_item(&mut self, index: IndexPath);

    fn selected_item(&self) -> Option<IndexPath>;

    // Scrolling an item into view
    fn scroll_to_item(&mut self, index: IndexPath, position: ScrollPosition);

    // Batched updates
    fn begin_updates(&mut self);

    fn end_updates(&mut self);

    fn has_uncommitted_updates(&self) -> bool;

    /// Runs `updates` between `begin_updates` and `end_updates`.
    fn perform_batch_updates<F>(&mut self, updates: F)
    where
        F: FnOnce(&mut Self),
        Self: Sized,
    {
        self.begin_updates();
        updates(self);
        self.end_updates();
    }

    // Changing the layout
    fn layout(&self) -> &GridLayout;

    fn set_layout(&mut self, layout: GridLayout);

    /// Draw the grid into `area`.
    fn render(&mut self, area: Rect, buf: &mut Buffer);
}
