//! src/grid/item_grid.rs
//! ============================================================================
//! # ItemGrid: a ratatui-backed `GridFacade`
//!
//! Sections of `Display` items laid out `columns` per row and drawn as a
//! `Table`. Like a real collection widget, the grid only picks up data
//! changes on a reload: edits through `sections_mut` are invisible to the
//! scroll geometry until `reload_all`/`reload_sections` runs.

use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Cell, Row, Table, Widget},
};
use tracing::{debug, trace};

use crate::grid::facade::{
    EdgeInsets, GridFacade, GridLayout, IndexPath, ScrollPosition, VisibleItems,
};
use crate::view::theme;

pub struct ItemGrid<T> {
    sections: Vec<Vec<T>>,

    /// Item counts captured at the last reload
    loaded_counts: Vec<usize>,

    offset: usize,
    inset: EdgeInsets,
    viewport: usize,
    layout: GridLayout,

    allows_selection: bool,
    selected: Option<IndexPath>,

    batch_depth: u32,
    pending_reload: bool,

    /// Bumped on every applied reload, useful for change detection
    reload_generation: u64,
}

impl<T> ItemGrid<T> {
    pub fn new(sections: Vec<Vec<T>>) -> Self {
        let loaded_counts = sections.iter().map(Vec::len).collect();
        Self {
            sections,
            loaded_counts,
            offset: 0,
            inset: EdgeInsets::default(),
            viewport: 0,
            layout: GridLayout::default(),
            allows_selection: true,
            selected: None,
            batch_depth: 0,
            pending_reload: false,
            reload_generation: 0,
        }
    }

    /// Single-section grid.
    pub fn with_items(items: Vec<T>) -> Self {
        Self::new(vec![items])
    }

    #[must_use]
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn sections(&self) -> &[Vec<T>] {
        &self.sections
    }

    /// Mutable access to the data; call a reload afterwards.
    pub fn sections_mut(&mut self) -> &mut Vec<Vec<T>> {
        &mut self.sections
    }

    pub fn set_sections(&mut self, sections: Vec<Vec<T>>) {
        self.sections = sections;
    }

    /// Append items to `section`, creating empty sections up to it.
    pub fn append(&mut self, section: usize, items: impl IntoIterator<Item = T>) {
        if self.sections.len() <= section {
            self.sections.resize_with(section + 1, Vec::new);
        }
        self.sections[section].extend(items);
    }

    pub fn item(&self, index: IndexPath) -> Option<&T> {
        self.sections.get(index.section)?.get(index.item)
    }

    /// Overrides the viewport height until the next render measures it.
    pub fn set_viewport_len(&mut self, rows: usize) {
        self.viewport = rows;
        self.clamp_offset();
    }

    pub const fn reload_generation(&self) -> u64 {
        self.reload_generation
    }

    fn columns(&self) -> usize {
        usize::from(self.layout.columns.max(1))
    }

    fn rows_in(&self, count: usize) -> usize {
        count.div_ceil(self.columns())
    }

    fn section_start_row(&self, section: usize) -> usize {
        usize::from(self.inset.top)
            + self
                .loaded_counts
                .iter()
                .take(section)
                .map(|&count| self.rows_in(count))
                .sum::<usize>()
    }

    fn row_of(&self, index: IndexPath) -> Option<usize> {
        let count = *self.loaded_counts.get(index.section)?;
        if index.item >= count {
            return None;
        }
        Some(self.section_start_row(index.section) + index.item / self.columns())
    }

    fn total_rows(&self) -> usize {
        let rows: usize = self
            .loaded_counts
            .iter()
            .map(|&count| self.rows_in(count))
            .sum();
        usize::from(self.inset.top) + rows + usize::from(self.inset.bottom)
    }

    fn max_offset(&self) -> usize {
        self.total_rows().saturating_sub(self.viewport)
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    fn apply_reload(&mut self) {
        self.loaded_counts = self.sections.iter().map(Vec::len).collect();
        self.clamp_offset();
        if let Some(selected) = self.selected
            && self.row_of(selected).is_none()
        {
            self.selected = None;
        }
        self.pending_reload = false;
        self.reload_generation += 1;
        debug!(
            generation = self.reload_generation,
            rows = self.total_rows(),
            "grid reloaded"
        );
    }
}

impl<T: fmt::Display> GridFacade for ItemGrid<T> {
    fn reload_all(&mut self) {
        if self.batch_depth > 0 {
            self.pending_reload = true;
            return;
        }
        self.apply_reload();
    }

    fn reload_sections(&mut self, sections: &[usize]) {
        if self.batch_depth > 0 || self.loaded_counts.len() != self.sections.len() {
            // section count changed; only a full reload keeps rows consistent
            self.reload_all();
            return;
        }
        for &section in sections {
            if let (Some(slot), Some(items)) =
                (self.loaded_counts.get_mut(section), self.sections.get(section))
            {
                *slot = items.len();
            }
        }
        self.clamp_offset();
        self.reload_generation += 1;
    }

    fn reload_items(&mut self, items: &[IndexPath]) {
        trace!(count = items.len(), "reloading items");
        // counts are unchanged; the next render redraws the cells
        self.reload_generation += 1;
    }

    fn content_offset(&self) -> usize {
        self.offset
    }

    fn set_content_offset(&mut self, offset: usize) {
        self.offset = offset;
        self.clamp_offset();
    }

    fn content_size(&self) -> usize {
        self.total_rows()
    }

    fn content_inset(&self) -> EdgeInsets {
        self.inset
    }

    fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.inset = inset;
        self.clamp_offset();
    }

    fn viewport_len(&self) -> usize {
        self.viewport
    }

    fn number_of_sections(&self) -> usize {
        self.loaded_counts.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.loaded_counts.get(section).copied().unwrap_or(0)
    }

    fn index_paths_for_visible_items(&self) -> VisibleItems {
        let first = self.offset;
        let last = self.offset + self.viewport;
        let mut visible = VisibleItems::new();

        for (section, &count) in self.loaded_counts.iter().enumerate() {
            for item in 0..count {
                let index = IndexPath::new(section, item);
                if let Some(row) = self.row_of(index)
                    && (first..last).contains(&row)
                {
                    visible.push(index);
                }
            }
        }
        visible
    }

    fn allows_selection(&self) -> bool {
        self.allows_selection
    }

    fn set_allows_selection(&mut self, allows: bool) {
        self.allows_selection = allows;
        if !allows {
            self.selected = None;
        }
    }

    fn select_item(&mut self, index: IndexPath, scroll: Option<ScrollPosition>) {
        if !self.allows_selection || self.row_of(index).is_none() {
            return;
        }
        self.selected = Some(index);
        if let Some(position) = scroll {
            self.scroll_to_item(index, position);
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

    fn scroll_to_item(&mut self, index: IndexPath, position: ScrollPosition) {
        let Some(row) = self.row_of(index) else {
            return;
        };
        let viewport = self.viewport.max(1);

        self.offset = match position {
            ScrollPosition::Top => row,
            ScrollPosition::CenteredVertically => row.saturating_sub(viewport / 2),
            ScrollPosition::Bottom => (row + 1).saturating_sub(viewport),
            ScrollPosition::Nearest if row < self.offset => row,
            ScrollPosition::Nearest if row >= self.offset + viewport => {
                (row + 1).saturating_sub(viewport)
            }
            ScrollPosition::Nearest => self.offset,
        };
        self.clamp_offset();
    }

    fn begin_updates(&mut self) {
        self.batch_depth += 1;
    }

    fn end_updates(&mut self) {
        self.batch_depth = self.batch_depth.saturating_sub(1);
        if self.batch_depth == 0 && self.pending_reload {
            self.apply_reload();
        }
    }

    fn has_uncommitted_updates(&self) -> bool {
        self.batch_depth > 0
    }

    fn layout(&self) -> &GridLayout {
        &self.layout
    }

    fn set_layout(&mut self, layout: GridLayout) {
        self.layout = layout;
        self.clamp_offset();
        if let Some(selected) = self.selected {
            self.scroll_to_item(selected, ScrollPosition::Nearest);
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let header_rows = usize::from(self.layout.header.is_some());
        self.viewport = usize::from(area.height).saturating_sub(header_rows);
        self.clamp_offset();

        let columns = self.columns();
        let top = usize::from(self.inset.top);
        let mut rows: Vec<Row> = Vec::with_capacity(self.viewport);

        for display_row in self.offset..self.offset + self.viewport {
            rows.push(self.build_row(display_row, top, columns));
        }

        let widths = vec![Constraint::Fill(1); columns];
        let mut table = Table::new(rows, widths)
            .column_spacing(self.layout.column_spacing)
            .block(Block::default().style(Style::default().bg(theme::BACKGROUND)));

        if let Some(header) = &self.layout.header {
            table = table.header(
                Row::new(vec![Cell::from(header.clone())])
                    .style(Style::default().fg(theme::YELLOW).bold()),
            );
        }

        trace!(offset = self.offset, viewport = self.viewport, "rendering grid");
        Widget::render(table, area, buf);
    }
}

impl<T: fmt::Display> ItemGrid<T> {
    fn build_row(&self, display_row: usize, top: usize, columns: usize) -> Row<'static> {
        let Some(mut remaining) = display_row.checked_sub(top) else {
            return Row::default();
        };

        for (section, &count) in self.loaded_counts.iter().enumerate() {
            let section_rows = self.rows_in(count);
            if remaining >= section_rows {
                remaining -= section_rows;
                continue;
            }

            let first = remaining * columns;
            let cells: Vec<Cell> = (first..(first + columns).min(count))
                .filter_map(|item| {
                    let index = IndexPath::new(section, item);
                    let value = self.item(index)?;
                    let style = if self.selected == Some(index) {
                        Style::default()
                            .bg(theme::CURRENT_LINE)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme::FOREGROUND)
                    };
                    Some(Cell::from(value.to_string()).style(style))
                })
                .collect();
            return Row::new(cells);
        }

        // bottom inset
        Row::default()
    }
}
