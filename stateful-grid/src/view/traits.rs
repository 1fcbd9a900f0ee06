//! src/view/traits.rs
//! ============================================================================
//! # Content View Trait
//!
//! Everything the controller mounts into the content slot or the trailing
//! footer is a `ContentView`. The controller treats these as opaque: it
//! renders them, forwards input, and drops them when unmounted.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

/// Opaque view mounted by the controller.
pub trait ContentView: Send {
    /// The name/type of this view for debugging
    fn name(&self) -> &'static str;

    /// Draw into `area`
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Handle keyboard input (return true if handled)
    fn handle_input(&mut self, key: KeyEvent) -> bool;

    /// Advance time-based state such as spinner frames
    fn tick(&mut self);
}

/// Boxed view as stored in the content slot and footer.
pub type BoxedView = Box<dyn ContentView>;
