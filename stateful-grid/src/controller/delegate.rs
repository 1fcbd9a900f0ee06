//! src/controller/delegate.rs
//! ============================================================================
//! Host-side load callbacks.
//!
//! Each callback receives an owned completion handle. The host may resolve
//! it right away or move it into a background task; either way the result is
//! applied on the controller's next `process_events`.

use crate::controller::events::{LoadCompletion, PagedCompletion};
use crate::model::snapshot::ControllerSnapshot;

pub trait LoadDelegate: Send {
    /// Load the first dataset and resolve `completion` once.
    fn initial_load(&mut self, snapshot: &ControllerSnapshot, completion: LoadCompletion);

    /// Reload the current dataset from the top and resolve `completion` once.
    fn refresh(&mut self, snapshot: &ControllerSnapshot, completion: LoadCompletion);

    /// Load the next page and resolve `completion` once.
    fn load_more_pages(&mut self, snapshot: &ControllerSnapshot, completion: PagedCompletion);
}
