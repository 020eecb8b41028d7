//! Ports Layer
//!
//! `ListObserver` is the display adapter: it receives the current list and
//! change notifications and owns all rendering.

use std::ops::Range;

use shared_types::Character;

/// Display adapter (Driven Port)
pub trait ListObserver: Send + Sync {
    /// The whole displayed list changed (initial load, search).
    fn data_set_changed(&self, items: &[Character]);

    /// Rows in `range` changed after a page load.
    ///
    /// `range` may extend past `items.len()` when the server returned fewer
    /// characters than requested.
    fn item_range_changed(&self, range: Range<usize>, items: &[Character]);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpObserver;

impl ListObserver for NoOpObserver {
    fn data_set_changed(&self, _items: &[Character]) {}

    fn item_range_changed(&self, _range: Range<usize>, _items: &[Character]) {}
}
