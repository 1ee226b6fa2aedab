//! Active-marker state for toolbar controls.
//!
//! State lives in the marker itself (a CSS class in the browser) and is read
//! back on every query. Nothing caches it.

use std::cell::Cell;

/// A control's "active" visual marker.
///
/// Methods take `&self` because UI handles (DOM elements, widget refs) are
/// shared and mutate through the host.
pub trait Marker {
    fn is_active(&self) -> bool;

    fn set_active(&self, active: bool);

    /// Flip the marker and return the new state.
    fn toggle(&self) -> bool {
        let next = !self.is_active();
        self.set_active(next);
        next
    }
}

/// In-memory marker for tests and headless hosts.
#[derive(Debug, Default, Clone)]
pub struct MemoryMarker {
    active: Cell<bool>,
}

impl MemoryMarker {
    pub fn new(active: bool) -> Self {
        Self {
            active: Cell::new(active),
        }
    }
}

impl Marker for MemoryMarker {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}
