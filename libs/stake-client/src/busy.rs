use std::cell::Cell;
use std::rc::Rc;

/// Shared in-flight marker for the form
/// Clones observe the same flag, so a renderer (or a gateway) can watch it
/// while a request runs.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    busy: Rc<Cell<bool>>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Mark the flag busy until the returned guard is dropped.
    /// Returns `None` when a request is already in flight.
    pub fn acquire(&self) -> Option<BusyGuard> {
        if self.busy.replace(true) {
            return None;
        }
        Some(BusyGuard {
            busy: Rc::clone(&self.busy),
        })
    }
}

/// Clears the busy flag when dropped, on every exit path
#[derive(Debug)]
pub struct BusyGuard {
    busy: Rc<Cell<bool>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
