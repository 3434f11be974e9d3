use std::sync::atomic::{AtomicBool, Ordering};

/// Channel lifecycle flag shared by the read and write paths.
///
/// Created open; transitions to closed exactly once. This is the only
/// mutable state the two directions share.
#[derive(Debug)]
pub(crate) struct Lifecycle {
    open: AtomicBool,
}

impl Lifecycle {
    pub(crate) fn new() -> Self {
        Self {
            open: AtomicBool::new(true),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    /// Transition to closed. Returns whether this call performed the
    /// transition (false on every call after the first).
    pub(crate) fn close(&self) -> bool {
        self.open.swap(false, Ordering::AcqRel)
    }
}
