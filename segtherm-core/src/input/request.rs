//! Pending-read flag shared with the edge handler

use portable_atomic::{AtomicBool, Ordering};

/// Set by the button edge handler, consumed by the main loop
///
/// Lives in a `static`; both sides only touch a single atomic.
#[derive(Debug, Default)]
pub struct ReadRequest {
    pending: AtomicBool,
}

impl ReadRequest {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Raise the request (edge context)
    pub fn request(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Clear the request, returning whether it was set
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}
