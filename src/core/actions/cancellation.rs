use std::sync::atomic::{AtomicBool, Ordering};

/// Stop request for the zoom tick loop. Checked once per tick, never in the
/// middle of a render.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

impl CancelToken for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}
