//! Stale-response guard for pages that refetch on every tab change.
//!
//! Each fetch is tagged with a generation number; when the response
//! arrives, it is applied only if no newer fetch has started since.
//! Nothing is cancelled at the network layer, late responses are
//! simply dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct RequestSequence {
    current: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request and return its generation number.
    /// All previously started requests become stale.
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a response with this generation is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.load(Ordering::SeqCst) == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_generation_is_current() {
        let seq = RequestSequence::new();
        let g = seq.begin();
        assert!(seq.is_current(g));
    }

    #[test]
    fn test_older_generation_is_stale() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let seq = RequestSequence::new();
        let clone = seq.clone();
        let g = seq.begin();
        assert!(clone.is_current(g));
        clone.begin();
        assert!(!seq.is_current(g));
    }
}
