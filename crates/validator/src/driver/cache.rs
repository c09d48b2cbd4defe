//! Deduplication of reported failures

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;

static GLOBAL: LazyLock<Arc<FailureCache>> = LazyLock::new(|| Arc::new(FailureCache::new()));

/// Set of failure messages already reported.
///
/// Keyed purely on message text: two different checkers producing the same
/// message share one entry. Entries are never evicted.
#[derive(Debug, Default)]
pub struct FailureCache {
    seen: Mutex<HashSet<String>>,
}

impl FailureCache {
    /// An empty, private cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache shared by default validators.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    pub fn has_seen(&self, message: &str) -> bool {
        self.seen.lock().contains(message)
    }

    /// Records `message`, returning `true` if it had not been seen before.
    ///
    /// Lookup and insert happen under one lock, so concurrent callers
    /// racing on the same message get exactly one `true`.
    pub fn mark_seen(&self, message: &str) -> bool {
        let mut seen = self.seen.lock();
        if seen.contains(message) {
            return false;
        }
        seen.insert(message.to_owned())
    }

    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }
}
