//! Deprecation sinks for common reporting policies.

use beckon_core::{Deprecation, DeprecationSink};
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// A sink that logs reports for observation.
pub struct LogSink;

impl DeprecationSink for LogSink {
    fn report(&self, deprecation: &Deprecation) {
        #[cfg(feature = "tracing")]
        {
            tracing::warn!(
                id = deprecation.id,
                since = deprecation.since,
                until = deprecation.until,
                package = deprecation.package,
                "{}",
                deprecation.message
            );
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = deprecation; // Suppress unused warning
        }
    }
}

/// A sink that forwards each deprecation id at most once.
///
/// Wraps another sink and drops repeat reports for identifiers it has
/// already forwarded. The memo is per instance, not global.
pub struct MemoSink<D> {
    inner: D,
    seen: Mutex<HashSet<&'static str>>,
}

impl<D> MemoSink<D> {
    /// Wrap `inner`, starting with an empty memo.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Get a reference to the wrapped sink.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Number of distinct identifiers forwarded so far.
    pub fn distinct(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Forget every memorized identifier.
    pub fn reset(&self) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<D: DeprecationSink> DeprecationSink for MemoSink<D> {
    fn report(&self, deprecation: &Deprecation) {
        let fresh = self
            .seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(deprecation.id);
        if fresh {
            self.inner.report(deprecation);
        }
    }
}

/// A sink that discards every report.
///
/// For callers that have made their peace with the old surface.
pub struct NullSink;

impl DeprecationSink for NullSink {
    fn report(&self, _deprecation: &Deprecation) {}
}
