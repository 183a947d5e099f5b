//! Testing utilities for Beckon.
//!
//! This module provides utilities to make testing subjects, tables, and
//! deprecation flows easier.
//!
//! # Features
//!
//! - [`CollectingSink`]: A sink that records every deprecation it receives
//! - [`CountingMethod`]: A method that counts invocations and returns null

use beckon_core::{BoxError, Deprecation, DeprecationSink, Method, Value};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Collecting Sink
// ============================================================================

/// A sink that records all deprecations it receives.
///
/// Useful for verifying that deprecated entry points report correctly.
///
/// # Example
///
/// ```rust,ignore
/// let collector = CollectingSink::new();
///
/// // Hand it to the deprecated entry point...
/// try_invoke(&collector, Some(&subject), "get_time", &[])?;
///
/// // Check what was reported
/// assert_eq!(collector.ids(), vec!["beckon.try-invoke"]);
/// ```
pub struct CollectingSink {
    reports: Arc<Mutex<Vec<Deprecation>>>,
}

impl CollectingSink {
    /// Create a new empty collecting sink.
    pub fn new() -> Self {
        Self {
            reports: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded reports.
    pub fn reports(&self) -> Vec<Deprecation> {
        self.reports.lock().unwrap().clone()
    }

    /// Get the recorded identifiers, in report order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.reports.lock().unwrap().iter().map(|d| d.id).collect()
    }

    /// Get the number of recorded reports.
    pub fn count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    /// Clear all recorded reports.
    pub fn clear(&self) {
        self.reports.lock().unwrap().clear();
    }
}

impl Default for CollectingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CollectingSink {
    fn clone(&self) -> Self {
        Self {
            reports: self.reports.clone(),
        }
    }
}

impl DeprecationSink for CollectingSink {
    fn report(&self, deprecation: &Deprecation) {
        self.reports.lock().unwrap().push(*deprecation);
    }
}

// ============================================================================
// Counting Method
// ============================================================================

/// A method that counts invocations and returns `Value::Null`.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingMethod::new();
/// let table = MethodTable::builder()
///     .register("poke", counter.clone())?
///     .build();
///
/// // Invoke through the table...
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingMethod {
    count: Arc<AtomicUsize>,
}

impl CountingMethod {
    /// Create a new counting method.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingMethod {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingMethod {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<S> Method<S> for CountingMethod {
    fn call(&self, _receiver: &S, _args: &[Value]) -> Result<Value, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(Value::Null)
    }
}
