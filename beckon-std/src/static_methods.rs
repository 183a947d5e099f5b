//! PHF-based method tables.
//!
//! Provides compile-time perfect hash lookup for subjects whose member set
//! is fixed at build time. The table is immutable and must be constructed
//! with a static map reference.

use beckon_core::{BoxError, Method, MethodLookup, Value};

/// The function-pointer shape stored in a static table.
pub type MethodFn<S> = fn(&S, &[Value]) -> Result<Value, BoxError>;

/// A method table backed by `phf::Map`.
///
/// Wraps a static reference to a PHF map. Construction is `const`, so a
/// `StaticMethods` value can itself live in a `static` and be handed out
/// from [`Reflect::methods`](beckon_core::Reflect::methods) with no lazy
/// initialization at all.
pub struct StaticMethods<S: 'static> {
    map: &'static phf::Map<&'static str, MethodFn<S>>,
}

impl<S> StaticMethods<S> {
    /// Create a new table from a static PHF map.
    pub const fn new(map: &'static phf::Map<&'static str, MethodFn<S>>) -> Self {
        Self { map }
    }

    /// Get the number of members.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<S> MethodLookup<S> for StaticMethods<S> {
    fn find(&self, name: &str) -> Option<&dyn Method<S>> {
        self.map.get(name).map(|f| f as &dyn Method<S>)
    }
}

// Note: TableBuilder has no counterpart here because PHF maps are
// constructed at compile time, not runtime.
