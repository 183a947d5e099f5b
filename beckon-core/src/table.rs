//! Method lookup abstraction and the default table implementation.
//!
//! This module provides a trait-based lookup abstraction that allows
//! different table backends (HashMap, phf, custom registries) to be
//! swapped without changing invocation code.

use std::collections::HashMap;

use crate::error::TableError;
use crate::method::{Method, TypedMethod};

/// A lookup structure that maps member names to callable methods.
///
/// This trait abstracts over different table implementations, allowing
/// the use of HashMap-backed tables, compile-time perfect hash maps, or
/// custom resolution schemes.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve methods for `{S}`",
    label = "missing `MethodLookup` implementation",
    note = "Implement `MethodLookup<{S}>` so subjects backed by `{Self}` can be probed."
)]
pub trait MethodLookup<S>: Send + Sync {
    /// Look up a method by name.
    fn find(&self, name: &str) -> Option<&dyn Method<S>>;

    /// Check if a name resolves to a callable member.
    fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

/// The default method table, backed by `HashMap`.
///
/// Tables are constructed up front through [`MethodTable::builder`] and are
/// immutable afterwards, so a shared reference is all the invocation layer
/// ever needs.
pub struct MethodTable<S: 'static> {
    methods: HashMap<String, Box<dyn Method<S>>>,
}

impl<S> MethodTable<S> {
    /// Start building a table.
    pub fn builder() -> TableBuilder<S> {
        TableBuilder::default()
    }

    /// Get the number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Iterate over the registered member names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }
}

impl<S> MethodLookup<S> for MethodTable<S> {
    fn find(&self, name: &str) -> Option<&dyn Method<S>> {
        self.methods.get(name).map(|m| m.as_ref())
    }
}

/// Builder for [`MethodTable`].
///
/// Registration is fallible: the same name may not be claimed twice unless
/// [`allow_replace`](TableBuilder::allow_replace) was requested, in which
/// case later registrations override earlier ones.
pub struct TableBuilder<S: 'static> {
    methods: HashMap<String, Box<dyn Method<S>>>,
    allow_replace: bool,
}

impl<S> TableBuilder<S> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
            allow_replace: false,
        }
    }

    /// Allow duplicate names (later registrations override earlier ones).
    pub fn allow_replace(mut self) -> Self {
        self.allow_replace = true;
        self
    }

    /// Register a method under the given member name.
    ///
    /// Returns an error if the name is already taken and replacement was
    /// not enabled.
    pub fn register<M>(mut self, name: impl Into<String>, method: M) -> Result<Self, TableError>
    where
        M: Method<S>,
    {
        let name = name.into();
        if !self.allow_replace && self.methods.contains_key(&name) {
            return Err(TableError::DuplicateName(name));
        }
        self.methods.insert(name, Box::new(method));
        Ok(self)
    }

    /// Register a typed function as a method.
    ///
    /// The function's parameter list after the receiver is bound from the
    /// dynamic argument slice; see [`TypedMethod`].
    pub fn register_fn<F, Args>(self, name: impl Into<String>, func: F) -> Result<Self, TableError>
    where
        TypedMethod<F, Args>: Method<S>,
    {
        self.register(name, TypedMethod::new(func))
    }

    /// Build the table, consuming the builder.
    pub fn build(self) -> MethodTable<S> {
        MethodTable {
            methods: self.methods,
        }
    }
}

impl<S> Default for TableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
