//! # beckon-core
//!
//! Core traits for the Beckon dynamic invocation framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! adapters and extensions that don't need the full `beckon-std` toolkit.
//!
//! # Four-Layer Architecture
//!
//! Beckon is built in four layers, each answering one question about a
//! named member of a subject:
//!
//! ## Layer 1: Callable Members ([`Method`])
//!
//! The indivisible unit of dispatch. A method borrows its receiver, takes
//! positional [`Value`] arguments, and produces a `Value` or an error.
//!
//! - **Atomic**: One member, one call surface
//! - **Universal**: Every higher convenience resolves to `&dyn Method`
//! - **Low-Level Access**: Raw closures over the argument slice implement
//!   it directly; [`TypedMethod`] adapts ordinary typed functions
//!
//! ## Layer 2: Resolution ([`MethodLookup`])
//!
//! Maps member names to methods. The backend is swappable: the default
//! [`MethodTable`] is HashMap-backed, `beckon-std` adds a compile-time
//! perfect-hash variant, and custom registries can implement the trait.
//!
//! ## Layer 3: Subjects ([`Reflect`])
//!
//! Connects a concrete type to the lookup structure that answers for it,
//! and optionally exposes non-callable data members. This is the seam the
//! `#[methods]` attribute macro generates code for.
//!
//! ## Layer 4: Invocation ([`can_invoke`], [`try_invoke_silent`])
//!
//! Free functions that probe and call members on a subject that may be
//! absent. Absence is never an error at this layer: it yields `false` or
//! `Ok(None)`, while member errors pass through untouched. The deprecated
//! [`try_invoke`] shim additionally reports to a [`DeprecationSink`].
//!
//! # Error Types
//!
//! - [`ArgumentError`] - Argument binding failures in typed adapters
//! - [`TableError`] - Table construction conflicts
//! - [`BoxError`] - Transport for member-raised errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod deprecation;
mod error;
mod invoke;
mod method;
mod reflect;
mod table;
mod value;

// Re-exports
pub use deprecation::{Deprecation, DeprecationSink};
pub use error::{ArgumentError, BoxError, TableError};
pub use invoke::{TRY_INVOKE_DEPRECATION, can_invoke, try_invoke_silent};
pub use method::{IntoReturn, Method, TypedMethod};
pub use reflect::Reflect;
pub use table::{MethodLookup, MethodTable, TableBuilder};
pub use value::{FromValue, TypeMismatch, Value};

#[allow(deprecated)]
pub use invoke::try_invoke;
