//! # beckon-std
//!
//! Standard implementations for the Beckon dynamic invocation framework.
//!
//! This crate provides:
//! - **Deprecation sinks**: [`sinks::LogSink`], [`sinks::MemoSink`], [`sinks::NullSink`]
//! - **Static tables**: [`static_methods::StaticMethods`] (behind the `phf` feature)
//! - **Testing utilities**: [`testing::CollectingSink`], [`testing::CountingMethod`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use beckon_core;

// Modules
pub mod sinks;
#[cfg(feature = "phf")]
pub mod static_methods;
pub mod testing;
