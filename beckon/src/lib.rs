//! # beckon - Probe-First Dynamic Invocation
//!
//! `beckon` lets code call members it cannot see at compile time without
//! treating absence as a failure. Probing is the default path; invocation is
//! built on the same lookup, so the two can never disagree about what a
//! subject offers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use beckon::prelude::*;
//!
//! struct Clock { millis: Cell<i64> }
//!
//! #[beckon::methods]
//! impl Clock {
//!     fn get_time(&self) -> i64 { self.millis.get() }
//! }
//!
//! let clock = Clock { millis: Cell::new(1363320000000) };
//! assert!(can_invoke(Some(&clock), "get_time"));
//! assert!(!can_invoke(Some(&clock), "bat"));
//!
//! let time = try_invoke_silent(Some(&clock), "get_time", &[])?;
//! assert_eq!(time, Some(Value::Int(1363320000000)));
//!
//! // No subject, nothing invoked, no error.
//! assert_eq!(try_invoke_silent(None::<&Clock>, "get_time", &[])?, None);
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use beckon_core::{
    // Errors
    ArgumentError,
    BoxError,
    // Deprecation reporting
    Deprecation,
    DeprecationSink,
    // Values
    FromValue,
    IntoReturn,
    // Methods
    Method,
    // Tables
    MethodLookup,
    MethodTable,
    // Subjects
    Reflect,
    // Invocation
    TRY_INVOKE_DEPRECATION,
    TableBuilder,
    TableError,
    TypeMismatch,
    TypedMethod,
    Value,
    can_invoke,
    try_invoke_silent,
};

#[allow(deprecated)]
pub use beckon_core::try_invoke;

/// Standard deprecation sink implementations.
pub mod sinks {
    #![allow(clippy::wildcard_imports)]
    pub use beckon_std::sinks::*;
}

/// Compile-time method tables.
#[cfg(feature = "phf")]
pub mod static_methods {
    #![allow(clippy::wildcard_imports)]
    pub use beckon_std::static_methods::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use beckon_std::testing::*;
}

/// Prelude module - common imports for Beckon.
///
/// # Usage
///
/// ```rust,ignore
/// use beckon::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        // Deprecation reporting
        DeprecationSink,
        // Values
        FromValue,
        IntoReturn,
        // Core traits
        Method,
        MethodLookup,
        MethodTable,
        Reflect,
        TableBuilder,
        Value,
        // Invocation
        can_invoke,
        try_invoke_silent,
    };
}

#[cfg(feature = "macros")]
pub use beckon_macros::methods;
