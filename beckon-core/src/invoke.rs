//! Probing and invoking members by name.
//!
//! These free functions are the crate's front door. They answer two closely
//! related questions about a subject that may not even be there:
//!
//! - [`can_invoke`] - does this name resolve to something callable?
//! - [`try_invoke_silent`] - call it if so, and say nothing if not
//!
//! Absence is never an error here. A missing subject or an unknown name
//! yields `Ok(None)`; only a member that actually ran can produce `Err`,
//! and its error comes back untouched.

use crate::deprecation::{Deprecation, DeprecationSink};
use crate::error::BoxError;
use crate::reflect::Reflect;
use crate::table::MethodLookup;
use crate::value::Value;

/// The record reported for every [`try_invoke`] call.
pub static TRY_INVOKE_DEPRECATION: Deprecation = Deprecation {
    id: "beckon.try-invoke",
    message: "Using try_invoke has been deprecated. Probe with can_invoke and \
              call the member through its table, or use try_invoke_silent.",
    since: "0.1.0",
    until: "0.3.0",
    package: "beckon",
    url: Some("https://docs.rs/beckon/latest/beckon/fn.try_invoke.html"),
};

/// Checks whether `name` resolves to a callable member of `subject`.
///
/// Data members don't count: a name that is present on the subject but not
/// callable answers `false`, exactly like an absent name. A missing subject
/// answers `false` for every name.
///
/// # Example
///
/// ```rust,ignore
/// let foo = Foo::default();       // has a `bar` method and a null `baz` field
///
/// can_invoke(Some(&foo), "bar");  // true
/// can_invoke(Some(&foo), "baz");  // false - present but not callable
/// can_invoke(Some(&foo), "bat");  // false - absent
/// can_invoke(None::<&Foo>, "bar") // false - no subject
/// ```
pub fn can_invoke<S: Reflect>(subject: Option<&S>, name: &str) -> bool {
    subject.is_some_and(|s| s.methods().contains(name))
}

/// Invokes `name` on `subject` if possible, reporting the usage as deprecated.
///
/// Behaves exactly like [`try_invoke_silent`] after handing
/// [`TRY_INVOKE_DEPRECATION`] to `sink`. The report happens on every call,
/// whether or not anything ends up invoked.
#[deprecated(
    since = "0.1.0",
    note = "probe with `can_invoke` and call through the table, or use `try_invoke_silent`"
)]
pub fn try_invoke<S, D>(
    sink: &D,
    subject: Option<&S>,
    name: &str,
    args: &[Value],
) -> Result<Option<Value>, BoxError>
where
    S: Reflect,
    D: DeprecationSink + ?Sized,
{
    // No condition ever suppresses this report.
    sink.report_unless(false, &TRY_INVOKE_DEPRECATION);
    try_invoke_silent(subject, name, args)
}

/// Invokes `name` on `subject` if `name` is callable there.
///
/// Returns `Ok(None)` when nothing was invoked: the subject is missing, the
/// name is unknown, or the name belongs to a data member. A member that did
/// run yields `Ok(Some(value))`, with `()`-like results surfacing as
/// `Value::Null`. Errors raised by the member itself pass through unchanged.
///
/// # Example
///
/// ```rust,ignore
/// let date = Date::at(1363320000000);
///
/// try_invoke_silent(Some(&date), "get_time", &[])?;                       // Some(Int(1363320000000))
/// try_invoke_silent(Some(&date), "set_full_year", &[Value::Int(2014)])?;  // Some(Int(1394856000000))
/// try_invoke_silent(Some(&date), "no_such_method", &[Value::Int(2014)])?; // None
/// ```
pub fn try_invoke_silent<S: Reflect>(
    subject: Option<&S>,
    name: &str,
    args: &[Value],
) -> Result<Option<Value>, BoxError> {
    let Some(subject) = subject else {
        return Ok(None);
    };
    match subject.methods().find(name) {
        Some(method) => method.call(subject, args).map(Some),
        None => Ok(None),
    }
}
