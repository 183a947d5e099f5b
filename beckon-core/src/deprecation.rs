//! Deprecation records and the sink collaborator that receives them.
//!
//! Deprecated entry points do not print or panic on their own: they hand a
//! static [`Deprecation`] record to a caller-supplied [`DeprecationSink`].
//! What happens next (logging, collecting, de-duplicating, ignoring) is the
//! sink's business, which keeps the invocation layer free of I/O.

/// A static description of one deprecated surface.
///
/// Records are declared as constants next to the surface they describe, so
/// every report for the same surface carries identical metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecation {
    /// Stable identifier, e.g. `"beckon.try-invoke"`.
    pub id: &'static str,
    /// Human-readable explanation and migration hint.
    pub message: &'static str,
    /// Version that introduced the deprecation.
    pub since: &'static str,
    /// Version in which the surface will be removed.
    pub until: &'static str,
    /// Package the deprecation belongs to.
    pub package: &'static str,
    /// Optional URL with migration details.
    pub url: Option<&'static str>,
}

/// A collaborator that receives deprecation reports.
///
/// Standard sinks live in `beckon-std`: a tracing-backed logger, a
/// per-identifier de-duplicator, and a discarding sink for code that has
/// made its peace with the old surface.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `DeprecationSink`",
    label = "missing `DeprecationSink` implementation",
    note = "DeprecationSink must implement the `report` method."
)]
pub trait DeprecationSink: Send + Sync {
    /// Receive one deprecation report.
    fn report(&self, deprecation: &Deprecation);

    /// Report unless `condition` holds.
    ///
    /// The condition describes a situation in which the usage is fine;
    /// passing `false` always reports.
    fn report_unless(&self, condition: bool, deprecation: &Deprecation) {
        if !condition {
            self.report(deprecation);
        }
    }
}
