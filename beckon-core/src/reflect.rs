//! The subject trait connecting concrete types to their method tables.

use crate::table::MethodLookup;
use crate::value::Value;

/// A subject whose members can be probed and invoked by name.
///
/// Implementing `Reflect` declares which lookup structure answers for the
/// type. Most implementations return a lazily built static
/// [`MethodTable`](crate::MethodTable), which the `#[methods]` attribute
/// macro generates from an ordinary `impl` block.
///
/// Subjects are `'static`: the tables answering for them box their
/// members, so subject types that borrow cannot implement `Reflect`.
///
/// # Example
///
/// ```rust,ignore
/// struct Clock { millis: Cell<i64> }
///
/// impl Reflect for Clock {
///     type Methods = MethodTable<Self>;
///
///     fn methods(&self) -> &Self::Methods {
///         static TABLE: LazyLock<MethodTable<Clock>> = LazyLock::new(|| {
///             MethodTable::builder()
///                 .register_fn("get_time", |c: &Clock| c.get_time())
///                 .expect("fresh table")
///                 .build()
///         });
///         &TABLE
///     }
/// }
/// ```
///
/// # Data Members
///
/// [`property`](Reflect::property) exposes non-callable members. A name can
/// be present as data yet absent as a method; probing such a name with
/// [`can_invoke`](crate::can_invoke) answers `false`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid invocation subject",
    label = "missing `Reflect` implementation",
    note = "Derive the table with `#[methods]` or implement `Reflect` by hand."
)]
pub trait Reflect: Sized + 'static {
    /// The lookup structure answering for this type.
    type Methods: MethodLookup<Self>;

    /// The method table of this subject.
    fn methods(&self) -> &Self::Methods;

    /// Look up a non-callable data member by name.
    ///
    /// The default implementation exposes nothing.
    fn property(&self, _name: &str) -> Option<Value> {
        None
    }
}
