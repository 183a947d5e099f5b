//! # Callable Members (Method Layer)
//!
//! The lowest-level representation of an invokable member in Beckon.
//!
//! A [`Method`] is the indivisible unit of dispatch: it receives a borrowed
//! receiver plus positional [`Value`] arguments and produces a `Value` or an
//! error. Every higher convenience (typed adapters, attribute macros, static
//! tables) ultimately flows through this trait when a call happens.
//!
//! # Design Philosophy
//!
//! - **Atomic**: One method, one call surface, no hidden state machine
//! - **Universal**: Tables, probes and the invocation helpers all speak
//!   `&dyn Method<S>`
//! - **Low-Level Access**: Implementing `Method` directly gives full control
//!   over argument handling; raw closures over `&[Value]` get it for free
//!
//! # Typed Adapters
//!
//! Most members are ordinary Rust functions with typed parameters. Wrap them
//! in [`TypedMethod`] (usually via
//! [`TableBuilder::register_fn`](crate::TableBuilder::register_fn)) and the
//! adapter binds positional arguments with [`FromValue`], enforces the count,
//! and converts the return type with [`IntoReturn`].

use std::marker::PhantomData;

use crate::error::{ArgumentError, BoxError};
use crate::value::{FromValue, Value};

/// A callable member of a subject type `S`.
///
/// Like a bound function in a dynamic language, a method borrows its
/// receiver for the duration of the call and never consumes it. Errors
/// raised inside the member are returned as-is; the dispatch layer adds
/// no wrapping of its own.
///
/// # For Ecosystem Developers
///
/// Raw closures of the shape `Fn(&S, &[Value]) -> Result<Value, BoxError>`
/// implement `Method<S>` directly and see the untouched argument slice.
/// Typed functions go through [`TypedMethod`] instead.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Method<{S}>`",
    label = "missing `Method` implementation",
    note = "Methods must implement `call` for the specific subject type `{S}`."
)]
pub trait Method<S>: Send + Sync + 'static {
    /// Invoke the member on `receiver` with positional arguments.
    fn call(&self, receiver: &S, args: &[Value]) -> Result<Value, BoxError>;
}

// Blanket implementation: raw closures over the argument slice are methods.
impl<S, F> Method<S> for F
where
    F: Fn(&S, &[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
{
    fn call(&self, receiver: &S, args: &[Value]) -> Result<Value, BoxError> {
        (self)(receiver, args)
    }
}

/// Trait for converting a member's native return type into a [`Value`].
///
/// # Default Implementations
///
/// - `()` → `Value::Null`
/// - `Option<T>` → Inner value, or `Value::Null` for `None`
/// - `Result<T, E>` → Delegates to inner `T` or propagates the error
/// - Scalars and strings → The matching `Value` variant
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `IntoReturn`",
    label = "missing `IntoReturn` implementation",
    note = "IntoReturn must implement the `into_return` method."
)]
pub trait IntoReturn {
    /// Convert the output into a dynamic value or an error.
    fn into_return(self) -> Result<Value, BoxError>;
}

impl IntoReturn for Value {
    fn into_return(self) -> Result<Value, BoxError> {
        Ok(self)
    }
}

impl IntoReturn for () {
    fn into_return(self) -> Result<Value, BoxError> {
        // A member that returns nothing still counts as invoked.
        Ok(Value::Null)
    }
}

impl IntoReturn for bool {
    fn into_return(self) -> Result<Value, BoxError> {
        Ok(Value::Bool(self))
    }
}

impl IntoReturn for i32 {
    fn into_return(self) -> Result<Value, BoxError> {
        Ok(Value::Int(i64::from(self)))
    }
}

impl IntoReturn for i64 {
    fn into_return(self) -> Result<Value, BoxError> {
        Ok(Value::Int(self))
    }
}

impl IntoReturn for f64 {
    fn into_return(self) -> Result<Value, BoxError> {
        Ok(Value::Float(self))
    }
}

impl IntoReturn for String {
    fn into_return(self) -> Result<Value, BoxError> {
        Ok(Value::Str(self))
    }
}

impl IntoReturn for &'static str {
    fn into_return(self) -> Result<Value, BoxError> {
        Ok(Value::Str(self.to_string()))
    }
}

impl IntoReturn for Vec<Value> {
    fn into_return(self) -> Result<Value, BoxError> {
        Ok(Value::List(self))
    }
}

impl<T: IntoReturn> IntoReturn for Option<T> {
    fn into_return(self) -> Result<Value, BoxError> {
        match self {
            Some(t) => t.into_return(),
            None => Ok(Value::Null),
        }
    }
}

impl<T, E> IntoReturn for Result<T, E>
where
    T: IntoReturn,
    E: std::error::Error + Send + Sync + 'static,
{
    fn into_return(self) -> Result<Value, BoxError> {
        match self {
            Ok(t) => t.into_return(),
            Err(e) => Err(Box::new(e)),
        }
    }
}

/// A method that binds typed arguments from the dynamic argument slice.
///
/// `TypedMethod` wraps a plain function or closure and automatically
/// converts positional [`Value`] arguments using the [`FromValue`] trait.
///
/// # Multi-Argument Support
///
/// Supports functions with 0 to 6 typed arguments after the receiver:
///
/// ```rust,ignore
/// // 0 arguments - just receives the subject
/// TypedMethod::new(|clock: &Clock| clock.get_time());
///
/// // 1 argument
/// TypedMethod::new(|clock: &Clock, year: i64| clock.set_full_year(year));
///
/// // Up to 6 arguments supported
/// ```
///
/// The argument count is enforced: a call with the wrong number of values
/// fails with [`ArgumentError::Count`] before the wrapped function runs.
pub struct TypedMethod<F, Args> {
    func: F,
    _marker: PhantomData<fn() -> Args>,
}

impl<F, Args> TypedMethod<F, Args> {
    /// Create a new typed method from a function.
    pub fn new(func: F) -> Self {
        Self {
            func,
            _marker: PhantomData,
        }
    }
}

fn check_count(expected: usize, args: &[Value]) -> Result<(), ArgumentError> {
    if args.len() != expected {
        return Err(ArgumentError::Count {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Macro to implement Method for TypedMethod with N arguments.
macro_rules! impl_typed_method {
    // Base case: 0 arguments
    () => {
        impl<S, F, Out> Method<S> for TypedMethod<F, ()>
        where
            F: Fn(&S) -> Out + Send + Sync + 'static,
            Out: IntoReturn,
        {
            fn call(&self, receiver: &S, args: &[Value]) -> Result<Value, BoxError> {
                check_count(0, args)?;
                (self.func)(receiver).into_return()
            }
        }
    };

    // Recursive case: 1+ arguments
    ($count:expr, $(($T:ident, $idx:tt)),+) => {
        impl<S, F, $($T,)+ Out> Method<S> for TypedMethod<F, ($($T,)+)>
        where
            $(
                $T: FromValue + Send + Sync + 'static,
            )+
            F: Fn(&S, $($T,)+) -> Out + Send + Sync + 'static,
            Out: IntoReturn,
        {
            #[allow(non_snake_case)]
            fn call(&self, receiver: &S, args: &[Value]) -> Result<Value, BoxError> {
                check_count($count, args)?;
                $(
                    let $T = $T::from_value(&args[$idx])
                        .map_err(|e| ArgumentError::convert($idx, e))?;
                )+
                (self.func)(receiver, $($T,)+).into_return()
            }
        }
    };
}

impl_typed_method!();
impl_typed_method!(1, (T1, 0));
impl_typed_method!(2, (T1, 0), (T2, 1));
impl_typed_method!(3, (T1, 0), (T2, 1), (T3, 2));
impl_typed_method!(4, (T1, 0), (T2, 1), (T3, 2), (T4, 3));
impl_typed_method!(5, (T1, 0), (T2, 1), (T3, 2), (T4, 3), (T5, 4));
impl_typed_method!(6, (T1, 0), (T2, 1), (T3, 2), (T4, 3), (T5, 4), (T6, 5));
