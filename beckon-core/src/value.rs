//! Dynamic values passed across the invocation boundary.
//!
//! [`Value`] is the loosely typed currency of the framework: call arguments
//! arrive as `&[Value]` and member results leave as `Value`. The conversion
//! traits ([`FromValue`], [`IntoReturn`](crate::IntoReturn)) bridge between
//! this dynamic layer and the statically typed members behind it.

use std::convert::Infallible;
use std::fmt;

use thiserror::Error;

/// A dynamically typed value.
///
/// `Null` doubles as the "nothing useful came back" result: members that
/// return `()` or `Option::None` surface as `Value::Null` to the caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// An owned string.
    Str(String),
    /// An ordered list of values.
    List(Vec<Value>),
}

impl Value {
    /// A short name for the value's runtime type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
        }
    }

    /// Returns true if this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean payload, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric payload as `f64`. Integers widen losslessly.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list payload, if any.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

// Common conversions into Value

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Error type for failed [`FromValue`] conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected}, found {found}")]
pub struct TypeMismatch {
    /// The type the member's parameter requires.
    pub expected: &'static str,
    /// The type the caller actually supplied.
    pub found: &'static str,
}

impl TypeMismatch {
    /// Create a mismatch error for `value` against an expected type name.
    pub fn new(expected: &'static str, value: &Value) -> Self {
        Self {
            expected,
            found: value.type_name(),
        }
    }
}

/// A trait for converting a borrowed [`Value`] into a typed argument.
///
/// Conversions are strict: an `Int` does not become a `Bool`, a `Str` does
/// not become an `Int`. The one deliberate widening is `Int` to `f64`,
/// which is lossless for the integers a member realistically receives.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be extracted from a `Value`",
    label = "missing `FromValue` implementation",
    note = "Implement `FromValue` so this type can appear as a typed member parameter."
)]
pub trait FromValue: Sized {
    /// The error type returned if conversion fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Attempt to convert the given value into `Self`.
    fn from_value(value: &Value) -> Result<Self, Self::Error>;
}

impl FromValue for Value {
    type Error = Infallible;

    fn from_value(value: &Value) -> Result<Self, Self::Error> {
        Ok(value.clone())
    }
}

impl FromValue for bool {
    type Error = TypeMismatch;

    fn from_value(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| TypeMismatch::new("bool", value))
    }
}

impl FromValue for i64 {
    type Error = TypeMismatch;

    fn from_value(value: &Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| TypeMismatch::new("int", value))
    }
}

impl FromValue for f64 {
    type Error = TypeMismatch;

    fn from_value(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_float()
            .ok_or_else(|| TypeMismatch::new("float", value))
    }
}

impl FromValue for String {
    type Error = TypeMismatch;

    fn from_value(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| TypeMismatch::new("str", value))
    }
}

impl FromValue for Vec<Value> {
    type Error = TypeMismatch;

    fn from_value(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_list()
            .map(<[Value]>::to_vec)
            .ok_or_else(|| TypeMismatch::new("list", value))
    }
}

/// `Null` maps to `None`; anything else must convert to `T`.
impl<T: FromValue> FromValue for Option<T> {
    type Error = T::Error;

    fn from_value(value: &Value) -> Result<Self, Self::Error> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_value(value).map(Some)
    }
}
