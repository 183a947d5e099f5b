//! Integration tests for the beckon attribute macro.
//!
//! These tests define the expected API surface. If tests fail,
//! the implementation should be fixed, not the tests.

#![cfg(feature = "macros")]

use std::cell::Cell;

use beckon::testing::CollectingSink;
#[allow(deprecated)]
use beckon::try_invoke;
use beckon::{ArgumentError, Value, can_invoke, try_invoke_silent};

// Test: #[beckon::methods] basic usage
struct Thermostat {
    degrees: Cell<i64>,
}

#[beckon::methods]
impl Thermostat {
    fn new(degrees: i64) -> Self {
        Self {
            degrees: Cell::new(degrees),
        }
    }

    fn target(&self) -> i64 {
        self.degrees.get()
    }

    fn set_target(&self, degrees: i64) -> i64 {
        let previous = self.degrees.get();
        self.degrees.set(degrees);
        previous
    }

    #[beckon(skip)]
    fn diagnostics(&self) -> &'static str {
        "ok"
    }
}

#[test]
fn test_methods_macro_generates_reflect() {
    let thermostat = Thermostat::new(19);

    assert!(can_invoke(Some(&thermostat), "target"));
    assert!(can_invoke(Some(&thermostat), "set_target"));

    let out = try_invoke_silent(Some(&thermostat), "target", &[]).unwrap();
    assert_eq!(out, Some(Value::Int(19)));
}

#[test]
fn test_constructor_is_not_a_member() {
    let thermostat = Thermostat::new(19);

    assert!(!can_invoke(Some(&thermostat), "new"));
    let out = try_invoke_silent(Some(&thermostat), "new", &[Value::Int(21)]).unwrap();
    assert_eq!(out, None);
}

#[test]
fn test_skipped_member_is_not_in_the_table() {
    let thermostat = Thermostat::new(19);

    assert!(!can_invoke(Some(&thermostat), "diagnostics"));
    // The method itself is untouched and stays directly callable.
    assert_eq!(thermostat.diagnostics(), "ok");
}

#[test]
fn test_typed_arguments_are_bound() {
    let thermostat = Thermostat::new(19);

    let previous = try_invoke_silent(Some(&thermostat), "set_target", &[Value::Int(23)]).unwrap();
    assert_eq!(previous, Some(Value::Int(19)));

    let now = try_invoke_silent(Some(&thermostat), "target", &[]).unwrap();
    assert_eq!(now, Some(Value::Int(23)));
}

#[test]
fn test_argument_errors_surface() {
    let thermostat = Thermostat::new(19);

    let err = try_invoke_silent(Some(&thermostat), "set_target", &[]).unwrap_err();
    let err = err.downcast::<ArgumentError>().unwrap();
    assert!(matches!(*err, ArgumentError::Count { expected: 1, got: 0 }));

    let err = try_invoke_silent(Some(&thermostat), "set_target", &[Value::Bool(true)]).unwrap_err();
    let err = err.downcast::<ArgumentError>().unwrap();
    assert!(matches!(*err, ArgumentError::Convert { index: 0, .. }));
}

// Test: member return types flow through the usual conversions
struct Relay {
    engaged: bool,
}

#[beckon::methods]
impl Relay {
    fn armed(&self) -> bool {
        self.engaged
    }

    fn trip(&self) -> Result<bool, std::io::Error> {
        if self.engaged {
            Ok(true)
        } else {
            Err(std::io::Error::other("relay is not armed"))
        }
    }

    fn label(&self, verbose: bool) -> Option<String> {
        verbose.then(|| "relay".to_string())
    }
}

#[test]
fn test_member_errors_pass_through() {
    let relay = Relay { engaged: false };
    assert!(can_invoke(Some(&relay), "armed"));

    let err = try_invoke_silent(Some(&relay), "trip", &[]).unwrap_err();
    let io = err.downcast::<std::io::Error>().unwrap();
    assert_eq!(io.to_string(), "relay is not armed");

    let ok = try_invoke_silent(Some(&Relay { engaged: true }), "trip", &[]).unwrap();
    assert_eq!(ok, Some(Value::Bool(true)));
}

#[test]
fn test_optional_returns_map_to_null() {
    let relay = Relay { engaged: true };

    let none = try_invoke_silent(Some(&relay), "label", &[Value::Bool(false)]).unwrap();
    assert_eq!(none, Some(Value::Null));

    let some = try_invoke_silent(Some(&relay), "label", &[Value::Bool(true)]).unwrap();
    assert_eq!(some, Some(Value::Str("relay".to_string())));
}

// Test: #[beckon(skip)] is the escape hatch for receivers the table cannot hold
struct Winch {
    count: i64,
}

#[beckon::methods]
impl Winch {
    fn turns(&self) -> i64 {
        self.count
    }

    #[beckon(skip)]
    fn crank(&mut self) {
        self.count += 1;
    }
}

#[test]
fn test_skip_allows_mut_receivers() {
    let mut winch = Winch { count: 0 };
    winch.crank();
    winch.crank();

    assert!(!can_invoke(Some(&winch), "crank"));
    let out = try_invoke_silent(Some(&winch), "turns", &[]).unwrap();
    assert_eq!(out, Some(Value::Int(2)));
}

#[test]
#[allow(deprecated)]
fn test_deprecated_entry_point_sees_generated_table() {
    let collector = CollectingSink::new();
    let thermostat = Thermostat::new(19);

    let out = try_invoke(&collector, Some(&thermostat), "target", &[]).unwrap();
    assert_eq!(out, Some(Value::Int(19)));
    assert_eq!(collector.ids(), vec!["beckon.try-invoke"]);
}
