use beckon::{MethodTable, Reflect, Value};
use std::cell::Cell;
use std::sync::LazyLock;

// ============================================================================
// Timestamps
// ============================================================================

/// 2013-03-15 as unix milliseconds.
pub const MARCH_15_2013: i64 = 1_363_320_000_000;

/// 2014-03-15 as unix milliseconds.
pub const MARCH_15_2014: i64 = 1_394_856_000_000;

// ============================================================================
// Test Subjects
// ============================================================================

/// A subject with one callable member (`bar`) and one null data member
/// (`baz`). The member set mirrors the classic probe example: `bar` is
/// callable, `baz` is present but not callable, `bat` does not exist.
#[derive(Default)]
pub struct Foo;

impl Foo {
    pub fn bar(&self) -> bool {
        true
    }
}

impl Reflect for Foo {
    type Methods = MethodTable<Self>;

    fn methods(&self) -> &Self::Methods {
        static TABLE: LazyLock<MethodTable<Foo>> = LazyLock::new(|| {
            MethodTable::builder()
                .register_fn("bar", |f: &Foo| f.bar())
                .expect("fresh table")
                .build()
        });
        &TABLE
    }

    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "baz" => Some(Value::Null),
            _ => None,
        }
    }
}

/// A date-like subject with interior mutability, so `set_full_year` can
/// mutate through the `&self` receiver the dispatch layer hands out.
///
/// Years are counted as uniform 365-day spans; the fixture cares about
/// arithmetic, not calendars.
pub struct Clock {
    year: Cell<i64>,
    millis: Cell<i64>,
}

const MS_PER_YEAR: i64 = 365 * 24 * 60 * 60 * 1000;

impl Clock {
    /// A clock pinned to 2013-03-15.
    pub fn march_2013() -> Self {
        Self {
            year: Cell::new(2013),
            millis: Cell::new(MARCH_15_2013),
        }
    }

    pub fn get_time(&self) -> i64 {
        self.millis.get()
    }

    /// Move the clock to the same instant in another year and return the
    /// new timestamp.
    pub fn set_full_year(&self, year: i64) -> i64 {
        let delta = year - self.year.get();
        self.millis.set(self.millis.get() + delta * MS_PER_YEAR);
        self.year.set(year);
        self.millis.get()
    }
}

impl Reflect for Clock {
    type Methods = MethodTable<Self>;

    fn methods(&self) -> &Self::Methods {
        static TABLE: LazyLock<MethodTable<Clock>> = LazyLock::new(|| {
            MethodTable::builder()
                .register_fn("get_time", |c: &Clock| c.get_time())
                .expect("fresh table")
                .register_fn("set_full_year", |c: &Clock, year: i64| c.set_full_year(year))
                .expect("fresh table")
                .build()
        });
        &TABLE
    }
}

/// A subject whose only member always fails, for error pass-through tests.
pub struct Faulty;

impl Reflect for Faulty {
    type Methods = MethodTable<Self>;

    fn methods(&self) -> &Self::Methods {
        static TABLE: LazyLock<MethodTable<Faulty>> = LazyLock::new(|| {
            MethodTable::builder()
                .register_fn("detonate", |_: &Faulty| -> Result<i64, std::io::Error> {
                    Err(std::io::Error::other("intentional failure"))
                })
                .expect("fresh table")
                .build()
        });
        &TABLE
    }
}
