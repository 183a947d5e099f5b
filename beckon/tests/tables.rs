use std::sync::LazyLock;

use beckon::testing::CountingMethod;
use beckon::{
    BoxError, Method, MethodLookup, MethodTable, Reflect, TableError, Value, can_invoke,
    try_invoke_silent,
};

struct Gauge {
    level: i64,
}

impl Gauge {
    fn read(&self) -> i64 {
        self.level
    }

    fn above(&self, threshold: i64) -> bool {
        self.level > threshold
    }
}

static GAUGE_METHODS: LazyLock<MethodTable<Gauge>> = LazyLock::new(|| {
    MethodTable::builder()
        .register_fn("read", Gauge::read)
        .unwrap()
        .register_fn("above", Gauge::above)
        .unwrap()
        .build()
});

impl Reflect for Gauge {
    type Methods = MethodTable<Gauge>;

    fn methods(&self) -> &MethodTable<Gauge> {
        &GAUGE_METHODS
    }
}

#[test]
fn test_hand_built_table_probes_and_invokes() {
    let gauge = Gauge { level: 7 };

    assert!(can_invoke(Some(&gauge), "read"));
    assert!(can_invoke(Some(&gauge), "above"));
    assert!(!can_invoke(Some(&gauge), "level"));

    let read = try_invoke_silent(Some(&gauge), "read", &[]).unwrap();
    assert_eq!(read, Some(Value::Int(7)));

    let above = try_invoke_silent(Some(&gauge), "above", &[Value::Int(5)]).unwrap();
    assert_eq!(above, Some(Value::Bool(true)));
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let result = MethodTable::<Gauge>::builder()
        .register_fn("read", Gauge::read)
        .unwrap()
        .register_fn("read", Gauge::read);

    assert!(matches!(result, Err(TableError::DuplicateName(name)) if name == "read"));
}

#[test]
fn test_counting_method_through_invocation() {
    struct Probe {
        methods: MethodTable<Probe>,
    }

    impl Reflect for Probe {
        type Methods = MethodTable<Probe>;

        fn methods(&self) -> &MethodTable<Probe> {
            &self.methods
        }
    }

    let counter = CountingMethod::new();
    let subject = Probe {
        methods: MethodTable::builder()
            .register("poke", counter.clone())
            .unwrap()
            .build(),
    };

    assert_eq!(counter.count(), 0);
    let out = try_invoke_silent(Some(&subject), "poke", &[]).unwrap();
    assert_eq!(out, Some(Value::Null));
    try_invoke_silent(Some(&subject), "poke", &[]).unwrap();
    assert_eq!(counter.count(), 2);

    // A name that does not resolve never reaches the method.
    try_invoke_silent(Some(&subject), "prod", &[]).unwrap();
    assert_eq!(counter.count(), 2);
}

/// A lookup that claims every name, resolving each to the same method.
struct WildcardLookup {
    fallback: Box<dyn Method<Chameleon>>,
}

impl MethodLookup<Chameleon> for WildcardLookup {
    fn find(&self, _name: &str) -> Option<&dyn Method<Chameleon>> {
        Some(self.fallback.as_ref())
    }
}

struct Chameleon {
    lookup: WildcardLookup,
}

impl Chameleon {
    fn new() -> Self {
        Self {
            lookup: WildcardLookup {
                fallback: Box::new(|_: &Chameleon, args: &[Value]| -> Result<Value, BoxError> {
                    Ok(Value::Int(args.len() as i64))
                }),
            },
        }
    }
}

impl Reflect for Chameleon {
    type Methods = WildcardLookup;

    fn methods(&self) -> &WildcardLookup {
        &self.lookup
    }
}

#[test]
fn test_custom_lookup_answers_every_name() {
    let subject = Chameleon::new();

    assert!(can_invoke(Some(&subject), "anything"));
    assert!(can_invoke(Some(&subject), "whatsoever"));

    let out = try_invoke_silent(Some(&subject), "arity", &[Value::Int(1), Value::Int(2)]).unwrap();
    assert_eq!(out, Some(Value::Int(2)));
}
