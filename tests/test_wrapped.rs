//! Integration tests for the eager value wrapper.
//!
//! The wrapper resolves members on the wrapped value first, falls back to
//! the helper registry, and chains persistently. A wrapper is also a valid
//! chain result: the recorder unwraps it through the raw-value capability.

extern crate replay;

use std::rc::Rc;

use pretty_assertions::assert_eq;

use replay::{
    constant, deferred, DynObject, EvalError, HelperRegistry, Recorder, Value, Wrapped,
};

// ============================================================================
// Test Objects
// ============================================================================

/// An object with one member of its own.
struct Speaker;

impl DynObject for Speaker {
    fn class_name(&self) -> &str {
        "Speaker"
    }

    fn get_property(&self, _name: &str) -> Option<Value> {
        None
    }

    fn call_method(&mut self, name: &str, _args: Vec<Value>) -> Option<Result<Value, EvalError>> {
        match name {
            "speak" => Some(Ok(Value::from("quack"))),
            _ => None,
        }
    }

    fn own_member_names(&self) -> Vec<String> {
        vec!["speak".to_string()]
    }
}

fn core_helpers() -> Rc<HelperRegistry> {
    Rc::new(HelperRegistry::with_core())
}

// ============================================================================
// Member Resolution
// ============================================================================

#[test]
fn test_own_member_wins_over_helper() {
    let mut registry = HelperRegistry::new();
    registry.register_boxed("speak", |_subject, _args| Ok(Value::from("moo")));

    let wrapped = Wrapped::new(Value::object(Speaker), Rc::new(registry));
    let result = wrapped.invoke_member("speak", vec![]).unwrap();
    assert_eq!(result.value(), &Value::from("quack"));
}

#[test]
fn test_helper_fallback_for_plain_values() {
    let wrapped = constant(" padded ", core_helpers());
    let result = wrapped.invoke_member("trim", vec![]).unwrap();
    assert_eq!(result.value(), &Value::from("padded"));
}

#[test]
fn test_helper_receives_subject_and_arguments() {
    let mut registry = HelperRegistry::new();
    registry.register_boxed("suffix", |subject, args| {
        let base = match subject {
            Value::String(s) => s,
            other => other.to_string(),
        };
        let tail = match args.get(0) {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        };
        Ok(Value::String(format!("{}{}", base, tail)))
    });

    let wrapped = constant("read", Rc::new(registry));
    let result = wrapped.invoke_member("suffix", vec!["me".into()]).unwrap();
    assert_eq!(result.value(), &Value::from("readme"));
}

#[test]
fn test_unknown_member_error() {
    let wrapped = constant("text", Rc::new(HelperRegistry::new()));
    let err = wrapped.invoke_member("nope", vec![]).unwrap_err();
    assert_eq!(
        err,
        EvalError::UnknownMember {
            name: "nope".to_string(),
            value: "\"text\"".to_string(),
        }
    );
}

// ============================================================================
// Eager Chaining
// ============================================================================

#[test]
fn test_chained_helper_calls() {
    let shouted = constant(" hi there ", core_helpers())
        .invoke_member("trim", vec![])
        .and_then(|w| w.invoke_member("toUpperCase", vec![]))
        .unwrap();
    assert_eq!(shouted.value(), &Value::from("HI THERE"));
}

#[test]
fn test_wrapper_chaining_is_persistent() {
    let base = constant("keep", core_helpers());
    let upper = base.invoke_member("toUpperCase", vec![]).unwrap();

    assert_eq!(base.value(), &Value::from("keep"));
    assert_eq!(upper.value(), &Value::from("KEEP"));
}

#[test]
fn test_index_access_through_wrapper() {
    let list = Value::list(vec!["a".into(), "b".into()]);
    let wrapped = Wrapped::new(list, core_helpers());

    let item = wrapped.index_get(1).unwrap();
    assert_eq!(item.value(), &Value::from("b"));

    assert!(wrapped.index_exists(0).unwrap());
    assert!(!wrapped.index_exists(5).unwrap());
}

#[test]
fn test_index_set_through_wrapper_shares_container() {
    let wrapped = Wrapped::new(Value::map(vec![]), core_helpers());
    let after = wrapped.index_set("k", "v").unwrap();
    let read = after.index_get("k").unwrap();
    assert_eq!(read.value(), &Value::from("v"));
}

#[test]
fn test_write_property_through_wrapper() {
    let wrapped = Wrapped::new(Value::map(vec![]), core_helpers());
    let after = wrapped.write_property("k", "v").unwrap();
    assert_eq!(after.read_property("k").unwrap().value(), &Value::from("v"));
}

#[test]
fn test_property_read_through_wrapper() {
    let record = Value::map(vec![("name", "ada".into())]);
    let wrapped = Wrapped::new(record, core_helpers());
    let name = wrapped.read_property("name").unwrap();
    assert_eq!(name.value(), &Value::from("ada"));
}

#[test]
fn test_list_helpers_through_wrapper() {
    let list = Value::list(vec![1.into(), 2.into(), 3.into()]);
    let wrapped = Wrapped::new(list, core_helpers());

    let count = wrapped.invoke_member("count", vec![]).unwrap();
    assert_eq!(count.value(), &Value::from(3));

    let joined = wrapped.invoke_member("join", vec!["-".into()]).unwrap();
    assert_eq!(joined.value(), &Value::from("1-2-3"));
}

#[test]
fn test_number_helpers_through_wrapper() {
    let wrapped = constant(Value::from(-4), core_helpers());
    let result = wrapped.invoke_member("abs", vec![]).unwrap();
    assert_eq!(result.value(), &Value::from(4));
}

// ============================================================================
// Wrapper as Chain Result
// ============================================================================

#[test]
fn test_recorder_unwraps_final_wrapper() {
    // The chain's transform yields a Wrapped; invoke substitutes the payload.
    let helpers = core_helpers();
    let chain = Recorder::with_initial(Wrapped::constructor_for(helpers));
    assert_eq!(chain.invoke("plain").unwrap(), Value::from("plain"));
}

#[test]
fn test_deferred_chain_through_wrapper_uses_helpers() {
    let chain = Recorder::with_initial(Wrapped::constructor_for(core_helpers()))
        .invoke_member("trim", vec![])
        .invoke_member("toUpperCase", vec![]);
    assert_eq!(chain.invoke(" hi ").unwrap(), Value::from("HI"));
}

#[test]
fn test_deferred_index_access_through_wrapper() {
    let chain = Recorder::with_initial(Wrapped::constructor_for(core_helpers())).index_get(1);
    let list = Value::list(vec![10.into(), 20.into(), 30.into()]);
    assert_eq!(chain.invoke(list).unwrap(), Value::from(20));
}

#[test]
fn test_deferred_chain_through_wrapper_reports_unknown_member() {
    let chain =
        Recorder::with_initial(Wrapped::constructor_for(core_helpers())).invoke_member("bogus", vec![]);
    let err = chain.invoke("value").unwrap_err();
    match err {
        EvalError::UnsupportedOperation { operation, .. } => {
            assert!(operation.contains("bogus"), "operation: {}", operation);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_plain_deferred_chain_never_consults_helpers() {
    // Without the wrapper seed, member dispatch uses only the value's own
    // capability set.
    let chain = deferred().invoke_member("trim", vec![]);
    assert!(chain.invoke(" hi ").is_err());
}
