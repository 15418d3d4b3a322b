//! Runtime capability surface for user-defined objects.
//!
//! A chain never knows what it will be played against, so every operation on
//! an object value is resolved here at evaluation time. Each capability has a
//! default "absent" implementation; an object opts in by overriding the
//! methods it supports.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ds::error::EvalError;
use crate::ds::value::Value;

pub type ObjectType = Rc<RefCell<dyn DynObject>>;

/// Dynamic object protocol.
///
/// `None` from any capability method means "this object does not support the
/// operation", which surfaces as [`EvalError::UnsupportedOperation`] when a
/// replayed step hits it.
pub trait DynObject {
    /// Short class name used in value descriptions.
    fn class_name(&self) -> &str;

    /// Read a named property. `None` when the property is not exposed.
    fn get_property(&self, name: &str) -> Option<Value>;

    /// Write a named property. Returns `false` when unsupported.
    fn set_property(&mut self, _name: &str, _value: Value) -> bool {
        false
    }

    /// Invoke a member by name. `None` when the member does not resolve on
    /// this object.
    fn call_method(&mut self, name: &str, args: Vec<Value>) -> Option<Result<Value, EvalError>>;

    fn index_get(&self, _key: &Value) -> Option<Result<Value, EvalError>> {
        None
    }

    fn index_set(&mut self, _key: Value, _value: Value) -> Option<Result<(), EvalError>> {
        None
    }

    fn index_delete(&mut self, _key: &Value) -> Option<Result<(), EvalError>> {
        None
    }

    fn index_exists(&self, _key: &Value) -> Option<Result<bool, EvalError>> {
        None
    }

    /// The raw-value capability. An object returning `Some` here is treated
    /// as a wrapper: when it ends up as the final result of a replayed chain,
    /// the underlying payload is substituted for it.
    fn wrapped_value(&self) -> Option<Value> {
        None
    }

    /// Member names this object exposes, for error descriptions.
    fn own_member_names(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Substitute a wrapper's payload for the wrapper itself. Non-wrapper values
/// pass through unchanged.
pub fn unwrap_value(value: Value) -> Value {
    if let Value::Object(object) = &value {
        if let Some(raw) = object.borrow().wrapped_value() {
            return raw;
        }
    }
    value
}
