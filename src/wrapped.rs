//! Eager value wrapper.
//!
//! [`Wrapped`] wraps one concrete value immediately, with no deferral. On
//! member invocation the wrapped value's own capability set is consulted
//! first; when it does not resolve the name, the helper registry is asked,
//! and the helper runs with the wrapped value as its leading subject
//! argument. Every access yields a *new* wrapper around the result, so
//! wrappers chain persistently just like recorders do, only eagerly.
//!
//! A `Wrapped` is itself a [`DynObject`] carrying the raw-value capability:
//! when one ends up as the final result of a replayed chain,
//! [`Recorder::invoke`](crate::recorder::Recorder::invoke) returns its
//! payload instead of the wrapper.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::ds::error::EvalError;
use crate::ds::object::{DynObject, ObjectType};
use crate::ds::value::Value;
use crate::recorder::step::Step;
use crate::registry::HelperRegistry;

/// Immutable eager wrapper around a concrete value.
#[derive(Clone)]
pub struct Wrapped {
    value: Value,
    helpers: Rc<HelperRegistry>,
}

impl Wrapped {
    pub fn new(value: impl Into<Value>, helpers: Rc<HelperRegistry>) -> Self {
        Wrapped {
            value: value.into(),
            helpers,
        }
    }

    /// The underlying raw value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Read a named property off the wrapped value.
    pub fn read_property(&self, name: &str) -> Result<Wrapped, EvalError> {
        let step = Step::ReadProperty {
            name: name.to_string(),
        };
        Ok(self.derive(step.apply(self.value.clone())?))
    }

    /// Write a named property on the wrapped value.
    pub fn write_property(
        &self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<Wrapped, EvalError> {
        let step = Step::WriteProperty {
            name: name.to_string(),
            value: value.into(),
        };
        Ok(self.derive(step.apply(self.value.clone())?))
    }

    pub fn index_get(&self, key: impl Into<Value>) -> Result<Wrapped, EvalError> {
        let step = Step::IndexGet { key: key.into() };
        Ok(self.derive(step.apply(self.value.clone())?))
    }

    pub fn index_set(
        &self,
        key: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<Wrapped, EvalError> {
        let step = Step::IndexSet {
            key: key.into(),
            value: value.into(),
        };
        Ok(self.derive(step.apply(self.value.clone())?))
    }

    pub fn index_delete(&self, key: impl Into<Value>) -> Result<Wrapped, EvalError> {
        let step = Step::IndexDelete { key: key.into() };
        Ok(self.derive(step.apply(self.value.clone())?))
    }

    /// Indexed existence check. Unlike the other accessors this answers
    /// directly; a boolean needs no further chaining.
    pub fn index_exists(&self, key: impl Into<Value>) -> Result<bool, EvalError> {
        let step = Step::IndexExists { key: key.into() };
        match step.apply(self.value.clone())? {
            Value::Boolean(exists) => Ok(exists),
            _ => Ok(false),
        }
    }

    /// Invoke a member: the value's own capability set first, then the
    /// helper registry with the wrapped value prepended as subject.
    pub fn invoke_member(&self, name: &str, args: Vec<Value>) -> Result<Wrapped, EvalError> {
        if let Value::Object(object) = &self.value {
            let attempted = object.borrow_mut().call_method(name, args.clone());
            if let Some(result) = attempted {
                return Ok(self.derive(result?));
            }
        }

        if let Some(helper) = self.helpers.lookup(name) {
            let result = helper.call(self.value.clone(), args)?;
            return Ok(self.derive(result));
        }

        Err(EvalError::UnknownMember {
            name: name.to_string(),
            value: self.value.describe(),
        })
    }

    /// A transform that lifts values into wrappers bound to the given
    /// registry. Seeding a [`Recorder`](crate::recorder::Recorder) with it
    /// routes every recorded member call through the wrapper, helper
    /// fallback included, while `invoke` still returns the raw payload.
    pub fn constructor_for(helpers: Rc<HelperRegistry>) -> impl Fn(Value) -> Value {
        move |value| Wrapped::new(value, helpers.clone()).into_object()
    }

    /// This wrapper as an object value carrying the raw-value capability.
    pub fn into_object(self) -> Value {
        let handle: ObjectType = Rc::new(RefCell::new(self));
        Value::Object(handle)
    }

    fn derive(&self, value: Value) -> Wrapped {
        Wrapped {
            value,
            helpers: self.helpers.clone(),
        }
    }
}

impl DynObject for Wrapped {
    fn class_name(&self) -> &str {
        "wrapped"
    }

    fn get_property(&self, name: &str) -> Option<Value> {
        match Wrapped::read_property(self, name) {
            Ok(next) => Some(next.into_object()),
            Err(_) => None,
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> bool {
        Wrapped::write_property(self, name, value).is_ok()
    }

    fn call_method(&mut self, name: &str, args: Vec<Value>) -> Option<Result<Value, EvalError>> {
        match Wrapped::invoke_member(self, name, args) {
            Ok(next) => Some(Ok(next.into_object())),
            Err(EvalError::UnknownMember { .. }) => None,
            Err(other) => Some(Err(other)),
        }
    }

    fn index_get(&self, key: &Value) -> Option<Result<Value, EvalError>> {
        match Wrapped::index_get(self, key.clone()) {
            Ok(next) => Some(Ok(next.into_object())),
            Err(_) => None,
        }
    }

    fn index_set(&mut self, key: Value, value: Value) -> Option<Result<(), EvalError>> {
        match Wrapped::index_set(self, key, value) {
            Ok(_) => Some(Ok(())),
            Err(_) => None,
        }
    }

    fn index_delete(&mut self, key: &Value) -> Option<Result<(), EvalError>> {
        match Wrapped::index_delete(self, key.clone()) {
            Ok(_) => Some(Ok(())),
            Err(_) => None,
        }
    }

    fn index_exists(&self, key: &Value) -> Option<Result<bool, EvalError>> {
        match Wrapped::index_exists(self, key.clone()) {
            Ok(exists) => Some(Ok(exists)),
            Err(_) => None,
        }
    }

    fn wrapped_value(&self) -> Option<Value> {
        Some(self.value.clone())
    }

    fn own_member_names(&self) -> Vec<String> {
        self.helpers.helper_names()
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrapped({:?})", self.value)
    }
}
