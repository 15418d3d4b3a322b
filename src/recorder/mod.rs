//! Deferred-action recorder.
//!
//! A [`Recorder`] accumulates a chain of operations (member calls, property
//! reads, indexed access) against a value that does not exist yet. Building
//! the chain never evaluates anything; the chain is played later against a
//! concrete value with [`Recorder::invoke`].
//!
//! ```text
//! Build time:                       Replay time:
//!
//! deferred()                        invoke(value)
//!   .read_property("user")    →       1. apply initial transform
//!   .invoke_member("name", [])        2. fold steps left-to-right
//!                                     3. unwrap final result if it
//!                                        carries the raw-value capability
//! ```
//!
//! Every chain extension returns a *new* `Recorder`; the extended one is
//! unaffected and can keep being used, so partial chains are shareable:
//!
//! ```
//! use replay::{deferred, Value};
//!
//! let user = deferred().read_property("user");
//! let name = user.read_property("name");
//! let age = user.read_property("age");
//!
//! let record = Value::map(vec![(
//!     "user",
//!     Value::map(vec![("name", "ada".into()), ("age", 36.into())]),
//! )]);
//! assert_eq!(name.invoke(record.clone()).unwrap(), Value::from("ada"));
//! assert_eq!(age.invoke(record).unwrap(), Value::from(36));
//! ```
//!
//! The step list is the tagged representation of the chain: each recorded
//! operation is a [`Step`] variant carrying its name/key and arguments, and
//! replay pattern-matches the variant against the intermediate value's actual
//! capability set. Nothing about the target value is assumed while recording.

pub mod step;

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::ds::error::EvalError;
use crate::ds::object::unwrap_value;
use crate::ds::value::Value;
use crate::recorder::step::Step;

/// The initial transform of a chain, normalized once at construction.
///
/// Every accepted callable shape is folded into one of these variants, so
/// replay has a single `apply` call with no further special-casing.
#[derive(Clone)]
pub enum Transform {
    /// Pass the input through unchanged.
    Identity,
    /// Ignore the input and always yield the held value.
    Constant(Value),
    /// A plain mapping function.
    Infallible(Rc<dyn Fn(Value) -> Value>),
    /// A mapping function that may fail at replay time.
    Fallible(Rc<dyn Fn(Value) -> Result<Value, EvalError>>),
}

impl Transform {
    pub fn apply(&self, input: Value) -> Result<Value, EvalError> {
        match self {
            Transform::Identity => Ok(input),
            Transform::Constant(value) => Ok(value.clone()),
            Transform::Infallible(f) => Ok(f(input)),
            Transform::Fallible(f) => f(input),
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Identity => write!(f, "Transform::Identity"),
            Transform::Constant(value) => write!(f, "Transform::Constant({:?})", value),
            Transform::Infallible(_) => write!(f, "Transform::Infallible(..)"),
            Transform::Fallible(_) => write!(f, "Transform::Fallible(..)"),
        }
    }
}

/// Immutable recorder of not-yet-applied operations.
///
/// Cloning is cheap: the initial transform and the recorded steps are shared
/// behind `Rc`. Extending a chain copies the step list once.
#[derive(Clone)]
pub struct Recorder {
    initial: Transform,
    steps: Rc<Vec<Step>>,
}

impl Recorder {
    /// An empty recorder with the identity transform.
    pub fn new() -> Self {
        Self::with_transform(Transform::Identity)
    }

    /// A recorder seeded with a plain mapping function.
    pub fn with_initial<F>(initial: F) -> Self
    where
        F: Fn(Value) -> Value + 'static,
    {
        Self::with_transform(Transform::Infallible(Rc::new(initial)))
    }

    /// A recorder seeded with a fallible mapping function.
    pub fn with_fallible<F>(initial: F) -> Self
    where
        F: Fn(Value) -> Result<Value, EvalError> + 'static,
    {
        Self::with_transform(Transform::Fallible(Rc::new(initial)))
    }

    pub fn with_transform(initial: Transform) -> Self {
        Recorder {
            initial,
            steps: Rc::new(Vec::new()),
        }
    }

    /// Record a property read.
    pub fn read_property(&self, name: &str) -> Recorder {
        self.extend(Step::ReadProperty {
            name: name.to_string(),
        })
    }

    /// Record a property write. At replay time the step yields the container
    /// itself, so further operations keep applying to it.
    pub fn write_property(&self, name: &str, value: impl Into<Value>) -> Recorder {
        self.extend(Step::WriteProperty {
            name: name.to_string(),
            value: value.into(),
        })
    }

    /// Record an indexed get.
    pub fn index_get(&self, key: impl Into<Value>) -> Recorder {
        self.extend(Step::IndexGet { key: key.into() })
    }

    /// Record an indexed set. At replay time the step yields the container
    /// itself, so further operations keep applying to it.
    pub fn index_set(&self, key: impl Into<Value>, value: impl Into<Value>) -> Recorder {
        self.extend(Step::IndexSet {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Record an indexed delete. Yields the container at replay time.
    pub fn index_delete(&self, key: impl Into<Value>) -> Recorder {
        self.extend(Step::IndexDelete { key: key.into() })
    }

    /// Record an indexed existence check. Yields a boolean at replay time.
    pub fn index_exists(&self, key: impl Into<Value>) -> Recorder {
        self.extend(Step::IndexExists { key: key.into() })
    }

    /// Record a member invocation. The member is resolved on the intermediate
    /// value when the chain is played, not now.
    pub fn invoke_member(&self, name: &str, args: Vec<Value>) -> Recorder {
        self.extend(Step::InvokeMember {
            name: name.to_string(),
            args,
        })
    }

    /// Play the recorded chain against a concrete value.
    ///
    /// Applies the initial transform, then every recorded step in recording
    /// order. If the final result carries the raw-value capability, its
    /// payload is returned instead of the wrapper.
    pub fn invoke(&self, input: impl Into<Value>) -> Result<Value, EvalError> {
        trace!(steps = self.steps.len(), "playing recorded chain");
        let mut current = self.initial.apply(input.into())?;
        for step in self.steps.iter() {
            current = step.apply(current)?;
        }
        Ok(unwrap_value(current))
    }

    /// A plain closure view of this chain, for APIs that expect a bare
    /// callable.
    pub fn as_callable(&self) -> impl Fn(Value) -> Result<Value, EvalError> {
        let recorder = self.clone();
        move |value| recorder.invoke(value)
    }

    /// Number of recorded steps (the initial transform is not counted).
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    fn extend(&self, step: Step) -> Recorder {
        let mut steps = self.steps.as_ref().clone();
        steps.push(step);
        Recorder {
            initial: self.initial.clone(),
            steps: Rc::new(steps),
        }
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Recorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Recorder({:?}, {} step(s))",
            self.initial,
            self.steps.len()
        )
    }
}
