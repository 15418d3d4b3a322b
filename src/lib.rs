//! # replay - record now, play later
//!
//! A small fluent library for deferring computation on a value that does not
//! exist yet, plus an eager wrapper that records and replays access on a
//! concrete value with helper-registry fallback.
//!
//! ## Quick Start
//!
//! ### Deferring a chain
//!
//! A [`Recorder`] accumulates operations without a target value. Nothing is
//! evaluated until the chain is played against a concrete value:
//!
//! ```
//! use replay::{deferred, Value};
//!
//! let second = deferred().index_get(1);
//! let list = Value::list(vec![10.into(), 20.into(), 30.into()]);
//!
//! assert_eq!(second.invoke(list).unwrap(), Value::from(20));
//! ```
//!
//! ### A chain as a plain callable
//!
//! [`Recorder::as_callable`] turns a chain into a bare closure for APIs that
//! expect one:
//!
//! ```
//! use replay::{deferred, Value};
//!
//! let records = vec![
//!     Value::map(vec![("year", 1977.into())]),
//!     Value::map(vec![("year", 1984.into())]),
//! ];
//!
//! let years: Vec<Value> = records
//!     .into_iter()
//!     .map(deferred().read_property("year").as_callable())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(years, vec![Value::from(1977), Value::from(1984)]);
//! ```
//!
//! ### Eager wrapping with helper fallback
//!
//! [`constant`] wraps a concrete value immediately. Members the value itself
//! does not provide are resolved through a [`HelperRegistry`]:
//!
//! ```
//! use std::rc::Rc;
//! use replay::{constant, HelperRegistry, Value};
//!
//! let helpers = Rc::new(HelperRegistry::with_core());
//!
//! let shouted = constant(" hi there ", helpers)
//!     .invoke_member("trim", vec![])
//!     .and_then(|w| w.invoke_member("toUpperCase", vec![]))
//!     .unwrap();
//!
//! assert_eq!(shouted.value(), &Value::from("HI THERE"));
//! ```
//!
//! ### Deferred chains through the wrapper
//!
//! Seeding a recorder with [`Wrapped::constructor_for`] routes every recorded
//! member call through the eager wrapper, helper fallback included, while
//! `invoke` still returns the raw payload:
//!
//! ```
//! use std::rc::Rc;
//! use replay::{HelperRegistry, Recorder, Value, Wrapped};
//!
//! let helpers = Rc::new(HelperRegistry::with_core());
//!
//! let chain = Recorder::with_initial(Wrapped::constructor_for(helpers))
//!     .invoke_member("trim", vec![])
//!     .invoke_member("toUpperCase", vec![]);
//!
//! assert_eq!(chain.invoke(" hi ").unwrap(), Value::from("HI"));
//! ```
//!
//! ## Architecture
//!
//! - **[`ds`]** - dynamic values, the object capability protocol, errors
//! - **[`recorder`]** - the deferred-action recorder and its step model
//! - **[`wrapped`]** - the eager value wrapper
//! - **[`registry`]** - helper registry, builder, and TOML configuration
//! - **[`helpers`]** - core helper packs (string, list, number)
//!
//! Chains are immutable: every extension returns a new [`Recorder`], and the
//! extended one keeps working unchanged. Failures surface only at `invoke`
//! time, because a chain records intent without touching any real value.

#[macro_use]
extern crate lazy_static;

pub mod ds;
pub mod helpers;
pub mod recorder;
pub mod registry;
pub mod wrapped;

use std::rc::Rc;

pub use crate::ds::error::{EvalError, RegistryError};
pub use crate::ds::object::{unwrap_value, DynObject, ObjectType};
pub use crate::ds::value::{NumberType, Value};
pub use crate::recorder::step::Step;
pub use crate::recorder::{Recorder, Transform};
pub use crate::registry::builder::HelperRegistryBuilder;
pub use crate::registry::config::HelperConfig;
pub use crate::registry::{HelperFn, HelperRegistry, NativeHelperFn};
pub use crate::wrapped::Wrapped;

/// An empty recorder: plays back whatever it is given.
pub fn deferred() -> Recorder {
    Recorder::new()
}

/// A recorder seeded with an initial mapping function.
pub fn deferred_with<F>(initial: F) -> Recorder
where
    F: Fn(Value) -> Value + 'static,
{
    Recorder::with_initial(initial)
}

/// A recorder that ignores its input and always starts from `value`, for
/// deferring operations on an object known up front.
pub fn lazy_wrap(value: impl Into<Value>) -> Recorder {
    Recorder::with_transform(Transform::Constant(value.into()))
}

/// An eager wrapper around a concrete value, consulting `helpers` for members
/// the value itself does not provide.
pub fn constant(value: impl Into<Value>, helpers: Rc<HelperRegistry>) -> Wrapped {
    Wrapped::new(value, helpers)
}
