//! Helper registry.
//!
//! A registry maps member names to fallback callables. The eager
//! [`Wrapped`](crate::wrapped::Wrapped) wrapper consults it when the wrapped
//! value's own capability set does not resolve a requested member; the helper
//! is then invoked with the wrapped value as the leading subject argument.
//!
//! Registries are instance-scoped: construct one explicitly and pass it
//! (usually behind `Rc`) to every wrapper that should see it. There is no
//! process-wide default.

pub mod builder;
pub mod config;

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::ds::error::{EvalError, RegistryError};
use crate::ds::value::Value;

/// Function signature for compiled-in helpers. Helpers receive the subject
/// value first, then the caller-supplied arguments.
pub type NativeHelperFn = fn(Value, Vec<Value>) -> Result<Value, EvalError>;

/// A registered helper: a direct function pointer or a boxed closure.
pub enum HelperFn {
    /// Direct function pointer, zero overhead for compiled-in helpers.
    Native(NativeHelperFn),
    /// Caller-provided closure.
    Boxed(Rc<dyn Fn(Value, Vec<Value>) -> Result<Value, EvalError>>),
}

impl HelperFn {
    /// Execute this helper against a subject value.
    pub fn call(&self, subject: Value, args: Vec<Value>) -> Result<Value, EvalError> {
        match self {
            HelperFn::Native(f) => f(subject, args),
            HelperFn::Boxed(f) => f(subject, args),
        }
    }
}

impl std::fmt::Debug for HelperFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HelperFn::Native(_) => f.write_str("HelperFn::Native(..)"),
            HelperFn::Boxed(_) => f.write_str("HelperFn::Boxed(..)"),
        }
    }
}

impl Clone for HelperFn {
    fn clone(&self) -> Self {
        match self {
            HelperFn::Native(f) => HelperFn::Native(*f),
            HelperFn::Boxed(f) => HelperFn::Boxed(f.clone()),
        }
    }
}

/// Name → callable mapping consulted as a member-resolution fallback.
#[derive(Debug)]
pub struct HelperRegistry {
    helpers: HashMap<String, HelperFn>,
}

impl HelperRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        HelperRegistry {
            helpers: HashMap::new(),
        }
    }

    /// Create a registry with the core helper packs (string, list, number).
    pub fn with_core() -> Self {
        let mut registry = Self::new();
        crate::helpers::register_core_helpers(&mut registry);
        registry
    }

    /// Build a registry from a parsed helper configuration.
    pub fn from_config(config: &config::HelperConfig) -> Result<Self, RegistryError> {
        let mut builder = builder::HelperRegistryBuilder::new();
        for pack in &config.packs {
            builder = builder.register_pack(pack)?;
        }
        for (alias, target) in &config.aliases {
            builder = builder.alias(alias, target)?;
        }
        Ok(builder.build())
    }

    /// Register a helper under the given name. A later registration under the
    /// same name replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, helper: NativeHelperFn) {
        self.insert(name.into(), HelperFn::Native(helper));
    }

    /// Register a closure helper under the given name.
    pub fn register_boxed<F>(&mut self, name: impl Into<String>, helper: F)
    where
        F: Fn(Value, Vec<Value>) -> Result<Value, EvalError> + 'static,
    {
        self.insert(name.into(), HelperFn::Boxed(Rc::new(helper)));
    }

    /// Look up a helper by name.
    pub fn lookup(&self, name: &str) -> Option<&HelperFn> {
        self.helpers.get(name)
    }

    pub fn has_helper(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Registered helper names, sorted.
    pub fn helper_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.helpers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Drop every registered helper.
    pub fn clear(&mut self) {
        self.helpers.clear();
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    pub(crate) fn insert(&mut self, name: String, helper: HelperFn) {
        debug!(helper = name.as_str(), "registered helper");
        self.helpers.insert(name, helper);
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::with_core()
    }
}
