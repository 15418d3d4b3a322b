//! Incremental registry construction with validation.

use crate::ds::error::{EvalError, RegistryError};
use crate::ds::value::Value;
use crate::registry::{HelperRegistry, NativeHelperFn};

/// Builder collecting helpers before producing a [`HelperRegistry`].
///
/// Unlike direct registration on a registry, builder methods validate their
/// input: empty names and unresolvable alias targets are rejected with
/// [`RegistryError::InvalidRegistration`], unknown pack names with
/// [`RegistryError::UnknownPack`].
#[derive(Debug)]
pub struct HelperRegistryBuilder {
    registry: HelperRegistry,
}

impl HelperRegistryBuilder {
    pub fn new() -> Self {
        HelperRegistryBuilder {
            registry: HelperRegistry::new(),
        }
    }

    /// Register a helper function under the given name.
    pub fn register(mut self, name: &str, helper: NativeHelperFn) -> Result<Self, RegistryError> {
        Self::validate_name(name)?;
        self.registry.register(name, helper);
        Ok(self)
    }

    /// Register a closure helper under the given name.
    pub fn register_boxed<F>(mut self, name: &str, helper: F) -> Result<Self, RegistryError>
    where
        F: Fn(Value, Vec<Value>) -> Result<Value, EvalError> + 'static,
    {
        Self::validate_name(name)?;
        self.registry.register_boxed(name, helper);
        Ok(self)
    }

    /// Bulk-import one of the named helper packs shipped with the crate.
    pub fn register_pack(mut self, pack: &str) -> Result<Self, RegistryError> {
        if !crate::helpers::register_pack(pack, &mut self.registry) {
            return Err(RegistryError::UnknownPack(pack.to_string()));
        }
        Ok(self)
    }

    /// Make an already-registered helper reachable under a second name.
    pub fn alias(mut self, alias: &str, target: &str) -> Result<Self, RegistryError> {
        Self::validate_name(alias)?;
        let helper = match self.registry.lookup(target) {
            Some(helper) => helper.clone(),
            None => {
                return Err(RegistryError::InvalidRegistration(format!(
                    "alias target \"{}\" is not registered",
                    target
                )))
            }
        };
        self.registry.insert(alias.to_string(), helper);
        Ok(self)
    }

    pub fn build(self) -> HelperRegistry {
        self.registry
    }

    fn validate_name(name: &str) -> Result<(), RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidRegistration(
                "helper name is empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for HelperRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
