//! Core helper packs.
//!
//! Fallback members for plain values, registered by name into a
//! [`HelperRegistry`](crate::registry::HelperRegistry). Each pack module
//! exposes a `register` function; packs can also be enabled by name through
//! the builder or a [`HelperConfig`](crate::registry::config::HelperConfig).

pub mod list;
pub mod number;
pub mod string;

use crate::ds::value::Value;
use crate::registry::HelperRegistry;

lazy_static! {
    static ref CORE_PACKS: Vec<&'static str> = vec!["string", "list", "number"];
}

/// Names of the helper packs shipped with the crate.
pub fn core_pack_names() -> &'static [&'static str] {
    &CORE_PACKS
}

/// Register a single pack by name. Returns `false` for an unknown name.
pub fn register_pack(name: &str, registry: &mut HelperRegistry) -> bool {
    match name {
        "string" => string::register(registry),
        "list" => list::register(registry),
        "number" => number::register(registry),
        _ => return false,
    }
    true
}

/// Register every core pack.
pub fn register_core_helpers(registry: &mut HelperRegistry) {
    for pack in CORE_PACKS.iter() {
        register_pack(pack, registry);
    }
}

/// Bare text of a value: strings render without surrounding quotes.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
