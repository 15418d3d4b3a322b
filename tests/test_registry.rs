//! Integration tests for the helper registry, builder, and configuration.

extern crate replay;

use std::io::Write;

use pretty_assertions::assert_eq;

use replay::{
    EvalError, HelperConfig, HelperRegistry, HelperRegistryBuilder, RegistryError, Value,
};

fn shout(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    match subject {
        Value::String(s) => Ok(Value::String(s.to_uppercase())),
        other => Ok(other),
    }
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_empty_registry() {
    let registry = HelperRegistry::new();
    assert!(registry.is_empty());
    assert!(!registry.has_helper("trim"));
    assert!(registry.lookup("trim").is_none());
}

#[test]
fn test_with_core_registers_packs() {
    let registry = HelperRegistry::with_core();
    for name in &["trim", "toUpperCase", "count", "join", "abs", "round"] {
        assert!(registry.has_helper(name), "missing core helper {}", name);
    }
}

#[test]
fn test_register_and_call() {
    let mut registry = HelperRegistry::new();
    registry.register("shout", shout);

    let helper = registry.lookup("shout").unwrap();
    let result = helper.call(Value::from("hi"), vec![]).unwrap();
    assert_eq!(result, Value::from("HI"));
}

#[test]
fn test_later_registration_replaces_earlier() {
    let mut registry = HelperRegistry::new();
    registry.register("shout", shout);
    registry.register_boxed("shout", |_subject, _args| Ok(Value::from("quiet")));

    let helper = registry.lookup("shout").unwrap();
    let result = helper.call(Value::from("hi"), vec![]).unwrap();
    assert_eq!(result, Value::from("quiet"));
}

#[test]
fn test_helper_names_are_sorted() {
    let mut registry = HelperRegistry::new();
    registry.register("zeta", shout);
    registry.register("alpha", shout);
    assert_eq!(
        registry.helper_names(),
        vec!["alpha".to_string(), "zeta".to_string()]
    );
}

#[test]
fn test_clear_empties_registry() {
    let mut registry = HelperRegistry::with_core();
    assert!(!registry.is_empty());
    registry.clear();
    assert!(registry.is_empty());
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_registers_helpers_and_packs() {
    let registry = HelperRegistryBuilder::new()
        .register_pack("string")
        .unwrap()
        .register("shout", shout)
        .unwrap()
        .build();

    assert!(registry.has_helper("trim"));
    assert!(registry.has_helper("shout"));
    assert!(!registry.has_helper("count"));
}

#[test]
fn test_builder_rejects_empty_name() {
    let err = HelperRegistryBuilder::new().register("  ", shout).unwrap_err();
    match err {
        RegistryError::InvalidRegistration(msg) => assert!(msg.contains("empty")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_builder_rejects_unknown_pack() {
    let err = HelperRegistryBuilder::new()
        .register_pack("chrono")
        .unwrap_err();
    match err {
        RegistryError::UnknownPack(name) => assert_eq!(name, "chrono"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_builder_alias() {
    let registry = HelperRegistryBuilder::new()
        .register_pack("string")
        .unwrap()
        .alias("upper", "toUpperCase")
        .unwrap()
        .build();

    let helper = registry.lookup("upper").unwrap();
    let result = helper.call(Value::from("hi"), vec![]).unwrap();
    assert_eq!(result, Value::from("HI"));
}

#[test]
fn test_builder_alias_requires_registered_target() {
    let err = HelperRegistryBuilder::new()
        .alias("upper", "toUpperCase")
        .unwrap_err();
    match err {
        RegistryError::InvalidRegistration(msg) => assert!(msg.contains("toUpperCase")),
        other => panic!("unexpected error: {:?}", other),
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_registry_from_config() {
    let config = HelperConfig::parse(
        r#"
packs = ["string", "number"]

[aliases]
upper = "toUpperCase"
"#,
    )
    .unwrap();

    let registry = HelperRegistry::from_config(&config).unwrap();
    assert!(registry.has_helper("trim"));
    assert!(registry.has_helper("abs"));
    assert!(registry.has_helper("upper"));
    assert!(!registry.has_helper("count"));
}

#[test]
fn test_registry_from_config_rejects_unknown_pack() {
    let config = HelperConfig::parse(r#"packs = ["carbon"]"#).unwrap();
    let err = HelperRegistry::from_config(&config).unwrap_err();
    match err {
        RegistryError::UnknownPack(name) => assert_eq!(name, "carbon"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "packs = [\"list\"]").unwrap();

    let config = HelperConfig::load(file.path()).unwrap();
    assert_eq!(config.packs, vec!["list".to_string()]);

    let registry = HelperRegistry::from_config(&config).unwrap();
    assert!(registry.has_helper("count"));
    assert!(!registry.has_helper("trim"));
}

#[test]
fn test_config_load_missing_file() {
    let err = HelperConfig::load(std::path::Path::new("/nonexistent/helpers.toml")).unwrap_err();
    match err {
        RegistryError::Config(msg) => assert!(msg.contains("failed to read")),
        other => panic!("unexpected error: {:?}", other),
    }
}
