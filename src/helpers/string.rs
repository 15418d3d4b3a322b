//! String helpers.
//!
//! Fallback members for string subjects.

use super::value_text;
use crate::ds::error::EvalError;
use crate::ds::value::{NumberType, Value};
use crate::registry::HelperRegistry;

/// Register the string helper pack.
pub fn register(registry: &mut HelperRegistry) {
    registry.register("trim", string_trim);
    registry.register("trimStart", string_trim_start);
    registry.register("trimEnd", string_trim_end);
    registry.register("toUpperCase", string_to_upper_case);
    registry.register("toLowerCase", string_to_lower_case);
    registry.register("length", string_length);
    registry.register("contains", string_contains);
    registry.register("startsWith", string_starts_with);
    registry.register("endsWith", string_ends_with);
    registry.register("split", string_split);
    registry.register("repeat", string_repeat);
    registry.register("replace", string_replace);
}

fn as_string(subject: &Value, helper: &str) -> Result<String, EvalError> {
    match subject {
        Value::String(s) => Ok(s.clone()),
        other => Err(EvalError::UnsupportedOperation {
            operation: format!("string helper \"{}\"", helper),
            value: other.describe(),
        }),
    }
}

fn arg_text(args: &[Value], index: usize) -> String {
    args.get(index).map(value_text).unwrap_or_default()
}

fn string_trim(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "trim")?;
    Ok(Value::String(s.trim().to_string()))
}

fn string_trim_start(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "trimStart")?;
    Ok(Value::String(s.trim_start().to_string()))
}

fn string_trim_end(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "trimEnd")?;
    Ok(Value::String(s.trim_end().to_string()))
}

fn string_to_upper_case(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "toUpperCase")?;
    Ok(Value::String(s.to_uppercase()))
}

fn string_to_lower_case(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "toLowerCase")?;
    Ok(Value::String(s.to_lowercase()))
}

fn string_length(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "length")?;
    Ok(Value::Number(NumberType::Integer(s.chars().count() as i64)))
}

fn string_contains(subject: Value, args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "contains")?;
    Ok(Value::Boolean(s.contains(&arg_text(&args, 0))))
}

fn string_starts_with(subject: Value, args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "startsWith")?;
    Ok(Value::Boolean(s.starts_with(&arg_text(&args, 0))))
}

fn string_ends_with(subject: Value, args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "endsWith")?;
    Ok(Value::Boolean(s.ends_with(&arg_text(&args, 0))))
}

/// Split on the first argument. Without a separator the whole subject is
/// returned as a single-item list.
fn string_split(subject: Value, args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "split")?;
    let parts = match args.get(0) {
        Some(separator) => s
            .split(&value_text(separator))
            .map(|part| Value::String(part.to_string()))
            .collect(),
        None => vec![Value::String(s)],
    };
    Ok(Value::list(parts))
}

fn string_repeat(subject: Value, args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "repeat")?;
    let count = match args.get(0) {
        Some(Value::Number(NumberType::Integer(n))) if *n >= 0 => *n as usize,
        _ => 0,
    };
    Ok(Value::String(s.repeat(count)))
}

fn string_replace(subject: Value, args: Vec<Value>) -> Result<Value, EvalError> {
    let s = as_string(&subject, "replace")?;
    let from = arg_text(&args, 0);
    let to = arg_text(&args, 1);
    if from.is_empty() {
        return Ok(Value::String(s));
    }
    Ok(Value::String(s.replace(&from, &to)))
}
