//! List helpers.
//!
//! Fallback members for list subjects. Helpers never mutate the subject;
//! transforming helpers return a fresh list.

use std::cell::RefCell;
use std::rc::Rc;

use super::value_text;
use crate::ds::error::EvalError;
use crate::ds::value::{NumberType, Value};
use crate::registry::HelperRegistry;

/// Register the list helper pack.
pub fn register(registry: &mut HelperRegistry) {
    registry.register("count", list_count);
    registry.register("first", list_first);
    registry.register("last", list_last);
    registry.register("reverse", list_reverse);
    registry.register("join", list_join);
    registry.register("isEmpty", list_is_empty);
}

fn as_list(subject: &Value, helper: &str) -> Result<Rc<RefCell<Vec<Value>>>, EvalError> {
    match subject {
        Value::List(items) => Ok(items.clone()),
        other => Err(EvalError::UnsupportedOperation {
            operation: format!("list helper \"{}\"", helper),
            value: other.describe(),
        }),
    }
}

fn list_count(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let items = as_list(&subject, "count")?;
    let len = items.borrow().len();
    Ok(Value::Number(NumberType::Integer(len as i64)))
}

fn list_first(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let items = as_list(&subject, "first")?;
    let first = items.borrow().first().cloned();
    Ok(first.unwrap_or(Value::Undefined))
}

fn list_last(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let items = as_list(&subject, "last")?;
    let last = items.borrow().last().cloned();
    Ok(last.unwrap_or(Value::Undefined))
}

fn list_reverse(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let items = as_list(&subject, "reverse")?;
    let mut reversed: Vec<Value> = items.borrow().clone();
    reversed.reverse();
    Ok(Value::list(reversed))
}

/// Join items with the first argument as separator, defaulting to ",".
fn list_join(subject: Value, args: Vec<Value>) -> Result<Value, EvalError> {
    let items = as_list(&subject, "join")?;
    let separator = args
        .get(0)
        .map(value_text)
        .unwrap_or_else(|| ",".to_string());
    let rendered: Vec<String> = items.borrow().iter().map(value_text).collect();
    Ok(Value::String(rendered.join(&separator)))
}

fn list_is_empty(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let items = as_list(&subject, "isEmpty")?;
    let empty = items.borrow().is_empty();
    Ok(Value::Boolean(empty))
}
