//! Number helpers.

use crate::ds::error::EvalError;
use crate::ds::value::{NumberType, Value};
use crate::registry::HelperRegistry;

/// Register the number helper pack.
pub fn register(registry: &mut HelperRegistry) {
    registry.register("abs", number_abs);
    registry.register("floor", number_floor);
    registry.register("ceil", number_ceil);
    registry.register("round", number_round);
    registry.register("min", number_min);
    registry.register("max", number_max);
}

fn as_number(value: &Value, helper: &str) -> Result<NumberType, EvalError> {
    match value {
        Value::Number(n) => Ok(n.clone()),
        other => Err(EvalError::UnsupportedOperation {
            operation: format!("number helper \"{}\"", helper),
            value: other.describe(),
        }),
    }
}

fn to_f64(n: &NumberType) -> f64 {
    match n {
        NumberType::Integer(i) => *i as f64,
        NumberType::Float(f) => *f,
    }
}

fn number_abs(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let n = as_number(&subject, "abs")?;
    Ok(match n {
        NumberType::Integer(i) => Value::Number(NumberType::Integer(i.abs())),
        NumberType::Float(f) => Value::Number(NumberType::Float(f.abs())),
    })
}

fn number_floor(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let n = as_number(&subject, "floor")?;
    Ok(match n {
        NumberType::Integer(i) => Value::Number(NumberType::Integer(i)),
        NumberType::Float(f) => Value::Number(NumberType::Integer(f.floor() as i64)),
    })
}

fn number_ceil(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let n = as_number(&subject, "ceil")?;
    Ok(match n {
        NumberType::Integer(i) => Value::Number(NumberType::Integer(i)),
        NumberType::Float(f) => Value::Number(NumberType::Integer(f.ceil() as i64)),
    })
}

fn number_round(subject: Value, _args: Vec<Value>) -> Result<Value, EvalError> {
    let n = as_number(&subject, "round")?;
    Ok(match n {
        NumberType::Integer(i) => Value::Number(NumberType::Integer(i)),
        NumberType::Float(f) => Value::Number(NumberType::Integer(f.round() as i64)),
    })
}

fn number_min(subject: Value, args: Vec<Value>) -> Result<Value, EvalError> {
    let left = as_number(&subject, "min")?;
    let other = args.get(0).cloned().unwrap_or(Value::Undefined);
    let right = as_number(&other, "min")?;
    if to_f64(&left) <= to_f64(&right) {
        Ok(Value::Number(left))
    } else {
        Ok(Value::Number(right))
    }
}

fn number_max(subject: Value, args: Vec<Value>) -> Result<Value, EvalError> {
    let left = as_number(&subject, "max")?;
    let other = args.get(0).cloned().unwrap_or(Value::Undefined);
    let right = as_number(&other, "max")?;
    if to_f64(&left) >= to_f64(&right) {
        Ok(Value::Number(left))
    } else {
        Ok(Value::Number(right))
    }
}
