//! Recorded operation steps.
//!
//! Every chain extension on a [`Recorder`](super::Recorder) appends one
//! `Step`. A step carries only the operation's name/key and arguments; what
//! it actually does is decided when the step is applied to a concrete
//! intermediate value, by matching the variant against the value's capability
//! set.

use crate::ds::error::EvalError;
use crate::ds::object::DynObject;
use crate::ds::value::{NumberType, Value};

/// One recorded operation, applied to an intermediate value during replay.
#[derive(Debug, Clone)]
pub enum Step {
    InvokeMember { name: String, args: Vec<Value> },
    ReadProperty { name: String },
    WriteProperty { name: String, value: Value },
    IndexGet { key: Value },
    IndexSet { key: Value, value: Value },
    IndexDelete { key: Value },
    IndexExists { key: Value },
}

impl Step {
    /// Apply this step to the current intermediate value, producing the next
    /// one. Capability checks happen here, never at chain-build time.
    pub fn apply(&self, value: Value) -> Result<Value, EvalError> {
        match self {
            Step::ReadProperty { name } => match &value {
                Value::Map(m) => Ok(m.borrow().get(name).cloned().unwrap_or(Value::Undefined)),
                Value::Object(o) => {
                    let read = o.borrow().get_property(name);
                    match read {
                        Some(v) => Ok(v),
                        None => Err(self.unsupported(&value)),
                    }
                }
                _ => Err(self.unsupported(&value)),
            },

            Step::IndexGet { key } => match &value {
                Value::List(l) => {
                    let idx = list_index(key).ok_or_else(|| self.unsupported(&value))?;
                    let items = l.borrow();
                    Ok(items.get(idx).cloned().unwrap_or(Value::Undefined))
                }
                Value::Map(m) => Ok(m
                    .borrow()
                    .get(&map_key(key))
                    .cloned()
                    .unwrap_or(Value::Undefined)),
                Value::Object(o) => {
                    let read = o.borrow().index_get(key);
                    match read {
                        Some(result) => result,
                        None => Err(self.unsupported(&value)),
                    }
                }
                _ => Err(self.unsupported(&value)),
            },

            // Writes yield the container itself, so a chain can keep
            // operating on it.
            Step::WriteProperty { name, value: item } => match &value {
                Value::Map(m) => {
                    m.borrow_mut().insert(name.clone(), item.clone());
                    Ok(value.clone())
                }
                Value::Object(o) => {
                    let written = o.borrow_mut().set_property(name, item.clone());
                    if written {
                        Ok(value.clone())
                    } else {
                        Err(self.unsupported(&value))
                    }
                }
                _ => Err(self.unsupported(&value)),
            },

            Step::IndexSet { key, value: item } => match &value {
                Value::List(l) => {
                    let idx = list_index(key).ok_or_else(|| self.unsupported(&value))?;
                    let mut items = l.borrow_mut();
                    if idx >= items.len() {
                        items.resize(idx + 1, Value::Undefined);
                    }
                    items[idx] = item.clone();
                    drop(items);
                    Ok(value.clone())
                }
                Value::Map(m) => {
                    m.borrow_mut().insert(map_key(key), item.clone());
                    Ok(value.clone())
                }
                Value::Object(o) => {
                    let written = o.borrow_mut().index_set(key.clone(), item.clone());
                    match written {
                        Some(result) => result.map(|_| value.clone()),
                        None => Err(self.unsupported(&value)),
                    }
                }
                _ => Err(self.unsupported(&value)),
            },

            Step::IndexDelete { key } => match &value {
                Value::List(l) => {
                    let idx = list_index(key).ok_or_else(|| self.unsupported(&value))?;
                    let mut items = l.borrow_mut();
                    if idx < items.len() {
                        items.remove(idx);
                    }
                    drop(items);
                    Ok(value.clone())
                }
                Value::Map(m) => {
                    m.borrow_mut().remove(&map_key(key));
                    Ok(value.clone())
                }
                Value::Object(o) => {
                    let removed = o.borrow_mut().index_delete(key);
                    match removed {
                        Some(result) => result.map(|_| value.clone()),
                        None => Err(self.unsupported(&value)),
                    }
                }
                _ => Err(self.unsupported(&value)),
            },

            Step::IndexExists { key } => match &value {
                Value::List(l) => {
                    let exists = match list_index(key) {
                        Some(idx) => idx < l.borrow().len(),
                        None => false,
                    };
                    Ok(Value::Boolean(exists))
                }
                Value::Map(m) => Ok(Value::Boolean(m.borrow().contains_key(&map_key(key)))),
                Value::Object(o) => {
                    let checked = o.borrow().index_exists(key);
                    match checked {
                        Some(result) => result.map(Value::Boolean),
                        None => Err(self.unsupported(&value)),
                    }
                }
                _ => Err(self.unsupported(&value)),
            },

            Step::InvokeMember { name, args } => match &value {
                Value::Object(o) => {
                    let outcome = o.borrow_mut().call_method(name, args.clone());
                    match outcome {
                        Some(result) => result,
                        None => Err(self.unsupported(&value)),
                    }
                }
                _ => Err(self.unsupported(&value)),
            },
        }
    }

    /// Render the attempted operation for error messages.
    pub fn describe(&self) -> String {
        match self {
            Step::InvokeMember { name, args } => {
                format!("call to member \"{}\" with {} argument(s)", name, args.len())
            }
            Step::ReadProperty { name } => format!("read of property \"{}\"", name),
            Step::WriteProperty { name, .. } => format!("write of property \"{}\"", name),
            Step::IndexGet { key } => format!("indexed get at {}", key),
            Step::IndexSet { key, .. } => format!("indexed set at {}", key),
            Step::IndexDelete { key } => format!("indexed delete at {}", key),
            Step::IndexExists { key } => format!("indexed exists check at {}", key),
        }
    }

    fn unsupported(&self, value: &Value) -> EvalError {
        EvalError::UnsupportedOperation {
            operation: self.describe(),
            value: value.describe(),
        }
    }
}

/// List indices must be non-negative integers.
fn list_index(key: &Value) -> Option<usize> {
    match key {
        Value::Number(NumberType::Integer(i)) if *i >= 0 => Some(*i as usize),
        _ => None,
    }
}

fn map_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> Value {
        Value::list(vec![10.into(), 20.into(), 30.into()])
    }

    #[test]
    fn test_index_get_on_list() {
        let step = Step::IndexGet { key: 1.into() };
        assert_eq!(step.apply(sample_list()).unwrap(), Value::from(20));
    }

    #[test]
    fn test_index_get_out_of_range_is_undefined() {
        let step = Step::IndexGet { key: 9.into() };
        assert_eq!(step.apply(sample_list()).unwrap(), Value::Undefined);
    }

    #[test]
    fn test_index_get_rejects_non_integer_key() {
        let step = Step::IndexGet { key: "one".into() };
        let err = step.apply(sample_list()).unwrap_err();
        match err {
            EvalError::UnsupportedOperation { operation, value } => {
                assert!(operation.contains("indexed get"));
                assert!(value.contains("list of 3 items"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_index_set_pads_list() {
        let list = sample_list();
        let step = Step::IndexSet {
            key: 4.into(),
            value: 50.into(),
        };
        let result = step.apply(list).unwrap();
        let expected = Value::list(vec![
            10.into(),
            20.into(),
            30.into(),
            Value::Undefined,
            50.into(),
        ]);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_index_delete_shifts_list() {
        let step = Step::IndexDelete { key: 0.into() };
        let result = step.apply(sample_list()).unwrap();
        assert_eq!(result, Value::list(vec![20.into(), 30.into()]));
    }

    #[test]
    fn test_index_exists_on_map() {
        let map = Value::map(vec![("name", "ada".into())]);
        let hit = Step::IndexExists { key: "name".into() };
        let miss = Step::IndexExists { key: "age".into() };
        assert_eq!(hit.apply(map.clone()).unwrap(), Value::Boolean(true));
        assert_eq!(miss.apply(map).unwrap(), Value::Boolean(false));
    }

    #[test]
    fn test_write_property_on_map_inserts_and_yields_container() {
        let map = Value::map(vec![]);
        let step = Step::WriteProperty {
            name: "name".to_string(),
            value: "ada".into(),
        };
        let result = step.apply(map.clone()).unwrap();
        assert_eq!(result, map);
        let read = Step::ReadProperty {
            name: "name".to_string(),
        };
        assert_eq!(read.apply(result).unwrap(), Value::from("ada"));
    }

    #[test]
    fn test_write_property_on_list_is_unsupported() {
        let step = Step::WriteProperty {
            name: "name".to_string(),
            value: "ada".into(),
        };
        assert!(step.apply(sample_list()).is_err());
    }

    #[test]
    fn test_read_property_on_map_falls_back_to_undefined() {
        let map = Value::map(vec![("name", "ada".into())]);
        let step = Step::ReadProperty {
            name: "missing".to_string(),
        };
        assert_eq!(step.apply(map).unwrap(), Value::Undefined);
    }

    #[test]
    fn test_indexing_a_number_is_unsupported() {
        let step = Step::IndexGet { key: 0.into() };
        let err = step.apply(Value::from(5)).unwrap_err();
        match err {
            EvalError::UnsupportedOperation { value, .. } => assert_eq!(value, "5"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invoke_member_on_string_is_unsupported() {
        let step = Step::InvokeMember {
            name: "trim".to_string(),
            args: vec![],
        };
        assert!(step.apply(Value::from(" hi ")).is_err());
    }
}
