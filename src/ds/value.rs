use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::ds::object::{DynObject, ObjectType};

/// A dynamic value a recorded chain can be played against.
///
/// Lists and maps share their storage through `Rc<RefCell<...>>`, so a value
/// handle obtained from a chain step refers to the same underlying container
/// as its source.
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    String(String),
    Number(NumberType),
    List(Rc<RefCell<Vec<Value>>>),
    Map(Rc<RefCell<HashMap<String, Value>>>),
    Object(ObjectType),
}

impl Value {
    /// Build a list value from items.
    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Rc::new(RefCell::new(items)))
    }

    /// Build a map value from string-keyed entries.
    pub fn map(entries: Vec<(&str, Value)>) -> Value {
        let mut data = HashMap::new();
        for (key, value) in entries {
            data.insert(key.to_string(), value);
        }
        Value::Map(Rc::new(RefCell::new(data)))
    }

    /// Lift a user-defined object into a value.
    pub fn object<O: DynObject + 'static>(object: O) -> Value {
        let handle: ObjectType = Rc::new(RefCell::new(object));
        Value::Object(handle)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    /// Human-readable description of the value and its capabilities, used in
    /// evaluation error messages.
    pub fn describe(&self) -> String {
        match self {
            Value::List(l) => format!("list of {} items", l.borrow().len()),
            Value::Map(m) => format!("map with {} entries", m.borrow().len()),
            Value::Object(o) => {
                let object = o.borrow();
                let members = object.own_member_names();
                if members.is_empty() {
                    format!("object {}", object.class_name())
                } else {
                    format!(
                        "object {} with members [{}]",
                        object.class_name(),
                        members.join(", ")
                    )
                }
            }
            other => other.to_string(),
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Undefined => Value::Undefined,
            Value::Null => Value::Null,
            Value::Boolean(b) => Value::Boolean(*b),
            Value::String(s) => Value::String(s.to_string()),
            Value::Number(n) => Value::Number(n.clone()),
            Value::List(l) => Value::List(l.clone()),
            Value::Map(m) => Value::Map(m.clone()),
            Value::Object(o) => Value::Object(o.clone()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "bool({})", b),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::List(l) => write!(f, "list[{}]", l.borrow().len()),
            Value::Map(m) => write!(f, "map[{}]", m.borrow().len()),
            Value::Object(o) => write!(f, "object({})", o.borrow().class_name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Value::Undefined"),
            Value::Null => write!(f, "Value::Null"),
            Value::Boolean(b) => write!(f, "Value::Boolean({})", b),
            Value::String(s) => write!(f, "Value::String({:?})", s),
            Value::Number(n) => write!(f, "Value::Number({:?})", n),
            Value::List(l) => write!(f, "Value::List({:?})", l.borrow()),
            Value::Map(m) => write!(f, "Value::Map({:?})", m.borrow()),
            Value::Object(o) => write!(f, "Value::Object({})", o.borrow().class_name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(NumberType::Integer(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(NumberType::Float(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

#[derive(Debug, PartialEq)]
pub enum NumberType {
    Integer(i64),
    Float(f64),
}

impl Display for NumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Integer(i) => write!(f, "{}", i),
            NumberType::Float(nf) => write!(f, "{}", nf),
        }
    }
}

impl Clone for NumberType {
    fn clone(&self) -> Self {
        match self {
            NumberType::Integer(i) => NumberType::Integer(*i),
            NumberType::Float(nf) => NumberType::Float(*nf),
        }
    }
}
