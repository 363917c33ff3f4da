//! Script value representation
//!
//! [`Value`] is the tagged value a variable can hold once an evaluation layer
//! exists. The syntax checker itself never creates or reads values.
//!
//! # Value Types
//!
//! - [`Value::Object`]: an object reference
//! - [`Value::Int`]: 64-bit signed integer
//! - [`Value::Double`]: 64-bit float
//! - [`Value::Str`]: owned string
//! - [`Value::Function`]: a function reference

/// Script values
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Object,
    Int(i64),
    Double(f64),
    Str(String),
    Function,
}

impl Value {
    /// Name of the value's type, as shown in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Object => "object",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Str(_) => "string",
            Value::Function => "function",
        }
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// A named variable record
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: Value,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Double(1.5).as_double(), Some(1.5));
        assert_eq!(Value::Str("hi".into()).as_str(), Some("hi"));
        assert_eq!(Value::Function.as_int(), None);
        assert_eq!(Value::default(), Value::Object);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Object.type_name(), "object");
        assert_eq!(Value::Str(String::new()).type_name(), "string");
        assert_eq!(Variable::new("f", Value::Function).value.type_name(), "function");
    }
}
