use crate::FieldType;

/// An owned column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int64(i64),
    Float64(f64),
    Bool(bool),
    Blob(Vec<u8>),
}

impl Value {
    pub fn ty(&self) -> FieldType {
        match self {
            Value::Text(_) => FieldType::Text,
            Value::Int64(_) => FieldType::Int64,
            Value::Float64(_) => FieldType::Float64,
            Value::Bool(_) => FieldType::Bool,
            Value::Blob(_) => FieldType::Blob,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(value)
    }
}
