//! Core value types for the frame engine.
//!
//! This module defines the element types a column can hold, the scalar
//! values handed out by positional and label access, and owned row records.

use crate::data::{FrameError, FrameResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Element Types
// ============================================================================

/// Declared type of every value in a column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Integer,
    Float,
    #[default]
    Text,
}

impl ElementType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ElementType::Integer | ElementType::Float)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Integer => "integer",
            ElementType::Float => "float",
            ElementType::Text => "text",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = FrameError;

    /// Accepts the canonical names plus the usual numeric-library aliases.
    fn from_str(s: &str) -> FrameResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" | "int32" | "int64" | "i32" | "i64" | "i4" | "i8" => {
                Ok(ElementType::Integer)
            }
            "float" | "float32" | "float64" | "f32" | "f64" | "f4" | "f8" | "double" => {
                Ok(ElementType::Float)
            }
            "text" | "str" | "string" | "utf8" => Ok(ElementType::Text),
            other => Err(FrameError::InvalidArgument(format!(
                "unknown element type '{other}'"
            ))),
        }
    }
}

// ============================================================================
// Scalar Values
// ============================================================================

/// A single cell value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn element_type(&self) -> ElementType {
        match self {
            Value::Integer(_) => ElementType::Integer,
            Value::Float(_) => ElementType::Float,
            Value::Text(_) => ElementType::Text,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => f.write_str(&format_float(*n)),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Format a float so whole numbers keep a fractional part (`1.0`, not `1`)
pub fn format_float(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{n:.1}")
    } else {
        format!("{n}")
    }
}

// ============================================================================
// Records
// ============================================================================

/// An owned row, addressable by position and by column name
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    names: Vec<String>,
    values: Vec<Value>,
}

impl Record {
    pub fn new(names: Vec<String>, values: Vec<Value>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.values.get(i))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.names.iter().map(String::as_str).zip(self.values.iter())
    }
}
