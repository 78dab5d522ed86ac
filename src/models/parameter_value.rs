//! Scalar values bound to preset parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single parameter value: text, integer or float.
///
/// The accessors never fail. Reading a variant that was not set yields the
/// zero value for that type, and `string_value` renders numbers in decimal.
/// Serializes as a bare JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Int(i64),
    Float(f32),
    Text(String),
}

impl ParameterValue {
    pub fn text(value: impl Into<String>) -> Self {
        ParameterValue::Text(value.into())
    }

    pub fn int(value: i64) -> Self {
        ParameterValue::Int(value)
    }

    pub fn float(value: f32) -> Self {
        ParameterValue::Float(value)
    }

    /// String form of the value.
    pub fn string_value(&self) -> String {
        match self {
            ParameterValue::Text(s) => s.clone(),
            ParameterValue::Int(i) => i.to_string(),
            ParameterValue::Float(f) => f.to_string(),
        }
    }

    /// Integer form of the value, `0` unless this is an `Int`.
    pub fn int_value(&self) -> i64 {
        match self {
            ParameterValue::Int(i) => *i,
            _ => 0,
        }
    }

    /// Float form of the value, `0.0` unless this is a `Float`.
    pub fn float_value(&self) -> f32 {
        match self {
            ParameterValue::Float(f) => *f,
            _ => 0.0,
        }
    }

    /// The type tag of the active variant.
    pub fn param_type(&self) -> ParameterType {
        match self {
            ParameterValue::Text(_) => ParameterType::Text,
            ParameterValue::Int(_) => ParameterType::Int,
            ParameterValue::Float(_) => ParameterType::Float,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_value())
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Text(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Int(value)
    }
}

impl From<f32> for ParameterValue {
    fn from(value: f32) -> Self {
        ParameterValue::Float(value)
    }
}

/// Type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Text,
    Int,
    Float,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::Text => "text",
            ParameterType::Int => "int",
            ParameterType::Float => "float",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
