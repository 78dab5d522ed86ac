//! Typed parameter definitions for filter presets.

use serde::{Deserialize, Serialize};

use super::{ParameterType, ParameterValue};

/// Definition of a single preset parameter.
///
/// Bounds are metadata for editors. Nothing in the model clamps or rejects
/// values outside them; see [`ParameterSpec::accepts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterSpec {
    Text {
        default: String,
    },
    Int {
        min: i64,
        max: i64,
        step: i64,
        default: i64,
    },
    Float {
        min: f32,
        max: f32,
        default: f32,
    },
}

impl ParameterSpec {
    /// Free text parameter.
    pub fn text(default: impl Into<String>) -> Self {
        ParameterSpec::Text {
            default: default.into(),
        }
    }

    /// Integer parameter. Callers keep `min <= default <= max`.
    pub fn int(min: i64, max: i64, step: i64, default: i64) -> Self {
        ParameterSpec::Int {
            min,
            max,
            step,
            default,
        }
    }

    /// Continuous float parameter.
    pub fn float(min: f32, max: f32, default: f32) -> Self {
        ParameterSpec::Float { min, max, default }
    }

    pub fn param_type(&self) -> ParameterType {
        match self {
            ParameterSpec::Text { .. } => ParameterType::Text,
            ParameterSpec::Int { .. } => ParameterType::Int,
            ParameterSpec::Float { .. } => ParameterType::Float,
        }
    }

    /// Default value; its variant always matches [`Self::param_type`].
    pub fn default_value(&self) -> ParameterValue {
        match self {
            ParameterSpec::Text { default } => ParameterValue::Text(default.clone()),
            ParameterSpec::Int { default, .. } => ParameterValue::Int(*default),
            ParameterSpec::Float { default, .. } => ParameterValue::Float(*default),
        }
    }

    /// Parse user-entered text into a value of this parameter's type.
    pub fn parse(&self, raw: &str) -> Option<ParameterValue> {
        match self {
            ParameterSpec::Text { .. } => Some(ParameterValue::Text(raw.to_string())),
            ParameterSpec::Int { .. } => raw.trim().parse().ok().map(ParameterValue::Int),
            ParameterSpec::Float { .. } => raw
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|f| f.is_finite())
                .map(ParameterValue::Float),
        }
    }

    /// Check if a value has the right type and lies within the bounds.
    pub fn accepts(&self, value: &ParameterValue) -> bool {
        match (self, value) {
            (ParameterSpec::Text { .. }, ParameterValue::Text(_)) => true,
            (
                ParameterSpec::Int {
                    min, max, step, ..
                },
                ParameterValue::Int(v),
            ) => {
                if v < min || v > max {
                    return false;
                }
                *step <= 1 || (v - min) % step == 0
            }
            (ParameterSpec::Float { min, max, .. }, ParameterValue::Float(v)) => {
                v >= min && v <= max
            }
            _ => false,
        }
    }
}
