//! Errors raised while resolving presets from untrusted input.

use thiserror::Error;

use crate::models::ParameterType;

#[derive(Debug, Error, PartialEq)]
pub enum PresetError {
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown parameter for preset {preset}: {param}")]
    UnknownParameter { preset: String, param: String },

    #[error("Invalid value for {param}: {value:?} is not a valid {expected}")]
    InvalidValue {
        param: String,
        value: String,
        expected: ParameterType,
    },

    #[error("Malformed assignment {0:?}, expected name=value")]
    MalformedAssignment(String),
}

pub type Result<T> = std::result::Result<T, PresetError>;
