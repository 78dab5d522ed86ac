//! Job file describing one preset application.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ParameterValue;

/// A preset application read from a JSON job file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetJob {
    /// Catalog name of the preset.
    pub preset: String,

    /// Optional mpv filter label (`@label:`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Parameter overrides.
    #[serde(default)]
    pub params: HashMap<String, ParameterValue>,
}
