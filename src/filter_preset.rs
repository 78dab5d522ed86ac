//! Filter presets and their per-application instances.

use std::collections::HashMap;

use crate::error::{PresetError, Result};
use crate::localization::Localization;
use crate::models::{ParameterSpec, ParameterValue};
use crate::mpv_filter::MpvFilter;

/// How a preset instance is turned into an mpv filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transformer {
    /// mpv-native filter named after the preset.
    MpvNative,
    /// lavfi filter named after the preset.
    #[default]
    Lavfi,
    /// lavfi `unsharp` driven by `amount` and `msize`. `invert` negates the
    /// amount, turning sharpening into blurring.
    Unsharp { invert: bool },
    /// lavfi `lutrgb` inverting every channel.
    Negative,
    /// `<name>=<string>` passed to mpv as-is.
    CustomMpv,
    /// `lavfi=[<name>=<string>]`.
    CustomFfmpeg,
}

impl Transformer {
    pub fn apply(&self, instance: &PresetInstance<'_>) -> MpvFilter {
        let preset = instance.preset();
        match self {
            Transformer::MpvNative => {
                MpvFilter::mpv(preset.name(), None, instance.resolved_params())
            }
            Transformer::Lavfi => {
                MpvFilter::lavfi(preset.name(), None, instance.resolved_params())
            }
            Transformer::Unsharp { invert } => {
                let amount = instance.value("amount").float_value();
                let amount = if *invert { -amount } else { amount };
                MpvFilter::unsharp(amount, instance.value("msize").int_value())
            }
            Transformer::Negative => {
                let params = ["r", "g", "b"]
                    .iter()
                    .map(|c| (c.to_string(), "negval".to_string()))
                    .collect();
                MpvFilter::lavfi("lutrgb", None, params)
            }
            Transformer::CustomMpv => MpvFilter::raw(&format!(
                "{}={}",
                instance.value("name").string_value(),
                instance.value("string").string_value()
            )),
            Transformer::CustomFfmpeg => MpvFilter::with_param_string(
                "lavfi",
                None,
                &format!(
                    "[{}={}]",
                    instance.value("name").string_value(),
                    instance.value("string").string_value()
                ),
            ),
        }
    }
}

/// A named, reusable filter definition with typed parameters.
#[derive(Debug, Clone)]
pub struct Preset {
    name: String,
    params: HashMap<String, ParameterSpec>,
    param_order: Option<Vec<String>>,
    transformer: Transformer,
}

impl Preset {
    /// Create a preset using the default lavfi transformer.
    pub fn new(name: &str, params: Vec<(&str, ParameterSpec)>) -> Self {
        Self {
            name: name.to_string(),
            params: params
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            param_order: None,
            transformer: Transformer::default(),
        }
    }

    /// Set the canonical parameter order from a colon-delimited list such as
    /// `"w:h:x:y"`. Names that are not parameters of this preset, and repeats
    /// of a name already listed, are dropped.
    pub fn with_param_order(mut self, order: &str) -> Self {
        let mut tokens: Vec<String> = Vec::new();
        for token in order.split(':').map(str::trim) {
            if self.params.contains_key(token) && !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
        self.param_order = Some(tokens);
        self
    }

    pub fn with_transformer(mut self, transformer: Transformer) -> Self {
        self.transformer = transformer;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &HashMap<String, ParameterSpec> {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&ParameterSpec> {
        self.params.get(name)
    }

    pub fn param_order(&self) -> Option<&[String]> {
        self.param_order.as_deref()
    }

    pub fn transformer(&self) -> Transformer {
        self.transformer
    }

    /// Parameter names in rendering order: the declared order first, then any
    /// remaining parameters by name.
    pub fn ordered_param_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .param_order
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();

        let mut rest: Vec<&str> = self
            .params
            .keys()
            .map(String::as_str)
            .filter(|k| !names.contains(k))
            .collect();
        rest.sort_unstable();
        names.extend(rest);
        names
    }

    /// Display name from the process-wide localization table.
    pub fn localized_name(&self) -> &str {
        self.localized_name_in(Localization::global())
    }

    pub fn localized_name_in<'a>(&'a self, table: &'a Localization) -> &'a str {
        table.lookup(&self.name)
    }

    /// Display name of one parameter, keyed `"<preset>.<param>"`.
    pub fn localized_param_name(&self, param: &str) -> String {
        self.localized_param_name_in(Localization::global(), param)
    }

    pub fn localized_param_name_in(&self, table: &Localization, param: &str) -> String {
        let key = format!("{}.{}", self.name, param);
        table.get(&key).unwrap_or(param).to_string()
    }

    /// Start a new instance with every parameter at its default.
    pub fn instance(&self) -> PresetInstance<'_> {
        PresetInstance::new(self)
    }
}

/// A preset applied with user-supplied overrides.
#[derive(Debug, Clone)]
pub struct PresetInstance<'a> {
    preset: &'a Preset,
    overrides: HashMap<String, ParameterValue>,
}

impl<'a> PresetInstance<'a> {
    pub fn new(preset: &'a Preset) -> Self {
        Self {
            preset,
            overrides: HashMap::new(),
        }
    }

    pub fn preset(&self) -> &'a Preset {
        self.preset
    }

    pub fn overrides(&self) -> &HashMap<String, ParameterValue> {
        &self.overrides
    }

    /// Effective value of a parameter: the override if set, else the default.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a parameter of the preset. Parameter names are
    /// fixed when the preset is authored; use [`Self::try_value`] for names
    /// that come from user input.
    pub fn value(&self, name: &str) -> ParameterValue {
        match self.try_value(name) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_value(&self, name: &str) -> Result<ParameterValue> {
        if let Some(value) = self.overrides.get(name) {
            return Ok(value.clone());
        }
        self.spec(name).map(ParameterSpec::default_value)
    }

    /// Override a parameter. The value is stored unchanged, even when it is
    /// out of range or of a different type than the parameter.
    pub fn set(&mut self, name: &str, value: impl Into<ParameterValue>) -> Result<()> {
        self.spec(name)?;
        self.overrides.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Parse `raw` according to the parameter's type and override it.
    pub fn set_from_str(&mut self, name: &str, raw: &str) -> Result<()> {
        let spec = self.spec(name)?;
        let value = spec.parse(raw).ok_or_else(|| PresetError::InvalidValue {
            param: name.to_string(),
            value: raw.to_string(),
            expected: spec.param_type(),
        })?;
        self.overrides.insert(name.to_string(), value);
        Ok(())
    }

    /// Apply a `name=value` assignment.
    pub fn assign(&mut self, assignment: &str) -> Result<()> {
        let (name, raw) = assignment
            .split_once('=')
            .ok_or_else(|| PresetError::MalformedAssignment(assignment.to_string()))?;
        self.set_from_str(name.trim(), raw)
    }

    /// Drop an override, reverting to the default. Returns the old override.
    pub fn clear(&mut self, name: &str) -> Option<ParameterValue> {
        self.overrides.remove(name)
    }

    /// Overrides that the parameter spec would not accept, sorted by name.
    pub fn out_of_range(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .overrides
            .iter()
            .filter(|(k, v)| {
                self.preset
                    .param(k)
                    .map(|spec| !spec.accepts(v))
                    .unwrap_or(false)
            })
            .map(|(k, _)| k.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Effective values as `(name, text)` pairs in rendering order.
    /// Empty values are left out.
    pub fn resolved_params(&self) -> Vec<(String, String)> {
        self.preset
            .ordered_param_names()
            .into_iter()
            .map(|name| (name.to_string(), self.value(name).string_value()))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }

    /// Run the preset's transformer.
    pub fn apply(&self) -> MpvFilter {
        self.preset.transformer.apply(self)
    }

    fn spec(&self, name: &str) -> Result<&'a ParameterSpec> {
        self.preset
            .param(name)
            .ok_or_else(|| PresetError::UnknownParameter {
                preset: self.preset.name.clone(),
                param: name.to_string(),
            })
    }
}
