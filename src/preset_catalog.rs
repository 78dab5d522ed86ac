use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{PresetError, Result};
use crate::filter_preset::{Preset, Transformer};
use crate::models::ParameterSpec;

type PM = ParameterSpec;

static BUILTIN: LazyLock<PresetCatalog> = LazyLock::new(PresetCatalog::builtin);

/// Registry of filter presets, kept in registration order.
pub struct PresetCatalog {
    presets: Vec<Preset>,
    index: HashMap<String, usize>,
}

impl PresetCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            presets: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The built-in presets, constructed on first use.
    pub fn global() -> &'static PresetCatalog {
        &BUILTIN
    }

    /// Build a catalog holding the built-in presets.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for preset in builtin_presets() {
            catalog.register(preset);
        }
        catalog
    }

    /// Register a preset. A preset with the same name is replaced in place.
    pub fn register(&mut self, preset: Preset) {
        match self.index.get(preset.name()) {
            Some(&i) => self.presets[i] = preset,
            None => {
                self.index.insert(preset.name().to_string(), self.presets.len());
                self.presets.push(preset);
            }
        }
    }

    /// All presets in registration order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(Preset::name)
    }

    /// Get a preset by name.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.index.get(name).map(|&i| &self.presets[i])
    }

    /// Get a preset by name, failing for names that are not registered.
    pub fn require(&self, name: &str) -> Result<&Preset> {
        self.get(name)
            .ok_or_else(|| PresetError::UnknownPreset(name.to_string()))
    }

    /// Check if a preset exists.
    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn unsharp_params() -> Vec<(&'static str, ParameterSpec)> {
    vec![
        ("amount", PM::float(0.0, 1.5, 0.0)),
        ("msize", PM::int(3, 23, 2, 5)),
    ]
}

fn custom_params() -> Vec<(&'static str, ParameterSpec)> {
    vec![("name", PM::text("")), ("string", PM::text(""))]
}

fn builtin_presets() -> Vec<Preset> {
    vec![
        // crop
        Preset::new(
            "crop",
            vec![
                ("x", PM::text("")),
                ("y", PM::text("")),
                ("w", PM::text("")),
                ("h", PM::text("")),
            ],
        )
        .with_param_order("w:h:x:y")
        .with_transformer(Transformer::MpvNative),
        // expand
        Preset::new(
            "expand",
            vec![
                ("x", PM::text("")),
                ("y", PM::text("")),
                ("w", PM::text("")),
                ("h", PM::text("")),
                ("aspect", PM::text("0")),
                ("round", PM::text("1")),
            ],
        )
        .with_param_order("w:h:x:y:aspect:round")
        .with_transformer(Transformer::MpvNative),
        // sharpen and blur share unsharp; blur negates the amount
        Preset::new("sharpen", unsharp_params())
            .with_transformer(Transformer::Unsharp { invert: false }),
        Preset::new("blur", unsharp_params())
            .with_transformer(Transformer::Unsharp { invert: true }),
        // delogo
        Preset::new(
            "delogo",
            vec![
                ("x", PM::text("1")),
                ("y", PM::text("1")),
                ("w", PM::text("1")),
                ("h", PM::text("1")),
            ],
        )
        .with_param_order("x:y:w:h"),
        // invert color
        Preset::new("negative", vec![]).with_transformer(Transformer::Negative),
        // flip
        Preset::new("vflip", vec![]).with_transformer(Transformer::MpvNative),
        // mirror
        Preset::new("hflip", vec![]).with_transformer(Transformer::MpvNative),
        // custom mpv
        Preset::new("custom_mpv", custom_params()).with_transformer(Transformer::CustomMpv),
        // custom ffmpeg
        Preset::new("custom_ffmpeg", custom_params()).with_transformer(Transformer::CustomFfmpeg),
    ]
}
