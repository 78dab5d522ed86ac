//! Filter Presets Library
//!
//! Typed video filter presets rendered to mpv filter strings.

pub mod error;
pub mod filter_preset;
pub mod localization;
pub mod models;
pub mod mpv_filter;
pub mod preset_catalog;
pub mod reporter;

pub use error::PresetError;
pub use filter_preset::{Preset, PresetInstance, Transformer};
pub use localization::Localization;
pub use models::{ParameterSpec, ParameterType, ParameterValue};
pub use mpv_filter::MpvFilter;
pub use preset_catalog::PresetCatalog;
