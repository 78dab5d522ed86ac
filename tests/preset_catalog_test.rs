//! Integration tests for the built-in preset catalog.
//!
//! Run with: cargo test --test preset_catalog_test

use std::collections::HashMap;
use std::path::PathBuf;

use filter_presets::models::{ParameterSpec, ParameterValue};
use filter_presets::{Localization, PresetCatalog};

fn catalog() -> &'static PresetCatalog {
    PresetCatalog::global()
}

fn bundled_localization() -> Localization {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let path = PathBuf::from(manifest_dir)
        .join("resources")
        .join("FilterPresets.json");
    Localization::load_from_file(&path).unwrap()
}

#[test]
fn test_defaults_resolve_for_every_preset() {
    for preset in catalog().presets() {
        let instance = preset.instance();
        for (name, spec) in preset.params() {
            assert_eq!(
                instance.value(name),
                spec.default_value(),
                "{}.{}",
                preset.name(),
                name
            );
        }
    }
}

#[test]
fn test_param_order_names_known_params() {
    for preset in catalog().presets() {
        for name in preset.param_order().unwrap_or_default() {
            assert!(preset.param(name).is_some(), "{}.{}", preset.name(), name);
        }
    }
}

#[test]
fn test_sharpen_defaults() {
    let sharpen = catalog().get("sharpen").unwrap();
    let instance = sharpen.instance();

    assert_eq!(instance.value("amount").float_value(), 0.0);
    assert_eq!(instance.value("msize").int_value(), 5);

    let filter = instance.apply();
    assert_eq!(filter.lavfi_filter(), Some("unsharp"));
    assert_eq!(filter.param("luma_amount"), Some("0"));
    assert_eq!(filter.param("luma_msize_x"), Some("5"));
    assert_eq!(filter.param("chroma_msize_y"), Some("5"));
}

#[test]
fn test_blur_is_inverted_sharpen() {
    let sharpen = catalog().get("sharpen").unwrap();
    let blur = catalog().get("blur").unwrap();

    for amount in [0.0_f32, 0.25, 0.5, 1.0, 1.5] {
        for msize in [3_i64, 5, 23] {
            let mut blurred = blur.instance();
            blurred.set("amount", amount).unwrap();
            blurred.set("msize", msize).unwrap();

            let mut sharpened = sharpen.instance();
            sharpened.set("amount", -amount).unwrap();
            sharpened.set("msize", msize).unwrap();

            assert_eq!(blurred.apply(), sharpened.apply());
        }
    }

    let mut blurred = blur.instance();
    blurred.set("amount", 0.5_f32).unwrap();
    assert_eq!(blurred.apply().param("chroma_amount"), Some("-0.5"));
}

#[test]
fn test_crop_scenario() {
    let crop = catalog().get("crop").unwrap();
    let mut instance = crop.instance();
    instance.set("w", "640").unwrap();
    instance.set("h", "480").unwrap();

    assert_eq!(instance.value("x"), ParameterValue::text(""));
    assert_eq!(instance.value("y").string_value(), "");
    assert_eq!(
        crop.param_order().unwrap(),
        &["w", "h", "x", "y"].map(String::from)
    );
    assert_eq!(instance.apply().to_string(), "crop=w=640:h=480");

    instance.set("x", "10").unwrap();
    instance.set("y", "20").unwrap();
    assert_eq!(instance.apply().to_string(), "crop=w=640:h=480:x=10:y=20");
}

#[test]
fn test_expand_keeps_text_defaults() {
    let expand = catalog().get("expand").unwrap();
    let mut instance = expand.instance();
    instance.set("w", "iw+20").unwrap();
    assert_eq!(
        instance.apply().to_string(),
        "expand=w=iw+20:aspect=0:round=1"
    );
}

#[test]
fn test_delogo_renders_lavfi() {
    let delogo = catalog().get("delogo").unwrap();
    assert_eq!(
        delogo.instance().apply().to_string(),
        "lavfi=[delogo=x=1:y=1:w=1:h=1]"
    );
}

#[test]
fn test_parameterless_presets() {
    let render = |name: &str| catalog().get(name).unwrap().instance().apply().to_string();
    assert_eq!(render("vflip"), "vflip");
    assert_eq!(render("hflip"), "hflip");
    assert_eq!(render("negative"), "lavfi=[lutrgb=r=negval:g=negval:b=negval]");
}

#[test]
fn test_custom_mpv() {
    let custom = catalog().get("custom_mpv").unwrap();
    let mut instance = custom.instance();
    instance.set("name", "eq").unwrap();
    instance.set("string", "brightness=0.2").unwrap();

    let filter = instance.apply();
    assert!(filter.is_raw());
    assert_eq!(filter.to_string(), "eq=brightness=0.2");
}

#[test]
fn test_custom_ffmpeg() {
    let custom = catalog().get("custom_ffmpeg").unwrap();
    let mut instance = custom.instance();
    instance.set("name", "hue").unwrap();
    instance.set("string", "s=0").unwrap();
    assert_eq!(instance.apply().to_string(), "lavfi=[hue=s=0]");
}

#[test]
fn test_custom_strings_are_not_validated() {
    let custom = catalog().get("custom_mpv").unwrap();
    let mut instance = custom.instance();
    instance.set("name", "not a filter").unwrap();
    assert_eq!(instance.apply().to_string(), "not a filter=");
}

#[test]
fn test_missing_localization_uses_raw_names() {
    let table = Localization::empty();
    for preset in catalog().presets() {
        assert_eq!(preset.localized_name_in(&table), preset.name());
        for name in preset.params().keys() {
            assert_eq!(preset.localized_param_name_in(&table, name), *name);
        }
    }
}

#[test]
fn test_bundled_localization_covers_catalog() {
    let table = bundled_localization();
    for preset in catalog().presets() {
        assert!(table.get(preset.name()).is_some(), "{}", preset.name());
        for name in preset.params().keys() {
            let key = format!("{}.{}", preset.name(), name);
            assert!(table.get(&key).is_some(), "{}", key);
        }
    }

    let crop = catalog().get("crop").unwrap();
    assert_eq!(crop.localized_name_in(&table), "Crop");
    assert_eq!(crop.localized_param_name_in(&table, "w"), "Width");
}

#[test]
fn test_sharpen_bounds_metadata() {
    let sharpen = catalog().get("sharpen").unwrap();
    assert_eq!(
        sharpen.param("msize"),
        Some(&ParameterSpec::int(3, 23, 2, 5))
    );
    assert_eq!(
        sharpen.param("amount"),
        Some(&ParameterSpec::float(0.0, 1.5, 0.0))
    );
}

#[test]
fn test_overrides_from_job_values() {
    let sharpen = catalog().get("sharpen").unwrap();
    let params: HashMap<String, ParameterValue> =
        serde_json::from_str(r#"{ "amount": 1, "msize": 7 }"#).unwrap();

    let mut instance = sharpen.instance();
    for (name, value) in &params {
        instance.set_from_str(name, &value.string_value()).unwrap();
    }
    assert_eq!(instance.value("amount"), ParameterValue::float(1.0));
    assert_eq!(instance.value("msize"), ParameterValue::int(7));
}
