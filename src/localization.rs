//! Display names for presets and their parameters.
//!
//! The table is a flat JSON object keyed by preset name (`"crop"`) and by
//! `"<preset>.<param>"` (`"crop.w"`). The process-wide table is loaded at most
//! once, on first access; a missing or unreadable file leaves it empty.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};

/// Logical name of the bundled localization resource.
pub const RESOURCE_NAME: &str = "FilterPresets.json";

/// Environment variable that points at an explicit localization file.
pub const PATH_ENV_VAR: &str = "FILTER_PRESETS_L10N";

static GLOBAL: OnceLock<Localization> = OnceLock::new();

/// Key/value table of localized display strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Localization {
    entries: HashMap<String, String>,
}

impl Localization {
    /// An empty table; every lookup falls back to its key.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load a table from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read localization file: {:?}", path))?;

        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse localization file: {:?}", path))?;

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Localized text for `key`, or `key` itself when there is no entry.
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The process-wide table, loaded on first use.
    pub fn global() -> &'static Localization {
        GLOBAL.get_or_init(Self::discover)
    }

    /// Install the process-wide table before anything has read it.
    ///
    /// Returns `false` if a table is already in place.
    pub fn install(table: Localization) -> bool {
        GLOBAL.set(table).is_ok()
    }

    fn discover() -> Self {
        Self::load_first(&Self::search_paths())
    }

    /// Load from the first path that exists. Returns an empty table when none
    /// exists or the first one found cannot be read or parsed.
    pub fn load_first(paths: &[PathBuf]) -> Self {
        let Some(path) = paths.iter().find(|p| p.exists()) else {
            return Self::empty();
        };

        match Self::load_from_file(path) {
            Ok(table) => {
                eprintln!("Loaded localization from: {:?}", path);
                table
            }
            Err(e) => {
                eprintln!("Warning: {:#}", e);
                Self::empty()
            }
        }
    }

    /// Candidate locations, in order of preference.
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(explicit) = env::var_os(PATH_ENV_VAR) {
            paths.push(PathBuf::from(explicit));
        }

        if let Ok(exe_path) = env::current_exe() {
            let exe_dir = exe_path.parent().unwrap_or(Path::new("."));
            // Next to executable
            paths.push(exe_dir.join("resources").join(RESOURCE_NAME));
            paths.push(exe_dir.join("Resources").join(RESOURCE_NAME));
            // Development layout: target/release -> resources
            paths.push(exe_dir.join("..").join("..").join("resources").join(RESOURCE_NAME));
            paths.push(
                exe_dir
                    .join("..")
                    .join("..")
                    .join("..")
                    .join("resources")
                    .join(RESOURCE_NAME),
            );
        }

        paths.push(PathBuf::from("resources").join(RESOURCE_NAME));
        paths
    }
}
