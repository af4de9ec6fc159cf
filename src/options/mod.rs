//! Centralized host-facing options with TOML preset support.
//!
//! All tweakable settings (graticule intervals, orbit timing, scene
//! toggles) are consolidated here. Options serialize to/from TOML for view
//! presets.

mod graticule;
mod orbit;
mod scene;

use std::path::Path;

pub use graticule::GraticuleOptions;
pub use orbit::OrbitOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StateplaneError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[orbit]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Graticule intervals and visibility.
    pub graticule: GraticuleOptions,
    /// Camera orbit timing.
    pub orbit: OrbitOptions,
    /// Scene-wide datum and display toggles.
    pub scene: SceneOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`StateplaneError::Io`] when the file cannot be read,
    /// [`StateplaneError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, StateplaneError> {
        let content =
            std::fs::read_to_string(path).map_err(StateplaneError::Io)?;
        toml::from_str(&content)
            .map_err(|e| StateplaneError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`StateplaneError::Io`] on write failure,
    /// [`StateplaneError::OptionsParse`] when serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), StateplaneError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StateplaneError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StateplaneError::Io)?;
        }
        std::fs::write(path, content).map_err(StateplaneError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::Datum;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_overrides_one_section() {
        let parsed: Options =
            toml::from_str("[orbit]\nduration_ms = 250\n").unwrap();
        assert_eq!(parsed.orbit.duration_ms, 250);
        assert_eq!(parsed.graticule, GraticuleOptions::default());
        assert_eq!(parsed.scene.datum, Datum::Nad83);
    }

    #[test]
    fn datum_serializes_as_dataset_name() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        assert!(toml_str.contains("datum = \"NAD83\""));
    }

    #[test]
    fn schema_generation_does_not_panic() {
        let schema = Options::json_schema();
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("graticule"));
    }
}
