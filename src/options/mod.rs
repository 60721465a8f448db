//! Centralized runtime options with TOML preset support.
//!
//! All tweakable interaction settings live here. Options serialize
//! to/from TOML for presets, and `json_schema()` describes the
//! UI-exposed fields so a host options panel can be generated from it.

mod camera;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ShowroomError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[camera]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera control and transition parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ShowroomError> {
        let content =
            std::fs::read_to_string(path).map_err(ShowroomError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ShowroomError::ConfigParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ShowroomError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShowroomError::ConfigParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ShowroomError::Io)?;
        }
        std::fs::write(path, content).map_err(ShowroomError::Io)
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

    #[test]
    fn defaults_round_trip_through_toml() {
        let options = Options::default();
        let text = toml::to_string_pretty(&options).unwrap();
        let parsed: Options = toml::from_str(&text).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn partial_toml_keeps_defaults_elsewhere() {
        let parsed: Options = toml::from_str(
            r"
            [camera]
            rotate_speed = 8.0
            ",
        )
        .unwrap();
        assert_eq!(parsed.camera.rotate_speed, 8.0);
        assert_eq!(
            parsed.camera.pan_speed,
            CameraOptions::default().pan_speed
        );
    }

    #[test]
    fn schema_generation_succeeds() {
        let schema = Options::json_schema();
        let text = format!("{schema:?}");
        assert!(text.contains("camera"));
    }
}
