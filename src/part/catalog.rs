//! Authored part-configuration tables.
//!
//! A catalog is produced by authoring tools ahead of time and loaded once
//! at session startup; it is the only persisted input besides options
//! presets. Validation happens when the catalog is turned into a
//! [`PartRegistry`](super::PartRegistry).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceHandle;
use crate::camera::Pose;
use crate::error::ShowroomError;

/// One authored part entry.
///
/// `name` and `camera_pose` are optional on disk: a missing value is a
/// non-fatal authoring gap repaired with a placeholder at registry build
/// time (and surfaced as an integrity warning).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartConfig {
    /// Stable part id, unique within the catalog.
    pub id: u32,
    /// Display name; defaults to a placeholder derived from the id.
    #[serde(default)]
    pub name: Option<String>,
    /// Handle of the part's base appearance in the host material system.
    pub base_appearance: AppearanceHandle,
    /// Ids of parts to suppress while this part holds focus.
    #[serde(default)]
    pub occludes: Vec<u32>,
    /// Authored camera framing shot for this part.
    #[serde(default)]
    pub camera_pose: Option<Pose>,
}

/// The full authored table, one `[[parts]]` entry per interactive part.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartCatalog {
    /// Authored part entries.
    pub parts: Vec<PartConfig>,
}

impl PartCatalog {
    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ShowroomError> {
        let content =
            std::fs::read_to_string(path).map_err(ShowroomError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ShowroomError::ConfigParse(e.to_string()))
    }

    /// Save a catalog to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ShowroomError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShowroomError::ConfigParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ShowroomError::Io)?;
        }
        std::fs::write(path, content).map_err(ShowroomError::Io)
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;

    #[test]
    fn catalog_round_trips_through_toml() {
        let catalog = PartCatalog {
            parts: vec![PartConfig {
                id: 1,
                name: Some("Hood".to_owned()),
                base_appearance: AppearanceHandle(10),
                occludes: vec![2],
                camera_pose: Some(Pose::new(
                    Vec3::new(0.0, 2.0, 4.0),
                    Quat::IDENTITY,
                )),
            }],
        };

        let toml_text = toml::to_string_pretty(&catalog).unwrap();
        let parsed: PartCatalog = toml::from_str(&toml_text).unwrap();

        assert_eq!(parsed.parts.len(), 1);
        assert_eq!(parsed.parts[0].name.as_deref(), Some("Hood"));
        assert_eq!(parsed.parts[0].occludes, vec![2]);
        assert_eq!(parsed.parts[0].camera_pose, catalog.parts[0].camera_pose);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let toml_text = r#"
            [[parts]]
            id = 7
            base_appearance = 3
        "#;
        let parsed: PartCatalog = toml::from_str(toml_text).unwrap();
        assert_eq!(parsed.parts[0].id, 7);
        assert!(parsed.parts[0].name.is_none());
        assert!(parsed.parts[0].occludes.is_empty());
        assert!(parsed.parts[0].camera_pose.is_none());
    }
}
