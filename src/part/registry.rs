//! Runtime part registry built from an authored catalog.
//!
//! Registry construction is the startup validation pass: incomplete
//! entries are repaired with placeholder records and surfaced as integrity
//! warnings, dangling occlusion references are dropped, and only
//! unrepairable structural problems (duplicate ids) fail the build.

use log::warn;
use rustc_hash::FxHashMap;

use super::{Part, PartCatalog, PartId};
use crate::error::ShowroomError;

/// All interactive parts of the loaded model, keyed by [`PartId`].
pub struct PartRegistry {
    parts: FxHashMap<PartId, Part>,
}

impl PartRegistry {
    /// Build the registry from an authored catalog.
    ///
    /// Entries missing a display name or camera pose become usable
    /// placeholder records; each gap is logged so the operator can fix the
    /// authoring before deployment. Occlusion references to unknown or
    /// self ids are dropped with a warning. Duplicate ids are a hard
    /// error.
    pub fn from_catalog(
        catalog: &PartCatalog,
    ) -> Result<Self, ShowroomError> {
        let known: Vec<PartId> =
            catalog.parts.iter().map(|c| PartId(c.id)).collect();

        let mut parts = FxHashMap::default();
        let mut incomplete: Vec<String> = Vec::new();

        for config in &catalog.parts {
            let id = PartId(config.id);
            let mut placeholder = false;

            let display_name = match &config.name {
                Some(name) if !name.trim().is_empty() => name.clone(),
                _ => {
                    placeholder = true;
                    incomplete.push(format!("{id}: missing display name"));
                    format!("Part {}", config.id)
                }
            };

            if config.camera_pose.is_none() {
                placeholder = true;
                incomplete.push(format!(
                    "{id} ({display_name}): missing camera pose"
                ));
            }

            let occludes: Vec<PartId> = config
                .occludes
                .iter()
                .map(|&raw| PartId(raw))
                .filter(|&occluded| {
                    if occluded == id {
                        warn!("{id}: dropping self-referential occlusion entry");
                        false
                    } else if known.contains(&occluded) {
                        true
                    } else {
                        warn!("{id}: dropping occlusion reference to unknown {occluded}");
                        false
                    }
                })
                .collect();

            let part = Part {
                id,
                display_name,
                base_appearance: config.base_appearance,
                occludes,
                camera_pose: config.camera_pose,
                placeholder,
            };

            if parts.insert(id, part).is_some() {
                return Err(ShowroomError::Catalog(format!(
                    "duplicate part id {id}"
                )));
            }
        }

        if !incomplete.is_empty() {
            warn!(
                "{} part(s) are missing required authoring data; placeholders \
                 substituted for this session. Fix before deployment:\n\t{}",
                incomplete.len(),
                incomplete.join("\n\t")
            );
        }

        Ok(Self { parts })
    }

    /// Look up a part by id.
    #[must_use]
    pub fn get(&self, id: PartId) -> Option<&Part> {
        self.parts.get(&id)
    }

    /// Whether `id` names a registered part.
    #[must_use]
    pub fn contains(&self, id: PartId) -> bool {
        self.parts.contains_key(&id)
    }

    /// Number of registered parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterate over all parts in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    /// The id → label list used to build the external part-button list,
    /// sorted case-insensitively by display name.
    #[must_use]
    pub fn sorted_labels(&self) -> Vec<(PartId, &str)> {
        let mut labels: Vec<(PartId, &str)> = self
            .parts
            .values()
            .map(|p| (p.id, p.display_name.as_str()))
            .collect();
        labels.sort_by(|a, b| {
            a.1.to_lowercase()
                .cmp(&b.1.to_lowercase())
                .then(a.0.cmp(&b.0))
        });
        labels
    }
}
