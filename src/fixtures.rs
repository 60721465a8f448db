//! Shared fake collaborators for unit tests.

use std::collections::HashSet;

use glam::{Quat, Vec2, Vec3};
use rustc_hash::FxHashMap;

use crate::appearance::{
    AppearanceBackend, AppearanceHandle, BlendMode, Channel, ChannelError,
    ShadingFamily, SharedAppearances,
};
use crate::camera::Pose;
use crate::part::{PartCatalog, PartConfig, PartId, PartRegistry};
use crate::picking::{RayHit, SceneQuery};
use crate::ui::UiSink;

/// The shared highlight handles used across all fixtures.
pub(crate) fn shared_appearances() -> SharedAppearances {
    SharedAppearances {
        hover: AppearanceHandle(100),
        selected: AppearanceHandle(101),
        hidden: AppearanceHandle(102),
        hover_hidden: AppearanceHandle(103),
    }
}

/// Hood (occludes the engine) and Engine, both with authored poses.
pub(crate) fn two_part_catalog() -> PartCatalog {
    PartCatalog {
        parts: vec![
            PartConfig {
                id: 1,
                name: Some("Hood".to_owned()),
                base_appearance: AppearanceHandle(10),
                occludes: vec![2],
                camera_pose: Some(Pose::new(
                    Vec3::new(0.0, 2.0, 4.0),
                    Quat::from_rotation_x(-0.4),
                )),
            },
            PartConfig {
                id: 2,
                name: Some("Engine".to_owned()),
                base_appearance: AppearanceHandle(11),
                occludes: Vec::new(),
                camera_pose: Some(Pose::new(
                    Vec3::new(1.5, 1.0, 1.0),
                    Quat::from_rotation_y(0.8),
                )),
            },
        ],
    }
}

/// Registry built from [`two_part_catalog`].
pub(crate) fn two_part_registry() -> PartRegistry {
    match PartRegistry::from_catalog(&two_part_catalog()) {
        Ok(registry) => registry,
        Err(e) => unreachable!("fixture catalog is valid: {e}"),
    }
}

/// Scene stub with a settable ray hit.
#[derive(Debug, Default)]
pub(crate) struct FakeScene {
    /// What the next ray cast returns.
    pub(crate) hit: Option<RayHit>,
}

impl FakeScene {
    /// A scene in which every ray misses.
    pub(crate) fn empty() -> Self {
        Self::default()
    }
}

impl SceneQuery for FakeScene {
    fn cast_ray(&self, _screen: Vec2) -> Option<RayHit> {
        self.hit
    }
}

/// Appearance backend that records every call for assertions.
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    /// Declared shading family per appearance (default: metallic).
    pub(crate) families: FxHashMap<AppearanceHandle, ShadingFamily>,
    /// Appearance currently displayed on each part.
    pub(crate) applied: FxHashMap<PartId, AppearanceHandle>,
    /// Every successful channel copy, in order.
    pub(crate) copies: Vec<(AppearanceHandle, AppearanceHandle, Channel)>,
    /// Every successful channel clear, in order.
    pub(crate) clears: Vec<(AppearanceHandle, Channel)>,
    /// Last blend mode set per appearance.
    pub(crate) blend_modes: FxHashMap<AppearanceHandle, BlendMode>,
    /// Channels whose copy/clear fails, to exercise error isolation.
    pub(crate) failing: HashSet<Channel>,
}

impl RecordingBackend {
    /// Empty backend; unknown appearances report the metallic family.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a metallic family for every part's base
    /// appearance in `registry`.
    pub(crate) fn for_registry(registry: &PartRegistry) -> Self {
        let mut backend = Self::new();
        for part in registry.iter() {
            backend
                .set_family(part.base_appearance, ShadingFamily::Metallic);
        }
        backend
    }

    /// Declare the shading family of an appearance.
    pub(crate) fn set_family(
        &mut self,
        appearance: AppearanceHandle,
        family: ShadingFamily,
    ) {
        let _ = self.families.insert(appearance, family);
    }

    /// Make copies/clears of `channel` fail.
    pub(crate) fn fail_channel(&mut self, channel: Channel) {
        let _ = self.failing.insert(channel);
    }
}

impl AppearanceBackend for RecordingBackend {
    fn shading_family(&self, appearance: AppearanceHandle) -> ShadingFamily {
        self.families
            .get(&appearance)
            .copied()
            .unwrap_or(ShadingFamily::Metallic)
    }

    fn set_appearance(
        &mut self,
        part: PartId,
        appearance: AppearanceHandle,
    ) {
        let _ = self.applied.insert(part, appearance);
    }

    fn copy_channel(
        &mut self,
        src: AppearanceHandle,
        dst: AppearanceHandle,
        channel: Channel,
    ) -> Result<(), ChannelError> {
        if self.failing.contains(&channel) {
            return Err(ChannelError {
                channel,
                reason: "missing on source".to_owned(),
            });
        }
        self.copies.push((src, dst, channel));
        Ok(())
    }

    fn clear_channel(
        &mut self,
        dst: AppearanceHandle,
        channel: Channel,
    ) -> Result<(), ChannelError> {
        if self.failing.contains(&channel) {
            return Err(ChannelError {
                channel,
                reason: "not clearable".to_owned(),
            });
        }
        self.clears.push((dst, channel));
        Ok(())
    }

    fn set_blend_mode(
        &mut self,
        appearance: AppearanceHandle,
        mode: BlendMode,
    ) {
        let _ = self.blend_modes.insert(appearance, mode);
    }
}

/// UI sink recording the latest label and panel state.
#[derive(Debug, Default)]
pub(crate) struct RecordingUi {
    /// Latest hover label text.
    pub(crate) hover_label: String,
    /// Latest selection label text.
    pub(crate) selection_label: String,
    /// Current selection panel visibility.
    pub(crate) panel_visible: bool,
}

impl UiSink for RecordingUi {
    fn set_hover_label(&mut self, text: &str) {
        self.hover_label = text.to_owned();
    }

    fn set_selection_label(&mut self, text: &str) {
        self.selection_label = text.to_owned();
    }

    fn show_selection_panel(&mut self, visible: bool) {
        self.panel_visible = visible;
    }
}
