//! Screen-point picking against the host scene.
//!
//! The scene graph and its ray caster live in the host engine; this module
//! only resolves "what interactive part, if any, is under this screen
//! point" and enforces the rule that UI surfaces always win pointer focus
//! over world geometry.

use glam::{Vec2, Vec3};

use crate::part::PartId;

/// A ray/scene intersection returned by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The interactive part the hit object belongs to, if the object is
    /// tagged as one. Ground, background props, etc. hit with `None`.
    pub part: Option<PartId>,
    /// World-space hit point.
    pub point: Vec3,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
}

/// Host-engine scene queries the interaction core depends on.
pub trait SceneQuery {
    /// Cast a ray from the viewport through `screen` and return the
    /// nearest intersection, if any.
    fn cast_ray(&self, screen: Vec2) -> Option<RayHit>;
}

/// Outcome of a pick query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickResult {
    /// Pointer is over UI; world picking is suppressed entirely.
    Suppressed,
    /// Ray hit nothing interactive (background or untagged geometry).
    Miss,
    /// Topmost interactive part under the pointer.
    Part(PartId),
}

/// Resolve the interactive part under `screen`, or why there is none.
///
/// `pointer_over_ui` is the frame's UI-overlap flag from the input
/// snapshot; while it is set the pick short-circuits to
/// [`PickResult::Suppressed`] without casting — clicks and hovers never
/// reach world geometry through a UI surface.
#[must_use]
pub fn pick(
    scene: &dyn SceneQuery,
    screen: Vec2,
    pointer_over_ui: bool,
) -> PickResult {
    if pointer_over_ui {
        return PickResult::Suppressed;
    }
    match scene.cast_ray(screen) {
        Some(RayHit {
            part: Some(id), ..
        }) => PickResult::Part(id),
        _ => PickResult::Miss,
    }
}
