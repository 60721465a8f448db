//! Derives press edges and drag gestures from consecutive input
//! snapshots.

use glam::{Vec2, Vec3};

use super::InputSnapshot;
use crate::picking::SceneQuery;

/// An active camera-manipulation drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Orbiting; `pivot` is the ray-hit point captured at gesture start,
    /// `None` when the press happened over empty space (rotate in place).
    Orbit {
        /// World-space rotation pivot for this drag.
        pivot: Option<Vec3>,
    },
    /// Panning along the camera's local axes.
    Pan,
}

/// What one frame of input amounts to, after edge/gesture derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Pointer movement since the previous frame, viewport units.
    pub pointer_delta: Vec2,
    /// The select button went down this frame (edge, not held).
    pub select_pressed: bool,
    /// The drag gesture active this frame, if any.
    pub gesture: Option<Gesture>,
}

/// Tracks pointer history and button states across frames and owns the
/// active drag gesture.
///
/// The orbit pivot is resolved once, at the press edge, by casting the
/// pointer ray into the scene; the pivot then stays fixed for the whole
/// drag even as the pointer moves off the object.
#[derive(Debug, Default)]
pub struct GestureTracker {
    last_pointer: Option<Vec2>,
    select_was_held: bool,
    orbit_was_held: bool,
    pan_was_held: bool,
    active: Option<Gesture>,
}

impl GestureTracker {
    /// Create a tracker with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The gesture currently in progress.
    #[must_use]
    pub fn active(&self) -> Option<Gesture> {
        self.active
    }

    /// Fold one snapshot into the tracker and report this frame's edges,
    /// pointer delta, and gesture.
    pub fn advance(
        &mut self,
        input: &InputSnapshot,
        scene: &dyn SceneQuery,
    ) -> TickInput {
        let pointer_delta = self
            .last_pointer
            .map_or(Vec2::ZERO, |last| input.pointer - last);
        self.last_pointer = Some(input.pointer);

        let select_pressed = input.select_held && !self.select_was_held;
        let orbit_pressed = input.orbit_held && !self.orbit_was_held;
        let pan_pressed = input.pan_held && !self.pan_was_held;
        self.select_was_held = input.select_held;
        self.orbit_was_held = input.orbit_held;
        self.pan_was_held = input.pan_held;

        // Releases end the matching gesture.
        match self.active {
            Some(Gesture::Orbit { .. }) if !input.orbit_held => {
                self.active = None;
            }
            Some(Gesture::Pan) if !input.pan_held => {
                self.active = None;
            }
            _ => {}
        }

        // Orbit takes priority when both buttons go down together.
        if orbit_pressed {
            let pivot = scene.cast_ray(input.pointer).map(|hit| hit.point);
            self.active = Some(Gesture::Orbit { pivot });
        } else if pan_pressed && self.active.is_none() {
            self.active = Some(Gesture::Pan);
        }

        TickInput {
            pointer_delta,
            select_pressed,
            gesture: self.active,
        }
    }
}
