use glam::Vec2;

/// One frame's worth of sampled input device state.
///
/// Button fields are *held* states; edges are derived by comparing
/// consecutive snapshots in the gesture tracker. The pointer position is
/// in viewport units (`0..1` across the viewport) so camera speeds stay
/// resolution-independent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// Pointer position in viewport units.
    pub pointer: Vec2,
    /// Primary (select) button held.
    pub select_held: bool,
    /// Secondary (orbit) button held.
    pub orbit_held: bool,
    /// Middle (pan) button held.
    pub pan_held: bool,
    /// Scroll wheel movement this frame (positive = toward the scene).
    pub scroll: f32,
    /// Whether the pointer currently overlaps a UI surface, sampled from
    /// the host UI system. This flag is the sole source of UI pick
    /// suppression.
    pub pointer_over_ui: bool,
}

impl InputSnapshot {
    /// A snapshot with the pointer at `pointer` and nothing pressed.
    #[must_use]
    pub fn at(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }
}
