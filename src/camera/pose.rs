use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A camera pose: world-space position and orientation.
///
/// Right-handed, Y-up; an identity orientation looks down -Z. Authored
/// framing shots in a part catalog deserialize into this type directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
}

impl Pose {
    /// Identity pose at the origin.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Construct a pose from position and orientation.
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// View direction (-Z in local space).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Local right axis (+X).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Local up axis (+Y).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
