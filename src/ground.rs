//! Ground-plane visibility helper.
//!
//! The showroom floor blocks the view once the camera dips below it, so
//! its mesh and collider are switched off while the camera is under the
//! plane's top face and restored together when it rises back. The host
//! applies the reported change to its renderer and collider components.

/// Tracks whether the ground plane should currently be shown.
#[derive(Debug, Clone, Copy)]
pub struct GroundPlane {
    top_height: f32,
    visible: bool,
}

impl GroundPlane {
    /// Create a tracker for a plane whose top face sits at `top_height`
    /// on the world Y axis. Starts visible.
    #[must_use]
    pub fn new(top_height: f32) -> Self {
        Self {
            top_height,
            visible: true,
        }
    }

    /// Whether the plane is currently shown.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Re-evaluate against the camera's height. Returns the new
    /// visibility when it changed this frame, `None` otherwise. Hiding
    /// and showing cover both the mesh and its collider, so a hidden
    /// floor neither renders nor swallows picking rays.
    pub fn update(&mut self, camera_height: f32) -> Option<bool> {
        let should_show = camera_height >= self.top_height;
        if should_show == self.visible {
            return None;
        }
        self.visible = should_show;
        Some(should_show)
    }
}
