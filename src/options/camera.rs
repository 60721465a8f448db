use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Orbit sensitivity, degrees per viewport unit of drag.
    #[schemars(title = "Rotate Speed", range(min = 1.0, max = 10.0), extend("step" = 0.5))]
    pub rotate_speed: f32,
    /// Pan sensitivity, world units per viewport unit of drag.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Dolly speed for scrolls aimed at empty space.
    #[schemars(title = "Zoom Speed", range(min = 1.0, max = 5.0), extend("step" = 0.25))]
    pub zoom_speed: f32,
    /// Exponential smoothing rate of the camera glide toward an authored
    /// shot (per second; higher arrives faster).
    #[schemars(title = "Transition Speed", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub transition_rate: f32,
    /// Distance to the target pose below which a transition ends, world
    /// units.
    #[schemars(skip)]
    pub arrival_epsilon: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: 5.0,
            pan_speed: 0.5,
            zoom_speed: 1.0,
            transition_rate: 1.0,
            arrival_epsilon: 0.01,
        }
    }
}
