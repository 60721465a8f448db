use glam::{Quat, Vec2, Vec3};

use super::{Pose, Transition};
use crate::options::CameraOptions;

/// Free-flying camera rig driven by pointer gestures.
///
/// Holds the current [`Pose`] and applies orbit / pan / dolly operations
/// from pointer deltas, plus a smoothed transition toward an authored
/// target pose. Manual control always preempts automation: any gesture
/// cancels an in-flight transition immediately.
///
/// Pointer deltas are in viewport units (fraction of the viewport moved
/// this frame); the host converts from pixels.
pub struct CameraRig {
    pose: Pose,
    transition: Option<Transition>,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    transition_rate: f32,
    arrival_epsilon: f32,
}

impl CameraRig {
    /// Create a rig at `initial` with tunables from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions, initial: Pose) -> Self {
        Self {
            pose: initial,
            transition: None,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            transition_rate: options.transition_rate,
            arrival_epsilon: options.arrival_epsilon,
        }
    }

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The in-flight transition, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Whether a transition is currently running.
    #[must_use]
    pub fn transition_active(&self) -> bool {
        self.transition.is_some()
    }

    /// Fraction of the current transition's distance already covered,
    /// `None` while no transition is running. Hosts use this to drive
    /// glide progress indicators.
    #[must_use]
    pub fn transition_progress(&self) -> Option<f32> {
        self.transition.as_ref().map(|t| t.progress(&self.pose))
    }

    /// Rotate the camera about `pivot`: world-up yaw from horizontal drag,
    /// camera-right pitch from vertical drag.
    ///
    /// `pivot` is the ray-hit point captured at gesture start; with no hit
    /// the camera rotates in place about its own position.
    pub fn orbit(&mut self, pivot: Option<Vec3>, delta: Vec2) {
        self.transition = None;
        let pivot = pivot.unwrap_or(self.pose.position);

        let right = self.pose.right();
        let pitch = Quat::from_axis_angle(
            right,
            (-delta.y * self.rotate_speed).to_radians(),
        );
        self.rotate_around(pivot, pitch);

        let yaw = Quat::from_axis_angle(
            Vec3::Y,
            (delta.x * self.rotate_speed).to_radians(),
        );
        self.rotate_around(pivot, yaw);
    }

    /// Translate the camera along its local right/up axes.
    pub fn pan(&mut self, delta: Vec2) {
        self.transition = None;
        let translation = self.pose.right() * (-delta.x * self.pan_speed)
            + self.pose.up() * (delta.y * self.pan_speed);
        self.pose.position += translation;
    }

    /// Move the camera along the pointer ray.
    ///
    /// With a hit point under the pointer the step is scaled by the
    /// remaining distance, so zoom decelerates on approach; aimed at empty
    /// space it moves along the view direction at a flat rate.
    pub fn dolly(&mut self, scroll: f32, hit: Option<Vec3>) {
        self.transition = None;
        match hit {
            Some(point) => {
                let offset = point - self.pose.position;
                let distance = offset.length();
                let direction = offset.normalize_or_zero();
                self.pose.position += direction * (distance * scroll);
            }
            None => {
                self.pose.position +=
                    self.pose.forward() * (scroll * self.zoom_speed);
            }
        }
    }

    /// Begin a smoothed transition toward `target`, replacing any
    /// transition already in flight (latest wins, no queueing).
    pub fn begin_transition(&mut self, target: Pose) {
        self.transition = Some(Transition::new(self.pose, target));
    }

    /// Drop the in-flight transition, if any.
    pub fn cancel_transition(&mut self) {
        self.transition = None;
    }

    /// Advance the in-flight transition by `dt` seconds.
    ///
    /// Position approaches the target by exponential smoothing and the
    /// orientation follows by spherical interpolation at the same rate.
    /// The transition ends once the position is within the arrival
    /// epsilon of the target.
    pub fn tick(&mut self, dt: f32) {
        let Some(transition) = self.transition else {
            return;
        };

        let alpha = (dt * self.transition_rate).clamp(0.0, 1.0);
        self.pose.position = self
            .pose
            .position
            .lerp(transition.target.position, alpha);
        self.pose.rotation = self
            .pose
            .rotation
            .slerp(transition.target.rotation, alpha)
            .normalize();

        if self.pose.position.distance(transition.target.position)
            < self.arrival_epsilon
        {
            self.transition = None;
        }
    }

    fn rotate_around(&mut self, pivot: Vec3, rotation: Quat) {
        self.pose.position = pivot + rotation * (self.pose.position - pivot);
        self.pose.rotation = (rotation * self.pose.rotation).normalize();
    }
}
