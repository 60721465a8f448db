//! In-flight smoothed camera movement toward a target pose.

use super::Pose;

/// An active camera transition.
///
/// Source and target are copied by value when the transition starts; the
/// target is not tracked live. There is no queue — starting a new
/// transition or any manual camera gesture replaces/cancels this one.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    /// Pose at the moment the transition started.
    pub source: Pose,
    /// Authored pose being approached.
    pub target: Pose,
}

impl Transition {
    /// Start a transition from `source` toward `target`.
    #[must_use]
    pub fn new(source: Pose, target: Pose) -> Self {
        Self { source, target }
    }

    /// Fraction of the source-to-target distance already covered by
    /// `current`, in `[0, 1]`. Degenerate zero-length transitions report
    /// completion.
    #[must_use]
    pub fn progress(&self, current: &Pose) -> f32 {
        let total = self.source.position.distance(self.target.position);
        if total <= f32::EPSILON {
            return 1.0;
        }
        let remaining = current.position.distance(self.target.position);
        (1.0 - remaining / total).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;

    #[test]
    fn progress_runs_zero_to_one() {
        let source = Pose::new(Vec3::ZERO, Quat::IDENTITY);
        let target = Pose::new(Vec3::new(10.0, 0.0, 0.0), Quat::IDENTITY);
        let t = Transition::new(source, target);

        assert_eq!(t.progress(&source), 0.0);
        let halfway = Pose::new(Vec3::new(5.0, 0.0, 0.0), Quat::IDENTITY);
        assert!((t.progress(&halfway) - 0.5).abs() < 1e-6);
        assert_eq!(t.progress(&target), 1.0);
    }

    #[test]
    fn zero_length_transition_is_complete() {
        let pose = Pose::IDENTITY;
        let t = Transition::new(pose, pose);
        assert_eq!(t.progress(&pose), 1.0);
    }
}
