//! Camera system for the configurator viewport.
//!
//! Provides a free-flying camera rig with orbit, pan, and dolly driven by
//! pointer deltas, plus a smoothed pose transition used when a part is
//! selected.

/// Camera pose (position + orientation) and serialization.
pub mod pose;
/// Pointer-driven camera rig with transition support.
pub mod rig;
/// In-flight smoothed movement toward a target pose.
pub mod transition;

pub use pose::Pose;
pub use rig::CameraRig;
pub use transition::Transition;
