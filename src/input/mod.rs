//! Per-frame input snapshots and pointer-gesture tracking.
//!
//! The crate has no event loop, timers, or threads: the host samples its
//! input devices once per rendered frame, fills an [`InputSnapshot`], and
//! passes it to the tick entry point. Press/release edges and drag
//! gestures are derived here from consecutive snapshots.

/// Drag-gesture derivation from consecutive snapshots.
pub mod gesture;
/// The per-frame input sample supplied by the host.
pub mod snapshot;

pub use gesture::{Gesture, GestureTracker, TickInput};
pub use snapshot::InputSnapshot;
