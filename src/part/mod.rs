//! Interactive car parts: identity, authored catalogs, the runtime
//! registry, and the per-part visual state machine.

/// Authored part-configuration tables (TOML).
pub mod catalog;
/// Runtime registry built from a validated catalog.
pub mod registry;
/// Per-part visibility modes and appearance application.
pub mod state;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceHandle;
use crate::camera::Pose;

pub use catalog::{PartCatalog, PartConfig};
pub use registry::PartRegistry;
pub use state::{PartStates, VisibilityMode};

/// Stable identifier of an interactive part within a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct PartId(pub u32);

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part#{}", self.0)
    }
}

/// A named, selectable sub-mesh of the model.
///
/// Created once at session startup from the authored catalog and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct Part {
    /// Stable identifier.
    pub id: PartId,
    /// Human-readable name shown in hover/selection labels and buttons.
    pub display_name: String,
    /// The part's original material set, restored on deselect.
    pub base_appearance: AppearanceHandle,
    /// Parts visually suppressed while this part holds focus.
    pub occludes: Vec<PartId>,
    /// Authored framing shot the camera glides to on selection. `None`
    /// for placeholder records; selection then skips the transition.
    pub camera_pose: Option<Pose>,
    /// Whether this record was built from incomplete authoring data.
    pub placeholder: bool,
}
