//! The single-focus selection state machine and per-tick orchestrator.
//!
//! [`SelectionController`] owns the currently hovered and selected parts,
//! the per-part visibility table, and the gesture tracker. Once per
//! rendered frame the host hands it the frame's input snapshot together
//! with the scene/appearance/UI collaborators; the controller decides
//! hover and selection transitions, mutates part states, and drives the
//! camera rig.

/// Discrete commands delivered from buttons and programmatic callers.
pub mod command;

use crate::appearance::{AppearanceBackend, SharedAppearances};
use crate::camera::CameraRig;
use crate::input::{Gesture, GestureTracker, InputSnapshot, TickInput};
use crate::part::{PartId, PartRegistry, PartStates, VisibilityMode};
use crate::picking::{pick, PickResult, SceneQuery};
use crate::ui::UiSink;

pub use command::ViewerCommand;

/// Selection and hover state machine for one viewer session.
///
/// Invariants upheld across every tick:
/// - at most one part is selected at a time (latest selection wins);
/// - changing the selection restores the previous part and its occluded
///   list before the new part takes focus;
/// - hover never overlays the selection appearance;
/// - camera drags take priority over picking, and any drag or new
///   selection cancels an in-flight camera transition.
pub struct SelectionController {
    hovered: Option<PartId>,
    selected: Option<PartId>,
    states: PartStates,
    gestures: GestureTracker,
}

impl SelectionController {
    /// Create a controller with nothing hovered or selected.
    #[must_use]
    pub fn new(registry: &PartRegistry, shared: SharedAppearances) -> Self {
        Self {
            hovered: None,
            selected: None,
            states: PartStates::new(registry, shared),
            gestures: GestureTracker::new(),
        }
    }

    /// The part currently under the pointer, if hover tracking is active.
    #[must_use]
    pub fn hovered(&self) -> Option<PartId> {
        self.hovered
    }

    /// The part currently holding focus.
    #[must_use]
    pub fn selected(&self) -> Option<PartId> {
        self.selected
    }

    /// Visibility mode of a part.
    #[must_use]
    pub fn mode(&self, id: PartId) -> VisibilityMode {
        self.states.mode(id)
    }

    /// Iterate over every part's visibility mode.
    pub fn modes(
        &self,
    ) -> impl Iterator<Item = (PartId, VisibilityMode)> + '_ {
        self.states.iter()
    }

    /// Run one frame of the interaction loop.
    ///
    /// Order within the frame: gesture/camera update, then pick and
    /// hover/selection transitions (skipped while a drag is active),
    /// then the camera transition tick. Everything completes before
    /// returning; there is no internal scheduling.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        registry: &PartRegistry,
        rig: &mut CameraRig,
        scene: &dyn SceneQuery,
        backend: &mut dyn AppearanceBackend,
        ui: &mut dyn UiSink,
    ) {
        let frame = self.gestures.advance(input, scene);

        let dragging = self.apply_gestures(&frame, input, rig, scene);
        if !dragging {
            // The user is not aiming at parts mid-drag; picking only
            // runs on non-drag frames.
            self.update_hover_and_selection(
                &frame, input, registry, rig, scene, backend, ui,
            );
        }

        rig.tick(dt);
    }

    /// Select `id` through the command path (part-list button, API call).
    ///
    /// Runs the same routine as a viewport click: no-op when already
    /// selected, previous selection fully restored first, hover tracking
    /// cleared, camera sent toward the authored pose.
    pub fn select_part(
        &mut self,
        id: PartId,
        registry: &PartRegistry,
        rig: &mut CameraRig,
        backend: &mut dyn AppearanceBackend,
        ui: &mut dyn UiSink,
    ) {
        if !registry.contains(id) {
            log::warn!("ignoring selection of unknown {id}");
            return;
        }
        self.select(id, registry, rig, backend, ui);
    }

    /// Deselect the current part, if any, restoring it and its occluded
    /// list. A transition still gliding toward the deselected part's
    /// pose is dropped.
    pub fn clear_selection(
        &mut self,
        registry: &PartRegistry,
        rig: &mut CameraRig,
        backend: &mut dyn AppearanceBackend,
        ui: &mut dyn UiSink,
    ) {
        if let Some(previous) = self.selected.take() {
            self.states.restore(previous, registry, backend);
            rig.cancel_transition();
            ui.set_selection_label("");
            ui.show_selection_panel(false);
        }
    }

    /// Drive the rig from this frame's drag gesture and scroll. Returns
    /// whether a drag is active (which suppresses picking this frame).
    fn apply_gestures(
        &mut self,
        frame: &TickInput,
        input: &InputSnapshot,
        rig: &mut CameraRig,
        scene: &dyn SceneQuery,
    ) -> bool {
        match frame.gesture {
            Some(Gesture::Orbit { pivot }) => {
                rig.orbit(pivot, frame.pointer_delta);
            }
            Some(Gesture::Pan) => rig.pan(frame.pointer_delta),
            None => {}
        }

        if input.scroll != 0.0 {
            let hit = scene.cast_ray(input.pointer).map(|h| h.point);
            rig.dolly(input.scroll, hit);
        }

        frame.gesture.is_some()
    }

    fn update_hover_and_selection(
        &mut self,
        frame: &TickInput,
        input: &InputSnapshot,
        registry: &PartRegistry,
        rig: &mut CameraRig,
        scene: &dyn SceneQuery,
        backend: &mut dyn AppearanceBackend,
        ui: &mut dyn UiSink,
    ) {
        let result = pick(scene, input.pointer, input.pointer_over_ui);
        match result {
            PickResult::Part(id) => self.on_part_under_pointer(
                id, frame, registry, rig, backend, ui,
            ),
            PickResult::Miss | PickResult::Suppressed => {
                // Leaving the selected part for empty space must not
                // flicker its highlight.
                if self.hovered.is_some() && self.hovered == self.selected {
                    return;
                }
                if let Some(previous) = self.hovered.take() {
                    self.states
                        .reset_to_baseline(previous, registry, backend);
                    ui.set_hover_label("");
                }
                // Clicking empty space deselects, but never through UI.
                if frame.select_pressed
                    && result == PickResult::Miss
                    && self.selected.is_some()
                {
                    self.clear_selection(registry, rig, backend, ui);
                }
            }
        }
    }

    fn on_part_under_pointer(
        &mut self,
        id: PartId,
        frame: &TickInput,
        registry: &PartRegistry,
        rig: &mut CameraRig,
        backend: &mut dyn AppearanceBackend,
        ui: &mut dyn UiSink,
    ) {
        let is_selected = self.selected == Some(id);

        if self.hovered != Some(id) && !is_selected {
            // Fresh hover target.
            if let Some(previous) = self.hovered.take() {
                if self.selected != Some(previous) {
                    self.states
                        .reset_to_baseline(previous, registry, backend);
                }
            }
            self.hovered = Some(id);
            self.states.apply_hovered(id, registry, backend);
            if let Some(part) = registry.get(id) {
                ui.set_hover_label(&part.display_name);
            }
        } else if self.hovered != Some(id) && is_selected {
            // Hovering back onto the selected part: the selection
            // appearance already takes precedence, so drop hover
            // tracking instead of overlaying it.
            if let Some(previous) = self.hovered.take() {
                self.states.reset_to_baseline(previous, registry, backend);
                ui.set_hover_label("");
            }
        }

        if frame.select_pressed && !is_selected {
            self.select(id, registry, rig, backend, ui);
        }
    }

    fn select(
        &mut self,
        id: PartId,
        registry: &PartRegistry,
        rig: &mut CameraRig,
        backend: &mut dyn AppearanceBackend,
        ui: &mut dyn UiSink,
    ) {
        if self.selected == Some(id) {
            return;
        }

        if let Some(previous) = self.selected.take() {
            self.states.restore(previous, registry, backend);
        }
        // Drop hover tracking before the selection appearance goes on,
        // so a stale hover can never overwrite it later.
        if let Some(previous) = self.hovered.take() {
            if previous != id {
                self.states.reset_to_baseline(previous, registry, backend);
            }
        }

        self.selected = Some(id);
        self.states.apply_selected(id, registry, backend);

        let Some(part) = registry.get(id) else {
            return;
        };
        ui.set_selection_label(&part.display_name);
        ui.show_selection_panel(true);

        match part.camera_pose {
            Some(pose) => rig.begin_transition(pose),
            // Placeholder records have no authored shot; the camera
            // stays put. A glide toward the previous selection must
            // not keep running either.
            None => {
                rig.cancel_transition();
                log::debug!("{id} has no authored camera pose");
            }
        }
    }
}
