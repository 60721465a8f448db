//! Top-level session facade wiring the registry, controller, and camera
//! rig together.

use crate::appearance::{AppearanceBackend, SharedAppearances};
use crate::camera::{CameraRig, Pose};
use crate::controller::{SelectionController, ViewerCommand};
use crate::error::ShowroomError;
use crate::input::InputSnapshot;
use crate::options::Options;
use crate::part::{PartCatalog, PartId, PartRegistry, VisibilityMode};
use crate::picking::SceneQuery;
use crate::ui::UiSink;

/// One configurator viewing session.
///
/// Owns everything the interaction core keeps between frames; the host
/// engine supplies the scene, appearance, and UI collaborators each call
/// and runs [`tick`](Self::tick) once per rendered frame.
///
/// ```ignore
/// let mut session = Showroom::new(catalog, shared, options, start_pose)?;
/// // per frame:
/// session.tick(dt, &input, &scene, &mut materials, &mut ui);
/// render(session.camera_pose());
/// // from a part-list button:
/// session.execute(ViewerCommand::SelectPart(id), &mut materials, &mut ui);
/// ```
pub struct Showroom {
    registry: PartRegistry,
    controller: SelectionController,
    rig: CameraRig,
    options: Options,
}

impl Showroom {
    /// Build a session from an authored catalog.
    ///
    /// Incomplete catalog entries degrade to logged placeholders; only
    /// structural catalog errors fail here.
    pub fn new(
        catalog: &PartCatalog,
        shared: SharedAppearances,
        options: Options,
        initial_pose: Pose,
    ) -> Result<Self, ShowroomError> {
        let registry = PartRegistry::from_catalog(catalog)?;
        let controller = SelectionController::new(&registry, shared);
        let rig = CameraRig::new(&options.camera, initial_pose);
        Ok(Self {
            registry,
            controller,
            rig,
            options,
        })
    }

    /// Run one frame: gestures and camera, pick/hover/selection, then the
    /// camera transition. Call once per rendered frame with that frame's
    /// input sample.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        scene: &dyn SceneQuery,
        backend: &mut dyn AppearanceBackend,
        ui: &mut dyn UiSink,
    ) {
        self.controller.tick(
            dt,
            input,
            &self.registry,
            &mut self.rig,
            scene,
            backend,
            ui,
        );
    }

    /// Perform a discrete command (part-list button click, shortcut, API
    /// call).
    pub fn execute(
        &mut self,
        command: ViewerCommand,
        backend: &mut dyn AppearanceBackend,
        ui: &mut dyn UiSink,
    ) {
        match command {
            ViewerCommand::SelectPart(id) => {
                self.controller.select_part(
                    id,
                    &self.registry,
                    &mut self.rig,
                    backend,
                    ui,
                );
            }
            ViewerCommand::ClearSelection => {
                self.controller.clear_selection(
                    &self.registry,
                    &mut self.rig,
                    backend,
                    ui,
                );
            }
        }
    }

    /// Current camera pose for the host's view matrix.
    #[must_use]
    pub fn camera_pose(&self) -> Pose {
        self.rig.pose()
    }

    /// Whether the camera is gliding toward an authored shot.
    #[must_use]
    pub fn camera_transition_active(&self) -> bool {
        self.rig.transition_active()
    }

    /// Fraction of the current camera glide already covered, `None`
    /// while no glide is running.
    #[must_use]
    pub fn camera_transition_progress(&self) -> Option<f32> {
        self.rig.transition_progress()
    }

    /// The currently selected part.
    #[must_use]
    pub fn selected(&self) -> Option<PartId> {
        self.controller.selected()
    }

    /// The currently hovered part.
    #[must_use]
    pub fn hovered(&self) -> Option<PartId> {
        self.controller.hovered()
    }

    /// Visibility mode of a part.
    #[must_use]
    pub fn mode(&self, id: PartId) -> VisibilityMode {
        self.controller.mode(id)
    }

    /// The registered parts.
    #[must_use]
    pub fn registry(&self) -> &PartRegistry {
        &self.registry
    }

    /// Sorted id → label list for building the external part-button
    /// list.
    #[must_use]
    pub fn part_labels(&self) -> Vec<(PartId, &str)> {
        self.registry.sorted_labels()
    }

    /// The session's options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
