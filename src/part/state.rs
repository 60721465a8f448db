//! Per-part visibility modes and appearance application.
//!
//! Each part is in exactly one [`VisibilityMode`] at any time, and
//! [`PartStates`] is the only mutator. The shared hover/selected
//! appearances are reused across all parts, so the part's own shading
//! detail is copied onto them (per the base appearance's channel profile)
//! right before display; the hidden look is a fixed translucent
//! appearance applied as-is.

use log::warn;
use rustc_hash::FxHashMap;

use super::{PartId, PartRegistry};
use crate::appearance::{
    apply_profile, AppearanceBackend, SharedAppearances,
};

/// Visual/selection state of a single part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityMode {
    /// Base appearance, not interacted with.
    #[default]
    Normal,
    /// Pointer resting on the part; shared hover appearance shown.
    Hovered,
    /// The single focused part; shared selected appearance shown.
    Selected,
    /// Ghosted out because a different part holds focus.
    HiddenByFocus,
    /// Suppressed by focus *and* under the pointer; keeps the ghosted
    /// look (no detail copy) with a hover tint.
    HoveredHidden,
}

/// The visibility-mode table for every registered part, plus the shared
/// highlight appearances applied on transitions.
pub struct PartStates {
    modes: FxHashMap<PartId, VisibilityMode>,
    shared: SharedAppearances,
}

impl PartStates {
    /// Create the table with every registered part in
    /// [`VisibilityMode::Normal`].
    #[must_use]
    pub fn new(registry: &PartRegistry, shared: SharedAppearances) -> Self {
        let modes = registry
            .iter()
            .map(|part| (part.id, VisibilityMode::Normal))
            .collect();
        Self { modes, shared }
    }

    /// Current mode of a part. Unknown ids report `Normal`.
    #[must_use]
    pub fn mode(&self, id: PartId) -> VisibilityMode {
        self.modes.get(&id).copied().unwrap_or_default()
    }

    /// Iterate over all tracked modes.
    pub fn iter(&self) -> impl Iterator<Item = (PartId, VisibilityMode)> + '_ {
        self.modes.iter().map(|(&id, &mode)| (id, mode))
    }

    /// Show the hover highlight on a part.
    ///
    /// A part suppressed by focus keeps its ghosted look (no detail is
    /// restored) and only switches to the hover-hidden tint; otherwise
    /// the part's shading detail is copied onto the shared hover
    /// appearance first.
    pub fn apply_hovered(
        &mut self,
        id: PartId,
        registry: &PartRegistry,
        backend: &mut dyn AppearanceBackend,
    ) {
        let Some(part) = registry.get(id) else {
            warn!("apply_hovered: unknown {id}");
            return;
        };
        if self.mode(id) == VisibilityMode::HiddenByFocus {
            backend.set_appearance(id, self.shared.hover_hidden);
            self.set_mode(id, VisibilityMode::HoveredHidden);
        } else {
            apply_profile(backend, part.base_appearance, self.shared.hover);
            backend.set_appearance(id, self.shared.hover);
            self.set_mode(id, VisibilityMode::Hovered);
        }
    }

    /// Show the selection highlight on a part and ghost out its occluded
    /// list.
    ///
    /// The detail copy always reads from the part's base appearance, not
    /// whatever is currently displayed, so selecting a previously hidden
    /// part restores its full detail.
    pub fn apply_selected(
        &mut self,
        id: PartId,
        registry: &PartRegistry,
        backend: &mut dyn AppearanceBackend,
    ) {
        let Some(part) = registry.get(id) else {
            warn!("apply_selected: unknown {id}");
            return;
        };
        apply_profile(backend, part.base_appearance, self.shared.selected);
        backend.set_appearance(id, self.shared.selected);
        self.set_mode(id, VisibilityMode::Selected);

        for &occluded in &part.occludes {
            self.apply_hidden(occluded, registry, backend);
        }
    }

    /// Ghost out a part with the fixed translucent hidden appearance.
    pub fn apply_hidden(
        &mut self,
        id: PartId,
        registry: &PartRegistry,
        backend: &mut dyn AppearanceBackend,
    ) {
        if !registry.contains(id) {
            warn!("apply_hidden: unknown {id}");
            return;
        }
        backend.set_appearance(id, self.shared.hidden);
        self.set_mode(id, VisibilityMode::HiddenByFocus);
    }

    /// Undo a selection: reapply the part's base appearance and return
    /// every part in its occluded list to `Normal`.
    pub fn restore(
        &mut self,
        id: PartId,
        registry: &PartRegistry,
        backend: &mut dyn AppearanceBackend,
    ) {
        let Some(part) = registry.get(id) else {
            warn!("restore: unknown {id}");
            return;
        };
        backend.set_appearance(id, part.base_appearance);
        self.set_mode(id, VisibilityMode::Normal);

        for &occluded in &part.occludes {
            if let Some(other) = registry.get(occluded) {
                backend.set_appearance(occluded, other.base_appearance);
                self.set_mode(occluded, VisibilityMode::Normal);
            }
        }
    }

    /// End a hover without a new hover target: back to the ghosted look
    /// if the part is suppressed by focus, else back to the base
    /// appearance.
    pub fn reset_to_baseline(
        &mut self,
        id: PartId,
        registry: &PartRegistry,
        backend: &mut dyn AppearanceBackend,
    ) {
        let Some(part) = registry.get(id) else {
            warn!("reset_to_baseline: unknown {id}");
            return;
        };
        match self.mode(id) {
            VisibilityMode::HoveredHidden => {
                backend.set_appearance(id, self.shared.hidden);
                self.set_mode(id, VisibilityMode::HiddenByFocus);
            }
            VisibilityMode::Hovered => {
                backend.set_appearance(id, part.base_appearance);
                self.set_mode(id, VisibilityMode::Normal);
            }
            // Selected/hidden/normal parts are not hover targets; leave
            // them alone.
            _ => {}
        }
    }

    fn set_mode(&mut self, id: PartId, mode: VisibilityMode) {
        if let Some(slot) = self.modes.get_mut(&id) {
            *slot = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{shared_appearances, two_part_registry, RecordingBackend};
    use crate::part::PartId;

    const HOOD: PartId = PartId(1);
    const ENGINE: PartId = PartId(2);

    #[test]
    fn hover_copies_detail_onto_shared_appearance() {
        let registry = two_part_registry();
        let mut backend = RecordingBackend::for_registry(&registry);
        let mut states = PartStates::new(&registry, shared_appearances());

        states.apply_hovered(HOOD, &registry, &mut backend);

        assert_eq!(states.mode(HOOD), VisibilityMode::Hovered);
        assert_eq!(backend.applied[&HOOD], shared_appearances().hover);
        assert!(!backend.copies.is_empty());
    }

    #[test]
    fn hidden_part_hover_keeps_suppressed_look() {
        let registry = two_part_registry();
        let mut backend = RecordingBackend::for_registry(&registry);
        let mut states = PartStates::new(&registry, shared_appearances());

        states.apply_hidden(ENGINE, &registry, &mut backend);
        backend.copies.clear();
        states.apply_hovered(ENGINE, &registry, &mut backend);

        assert_eq!(states.mode(ENGINE), VisibilityMode::HoveredHidden);
        assert_eq!(
            backend.applied[&ENGINE],
            shared_appearances().hover_hidden
        );
        // No detail restored on a suppressed part.
        assert!(backend.copies.is_empty());
    }

    #[test]
    fn selection_cascades_hidden_to_occluded_parts() {
        let registry = two_part_registry();
        let mut backend = RecordingBackend::for_registry(&registry);
        let mut states = PartStates::new(&registry, shared_appearances());

        states.apply_selected(HOOD, &registry, &mut backend);

        assert_eq!(states.mode(HOOD), VisibilityMode::Selected);
        assert_eq!(states.mode(ENGINE), VisibilityMode::HiddenByFocus);
        assert_eq!(backend.applied[&HOOD], shared_appearances().selected);
        assert_eq!(backend.applied[&ENGINE], shared_appearances().hidden);
    }

    #[test]
    fn restore_returns_part_and_occluded_list_to_normal() {
        let registry = two_part_registry();
        let mut backend = RecordingBackend::for_registry(&registry);
        let mut states = PartStates::new(&registry, shared_appearances());

        states.apply_selected(HOOD, &registry, &mut backend);
        states.restore(HOOD, &registry, &mut backend);

        assert_eq!(states.mode(HOOD), VisibilityMode::Normal);
        assert_eq!(states.mode(ENGINE), VisibilityMode::Normal);
        let hood_base = registry.get(HOOD).unwrap().base_appearance;
        let engine_base = registry.get(ENGINE).unwrap().base_appearance;
        assert_eq!(backend.applied[&HOOD], hood_base);
        assert_eq!(backend.applied[&ENGINE], engine_base);
    }

    #[test]
    fn baseline_reset_distinguishes_hidden_from_normal() {
        let registry = two_part_registry();
        let mut backend = RecordingBackend::for_registry(&registry);
        let mut states = PartStates::new(&registry, shared_appearances());

        // Plain hover ends back at the base appearance.
        states.apply_hovered(HOOD, &registry, &mut backend);
        states.reset_to_baseline(HOOD, &registry, &mut backend);
        assert_eq!(states.mode(HOOD), VisibilityMode::Normal);

        // Hover over a suppressed part ends back at the ghosted look.
        states.apply_hidden(ENGINE, &registry, &mut backend);
        states.apply_hovered(ENGINE, &registry, &mut backend);
        states.reset_to_baseline(ENGINE, &registry, &mut backend);
        assert_eq!(states.mode(ENGINE), VisibilityMode::HiddenByFocus);
        assert_eq!(backend.applied[&ENGINE], shared_appearances().hidden);
    }

    #[test]
    fn every_part_is_in_exactly_one_mode() {
        let registry = two_part_registry();
        let mut backend = RecordingBackend::for_registry(&registry);
        let mut states = PartStates::new(&registry, shared_appearances());

        states.apply_selected(HOOD, &registry, &mut backend);
        states.apply_hovered(ENGINE, &registry, &mut backend);

        let selected = states
            .iter()
            .filter(|&(_, m)| m == VisibilityMode::Selected)
            .count();
        assert_eq!(selected, 1);
        assert_eq!(states.iter().count(), registry.len());
    }
}
