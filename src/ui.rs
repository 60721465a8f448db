//! The UI label sink the interaction core drives.
//!
//! Widget layout and rendering belong to the host; the core only pushes
//! label text and panel visibility through this seam.

/// Host-side UI surface for hover/selection feedback.
pub trait UiSink {
    /// Show `text` in the hover label. Empty text clears it.
    fn set_hover_label(&mut self, text: &str);

    /// Show `text` in the selected-part label.
    fn set_selection_label(&mut self, text: &str);

    /// Show or hide the selection info panel.
    fn show_selection_panel(&mut self, visible: bool);
}

/// A sink that discards all updates, for headless hosts and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullUiSink;

impl UiSink for NullUiSink {
    fn set_hover_label(&mut self, _text: &str) {}
    fn set_selection_label(&mut self, _text: &str) {}
    fn show_selection_panel(&mut self, _visible: bool) {}
}
