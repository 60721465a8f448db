//! The viewer's discrete interactive vocabulary.
//!
//! Operations that arrive from outside the per-tick pointer flow — the
//! generated part-button list, keyboard shortcuts, programmatic calls —
//! are expressed as [`ViewerCommand`] values and handed to
//! [`execute`](crate::engine::Showroom::execute). The controller never
//! cares how a command was triggered; a button click and an API call look
//! identical.

use crate::part::PartId;

/// A discrete operation the viewer can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    /// Select a part by id, exactly as if it had been clicked in the
    /// viewport: highlight it, ghost its occluded list, and glide the
    /// camera to its authored framing shot. Selecting the already
    /// selected part is a no-op.
    SelectPart(PartId),
    /// Deselect the current part, restoring it and its occluded list.
    ClearSelection,
}
