// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Allowances: interaction math compares floats and mixes short names
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::too_many_arguments)]

//! Interaction core for an interactive 3D car-configurator viewer.
//!
//! The host engine renders the model, owns the scene graph and material
//! system, and lays out the UI; this crate owns what happens between a
//! frame's input sample and the next draw: which part is hovered or
//! selected, what every part currently looks like, and where the camera
//! is. Hovering highlights a part, clicking selects it — ghosting the
//! parts that would block the view and gliding the camera to the part's
//! authored framing shot — and clicking empty space restores everything.
//!
//! # Key entry points
//!
//! - [`engine::Showroom`] — a full viewing session, ticked once per frame
//! - [`controller::SelectionController`] — the hover/selection state
//!   machine
//! - [`camera::CameraRig`] — orbit/pan/dolly and smoothed pose
//!   transitions
//! - [`part::PartCatalog`] — the authored part table loaded at startup
//! - [`options::Options`] — tunable interaction parameters (TOML presets)
//!
//! # Architecture
//!
//! Everything runs single-threaded inside one `tick(dt, input, ...)` call
//! per rendered frame, in a fixed order: gesture/camera update, then
//! picking and hover/selection transitions, then the camera transition
//! step. The host is reached only through three small traits:
//! [`picking::SceneQuery`] (ray casts),
//! [`appearance::AppearanceBackend`] (material display and channel
//! copies), and [`ui::UiSink`] (labels and the selection panel).

pub mod appearance;
pub mod camera;
pub mod controller;
pub mod engine;
pub mod error;
pub mod ground;
pub mod input;
pub mod options;
pub mod part;
pub mod picking;
pub mod ui;

#[cfg(test)]
pub(crate) mod fixtures;
