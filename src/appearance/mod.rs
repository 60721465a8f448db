//! Appearance handles, shading families, and the rendering-backend seam.
//!
//! The crate never touches GPU materials directly. Appearances are opaque
//! handles minted by the host engine; the [`AppearanceBackend`] trait is the
//! only channel through which the selection logic changes what a part looks
//! like. A single shared hover/selected appearance is reused across every
//! part, so per-part detail (textures, scalar parameters) is copied onto it
//! channel by channel before use instead of swapping whole materials.

/// Per-family channel copy rules.
pub mod profile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use profile::{apply_profile, ChannelProfile};

/// Opaque handle to a host-side material/texture set.
///
/// Minted by the host engine; the crate only stores and forwards these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct AppearanceHandle(pub u32);

impl fmt::Display for AppearanceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "appearance#{}", self.0)
    }
}

/// Destination blend state for an appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Fully opaque, depth-written.
    Opaque,
    /// Alpha-blended transparency.
    AlphaBlend,
}

/// A single copyable shading parameter.
///
/// The superset of what the two lit workflows expose; each
/// [`ShadingFamily`] copies only the subset its profile declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Base color / main texture.
    Albedo,
    /// Scalar smoothness.
    Glossiness,
    /// Smoothness map multiplier.
    GlossMapScale,
    /// Which texture channel carries smoothness.
    SmoothnessChannel,
    /// Scalar metallic (metallic workflow).
    Metallic,
    /// Metallic/gloss map (metallic workflow).
    MetallicGlossMap,
    /// Specular tint color (specular workflow).
    SpecularColor,
    /// Specular/gloss map (specular workflow).
    SpecularGlossMap,
    /// Specular highlight toggle.
    SpecularHighlights,
    /// Glossy reflection toggle.
    GlossyReflections,
    /// Normal map intensity.
    NormalScale,
    /// Tangent-space normal map.
    NormalMap,
    /// Height-map parallax scale.
    ParallaxScale,
    /// Height map for parallax.
    ParallaxMap,
    /// Ambient-occlusion strength.
    OcclusionStrength,
    /// Ambient-occlusion map.
    OcclusionMap,
    /// Emission color.
    EmissionColor,
    /// Emission map.
    EmissionMap,
    /// Detail-layer mask.
    DetailMask,
    /// Detail albedo overlay.
    DetailAlbedoMap,
    /// Detail normal intensity.
    DetailNormalScale,
    /// Detail normal map.
    DetailNormalMap,
}

/// The shader category of a base appearance, which determines the channel
/// copy rule applied when mirroring it onto a shared highlight appearance.
///
/// A closed set: backends report [`ShadingFamily::Unknown`] for anything
/// else, and appearance application becomes a logged no-op rather than a
/// guess. Supporting a new shader means adding a variant and its
/// [`ChannelProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadingFamily {
    /// Metallic-workflow lit shader.
    Metallic,
    /// Specular-workflow lit shader.
    Specular,
    /// Simple unlit/translucent shader used for light-emitting parts
    /// (headlights, brake lights). Only albedo survives the copy.
    UnlitTransparent,
    /// No copy rule exists for this shader.
    Unknown,
}

/// Failure to copy or clear a single appearance channel.
///
/// Channel copies are independent: one failed channel is logged and
/// skipped, the rest proceed.
#[derive(Debug, Clone)]
pub struct ChannelError {
    /// The channel that failed.
    pub channel: Channel,
    /// Backend-provided reason (missing map, incompatible format, ...).
    pub reason: String,
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "channel {:?}: {}", self.channel, self.reason)
    }
}

impl std::error::Error for ChannelError {}

/// The host engine's material system, as seen by the selection logic.
///
/// All methods operate on [`AppearanceHandle`]s minted by the host;
/// `part` arguments identify which mesh displays the appearance.
pub trait AppearanceBackend {
    /// Report the declared shading family of an appearance.
    fn shading_family(&self, appearance: AppearanceHandle) -> ShadingFamily;

    /// Display `appearance` on the given part's mesh.
    fn set_appearance(
        &mut self,
        part: crate::part::PartId,
        appearance: AppearanceHandle,
    );

    /// Copy one shading channel from `src` to `dst`.
    fn copy_channel(
        &mut self,
        src: AppearanceHandle,
        dst: AppearanceHandle,
        channel: Channel,
    ) -> Result<(), ChannelError>;

    /// Reset one shading channel on `dst` to its neutral value.
    fn clear_channel(
        &mut self,
        dst: AppearanceHandle,
        channel: Channel,
    ) -> Result<(), ChannelError>;

    /// Switch an appearance between opaque and alpha-blended rendering.
    fn set_blend_mode(&mut self, appearance: AppearanceHandle, mode: BlendMode);
}

/// The shared highlight appearances reused across all parts.
///
/// One of each per session, minted by the host at startup. `hover` and
/// `selected` receive per-part channel copies before display; `hidden` and
/// `hover_hidden` are fixed translucent looks applied as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedAppearances {
    /// Highlight shown while the pointer rests on a part.
    pub hover: AppearanceHandle,
    /// Highlight shown on the selected part.
    pub selected: AppearanceHandle,
    /// Fixed translucent look for parts suppressed by the current focus.
    pub hidden: AppearanceHandle,
    /// Hover highlight for a part that is also suppressed by focus.
    pub hover_hidden: AppearanceHandle,
}
