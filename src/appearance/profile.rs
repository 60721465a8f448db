//! Channel copy profiles, one per shading family.

use log::warn;

use super::{
    AppearanceBackend, AppearanceHandle, BlendMode, Channel, ShadingFamily,
};

/// The copy rule for one shading family: which channels to mirror from the
/// base appearance, which to reset, and whether a blend mode is forced on
/// the destination.
#[derive(Debug, Clone, Copy)]
pub struct ChannelProfile {
    /// Blend mode forced on the destination before copying, if any.
    pub blend: Option<BlendMode>,
    /// Channels mirrored from the base appearance.
    pub copied: &'static [Channel],
    /// Channels reset to neutral on the destination.
    pub cleared: &'static [Channel],
}

const METALLIC_COPIED: [Channel; 20] = [
    Channel::Albedo,
    Channel::Glossiness,
    Channel::GlossMapScale,
    Channel::SmoothnessChannel,
    Channel::Metallic,
    Channel::MetallicGlossMap,
    Channel::SpecularHighlights,
    Channel::GlossyReflections,
    Channel::NormalScale,
    Channel::NormalMap,
    Channel::ParallaxScale,
    Channel::ParallaxMap,
    Channel::OcclusionStrength,
    Channel::OcclusionMap,
    Channel::EmissionColor,
    Channel::EmissionMap,
    Channel::DetailMask,
    Channel::DetailAlbedoMap,
    Channel::DetailNormalScale,
    Channel::DetailNormalMap,
];

const SPECULAR_COPIED: [Channel; 20] = [
    Channel::Albedo,
    Channel::Glossiness,
    Channel::GlossMapScale,
    Channel::SmoothnessChannel,
    Channel::SpecularColor,
    Channel::SpecularGlossMap,
    Channel::SpecularHighlights,
    Channel::GlossyReflections,
    Channel::NormalScale,
    Channel::NormalMap,
    Channel::ParallaxScale,
    Channel::ParallaxMap,
    Channel::OcclusionStrength,
    Channel::OcclusionMap,
    Channel::EmissionColor,
    Channel::EmissionMap,
    Channel::DetailMask,
    Channel::DetailAlbedoMap,
    Channel::DetailNormalScale,
    Channel::DetailNormalMap,
];

/// Unlit parts keep only their base texture; every detail channel left
/// over from the previous use of the shared appearance is wiped so the
/// translucent look reads cleanly.
const UNLIT_CLEARED: [Channel; 9] = [
    Channel::SpecularGlossMap,
    Channel::SmoothnessChannel,
    Channel::NormalMap,
    Channel::ParallaxMap,
    Channel::OcclusionMap,
    Channel::EmissionMap,
    Channel::DetailMask,
    Channel::DetailAlbedoMap,
    Channel::DetailNormalMap,
];

const METALLIC_PROFILE: ChannelProfile = ChannelProfile {
    blend: Some(BlendMode::Opaque),
    copied: &METALLIC_COPIED,
    cleared: &[],
};

const SPECULAR_PROFILE: ChannelProfile = ChannelProfile {
    blend: Some(BlendMode::Opaque),
    copied: &SPECULAR_COPIED,
    cleared: &[],
};

const UNLIT_PROFILE: ChannelProfile = ChannelProfile {
    blend: Some(BlendMode::AlphaBlend),
    copied: &[Channel::Albedo],
    cleared: &UNLIT_CLEARED,
};

impl ShadingFamily {
    /// Look up the copy rule for this family. `None` for
    /// [`ShadingFamily::Unknown`].
    #[must_use]
    pub fn profile(self) -> Option<&'static ChannelProfile> {
        match self {
            Self::Metallic => Some(&METALLIC_PROFILE),
            Self::Specular => Some(&SPECULAR_PROFILE),
            Self::UnlitTransparent => Some(&UNLIT_PROFILE),
            Self::Unknown => None,
        }
    }
}

/// Mirror `src` onto `dst` following the copy rule of `src`'s shading
/// family.
///
/// Channel failures are logged and skipped independently; an unknown
/// family leaves `dst` untouched (logged, not fatal).
pub fn apply_profile(
    backend: &mut dyn AppearanceBackend,
    src: AppearanceHandle,
    dst: AppearanceHandle,
) {
    let family = backend.shading_family(src);
    let Some(profile) = family.profile() else {
        warn!("no channel copy rule for shading family of {src}; {dst} left untouched");
        return;
    };

    if let Some(mode) = profile.blend {
        backend.set_blend_mode(dst, mode);
    }
    for &channel in profile.copied {
        if let Err(e) = backend.copy_channel(src, dst, channel) {
            warn!("skipping copy {src} -> {dst}: {e}");
        }
    }
    for &channel in profile.cleared {
        if let Err(e) = backend.clear_channel(dst, channel) {
            warn!("skipping clear on {dst}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::RecordingBackend;

    #[test]
    fn metallic_profile_copies_metallic_channels() {
        let profile = ShadingFamily::Metallic.profile().unwrap();
        assert!(profile.copied.contains(&Channel::Metallic));
        assert!(profile.copied.contains(&Channel::MetallicGlossMap));
        assert!(!profile.copied.contains(&Channel::SpecularColor));
        assert_eq!(profile.blend, Some(BlendMode::Opaque));
    }

    #[test]
    fn specular_profile_copies_specular_channels() {
        let profile = ShadingFamily::Specular.profile().unwrap();
        assert!(profile.copied.contains(&Channel::SpecularColor));
        assert!(profile.copied.contains(&Channel::SpecularGlossMap));
        assert!(!profile.copied.contains(&Channel::Metallic));
    }

    #[test]
    fn unlit_profile_keeps_only_albedo_and_forces_alpha() {
        let profile = ShadingFamily::UnlitTransparent.profile().unwrap();
        assert_eq!(profile.copied, &[Channel::Albedo]);
        assert_eq!(profile.blend, Some(BlendMode::AlphaBlend));
        assert!(profile.cleared.contains(&Channel::NormalMap));
    }

    #[test]
    fn unknown_family_has_no_profile() {
        assert!(ShadingFamily::Unknown.profile().is_none());
    }

    #[test]
    fn apply_profile_is_a_noop_for_unknown_family() {
        let mut backend = RecordingBackend::new();
        let src = AppearanceHandle(1);
        let dst = AppearanceHandle(2);
        backend.set_family(src, ShadingFamily::Unknown);

        apply_profile(&mut backend, src, dst);

        assert!(backend.copies.is_empty());
        assert!(backend.clears.is_empty());
        assert!(backend.blend_modes.is_empty());
    }

    #[test]
    fn failed_channel_does_not_abort_remaining_copies() {
        let mut backend = RecordingBackend::new();
        let src = AppearanceHandle(1);
        let dst = AppearanceHandle(2);
        backend.set_family(src, ShadingFamily::Metallic);
        backend.fail_channel(Channel::NormalMap);

        apply_profile(&mut backend, src, dst);

        let copied: Vec<Channel> =
            backend.copies.iter().map(|&(_, _, c)| c).collect();
        assert!(!copied.contains(&Channel::NormalMap));
        // Everything after the failing channel still went through.
        assert!(copied.contains(&Channel::OcclusionMap));
        assert!(copied.contains(&Channel::DetailNormalMap));
        assert_eq!(copied.len(), METALLIC_COPIED.len() - 1);
    }

    #[test]
    fn unlit_application_clears_detail_channels() {
        let mut backend = RecordingBackend::new();
        let src = AppearanceHandle(1);
        let dst = AppearanceHandle(2);
        backend.set_family(src, ShadingFamily::UnlitTransparent);

        apply_profile(&mut backend, src, dst);

        assert_eq!(backend.copies.len(), 1);
        assert_eq!(backend.copies[0].2, Channel::Albedo);
        assert_eq!(backend.clears.len(), UNLIT_CLEARED.len());
        assert_eq!(
            backend.blend_modes.get(&dst),
            Some(&BlendMode::AlphaBlend)
        );
    }
}
