//! Immersive render-layer configuration
//!
//! Before the presentation layer opens the immersive session it asks the
//! platform what the compositor supports and hands it a negotiated layer
//! configuration. Negotiation is pure and deterministic: preferred formats
//! first, then whatever the platform lists, with typed errors when a
//! capability set is unusable.

use thiserror::Error;

/// Depth attachment format for the immersive render layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFormat {
    Depth16Unorm,
    Depth32Float,
}

/// Color attachment format for the immersive render layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Bgra8UnormSrgb,
    Rgba8UnormSrgb,
    Rgba16Float,
}

/// How the compositor lays out per-eye render targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerLayout {
    /// One texture per eye
    Dedicated,
    /// Both eyes share one texture side by side
    Shared,
    /// One texture array with one slice per eye
    Layered,
}

/// Compositor capabilities reported by the platform
#[derive(Debug, Clone)]
pub struct LayerCapabilities {
    pub supports_foveation: bool,
    pub supported_layouts: Vec<LayerLayout>,
    pub supported_color_formats: Vec<ColorFormat>,
    pub supported_depth_formats: Vec<DepthFormat>,
}

#[derive(Debug, Error)]
pub enum LayerConfigError {
    #[error("Platform reports no supported layer layouts")]
    NoSupportedLayout,
    #[error("Platform reports no supported color formats")]
    NoColorFormat,
    #[error("Platform reports no supported depth formats")]
    NoDepthFormat,
}

/// Negotiated configuration handed to the platform when opening the
/// immersive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLayerConfig {
    pub depth_format: DepthFormat,
    pub color_format: ColorFormat,
    pub foveation_enabled: bool,
    pub layout: LayerLayout,
}

impl RenderLayerConfig {
    pub const PREFERRED_DEPTH: DepthFormat = DepthFormat::Depth32Float;
    pub const PREFERRED_COLOR: ColorFormat = ColorFormat::Bgra8UnormSrgb;

    /// Negotiates a layer configuration against reported capabilities
    ///
    /// Layered layout is preferred over Dedicated; Shared is accepted only
    /// when it is the sole option. Foveation is enabled whenever the
    /// platform supports it.
    pub fn negotiate(capabilities: &LayerCapabilities) -> Result<Self, LayerConfigError> {
        let color_format = pick(
            &capabilities.supported_color_formats,
            Self::PREFERRED_COLOR,
        )
        .ok_or(LayerConfigError::NoColorFormat)?;

        let depth_format = pick(
            &capabilities.supported_depth_formats,
            Self::PREFERRED_DEPTH,
        )
        .ok_or(LayerConfigError::NoDepthFormat)?;

        let layout = [LayerLayout::Layered, LayerLayout::Dedicated, LayerLayout::Shared]
            .into_iter()
            .find(|layout| capabilities.supported_layouts.contains(layout))
            .ok_or(LayerConfigError::NoSupportedLayout)?;

        Ok(Self {
            depth_format,
            color_format,
            foveation_enabled: capabilities.supports_foveation,
            layout,
        })
    }
}

/// Preferred value when supported, otherwise the platform's first choice
fn pick<T: Copy + PartialEq>(supported: &[T], preferred: T) -> Option<T> {
    if supported.contains(&preferred) {
        Some(preferred)
    } else {
        supported.first().copied()
    }
}
