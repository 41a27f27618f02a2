//! Configuration surface for the immersive render layer
//!
//! Concentrates the data structures the host exchanges with the platform
//! when it sets up the compositor layer for an immersive session.

pub mod layer;

pub use layer::{
    ColorFormat, DepthFormat, LayerCapabilities, LayerConfigError, LayerLayout, RenderLayerConfig,
};
