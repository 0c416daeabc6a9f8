//! PosterKit Render Library
//!
//! Renderer abstraction, image decoding and the Vello-backed surface for
//! PosterKit canvases.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderResult, Renderer, RendererError, decode_image};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::{VelloRenderer, VelloSurface};
