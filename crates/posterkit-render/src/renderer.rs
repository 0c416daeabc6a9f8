//! Renderer trait abstraction.

use peniko::Color;
use posterkit_core::asset::{AssetError, ImageAsset};
use posterkit_core::canvas::PosterCanvas;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Image decode failed: {0}")]
    Decode(String),
    #[error("Invalid image: {0}")]
    Asset(#[from] AssetError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the drawing commands for one frame of `canvas`.
    fn build_scene(&mut self, canvas: &PosterCanvas);

    /// Color the host clears the frame to before presenting the scene.
    fn background_color(&self) -> Color;
}

/// Decode PNG, JPEG or WebP bytes into an image asset.
pub fn decode_image(bytes: &[u8]) -> RenderResult<ImageAsset> {
    let decoded = ::image::load_from_memory(bytes).map_err(|e| {
        log::warn!("Failed to decode image ({} bytes): {e}", bytes.len());
        RendererError::Decode(e.to_string())
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageAsset::from_rgba8(width, height, rgba.into_vec())?)
}
