//! Vello-based renderer implementation.

use crate::renderer::Renderer;
use kurbo::{Affine, BezPath, Stroke};
use peniko::{Color, Fill};
use posterkit_core::asset::ImageAsset;
use posterkit_core::canvas::PosterCanvas;
use posterkit_core::surface::Surface;
use vello::Scene;

/// A [`Surface`] that encodes paint commands into a Vello scene.
#[derive(Default)]
pub struct VelloSurface {
    scene: Scene,
}

impl VelloSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take the built scene, leaving an empty one behind.
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    pub fn reset(&mut self) {
        self.scene.reset();
    }
}

impl Surface for VelloSurface {
    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, path);
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        let stroke = Stroke::new(width);
        self.scene.stroke(&stroke, Affine::IDENTITY, color, None, path);
    }

    fn draw_image(&mut self, image: &ImageAsset, transform: Affine) {
        let image_data = image.image_data().clone();
        self.scene.draw_image(&image_data.into(), transform);
    }
}

/// Vello-based renderer for PosterKit canvases.
pub struct VelloRenderer {
    surface: VelloSurface,
    background_color: Color,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a renderer that clears to white.
    pub fn new() -> Self {
        Self {
            surface: VelloSurface::new(),
            background_color: Color::WHITE,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Get the current scene.
    pub fn scene(&self) -> &Scene {
        self.surface.scene()
    }

    /// Take the scene (for rendering).
    pub fn take_scene(&mut self) -> Scene {
        self.surface.take_scene()
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, canvas: &PosterCanvas) {
        self.surface.reset();
        canvas.render(&mut self.surface);
    }

    fn background_color(&self) -> Color {
        self.background_color
    }
}
