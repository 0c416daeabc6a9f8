//! Render target abstraction drawables paint into.

use crate::asset::ImageAsset;
use kurbo::{Affine, BezPath};
use peniko::Color;

/// A paint target.
///
/// Paths arrive already mapped into canvas space. Images arrive with the
/// transform that maps their `[0, 0, width, height]` frame onto the canvas.
/// Implementations can record commands, rasterize, or build a GPU scene.
pub trait Surface {
    /// Fill a closed path with a solid color (non-zero winding).
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Stroke a path with a solid color.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);

    /// Paint an image through `transform`.
    fn draw_image(&mut self, image: &ImageAsset, transform: Affine);
}
