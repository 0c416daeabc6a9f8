//! Bitmap drawable.

use super::{DrawableId, DrawableTrait};
use crate::asset::ImageAsset;
use crate::surface::Surface;
use crate::transform::Transform;
use kurbo::{BezPath, Point, Shape as KurboShape};
use uuid::Uuid;

/// A raster image placed on the canvas.
#[derive(Debug)]
pub struct ImageDrawable {
    id: DrawableId,
    image: ImageAsset,
    transform: Transform,
}

impl ImageDrawable {
    /// Place `image` with its top-left corner at `position`.
    pub fn new(image: ImageAsset, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            transform: Transform::from_translation(position.x, position.y),
        }
    }

    /// The source image.
    pub fn image(&self) -> &ImageAsset {
        &self.image
    }
}

impl DrawableTrait for ImageDrawable {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn local_outline(&self) -> BezPath {
        self.image.local_rect().to_path(0.1)
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_image(&self.image, self.transform.as_affine());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Command, RecordingSurface};
    use kurbo::Affine;
    use std::f64::consts::FRAC_PI_2;

    fn image(width: u32, height: u32) -> ImageAsset {
        ImageAsset::from_rgba8(width, height, vec![0; (width * height * 4) as usize]).unwrap()
    }

    #[test]
    fn test_bounds() {
        let drawable = ImageDrawable::new(image(100, 50), Point::new(10.0, 20.0));
        let bounds = drawable.bounds();
        assert!((bounds.x0 - 10.0).abs() < 1e-9);
        assert!((bounds.y0 - 20.0).abs() < 1e-9);
        assert!((bounds.x1 - 110.0).abs() < 1e-9);
        assert!((bounds.y1 - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_hit_test() {
        let drawable = ImageDrawable::new(image(100, 50), Point::new(0.0, 0.0));
        assert!(drawable.contains(Point::new(50.0, 25.0)));
        assert!(!drawable.contains(Point::new(150.0, 25.0)));
    }

    #[test]
    fn test_rotated_bounds_swap_extent() {
        let mut drawable = ImageDrawable::new(image(100, 50), Point::new(0.0, 0.0));
        let center = drawable.center();
        drawable.rotate(FRAC_PI_2, center);
        let bounds = drawable.bounds();
        assert!((bounds.width() - 50.0).abs() < 1e-6);
        assert!((bounds.height() - 100.0).abs() < 1e-6);
        assert!(drawable.contains(center));
    }

    #[test]
    fn test_draw_passes_transform() {
        let drawable = ImageDrawable::new(image(4, 4), Point::new(7.0, 9.0));
        let mut surface = RecordingSurface::default();
        drawable.draw(&mut surface);
        assert_eq!(
            surface.commands,
            vec![Command::Image {
                width: 4,
                height: 4,
                transform: Affine::translate((7.0, 9.0)),
            }]
        );
    }
}
