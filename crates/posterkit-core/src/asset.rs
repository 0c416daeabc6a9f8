//! Source assets the host offers for dropping onto the canvas.

use crate::drawable::{Drawable, ImageDrawable, Outline, ShapeDrawable};
use kurbo::{Point, Rect};
use peniko::{Blob, Color, ImageAlphaType, ImageData, ImageFormat};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building assets or drawable geometry.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    PixelDataMismatch { expected: usize, actual: usize },
    #[error("Image is too large to address ({width}x{height})")]
    ImageTooLarge { width: u32, height: u32 },
    #[error("Polygon needs at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),
}

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

/// A decoded bitmap plus its intrinsic size.
///
/// Cloning is cheap: the pixel buffer is reference counted, so every image
/// drawable dropped from the same asset shares one allocation.
#[derive(Clone)]
pub struct ImageAsset {
    data: ImageData,
}

impl ImageAsset {
    /// Build an asset from tightly packed, non-premultiplied RGBA8 pixels.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> AssetResult<Self> {
        if width == 0 || height == 0 {
            return Err(AssetError::EmptyImage { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(AssetError::ImageTooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(AssetError::PixelDataMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            data: ImageData {
                data: Blob::new(Arc::new(pixels)),
                format: ImageFormat::Rgba8,
                alpha_type: ImageAlphaType::Alpha,
                width,
                height,
            },
        })
    }

    /// Intrinsic width in pixels.
    pub fn width(&self) -> u32 {
        self.data.width
    }

    /// Intrinsic height in pixels.
    pub fn height(&self) -> u32 {
        self.data.height
    }

    /// The `[0, 0, width, height]` rectangle in the image's own frame.
    pub fn local_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width() as f64, self.height() as f64)
    }

    /// Pixel data for render backends.
    pub fn image_data(&self) -> &ImageData {
        &self.data
    }
}

impl fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAsset")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Built-in shape templates offered by the shape palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeTemplate {
    Circle,
    Square,
}

impl ShapeTemplate {
    /// Local outline for a template of the given edge length.
    pub fn outline(self, size: f64) -> Outline {
        let rect = Rect::new(0.0, 0.0, size, size);
        match self {
            ShapeTemplate::Circle => Outline::Ellipse(rect),
            ShapeTemplate::Square => Outline::Rectangle(rect),
        }
    }
}

/// Anything the host can drop onto the canvas.
#[derive(Debug, Clone)]
pub enum Asset {
    Image(ImageAsset),
    Shape { template: ShapeTemplate, fill: Color },
}

impl Asset {
    /// Create the drawable for this asset with its top-left corner at `at`.
    pub fn instantiate(&self, at: Point, template_size: f64) -> Drawable {
        match self {
            Asset::Image(image) => Drawable::Image(ImageDrawable::new(image.clone(), at)),
            Asset::Shape { template, fill } => {
                Drawable::Shape(ShapeDrawable::new(template.outline(template_size), *fill, at))
            }
        }
    }
}

impl From<ImageAsset> for Asset {
    fn from(image: ImageAsset) -> Self {
        Asset::Image(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba8() {
        let asset = ImageAsset::from_rgba8(3, 2, vec![0; 24]).unwrap();
        assert_eq!(asset.width(), 3);
        assert_eq!(asset.height(), 2);
        assert_eq!(asset.local_rect(), Rect::new(0.0, 0.0, 3.0, 2.0));
    }

    #[test]
    fn test_empty_image_rejected() {
        let err = ImageAsset::from_rgba8(0, 10, Vec::new()).unwrap_err();
        assert!(matches!(err, AssetError::EmptyImage { width: 0, height: 10 }));
    }

    #[test]
    fn test_pixel_length_checked() {
        let err = ImageAsset::from_rgba8(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            AssetError::PixelDataMismatch {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let err = ImageAsset::from_rgba8(u32::MAX, u32::MAX, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            AssetError::ImageTooLarge {
                width: u32::MAX,
                height: u32::MAX
            }
        ));
    }

    #[test]
    fn test_instantiate_shape_at_drop_point() {
        let asset = Asset::Shape {
            template: ShapeTemplate::Square,
            fill: Color::from_rgba8(10, 20, 30, 255),
        };
        let drawable = asset.instantiate(Point::new(40.0, 60.0), 50.0);
        let bounds = drawable.bounds();
        assert!((bounds.x0 - 40.0).abs() < 1e-9);
        assert!((bounds.y0 - 60.0).abs() < 1e-9);
        assert!((bounds.width() - 50.0).abs() < 1e-9);
        assert!((bounds.height() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_instantiate_image_uses_intrinsic_size() {
        let image = ImageAsset::from_rgba8(4, 3, vec![255; 48]).unwrap();
        let drawable = Asset::from(image).instantiate(Point::new(1.0, 2.0), 50.0);
        assert!(drawable.as_image().is_some());
        let bounds = drawable.bounds();
        assert!((bounds.x1 - 5.0).abs() < 1e-9);
        assert!((bounds.y1 - 5.0).abs() < 1e-9);
    }
}
