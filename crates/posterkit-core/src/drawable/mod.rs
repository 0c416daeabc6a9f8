//! Drawable objects placed on the poster canvas.

mod image;
mod shape;

pub use image::ImageDrawable;
pub use shape::{OUTLINE_COLOR, OUTLINE_WIDTH, Outline, Polygon, ShapeDrawable};

use crate::surface::Surface;
use crate::transform::Transform;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use uuid::Uuid;

/// Stable identifier for drawables.
pub type DrawableId = Uuid;

/// Contract shared by every drawable variant.
///
/// Variants only describe their local outline and how to paint it. Hit
/// testing, bounds and the transform forwarders are derived from the same
/// transformed outline, so what is painted, what is hit and what is boxed
/// never drift apart.
pub trait DrawableTrait {
    /// Get the unique identifier.
    fn id(&self) -> DrawableId;

    /// Outline in the drawable's own frame.
    fn local_outline(&self) -> BezPath;

    /// The accumulated transform.
    fn transform(&self) -> &Transform;

    /// Mutable access to the accumulated transform.
    fn transform_mut(&mut self) -> &mut Transform;

    /// Paint the drawable through its transform.
    fn draw(&self, surface: &mut dyn Surface);

    /// Outline mapped into canvas space.
    fn outline(&self) -> BezPath {
        self.transform().apply_to_path(&self.local_outline())
    }

    /// Check if a canvas-space point lies inside the transformed outline.
    fn contains(&self, point: Point) -> bool {
        self.outline().contains(point)
    }

    /// Tight axis-aligned box of the transformed outline.
    fn bounds(&self) -> Rect {
        self.outline().bounding_box()
    }

    /// Midpoint of `bounds()`.
    fn center(&self) -> Point {
        self.bounds().center()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform_mut().translate(dx, dy);
    }

    fn scale(&mut self, sx: f64, sy: f64, anchor: Point) {
        self.transform_mut().scale(sx, sy, anchor);
    }

    fn rotate(&mut self, theta: f64, anchor: Point) {
        self.transform_mut().rotate(theta, anchor);
    }
}

/// Closed set of drawable variants.
///
/// Not `Clone`: a drawable is identified by its id and owned by one scene.
#[derive(Debug)]
pub enum Drawable {
    Image(ImageDrawable),
    Shape(ShapeDrawable),
}

impl Drawable {
    pub fn id(&self) -> DrawableId {
        match self {
            Drawable::Image(d) => d.id(),
            Drawable::Shape(d) => d.id(),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Drawable::Image(d) => d.draw(surface),
            Drawable::Shape(d) => d.draw(surface),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        match self {
            Drawable::Image(d) => d.contains(point),
            Drawable::Shape(d) => d.contains(point),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Drawable::Image(d) => d.bounds(),
            Drawable::Shape(d) => d.bounds(),
        }
    }

    pub fn center(&self) -> Point {
        match self {
            Drawable::Image(d) => d.center(),
            Drawable::Shape(d) => d.center(),
        }
    }

    pub fn outline(&self) -> BezPath {
        match self {
            Drawable::Image(d) => d.outline(),
            Drawable::Shape(d) => d.outline(),
        }
    }

    pub fn transform(&self) -> &Transform {
        match self {
            Drawable::Image(d) => d.transform(),
            Drawable::Shape(d) => d.transform(),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Drawable::Image(d) => d.translate(dx, dy),
            Drawable::Shape(d) => d.translate(dx, dy),
        }
    }

    pub fn scale(&mut self, sx: f64, sy: f64, anchor: Point) {
        match self {
            Drawable::Image(d) => d.scale(sx, sy, anchor),
            Drawable::Shape(d) => d.scale(sx, sy, anchor),
        }
    }

    pub fn rotate(&mut self, theta: f64, anchor: Point) {
        match self {
            Drawable::Image(d) => d.rotate(theta, anchor),
            Drawable::Shape(d) => d.rotate(theta, anchor),
        }
    }

    /// Get the image drawable if this is one.
    pub fn as_image(&self) -> Option<&ImageDrawable> {
        match self {
            Drawable::Image(d) => Some(d),
            _ => None,
        }
    }

    /// Get the shape drawable if this is one.
    pub fn as_shape(&self) -> Option<&ShapeDrawable> {
        match self {
            Drawable::Shape(d) => Some(d),
            _ => None,
        }
    }

    /// Get the mutable shape drawable if this is one.
    pub fn as_shape_mut(&mut self) -> Option<&mut ShapeDrawable> {
        match self {
            Drawable::Shape(d) => Some(d),
            _ => None,
        }
    }
}

impl From<ImageDrawable> for Drawable {
    fn from(drawable: ImageDrawable) -> Self {
        Drawable::Image(drawable)
    }
}

impl From<ShapeDrawable> for Drawable {
    fn from(drawable: ShapeDrawable) -> Self {
        Drawable::Shape(drawable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::ImageAsset;
    use peniko::Color;
    use std::f64::consts::PI;

    fn sample_drawables() -> Vec<Drawable> {
        let image = ImageAsset::from_rgba8(40, 20, vec![0; 40 * 20 * 4]).unwrap();
        let red = Color::from_rgba8(255, 0, 0, 255);
        let triangle = ShapeDrawable::polygon(
            vec![Point::new(0.0, 0.0), Point::new(30.0, 0.0), Point::new(10.0, 25.0)],
            red,
            Point::new(5.0, 5.0),
        )
        .unwrap();
        vec![
            ImageDrawable::new(image, Point::new(10.0, 10.0)).into(),
            ShapeDrawable::new(Outline::Ellipse(Rect::new(0.0, 0.0, 60.0, 30.0)), red, Point::new(50.0, 40.0)).into(),
            ShapeDrawable::new(Outline::Rectangle(Rect::new(0.0, 0.0, 25.0, 25.0)), red, Point::new(0.0, 0.0)).into(),
            triangle.into(),
        ]
    }

    fn mutate(drawable: &mut Drawable) {
        let center = drawable.center();
        drawable.rotate(PI / 5.0, center);
        drawable.scale(1.7, 0.6, Point::new(3.0, 4.0));
        drawable.translate(-12.0, 9.0);
        drawable.rotate(-1.1, Point::new(80.0, 10.0));
    }

    fn inclusive_contains(rect: Rect, p: Point) -> bool {
        let eps = 1e-9;
        p.x >= rect.x0 - eps && p.x <= rect.x1 + eps && p.y >= rect.y0 - eps && p.y <= rect.y1 + eps
    }

    #[test]
    fn test_hit_test_is_inside_bounds() {
        for mut drawable in sample_drawables() {
            mutate(&mut drawable);
            let bounds = drawable.bounds();
            let area = bounds.inflate(10.0, 10.0);
            let steps = 40;
            let mut hits = 0;
            for i in 0..=steps {
                for j in 0..=steps {
                    let p = Point::new(
                        area.x0 + area.width() * i as f64 / steps as f64,
                        area.y0 + area.height() * j as f64 / steps as f64,
                    );
                    if drawable.contains(p) {
                        hits += 1;
                        assert!(inclusive_contains(bounds, p), "{p:?} hit but outside {bounds:?}");
                    }
                }
            }
            assert!(hits > 0, "sample grid never hit {drawable:?}");
        }
    }

    #[test]
    fn test_center_is_bounds_midpoint() {
        for drawable in sample_drawables() {
            let b = drawable.bounds();
            let c = drawable.center();
            assert!((c.x - (b.x0 + b.x1) / 2.0).abs() < 1e-9);
            assert!((c.y - (b.y0 + b.y1) / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bounds_follow_live_transform() {
        let mut drawable: Drawable = ShapeDrawable::new(
            Outline::Rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Color::from_rgba8(0, 0, 0, 255),
            Point::new(0.0, 0.0),
        )
        .into();
        drawable.translate(5.0, 5.0);
        assert!((drawable.bounds().x0 - 5.0).abs() < 1e-9);
        drawable.scale(2.0, 2.0, Point::new(5.0, 5.0));
        assert!((drawable.bounds().width() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_ids_are_unique() {
        let drawables = sample_drawables();
        for (i, a) in drawables.iter().enumerate() {
            for b in &drawables[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn test_shape_accessors_by_variant() {
        let mut drawables = sample_drawables();
        assert!(drawables[0].as_shape_mut().is_none());

        let blue = Color::from_rgba8(0, 0, 255, 255);
        let shape = drawables[1].as_shape_mut().unwrap();
        shape.set_fill(blue);
        assert_eq!(drawables[1].as_shape().unwrap().fill(), blue);
        assert!(matches!(
            drawables[1].as_shape().unwrap().outline_geometry(),
            Outline::Ellipse(_)
        ));
    }
}
