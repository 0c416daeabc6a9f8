//! Vector shape drawable with a solid fill.

use super::{DrawableId, DrawableTrait};
use crate::asset::{AssetError, AssetResult};
use crate::surface::Surface;
use crate::transform::Transform;
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape};
use peniko::Color;
use uuid::Uuid;

/// Edge color painted around every shape.
pub const OUTLINE_COLOR: Color = Color::BLACK;
/// Edge stroke width.
pub const OUTLINE_WIDTH: f64 = 1.0;

/// Immutable local geometry of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Ellipse inscribed in the rectangle.
    Ellipse(Rect),
    Rectangle(Rect),
    Polygon(Polygon),
}

/// Closed polygon through its vertices, in order. Always has at least three.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Fewer than three vertices enclose nothing and are rejected.
    pub fn new(vertices: Vec<Point>) -> AssetResult<Self> {
        if vertices.len() < 3 {
            return Err(AssetError::DegeneratePolygon(vertices.len()));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl Outline {
    /// Bezier path for the outline.
    pub fn to_path(&self) -> BezPath {
        match self {
            Outline::Ellipse(rect) => KurboEllipse::from_rect(*rect).to_path(0.1),
            Outline::Rectangle(rect) => rect.to_path(0.1),
            Outline::Polygon(polygon) => {
                let mut path = BezPath::new();
                if let Some((&first, rest)) = polygon.vertices.split_first() {
                    path.move_to(first);
                    for &p in rest {
                        path.line_to(p);
                    }
                    path.close_path();
                }
                path
            }
        }
    }
}

/// A filled vector shape.
#[derive(Debug)]
pub struct ShapeDrawable {
    id: DrawableId,
    outline: Outline,
    fill: Color,
    transform: Transform,
}

impl ShapeDrawable {
    /// Place `outline` so that its local origin lands on `position`.
    pub fn new(outline: Outline, fill: Color, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            outline,
            fill,
            transform: Transform::from_translation(position.x, position.y),
        }
    }

    /// Create a polygon shape.
    pub fn polygon(vertices: Vec<Point>, fill: Color, position: Point) -> AssetResult<Self> {
        Ok(Self::new(Outline::Polygon(Polygon::new(vertices)?), fill, position))
    }

    /// The local outline.
    pub fn outline_geometry(&self) -> &Outline {
        &self.outline
    }

    /// The fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Recolor the shape.
    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }
}

impl DrawableTrait for ShapeDrawable {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn local_outline(&self) -> BezPath {
        self.outline.to_path()
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let path = self.outline();
        surface.fill_path(&path, self.fill);
        surface.stroke_path(&path, OUTLINE_COLOR, OUTLINE_WIDTH);
    }
}
