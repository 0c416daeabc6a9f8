//! Accumulated 2D affine transform for drawables.

use kurbo::{Affine, BezPath, Point, Vec2};

/// An affine map from a drawable's local frame into canvas space.
///
/// Every mutation is pre-concatenated onto the accumulated map, so the new
/// operation acts in the fixed canvas frame after whatever came before it.
/// A translate therefore always moves the drawable by exactly `(dx, dy)` on
/// screen, no matter how it has been rotated or scaled so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    affine: Affine,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Create an identity transform.
    pub fn new() -> Self {
        Self {
            affine: Affine::IDENTITY,
        }
    }

    /// Create a transform that places the local origin at `(x, y)`.
    pub fn from_translation(x: f64, y: f64) -> Self {
        Self {
            affine: Affine::translate(Vec2::new(x, y)),
        }
    }

    /// Wrap an existing affine map.
    pub fn from_affine(affine: Affine) -> Self {
        Self { affine }
    }

    /// The underlying affine map.
    pub fn as_affine(&self) -> Affine {
        self.affine
    }

    /// The six matrix coefficients `[a, b, c, d, e, f]`.
    pub fn coeffs(&self) -> [f64; 6] {
        self.affine.as_coeffs()
    }

    fn pre_concat(&mut self, op: Affine) {
        self.affine = op * self.affine;
    }

    /// Move by `(dx, dy)` in canvas space.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.pre_concat(Affine::translate(Vec2::new(dx, dy)));
    }

    /// Scale by `(sx, sy)` keeping `anchor` fixed.
    ///
    /// Factors are not validated here; callers that must avoid mirroring
    /// or collapsing geometry reject non-positive values first.
    pub fn scale(&mut self, sx: f64, sy: f64, anchor: Point) {
        let to_anchor = anchor.to_vec2();
        let op = Affine::translate(to_anchor)
            * Affine::scale_non_uniform(sx, sy)
            * Affine::translate(-to_anchor);
        self.pre_concat(op);
    }

    /// Rotate by `theta` radians around `anchor`.
    pub fn rotate(&mut self, theta: f64, anchor: Point) {
        let to_anchor = anchor.to_vec2();
        let op = Affine::translate(to_anchor) * Affine::rotate(theta) * Affine::translate(-to_anchor);
        self.pre_concat(op);
    }

    /// Map a local point into canvas space.
    pub fn apply(&self, point: Point) -> Point {
        self.affine * point
    }

    /// Map a local outline into canvas space.
    pub fn apply_to_path(&self, path: &BezPath) -> BezPath {
        let mut transformed = path.clone();
        transformed.apply_affine(self.affine);
        transformed
    }

    /// The inverse map (canvas space back to local space).
    ///
    /// Singular transforms cannot be produced through `translate`, `rotate`
    /// or positive `scale`, so the result is finite for any drawable.
    pub fn inverse(&self) -> Transform {
        Self {
            affine: self.affine.inverse(),
        }
    }

    /// Compare coefficient-wise within `epsilon`.
    pub fn approx_eq(&self, other: &Transform, epsilon: f64) -> bool {
        self.coeffs()
            .iter()
            .zip(other.coeffs().iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}
