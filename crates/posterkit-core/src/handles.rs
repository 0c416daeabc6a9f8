//! Resize and rotate handles for the selected drawable.

use crate::config::HandleStyle;
use kurbo::{Ellipse, Point, Rect, Shape as KurboShape, Size};

/// Type of selection handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Square on the bottom-right corner of the bounds.
    Resize,
    /// Circle above the top edge of the bounds.
    Rotate,
}

/// Handle geometry derived from a drawable's live bounds.
///
/// Never cached: build a fresh one whenever the bounds may have changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionHandles {
    pub resize: Rect,
    pub rotate: Ellipse,
}

impl SelectionHandles {
    /// Place the handles around `bounds`.
    pub fn from_bounds(bounds: Rect, style: &HandleStyle) -> Self {
        let size = Size::new(style.handle_size, style.handle_size);
        let resize = Rect::from_center_size(Point::new(bounds.x1, bounds.y1), size);
        let rotate_center = Point::new(bounds.center().x, bounds.y0 - style.rotate_offset);
        let rotate = Ellipse::from_rect(Rect::from_center_size(rotate_center, size));
        Self { resize, rotate }
    }

    /// Find which handle (if any) is hit. The resize handle wins ties.
    pub fn hit_test(&self, point: Point) -> Option<HandleKind> {
        if self.resize.contains(point) {
            Some(HandleKind::Resize)
        } else if self.rotate.contains(point) {
            Some(HandleKind::Rotate)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles() -> SelectionHandles {
        SelectionHandles::from_bounds(Rect::new(100.0, 100.0, 150.0, 150.0), &HandleStyle::default())
    }

    #[test]
    fn test_resize_handle_centered_on_bottom_right() {
        let h = handles();
        assert_eq!(h.resize, Rect::new(146.0, 146.0, 154.0, 154.0));
    }

    #[test]
    fn test_rotate_handle_above_top_edge() {
        let h = handles();
        let center = h.rotate.center();
        assert!((center.x - 125.0).abs() < 1e-9);
        assert!((center.y - 70.0).abs() < 1e-9);
        let radii = h.rotate.radii();
        assert!((radii.x - 4.0).abs() < 1e-9);
        assert!((radii.y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_hit_test() {
        let h = handles();
        assert_eq!(h.hit_test(Point::new(150.0, 150.0)), Some(HandleKind::Resize));
        assert_eq!(h.hit_test(Point::new(126.0, 71.0)), Some(HandleKind::Rotate));
        assert_eq!(h.hit_test(Point::new(125.0, 125.0)), None);
        assert_eq!(h.hit_test(Point::new(125.0, 80.0)), None);
    }

    #[test]
    fn test_handles_track_bounds() {
        let style = HandleStyle {
            handle_size: 10.0,
            rotate_offset: 20.0,
            ..HandleStyle::default()
        };
        let h = SelectionHandles::from_bounds(Rect::new(0.0, 50.0, 40.0, 90.0), &style);
        assert_eq!(h.resize, Rect::new(35.0, 85.0, 45.0, 95.0));
        assert!((h.rotate.center().y - 30.0).abs() < 1e-9);
    }
}
