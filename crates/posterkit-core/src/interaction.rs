//! Press-drag-release state machine for direct manipulation.
//!
//! ```text
//! Idle -> Dragging(Resize)   press inside the selection's resize handle
//! Idle -> Dragging(Rotate)   press inside the selection's rotate handle
//! Idle -> Dragging(Move)     press on a drawable (topmost wins)
//! Idle -> Idle               press on empty canvas, or secondary press (delete)
//! Any  -> Idle               release
//! ```

use crate::config::HandleStyle;
use crate::handles::{HandleKind, SelectionHandles};
use crate::scene::Scene;
use kurbo::Point;

/// What a drag gesture does to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize,
    Rotate,
}

/// Current gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragMode),
}

/// Interprets pointer events against a scene.
///
/// Only one gesture can be in progress at a time; the state field is what
/// keeps move, resize and rotate from overlapping.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: InteractionState,
    last_point: Point,
    active_handle: Option<HandleKind>,
    style: HandleStyle,
}

impl InteractionController {
    /// Create a controller that uses `style` for handle hit testing.
    pub fn new(style: HandleStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn active_handle(&self) -> Option<HandleKind> {
        self.active_handle
    }

    pub fn last_point(&self) -> Point {
        self.last_point
    }

    pub fn handle_style(&self) -> &HandleStyle {
        &self.style
    }

    /// Handle a button press.
    pub fn on_press(&mut self, scene: &mut Scene, point: Point, secondary: bool) {
        self.last_point = point;
        self.active_handle = None;

        if let Some(selected) = scene.selected() {
            let handles = SelectionHandles::from_bounds(selected.bounds(), &self.style);
            if let Some(kind) = handles.hit_test(point) {
                self.active_handle = Some(kind);
                self.state = InteractionState::Dragging(match kind {
                    HandleKind::Resize => DragMode::Resize,
                    HandleKind::Rotate => DragMode::Rotate,
                });
                return;
            }
        }

        scene.clear_selection();
        self.state = InteractionState::Idle;
        let Some(id) = scene.topmost_at(point) else {
            return;
        };
        scene.select(id);
        log::debug!("Selected drawable {id}");

        if secondary {
            scene.remove(id);
            log::debug!("Deleted drawable {id} on secondary press");
            return;
        }
        self.state = InteractionState::Dragging(DragMode::Move);
    }

    /// Handle pointer motion with a button held.
    /// Returns true when the scene changed and a redraw is needed.
    pub fn on_drag(&mut self, scene: &mut Scene, point: Point) -> bool {
        let InteractionState::Dragging(mode) = self.state else {
            return false;
        };
        let Some(selected) = scene.selected_mut() else {
            return false;
        };

        match mode {
            DragMode::Move => {
                let delta = point - self.last_point;
                selected.translate(delta.x, delta.y);
            }
            DragMode::Resize => {
                let bounds = selected.bounds();
                let anchor = bounds.origin();
                let sx = (point.x - anchor.x) / bounds.width();
                let sy = (point.y - anchor.y) / bounds.height();
                if !(sx.is_finite() && sy.is_finite() && sx > 0.0 && sy > 0.0) {
                    log::trace!("Ignoring degenerate resize step ({sx}, {sy})");
                    return false;
                }
                selected.scale(sx, sy, anchor);
            }
            DragMode::Rotate => {
                let anchor = selected.center();
                let angle = (point - anchor).atan2() - (self.last_point - anchor).atan2();
                selected.rotate(angle, anchor);
            }
        }
        self.last_point = point;
        true
    }

    /// Handle a button release; ends any gesture.
    pub fn on_release(&mut self) {
        self.state = InteractionState::Idle;
        self.active_handle = None;
    }
}
