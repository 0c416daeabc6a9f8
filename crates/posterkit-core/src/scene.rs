//! Ordered collection of drawables plus the current selection.

use crate::config::HandleStyle;
use crate::drawable::{Drawable, DrawableId};
use crate::handles::SelectionHandles;
use crate::surface::Surface;
use kurbo::{Circle, Point, Shape as KurboShape};
use peniko::Color;

/// Direction of a one-step layer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDirection {
    /// One slot toward the front (+1).
    Forward,
    /// One slot toward the back (-1).
    Backward,
}

impl LayerDirection {
    /// Map a `+1` / `-1` step onto a direction.
    pub fn from_step(step: i32) -> Option<Self> {
        match step {
            1 => Some(LayerDirection::Forward),
            -1 => Some(LayerDirection::Backward),
            _ => None,
        }
    }
}

/// Drawables in paint order (back to front) and at most one selection.
///
/// The selection is stored as an id and is cleared whenever its drawable is
/// removed, so it always names a drawable that is still in the scene.
#[derive(Debug, Default)]
pub struct Scene {
    drawables: Vec<Drawable>,
    selected: Option<DrawableId>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable on top of everything else.
    pub fn add(&mut self, drawable: Drawable) -> DrawableId {
        let id = drawable.id();
        self.drawables.push(drawable);
        id
    }

    /// Remove a drawable, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: DrawableId) -> Option<Drawable> {
        let index = self.index_of(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        log::debug!("Removed drawable {id}");
        Some(self.drawables.remove(index))
    }

    /// Remove every drawable.
    pub fn clear(&mut self) {
        self.drawables.clear();
        self.selected = None;
    }

    /// Get a drawable by ID.
    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.iter().find(|d| d.id() == id)
    }

    /// Get a mutable reference to a drawable by ID.
    pub fn get_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.drawables.iter_mut().find(|d| d.id() == id)
    }

    /// Paint-order position of a drawable.
    pub fn index_of(&self, id: DrawableId) -> Option<usize> {
        self.drawables.iter().position(|d| d.id() == id)
    }

    /// Drawables back to front.
    pub fn iter(&self) -> impl Iterator<Item = &Drawable> {
        self.drawables.iter()
    }

    /// Drawable ids back to front.
    pub fn ids(&self) -> Vec<DrawableId> {
        self.drawables.iter().map(Drawable::id).collect()
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Select a drawable. Returns false (and leaves the selection alone) if
    /// the id is not in the scene.
    pub fn select(&mut self, id: DrawableId) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<DrawableId> {
        self.selected
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&Drawable> {
        self.get(self.selected?)
    }

    pub fn selected_mut(&mut self) -> Option<&mut Drawable> {
        let id = self.selected?;
        self.get_mut(id)
    }

    /// Topmost drawable under `point`.
    ///
    /// Every drawable is tested in paint order and each hit replaces the
    /// previous one, so the last match (the frontmost) wins.
    pub fn topmost_at(&self, point: Point) -> Option<DrawableId> {
        self.drawables
            .iter()
            .fold(None, |hit, d| if d.contains(point) { Some(d.id()) } else { hit })
    }

    /// Move a drawable one layer toward the front.
    /// Returns true if it moved, false if already frontmost or unknown.
    pub fn bring_forward(&mut self, id: DrawableId) -> bool {
        if let Some(pos) = self.index_of(id) {
            if pos + 1 < self.drawables.len() {
                self.drawables.swap(pos, pos + 1);
                return true;
            }
        }
        false
    }

    /// Move a drawable one layer toward the back.
    /// Returns true if it moved, false if already backmost or unknown.
    pub fn send_backward(&mut self, id: DrawableId) -> bool {
        if let Some(pos) = self.index_of(id) {
            if pos > 0 {
                self.drawables.swap(pos, pos - 1);
                return true;
            }
        }
        false
    }

    /// Move the selection one layer. No-op without a selection or at the end
    /// of the stack. The selection is kept.
    pub fn change_layer(&mut self, direction: LayerDirection) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let moved = match direction {
            LayerDirection::Forward => self.bring_forward(id),
            LayerDirection::Backward => self.send_backward(id),
        };
        if moved {
            log::debug!("Moved drawable {id} {direction:?}");
        }
        moved
    }

    /// Paint every drawable back to front, then the selection overlay.
    pub fn draw_all(&self, surface: &mut dyn Surface, style: &HandleStyle) {
        for drawable in &self.drawables {
            drawable.draw(surface);
        }
        if let Some(selected) = self.selected() {
            draw_selection_overlay(surface, selected, style);
        }
    }
}

/// Handles, highlight outline and center marker for the selection.
fn draw_selection_overlay(surface: &mut dyn Surface, drawable: &Drawable, style: &HandleStyle) {
    let bounds = drawable.bounds();
    let handles = SelectionHandles::from_bounds(bounds, style);

    surface.fill_path(&handles.resize.to_path(0.1), style.resize_color.into());
    surface.fill_path(&handles.rotate.to_path(0.1), style.rotate_color.into());

    let highlight = bounds.inflate(style.highlight_margin, style.highlight_margin);
    surface.stroke_path(
        &highlight.to_path(0.1),
        style.highlight_color.into(),
        style.highlight_width,
    );

    let marker = Circle::new(bounds.center(), style.center_marker_radius);
    let center_color: Color = style.center_color.into();
    surface.fill_path(&marker.to_path(0.1), center_color);
}
