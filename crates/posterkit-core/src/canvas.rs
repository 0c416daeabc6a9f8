//! Poster canvas: the host-facing entry point.

use crate::asset::Asset;
use crate::config::EditorConfig;
use crate::drawable::{Drawable, DrawableId};
use crate::input::PointerEvent;
use crate::interaction::{InteractionController, InteractionState};
use crate::scene::{LayerDirection, Scene};
use crate::surface::Surface;
use kurbo::Point;

/// Discrete actions offered by the host's button bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    MoveLeft,
    MoveUp,
    MoveDown,
    MoveRight,
    RotateCounterClockwise,
    RotateClockwise,
    LayerUp,
    LayerDown,
}

/// Scene, gesture state and redraw signal in one place.
///
/// All mutation goes through `&mut self`, so a host that reads for
/// rendering on another thread must wrap the canvas in a single lock.
/// Mutations raise a redraw request; the host polls
/// [`PosterCanvas::take_redraw_request`] once per frame instead of
/// repainting unconditionally.
#[derive(Debug, Default)]
pub struct PosterCanvas {
    scene: Scene,
    controller: InteractionController,
    config: EditorConfig,
    redraw_requested: bool,
}

impl PosterCanvas {
    /// Create an empty canvas.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            scene: Scene::new(),
            controller: InteractionController::new(config.handles.clone()),
            config,
            redraw_requested: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.controller.state()
    }

    /// Whether a drawable is selected; hosts enable their buttons on this.
    pub fn has_selection(&self) -> bool {
        self.scene.has_selection()
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Route a pointer event to the interaction controller.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, button } => {
                self.controller
                    .on_press(&mut self.scene, position, button.is_secondary());
                self.request_redraw();
            }
            PointerEvent::Move { position } => {
                if self.controller.on_drag(&mut self.scene, position) {
                    self.request_redraw();
                }
            }
            PointerEvent::Up { .. } => self.controller.on_release(),
        }
    }

    /// Create a drawable for `asset` with its top-left at `position` and put
    /// it on top of the stack.
    pub fn drop_asset(&mut self, asset: &Asset, position: Point) -> DrawableId {
        let drawable = asset.instantiate(position, self.config.shape_template_size);
        let id = self.add_drawable(drawable);
        log::debug!("Dropped asset at ({}, {}) as {id}", position.x, position.y);
        id
    }

    /// Put an already built drawable on top of the stack.
    pub fn add_drawable(&mut self, drawable: Drawable) -> DrawableId {
        let id = self.scene.add(drawable);
        self.request_redraw();
        id
    }

    /// Move the selection by `(dx, dy)`. No-op without a selection.
    pub fn move_selected(&mut self, dx: f64, dy: f64) -> bool {
        let Some(selected) = self.scene.selected_mut() else {
            return false;
        };
        selected.translate(dx, dy);
        self.request_redraw();
        true
    }

    /// Rotate the selection about its center. No-op without a selection.
    pub fn rotate_selected(&mut self, radians: f64) -> bool {
        let Some(selected) = self.scene.selected_mut() else {
            return false;
        };
        let center = selected.center();
        selected.rotate(radians, center);
        self.request_redraw();
        true
    }

    /// Move the selection one layer. No-op without a selection or at the
    /// end of the stack.
    pub fn change_layer(&mut self, direction: LayerDirection) -> bool {
        let moved = self.scene.change_layer(direction);
        if moved {
            self.request_redraw();
        }
        moved
    }

    /// Delete the selection. No-op without a selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.scene.selected_id() else {
            return false;
        };
        self.scene.remove(id);
        self.request_redraw();
        true
    }

    /// Apply a button-bar action using the configured step sizes.
    pub fn apply_action(&mut self, action: ButtonAction) -> bool {
        let step = self.config.nudge_step;
        let angle = self.config.rotate_step();
        match action {
            ButtonAction::MoveLeft => self.move_selected(-step, 0.0),
            ButtonAction::MoveUp => self.move_selected(0.0, -step),
            ButtonAction::MoveDown => self.move_selected(0.0, step),
            ButtonAction::MoveRight => self.move_selected(step, 0.0),
            ButtonAction::RotateCounterClockwise => self.rotate_selected(-angle),
            ButtonAction::RotateClockwise => self.rotate_selected(angle),
            ButtonAction::LayerUp => self.change_layer(LayerDirection::Forward),
            ButtonAction::LayerDown => self.change_layer(LayerDirection::Backward),
        }
    }

    /// Paint the whole canvas.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.scene.draw_all(surface, &self.config.handles);
    }
}
