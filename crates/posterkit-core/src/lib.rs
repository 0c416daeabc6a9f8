//! PosterKit Core Library
//!
//! Platform-agnostic scene graph, transforms and pointer interaction for the
//! PosterKit poster editor.

pub mod asset;
pub mod canvas;
pub mod color;
pub mod config;
pub mod drawable;
pub mod handles;
pub mod input;
pub mod interaction;
pub mod scene;
pub mod surface;
pub mod transform;

pub use asset::{Asset, AssetError, ImageAsset, ShapeTemplate};
pub use canvas::{ButtonAction, PosterCanvas};
pub use color::SerializableColor;
pub use config::{ConfigError, EditorConfig, HandleStyle};
pub use drawable::{Drawable, DrawableId, DrawableTrait, ImageDrawable, Outline, Polygon, ShapeDrawable};
pub use handles::{HandleKind, SelectionHandles};
pub use input::{MouseButton, PointerEvent};
pub use interaction::{DragMode, InteractionController, InteractionState};
pub use scene::{LayerDirection, Scene};
pub use surface::Surface;
pub use transform::Transform;
