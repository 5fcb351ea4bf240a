//! Scene graph primitives: transforms, drawables, viewports and surfaces.

mod anchor;
mod cmd;
mod drawable;
mod layer;
mod list;
mod surface;
mod transform;
mod viewport;

pub mod shapes;

pub use anchor::Anchor;
pub use cmd::{DrawCmd, DrawItem, Style, TextAlign, TextBaseline};
pub use drawable::{same_drawable, DrawCtx, Drawable, RenderSettings, SharedDrawable, MAIN_VIEWPORT};
pub use layer::Layer;
pub use list::DrawList;
pub use surface::{Canvas, Surface};
pub use transform::{CameraView, ScreenTransform, Transform, WorldTransform};
pub use viewport::Viewport;
