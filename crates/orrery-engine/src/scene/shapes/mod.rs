//! Concrete drawables for common vector shapes and image/video blits.
//!
//! These are thin: each one resolves its transform against the anchor, culls
//! against the camera, and records a single `DrawCmd`. Anything fancier belongs
//! to the surface that paints the commands.

mod circle;
mod ellipse;
mod graphic;
mod path;
mod rect;
mod text;
mod video;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use graphic::Graphic;
pub use path::Path;
pub use rect::Rectangle;
pub use text::Text;
pub use video::Video;

use crate::coords::Vec2;

use super::{Anchor, DrawCmd, DrawCtx, DrawItem, Style, Transform, WorldTransform};

/// Shared draw path for styled shapes.
///
/// Resolves `local` against `anchor`, culls when `extent` is given and the
/// world-space box misses the camera, skips fully transparent styles, then
/// records whatever `build` produces. `build` only runs when something will
/// actually be submitted.
pub fn paint_shape<F>(
    ctx: &mut DrawCtx<'_>,
    anchor: &Anchor,
    local: &Transform,
    style: &Style,
    extent: Option<Vec2>,
    build: F,
) where
    F: FnOnce() -> DrawCmd,
{
    if style.is_invisible() {
        return;
    }

    let world = anchor.resolve(local);
    if let Some(extent) = extent {
        if !ctx.camera.sees(world.position, extent) {
            return;
        }
    }

    submit(ctx, &world, style.clone(), build());
}

/// Records one command at `world` without culling.
pub fn submit(ctx: &mut DrawCtx<'_>, world: &WorldTransform, style: Style, cmd: DrawCmd) {
    let transform = ctx.camera.to_screen(world);
    ctx.surface.submit(DrawItem { transform, style, cmd });
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::assets::Assets;
    use crate::coords::Vec2;
    use crate::scene::{Anchor, Canvas, CameraView, DrawCtx, DrawItem, Drawable, Surface};

    /// Draws `d` once into an 800x600 canvas with the camera at `camera`.
    pub(crate) fn draw_once(d: &dyn Drawable, camera: Vec2, assets: &Assets) -> Vec<DrawItem> {
        let mut canvas = Canvas::new(800.0, 600.0);
        {
            let mut ctx = DrawCtx {
                camera: CameraView {
                    name: "main",
                    position: camera,
                    angle: 0.0,
                    scale: Vec2::ONE,
                    size: Vec2::new(800.0, 600.0),
                },
                surface: &mut canvas,
                assets,
                frame: 0,
            };
            d.draw(&mut ctx, &Anchor::ROOT);
        }
        canvas.draw_list().map(|l| l.items().to_vec()).unwrap_or_default()
    }
}
