use std::fmt;

use crate::assets::Assets;
use crate::coords::{BoundsRect, Vec2};

use super::{Anchor, CameraView, DrawCtx, SharedDrawable, Surface};

/// An independent rendering target: a camera transform over one surface, plus
/// the filtered, layer-sorted list of drawables assigned to it.
///
/// `renderables` is a cache owned by the engine's filter/sort pipeline; callers
/// can read it but never edit it.
pub struct Viewport {
    name: String,
    position: Vec2,
    angle: f32,
    scale: Vec2,
    surface: Box<dyn Surface>,
    renderables: Vec<SharedDrawable>,
}

impl Viewport {
    pub fn new(name: impl Into<String>, surface: impl Surface + 'static) -> Self {
        Self::boxed(name, Box::new(surface))
    }

    pub fn boxed(name: impl Into<String>, surface: Box<dyn Surface>) -> Self {
        Self {
            name: name.into(),
            position: Vec2::ZERO,
            angle: 0.0,
            scale: Vec2::ONE,
            surface,
            renderables: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    /// Surface size in pixels.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.surface.size()
    }

    /// World region visible through this viewport. Derived from the current
    /// position and surface size on every call, so it never lags a move.
    #[inline]
    pub fn bounds(&self) -> BoundsRect {
        BoundsRect::new(self.position, self.size())
    }

    /// Drawables assigned to this viewport, in paint order.
    #[inline]
    pub fn renderables(&self) -> &[SharedDrawable] {
        &self.renderables
    }

    pub fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn Surface {
        self.surface.as_mut()
    }

    pub fn view(&self) -> CameraView<'_> {
        CameraView {
            name: &self.name,
            position: self.position,
            angle: self.angle,
            scale: self.scale,
            size: self.surface.size(),
        }
    }

    pub(crate) fn set_renderables(&mut self, renderables: Vec<SharedDrawable>) {
        self.renderables = renderables;
    }

    pub(crate) fn renderables_mut(&mut self) -> &mut Vec<SharedDrawable> {
        &mut self.renderables
    }

    /// Clears the surface and paints every cached drawable under the root anchor.
    pub(crate) fn render(&mut self, assets: &Assets, frame: u64) {
        self.paint_pass(assets, frame, |ctx, renderables| {
            for drawable in renderables {
                match drawable.try_borrow() {
                    Ok(d) => d.draw(ctx, &Anchor::ROOT),
                    Err(_) => log::warn!(
                        "viewport '{}': drawable is mutably borrowed during render; skipped",
                        ctx.camera.name
                    ),
                }
            }
        });
    }

    /// Paints a one-off overlay instead of the cached list (loading indicator).
    pub(crate) fn render_overlay<F>(&mut self, assets: &Assets, frame: u64, paint: F)
    where
        F: FnOnce(&mut DrawCtx<'_>),
    {
        self.paint_pass(assets, frame, |ctx, _| paint(ctx));
    }

    fn paint_pass<F>(&mut self, assets: &Assets, frame: u64, paint: F)
    where
        F: FnOnce(&mut DrawCtx<'_>, &[SharedDrawable]),
    {
        let Self { name, position, angle, scale, surface, renderables } = self;

        let camera = CameraView {
            name: name.as_str(),
            position: *position,
            angle: *angle,
            scale: *scale,
            size: surface.size(),
        };

        surface.clear();
        {
            let mut ctx = DrawCtx {
                camera,
                surface: surface.as_mut(),
                assets,
                frame,
            };
            paint(&mut ctx, renderables);
        }
        surface.present();
    }
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("angle", &self.angle)
            .field("scale", &self.scale)
            .field("size", &self.size())
            .field("renderables", &self.renderables.len())
            .finish()
    }
}
