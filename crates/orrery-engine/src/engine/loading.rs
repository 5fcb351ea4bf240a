use crate::assets::{AssetManifest, AssetSource, MemoryAssetSource};
use crate::coords::{Color, Vec2};
use crate::scene::shapes::{Circle, Text};
use crate::scene::{Anchor, DrawCtx, Drawable, Style, Transform};

use super::SceneEngine;

/// One-shot callback run when loading completes, just before the first frame.
pub type OnLoad = Box<dyn FnOnce(&mut SceneEngine)>;

/// What `initialize` loads before the engine starts running.
pub struct LoadPlan {
    pub(crate) manifest: AssetManifest,
    pub(crate) source: Box<dyn AssetSource>,
    pub(crate) on_load: Option<OnLoad>,
}

impl LoadPlan {
    pub fn new(manifest: AssetManifest, source: impl AssetSource + 'static) -> Self {
        Self { manifest, source: Box::new(source), on_load: None }
    }

    pub fn on_load<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut SceneEngine) + 'static,
    {
        self.on_load = Some(Box::new(f));
        self
    }
}

impl Default for LoadPlan {
    /// Nothing to load.
    fn default() -> Self {
        Self::new(AssetManifest::default(), MemoryAssetSource::new())
    }
}

/// Progress through a `LoadPlan`.
pub(crate) struct Loader {
    pub(crate) plan: LoadPlan,
    pub(crate) next_image: usize,
}

impl Loader {
    pub(crate) fn new(plan: LoadPlan) -> Self {
        Self { plan, next_image: 0 }
    }

    pub(crate) fn images_remaining(&self) -> usize {
        self.plan.manifest.images.len().saturating_sub(self.next_image)
    }
}

/// Side of the square the indicator is laid out in, in indicator units.
const INDICATOR_UNITS: f32 = 512.0;
const ORBIT_DIAMETER: f32 = 384.0;
const STAR_DIAMETER: f32 = 192.0;
const PLANET_DIAMETER: f32 = 96.0;
const ORBIT_LINE: f32 = 20.0;

/// Paints the orbit loading indicator: a star, its orbit ring, and a planet
/// that travels the ring as frames advance.
pub(crate) fn paint_indicator(ctx: &mut DrawCtx<'_>, frame: u64) {
    let size = ctx.camera.size;
    let unit = size.x.min(size.y) / INDICATOR_UNITS;
    let orbit_radius = ORBIT_DIAMETER / 2.0 * unit;

    let star = Circle::new(STAR_DIAMETER / 2.0 * unit)
        .with_style(Style::filled(Color::from_rgb_u8(0x90, 0xCA, 0xF9)));
    let orbit = Circle::new(orbit_radius).with_style(Style::outlined(Color::white(), ORBIT_LINE * unit));

    let t = frame as f32 / 100.0;
    let planet = Circle::new(PLANET_DIAMETER / 2.0 * unit)
        .with_transform(Transform::at(Vec2::new(orbit_radius * t.cos(), orbit_radius * t.sin())))
        .with_style(Style::filled(Color::from_rgb_u8(0x1D, 0xE9, 0xB6)));

    let caption = Text::new("Loading")
        .with_font("bold sans-serif", 32.0)
        .with_transform(Transform::at(Vec2::new(0.0, -4.0)))
        .with_style(Style::filled(Color::white()));

    star.draw(ctx, &Anchor::ROOT);
    orbit.draw(ctx, &Anchor::ROOT);
    planet.draw(ctx, &Anchor::ROOT);
    caption.draw(ctx, &Anchor::ROOT);
}
