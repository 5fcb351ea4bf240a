use crate::coords::{BoundsRect, Vec2};
use crate::scene::{Anchor, DrawCmd, DrawCtx, Drawable, RenderSettings, Style, Transform};

use super::paint_shape;

/// Closed polygon. Points are relative to the path's position, +Y up.
#[derive(Debug, Clone)]
pub struct Path {
    pub transform: Transform,
    pub points: Vec<Vec2>,
    pub style: Style,
    settings: RenderSettings,
}

impl Path {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self {
            transform: Transform::IDENTITY,
            points,
            style: Style::default(),
            settings: RenderSettings::default(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl Drawable for Path {
    fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>, anchor: &Anchor) {
        if self.points.is_empty() {
            return;
        }

        // Extent is recomputed every draw; points are public and may change.
        let extent = BoundsRect::enclosing(Vec2::ZERO, &self.points).size;

        paint_shape(ctx, anchor, &self.transform, &self.style, Some(extent), || DrawCmd::Path {
            points: self.points.iter().map(|p| Vec2::new(p.x, -p.y)).collect(),
        });
    }
}
