use crate::coords::Vec2;
use crate::scene::{Anchor, DrawCmd, DrawCtx, Drawable, RenderSettings, Style, Transform};

use super::paint_shape;

#[derive(Debug, Clone)]
pub struct Circle {
    pub transform: Transform,
    pub radius: f32,
    pub style: Style,
    settings: RenderSettings,
}

impl Circle {
    pub fn new(radius: f32) -> Self {
        Self {
            transform: Transform::IDENTITY,
            radius,
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

impl Drawable for Circle {
    fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>, anchor: &Anchor) {
        let diameter = self.radius * 2.0;
        paint_shape(
            ctx,
            anchor,
            &self.transform,
            &self.style,
            Some(Vec2::new(diameter, diameter)),
            || DrawCmd::Circle { radius: self.radius },
        );
    }
}
