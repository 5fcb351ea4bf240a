use crate::coords::Vec2;
use crate::scene::{Anchor, DrawCmd, DrawCtx, Drawable, RenderSettings, Style, Transform};

use super::paint_shape;

#[derive(Debug, Clone)]
pub struct Ellipse {
    pub transform: Transform,
    /// Radius along each local axis.
    pub radii: Vec2,
    pub style: Style,
    settings: RenderSettings,
}

impl Ellipse {
    pub fn new(radii: Vec2) -> Self {
        Self {
            transform: Transform::IDENTITY,
            radii,
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

impl Drawable for Ellipse {
    fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>, anchor: &Anchor) {
        paint_shape(
            ctx,
            anchor,
            &self.transform,
            &self.style,
            Some(self.radii * 2.0),
            || DrawCmd::Ellipse { radii: self.radii },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;
    use crate::coords::Color;
    use crate::scene::shapes::testing::draw_once;

    #[test]
    fn nested_ellipse_uses_anchor_for_culling() {
        // Off-screen for a camera at the origin, on-screen once the camera follows it.
        let e = Ellipse::new(Vec2::new(5.0, 10.0))
            .with_transform(Transform::at(Vec2::new(1000.0, 0.0)))
            .with_style(Style::outlined(Color::white(), 2.0));

        assert!(draw_once(&e, Vec2::ZERO, &Assets::default()).is_empty());
        assert_eq!(draw_once(&e, Vec2::new(1000.0, 0.0), &Assets::default()).len(), 1);
    }
}
