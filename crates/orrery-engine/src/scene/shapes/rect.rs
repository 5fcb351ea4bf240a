use crate::coords::Vec2;
use crate::scene::{Anchor, DrawCmd, DrawCtx, Drawable, RenderSettings, Style, Transform};

use super::paint_shape;

/// Axis-aligned (before rotation) rectangle centered on its position.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub transform: Transform,
    pub size: Vec2,
    pub style: Style,
    settings: RenderSettings,
}

impl Rectangle {
    pub fn new(size: Vec2) -> Self {
        Self {
            transform: Transform::IDENTITY,
            size,
            style: Style::default(),
            settings: RenderSettings::default(),
        }
    }

    /// A square of side `side`.
    pub fn square(side: f32) -> Self {
        Self::new(Vec2::new(side, side))
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

impl Drawable for Rectangle {
    fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>, anchor: &Anchor) {
        paint_shape(ctx, anchor, &self.transform, &self.style, Some(self.size), || DrawCmd::Rect {
            size: self.size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;
    use crate::coords::Color;
    use crate::scene::shapes::testing::draw_once;

    fn red_square(at: Vec2) -> Rectangle {
        Rectangle::square(20.0)
            .with_transform(Transform::at(at))
            .with_style(Style::filled(Color::new(1.0, 0.0, 0.0, 1.0)))
    }

    #[test]
    fn on_screen_rectangle_is_recorded() {
        let items = draw_once(&red_square(Vec2::ZERO), Vec2::ZERO, &Assets::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].cmd, DrawCmd::Rect { size: Vec2::new(20.0, 20.0) });
        assert_eq!(items[0].transform.translation, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn off_screen_rectangle_is_culled() {
        let items = draw_once(&red_square(Vec2::new(2000.0, 0.0)), Vec2::ZERO, &Assets::default());
        assert!(items.is_empty());
    }

    #[test]
    fn culling_follows_the_camera() {
        let items = draw_once(&red_square(Vec2::new(2000.0, 0.0)), Vec2::new(2000.0, 0.0), &Assets::default());
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn transparent_rectangle_records_nothing() {
        let r = Rectangle::square(20.0);
        assert!(draw_once(&r, Vec2::ZERO, &Assets::default()).is_empty());
    }
}
