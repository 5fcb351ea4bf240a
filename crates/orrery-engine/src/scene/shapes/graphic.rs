use crate::coords::Vec2;
use crate::scene::{Anchor, DrawCmd, DrawCtx, Drawable, RenderSettings, Style, Transform};

use super::submit;

/// Blit of a loaded image asset, centered on its position.
///
/// With neither `width` nor `height` set the image's natural size is used;
/// with only one set the other follows the image's aspect ratio.
#[derive(Debug, Clone)]
pub struct Graphic {
    pub transform: Transform,
    pub alias: String,
    pub width: Option<f32>,
    pub height: Option<f32>,
    settings: RenderSettings,
}

impl Graphic {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            transform: Transform::IDENTITY,
            alias: alias.into(),
            width: None,
            height: None,
            settings: RenderSettings::default(),
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Draw size for an image of `natural` pixels.
    pub fn resolved_size(&self, natural: Vec2) -> Vec2 {
        let aspect = if natural.y != 0.0 { natural.x / natural.y } else { 1.0 };
        match (self.width, self.height) {
            (Some(w), Some(h)) => Vec2::new(w, h),
            (Some(w), None) => Vec2::new(w, w / aspect),
            (None, Some(h)) => Vec2::new(h * aspect, h),
            (None, None) => natural,
        }
    }
}

impl Drawable for Graphic {
    fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>, anchor: &Anchor) {
        let Some(image) = ctx.assets.image(&self.alias) else {
            log::debug!("graphic: no image loaded under alias '{}'; skipped", self.alias);
            return;
        };

        let size = self.resolved_size(image.natural_size());
        let world = anchor.resolve(&self.transform);
        if !ctx.camera.sees(world.position, size) {
            return;
        }

        submit(
            ctx,
            &world,
            Style::default(),
            DrawCmd::Image { alias: self.alias.clone(), size },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Assets, ImageAsset};
    use crate::scene::shapes::testing::draw_once;

    fn assets_with_ship() -> Assets {
        let mut assets = Assets::default();
        assets.insert_image("ship", ImageAsset::new(40, 20, vec![0; 40 * 20 * 4]));
        assets
    }

    // ── sizing ────────────────────────────────────────────────────────────

    #[test]
    fn natural_size_by_default() {
        let g = Graphic::new("ship");
        assert_eq!(g.resolved_size(Vec2::new(40.0, 20.0)), Vec2::new(40.0, 20.0));
    }

    #[test]
    fn single_axis_follows_aspect_ratio() {
        let natural = Vec2::new(40.0, 20.0);
        assert_eq!(Graphic::new("ship").with_width(80.0).resolved_size(natural), Vec2::new(80.0, 40.0));
        assert_eq!(Graphic::new("ship").with_height(10.0).resolved_size(natural), Vec2::new(20.0, 10.0));
    }

    #[test]
    fn both_axes_override() {
        let g = Graphic::new("ship").with_width(5.0).with_height(7.0);
        assert_eq!(g.resolved_size(Vec2::new(40.0, 20.0)), Vec2::new(5.0, 7.0));
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn loaded_image_is_recorded() {
        let items = draw_once(&Graphic::new("ship"), Vec2::ZERO, &assets_with_ship());
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].cmd,
            DrawCmd::Image { alias: "ship".to_string(), size: Vec2::new(40.0, 20.0) }
        );
    }

    #[test]
    fn missing_alias_is_skipped() {
        let items = draw_once(&Graphic::new("nope"), Vec2::ZERO, &assets_with_ship());
        assert!(items.is_empty());
    }
}
