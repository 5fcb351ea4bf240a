use crate::coords::Vec2;
use crate::scene::{Anchor, DrawCmd, DrawCtx, Drawable, RenderSettings, Style, Transform};

use super::submit;

/// Blit of a playing video stream, centered on its position.
///
/// Stream handles carry no decoded dimensions, so the draw size is always
/// given explicitly.
#[derive(Debug, Clone)]
pub struct Video {
    pub transform: Transform,
    pub alias: String,
    pub size: Vec2,
    settings: RenderSettings,
}

impl Video {
    pub fn new(alias: impl Into<String>, size: Vec2) -> Self {
        Self {
            transform: Transform::IDENTITY,
            alias: alias.into(),
            size,
            settings: RenderSettings::default(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl Drawable for Video {
    fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>, anchor: &Anchor) {
        if ctx.assets.video(&self.alias).is_none() {
            log::debug!("video: no stream opened under alias '{}'; skipped", self.alias);
            return;
        }

        let world = anchor.resolve(&self.transform);
        if !ctx.camera.sees(world.position, self.size) {
            return;
        }

        submit(
            ctx,
            &world,
            Style::default(),
            DrawCmd::Video { alias: self.alias.clone(), size: self.size },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Assets, VideoAsset};
    use crate::scene::shapes::testing::draw_once;
    use crate::scene::{CameraView, Canvas, Surface};

    fn assets_with_intro() -> Assets {
        let mut assets = Assets::default();
        assets.insert_video("intro", VideoAsset { src: "intro.webm".to_string() });
        assets
    }

    #[test]
    fn opened_stream_is_recorded() {
        let v = Video::new("intro", Vec2::new(320.0, 180.0));
        let items = draw_once(&v, Vec2::ZERO, &assets_with_intro());
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].cmd,
            DrawCmd::Video { alias: "intro".to_string(), size: Vec2::new(320.0, 180.0) }
        );
    }

    #[test]
    fn culled_outside_the_camera() {
        // Camera spans x in [-400, 400]; a 100-wide frame at x = 460 starts at 410.
        let v = Video::new("intro", Vec2::new(100.0, 100.0))
            .with_transform(Transform::at(Vec2::new(460.0, 0.0)));
        assert!(draw_once(&v, Vec2::ZERO, &assets_with_intro()).is_empty());
        assert_eq!(draw_once(&v, Vec2::new(100.0, 0.0), &assets_with_intro()).len(), 1);
    }

    #[test]
    fn anchor_offset_counts_toward_culling() {
        let assets = assets_with_intro();
        let mut canvas = Canvas::new(800.0, 600.0);
        let camera = CameraView {
            name: "main",
            position: Vec2::ZERO,
            angle: 0.0,
            scale: Vec2::ONE,
            size: Vec2::new(800.0, 600.0),
        };
        let v = Video::new("intro", Vec2::new(100.0, 100.0));
        {
            let mut ctx = DrawCtx { camera, surface: &mut canvas, assets: &assets, frame: 0 };
            v.draw(&mut ctx, &Anchor::ROOT.child(&Transform::at(Vec2::new(0.0, 1000.0))));
            v.draw(&mut ctx, &Anchor::ROOT);
        }
        assert_eq!(canvas.draw_list().map(|l| l.items().len()), Some(1));
    }

    #[test]
    fn missing_alias_is_skipped() {
        let v = Video::new("outro", Vec2::new(320.0, 180.0));
        assert!(draw_once(&v, Vec2::ZERO, &assets_with_intro()).is_empty());
    }
}
