use crate::scene::{
    Anchor, DrawCmd, DrawCtx, Drawable, RenderSettings, Style, TextAlign, TextBaseline, Transform,
};

use super::paint_shape;

/// A run of text. Text has no known extent before it is shaped, so it is
/// never culled.
#[derive(Debug, Clone)]
pub struct Text {
    pub transform: Transform,
    pub content: String,
    pub font: String,
    pub size: f32,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub style: Style,
    settings: RenderSettings,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            transform: Transform::IDENTITY,
            content: content.into(),
            font: "sans-serif".to_string(),
            size: 16.0,
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            style: Style::default(),
            settings: RenderSettings::default(),
        }
    }

    pub fn with_font(mut self, font: impl Into<String>, size: f32) -> Self {
        self.font = font.into();
        self.size = size;
        self
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

impl Drawable for Text {
    fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>, anchor: &Anchor) {
        paint_shape(ctx, anchor, &self.transform, &self.style, None, || DrawCmd::Text {
            content: self.content.clone(),
            font: self.font.clone(),
            size: self.size,
            align: self.align,
            baseline: self.baseline,
        });
    }
}
