use crate::coords::{Color, Vec2};

use super::transform::ScreenTransform;

/// Fill and outline for vector shapes. `None` means "transparent": that part
/// is not painted.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub outline: Option<Color>,
    pub outline_width: f32,
}

impl Style {
    #[inline]
    pub fn filled(color: Color) -> Self {
        Self { fill: Some(color), ..Self::default() }
    }

    #[inline]
    pub fn outlined(color: Color, width: f32) -> Self {
        Self { outline: Some(color), outline_width: width, ..Self::default() }
    }

    /// True when neither fill nor outline would put a pixel on the surface.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.fill.is_none() && self.outline.is_none()
    }
}

impl Default for Style {
    fn default() -> Self {
        Self { fill: None, outline: None, outline_width: 1.0 }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Surface-agnostic paint command. Geometry is local to the item's
/// `ScreenTransform` origin, in surface orientation (+Y down).
///
/// Extending the command set:
/// - add a variant here
/// - add a drawable under `scene::shapes::*` that records it
/// - teach the surfaces that care how to paint it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect { size: Vec2 },
    Circle { radius: f32 },
    Ellipse { radii: Vec2 },
    /// Closed polygon.
    Path { points: Vec<Vec2> },
    Text {
        content: String,
        font: String,
        size: f32,
        align: TextAlign,
        baseline: TextBaseline,
    },
    /// Blit of a named image asset, centered on the origin.
    Image { alias: String, size: Vec2 },
    /// Current frame of a named video stream, centered on the origin.
    Video { alias: String, size: Vec2 },
}

/// One recorded paint operation.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub transform: ScreenTransform,
    pub style: Style,
    pub cmd: DrawCmd,
}
