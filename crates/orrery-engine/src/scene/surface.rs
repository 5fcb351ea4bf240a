use crate::coords::Vec2;

use super::{DrawItem, DrawList};

/// A drawing target owned by a viewport.
///
/// The engine calls `clear`, then `submit` once per painted item in paint
/// order, then `present`, once per frame. What "painting" means is up to the
/// implementation: a rasterizer, a GPU batcher, a test recorder.
pub trait Surface {
    /// Size in pixels. Drives the viewport's culling bounds.
    fn size(&self) -> Vec2;

    /// Follows the host window. Surfaces with a fixed size ignore it.
    fn resize(&mut self, _width: f32, _height: f32) {}

    fn clear(&mut self);

    fn submit(&mut self, item: DrawItem);

    /// Called after every drawable of the frame has been submitted.
    fn present(&mut self) {}

    /// Recorded commands, for surfaces that keep them.
    fn draw_list(&self) -> Option<&DrawList> {
        None
    }
}

/// Recording surface: keeps the last frame's commands in a `DrawList`.
///
/// Hosts that paint on their own hardware read `draw_list()` after each frame.
#[derive(Debug)]
pub struct Canvas {
    size: Vec2,
    list: DrawList,
    presented: u64,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            list: DrawList::new(),
            presented: 0,
        }
    }

    /// Number of frames presented so far.
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }
}

impl Surface for Canvas {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    fn clear(&mut self) {
        self.list.clear();
    }

    fn submit(&mut self, item: DrawItem) {
        self.list.push(item);
    }

    fn present(&mut self) {
        self.presented += 1;
        log::trace!("canvas presented {} items", self.list.len());
    }

    fn draw_list(&self) -> Option<&DrawList> {
        Some(&self.list)
    }
}
