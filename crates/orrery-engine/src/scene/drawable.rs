use std::cell::{Cell, Ref, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::assets::Assets;

use super::{Anchor, CameraView, Layer, Surface};

/// Name of the viewport drawables target when nothing else is specified.
pub const MAIN_VIEWPORT: &str = "main";

/// Visibility, draw order and viewport membership of a drawable.
///
/// The builders configure a value before it is handed to a drawable. Once a
/// drawable owns it, the `Drawable` trait only lends it out shared and the
/// state changes solely through the `SceneEngine` setters, which refresh the
/// per-viewport caches in the same call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    visible: Cell<bool>,
    layer: Cell<Layer>,
    targets: RefCell<BTreeSet<String>>,
}

impl RenderSettings {
    pub fn new<I, S>(visible: bool, layer: impl Into<Layer>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            visible: Cell::new(visible),
            layer: Cell::new(layer.into()),
            targets: RefCell::new(targets.into_iter().map(Into::into).collect()),
        }
    }

    /// Builder: draw order.
    pub fn on_layer(self, layer: impl Into<Layer>) -> Self {
        self.layer.set(layer.into());
        self
    }

    /// Builder: viewport names this drawable shows on.
    pub fn on_viewports<I, S>(self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets.replace(targets.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: start hidden.
    pub fn hidden(self) -> Self {
        self.visible.set(false);
        self
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible.get()
    }

    #[inline]
    pub fn layer(&self) -> Layer {
        self.layer.get()
    }

    #[inline]
    pub fn targets(&self) -> Ref<'_, BTreeSet<String>> {
        self.targets.borrow()
    }

    #[inline]
    pub fn targets_viewport(&self, name: &str) -> bool {
        self.targets.borrow().contains(name)
    }

    pub(crate) fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    pub(crate) fn set_layer(&self, layer: Layer) {
        self.layer.set(layer);
    }

    pub(crate) fn set_targets(&self, targets: BTreeSet<String>) {
        self.targets.replace(targets);
    }
}

impl Default for RenderSettings {
    /// Visible, layer 0, shown on the main viewport.
    fn default() -> Self {
        Self::new(true, 0, [MAIN_VIEWPORT])
    }
}

/// Everything a drawable needs while painting into one viewport.
pub struct DrawCtx<'a> {
    pub camera: CameraView<'a>,
    pub surface: &'a mut dyn Surface,
    pub assets: &'a Assets,
    /// Engine frame counter.
    pub frame: u64,
}

/// Something that can paint itself into a viewport.
///
/// Implementors own a `RenderSettings` and lend it out through `settings`;
/// the engine reads it when filtering and sorting and is its only writer. `draw` receives the owner's
/// accumulated transform in `anchor` (the root anchor for registered drawables)
/// and should skip submitting anything whose world bounds miss `ctx.camera`.
pub trait Drawable {
    fn settings(&self) -> &RenderSettings;

    fn draw(&self, ctx: &mut DrawCtx<'_>, anchor: &Anchor);
}

/// Shared handle the engine registry stores. Identity is the allocation.
pub type SharedDrawable = Rc<RefCell<dyn Drawable>>;

/// Reference identity for drawables, independent of the concrete type the
/// caller holds.
#[inline]
pub fn same_drawable<A, B>(a: &Rc<RefCell<A>>, b: &Rc<RefCell<B>>) -> bool
where
    A: ?Sized,
    B: ?Sized,
{
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
