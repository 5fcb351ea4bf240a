//! Test doubles shared by the engine's unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::scene::{
    shapes, Anchor, Canvas, DrawCmd, DrawCtx, Drawable, RenderSettings, SharedDrawable, Style,
    Transform, Viewport,
};

use super::{LoadPlan, SceneEngine};

thread_local! {
    static MARKER_IDS: RefCell<Vec<(usize, u32)>> = const { RefCell::new(Vec::new()) };
}

fn addr<T: ?Sized>(rc: &Rc<RefCell<T>>) -> usize {
    Rc::as_ptr(rc) as *const () as usize
}

/// Drawable that records its id as a text command, so draw order is visible
/// in a canvas' draw list.
pub(crate) struct Marker {
    pub(crate) id: u32,
    settings: RenderSettings,
}

impl Marker {
    /// Id of a registered marker handle, `u32::MAX` if it is not a marker.
    pub(crate) fn id_of(d: &SharedDrawable) -> u32 {
        let key = addr(d);
        MARKER_IDS.with(|ids| {
            ids.borrow()
                .iter()
                .rev()
                .find(|(a, _)| *a == key)
                .map(|(_, id)| *id)
                .unwrap_or(u32::MAX)
        })
    }
}

impl Drawable for Marker {
    fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>, anchor: &Anchor) {
        let world = anchor.resolve(&Transform::IDENTITY);
        shapes::submit(
            ctx,
            &world,
            Style::default(),
            DrawCmd::Text {
                content: self.id.to_string(),
                font: String::new(),
                size: 0.0,
                align: Default::default(),
                baseline: Default::default(),
            },
        );
    }
}

pub(crate) fn marker(id: u32, settings: RenderSettings) -> Rc<RefCell<Marker>> {
    let rc = Rc::new(RefCell::new(Marker { id, settings }));
    MARKER_IDS.with(|ids| ids.borrow_mut().push((addr(&rc), id)));
    rc
}

pub(crate) fn canvas_viewport(name: &str) -> Viewport {
    Viewport::new(name, Canvas::new(800.0, 600.0))
}

/// Engine initialized with one 800x600 canvas viewport per name, still loading.
pub(crate) fn initialize_into(mut engine: SceneEngine, names: &[&str]) -> SceneEngine {
    let viewports = names.iter().map(|n| canvas_viewport(n)).collect();
    let result = engine.initialize(viewports, LoadPlan::default());
    assert!(result.is_ok(), "initialize failed: {result:?}");
    engine
}

/// Running engine with one canvas viewport per name.
pub(crate) fn engine_with(names: &[&str]) -> SceneEngine {
    let mut engine = initialize_into(SceneEngine::default(), names);
    let result = engine.finish_loading();
    assert!(result.is_ok(), "loading failed: {result:?}");
    engine
}

/// Text contents a viewport's canvas recorded in its last frame.
pub(crate) fn drawn_text(engine: &SceneEngine, viewport: &str) -> Vec<String> {
    engine
        .viewport(viewport)
        .and_then(|v| v.surface().draw_list())
        .map(|list| {
            list.items()
                .iter()
                .filter_map(|item| match &item.cmd {
                    DrawCmd::Text { content, .. } => Some(content.clone()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}
