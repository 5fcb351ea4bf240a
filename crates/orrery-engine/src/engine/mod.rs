//! The scene engine: drawable and script registries, the per-viewport
//! filter/sort pipeline, and the tick-driven frame scheduler.

mod commands;
mod config;
mod error;
mod frame;
mod loading;
mod registry;
mod script;

#[cfg(test)]
pub(crate) mod testing;

pub use commands::RuntimeCommand;
pub use config::EngineConfig;
pub use error::EngineError;
pub use loading::{LoadPlan, OnLoad};
pub use script::{Phase, Script};

use std::collections::HashSet;

use crate::assets::Assets;
use crate::input::{InputEvent, InputState};
use crate::scene::{SharedDrawable, Viewport};
use crate::time::{FrameClock, FrameTime};

use loading::Loader;
use script::ScriptList;

/// Where the engine is in its lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EngineState {
    /// `initialize` has not succeeded yet.
    Uninitialized,
    /// Viewports are registered; images are being loaded.
    Loading,
    /// Every tick runs one frame.
    Running,
}

/// Engine context owned by the entry point and handed to every script.
///
/// Drive it by feeding input through `handle_input` and calling `tick` once per
/// animation frame (the winit `Runtime` does both).
pub struct SceneEngine {
    config: EngineConfig,
    state: EngineState,

    viewports: Vec<Viewport>,
    drawables: Vec<SharedDrawable>,
    pre_scripts: ScriptList,
    post_scripts: ScriptList,

    assets: Assets,
    loader: Option<Loader>,

    input: InputState,
    clock: FrameClock,
    time: FrameTime,
    frame_counter: u64,

    commands: Vec<RuntimeCommand>,
}

impl SceneEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: EngineState::Uninitialized,
            viewports: Vec::new(),
            drawables: Vec::new(),
            pre_scripts: ScriptList::default(),
            post_scripts: ScriptList::default(),
            assets: Assets::default(),
            loader: None,
            input: InputState::default(),
            clock: FrameClock::new(),
            time: FrameTime::start(),
            frame_counter: 0,
            commands: Vec::new(),
        }
    }

    /// Registers `viewports` (the first is the main viewport) and starts
    /// loading `plan`.
    ///
    /// Fails without touching the engine if it is already initialized, if
    /// `viewports` is empty, if a surface has no usable size, or if two
    /// viewports share a name. Each failure is also logged.
    pub fn initialize(&mut self, viewports: Vec<Viewport>, plan: LoadPlan) -> Result<(), EngineError> {
        if let Err(e) = self.validate(&viewports) {
            log::error!("initialize: {e}");
            return Err(e);
        }

        self.viewports = viewports;
        let main = self.viewports[0].size();
        self.input.observe(main.x, main.y);

        log::info!(
            "engine loading: {} viewport(s), {} image(s), {} audio, {} video",
            self.viewports.len(),
            plan.manifest.images.len(),
            plan.manifest.audio.len(),
            plan.manifest.videos.len(),
        );

        self.loader = Some(Loader::new(plan));
        self.state = EngineState::Loading;
        self.frame_counter = 0;

        self.refilter();
        self.resort();
        Ok(())
    }

    fn validate(&self, viewports: &[Viewport]) -> Result<(), EngineError> {
        if self.state != EngineState::Uninitialized {
            return Err(EngineError::AlreadyInitialized);
        }
        if viewports.is_empty() {
            return Err(EngineError::NoViewports);
        }

        let mut names = HashSet::with_capacity(viewports.len());
        for v in viewports {
            let size = v.size();
            if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
                return Err(EngineError::InvalidSurface { viewport: v.name().to_string() });
            }
            if !names.insert(v.name()) {
                return Err(EngineError::DuplicateViewport { name: v.name().to_string() });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.state != EngineState::Uninitialized
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ── viewports ─────────────────────────────────────────────────────────

    pub fn viewports(&self) -> &[Viewport] {
        &self.viewports
    }

    pub fn viewport(&self, name: &str) -> Option<&Viewport> {
        self.viewports.iter().find(|v| v.name() == name)
    }

    /// Mutable access for camera motion. The viewport set itself is fixed.
    pub fn viewport_mut(&mut self, name: &str) -> Option<&mut Viewport> {
        self.viewports.iter_mut().find(|v| v.name() == name)
    }

    /// The first viewport passed to `initialize`.
    pub fn main_viewport(&self) -> Option<&Viewport> {
        self.viewports.first()
    }

    pub fn main_viewport_mut(&mut self) -> Option<&mut Viewport> {
        self.viewports.first_mut()
    }

    // ── assets / input / time ─────────────────────────────────────────────

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Feeds one platform event into the input state.
    pub fn handle_input(&mut self, event: &InputEvent) {
        self.input.apply_event(event);
    }

    /// Frames completed so far, loading ticks included.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_counter
    }

    /// Timing of the current tick.
    #[inline]
    pub fn time(&self) -> FrameTime {
        self.time
    }

    /// Clamped seconds since the previous tick.
    #[inline]
    pub fn dt(&self) -> f32 {
        self.time.dt
    }
}

impl Default for SceneEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{canvas_viewport, drawn_text, engine_with, marker, Marker};
    use super::*;
    use crate::scene::{Canvas, RenderSettings};

    // ── initialize ────────────────────────────────────────────────────────

    #[test]
    fn initialize_enters_loading() {
        let mut engine = SceneEngine::default();
        assert_eq!(engine.state(), EngineState::Uninitialized);

        let result = engine.initialize(vec![canvas_viewport("main")], LoadPlan::default());
        assert!(result.is_ok());
        assert_eq!(engine.state(), EngineState::Loading);
        assert_eq!(engine.main_viewport().map(|v| v.name()), Some("main"));
        assert_eq!(engine.input().surface_size(), crate::coords::Vec2::new(800.0, 600.0));
    }

    #[test]
    fn second_initialize_is_rejected_without_changes() {
        let mut engine = engine_with(&["main"]);
        let result = engine.initialize(vec![canvas_viewport("other")], LoadPlan::default());

        assert!(matches!(result, Err(EngineError::AlreadyInitialized)));
        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(engine.viewports().len(), 1);
        assert!(engine.viewport("other").is_none());
    }

    #[test]
    fn zero_viewports_is_rejected() {
        let mut engine = SceneEngine::default();
        let result = engine.initialize(Vec::new(), LoadPlan::default());
        assert!(matches!(result, Err(EngineError::NoViewports)));
        assert_eq!(engine.state(), EngineState::Uninitialized);

        // A rejected call does not use up the one-shot initialize.
        assert!(engine.initialize(vec![canvas_viewport("main")], LoadPlan::default()).is_ok());
    }

    #[test]
    fn malformed_surfaces_are_rejected() {
        let mut engine = SceneEngine::default();
        let result = engine.initialize(
            vec![canvas_viewport("main"), Viewport::new("broken", Canvas::new(0.0, 600.0))],
            LoadPlan::default(),
        );
        assert!(matches!(result, Err(EngineError::InvalidSurface { viewport }) if viewport == "broken"));
        assert_eq!(engine.state(), EngineState::Uninitialized);
        assert!(engine.viewports().is_empty());
    }

    #[test]
    fn duplicate_viewport_names_are_rejected() {
        let mut engine = SceneEngine::default();
        let result = engine.initialize(
            vec![canvas_viewport("main"), canvas_viewport("main")],
            LoadPlan::default(),
        );
        assert!(matches!(result, Err(EngineError::DuplicateViewport { name }) if name == "main"));
        assert!(!engine.is_initialized());
    }

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn two_viewports_share_and_then_split_a_drawable() {
        let mut engine = engine_with(&["main1", "main2"]);
        let d = marker(7, RenderSettings::default().on_viewports(["main1", "main2"]));
        engine.add_drawable(d.clone());

        for name in ["main1", "main2"] {
            let cached: Vec<u32> = engine
                .viewport(name)
                .map(|v| v.renderables().iter().map(Marker::id_of).collect())
                .unwrap_or_default();
            assert_eq!(cached, vec![7], "{name}");
        }

        engine.set_viewport_targets(&d, ["main1"]);
        assert_eq!(engine.viewport("main1").map(|v| v.renderables().len()), Some(1));
        assert_eq!(engine.viewport("main2").map(|v| v.renderables().len()), Some(0));

        assert!(engine.tick().is_ok());
        assert_eq!(drawn_text(&engine, "main1"), vec!["7"]);
        assert!(drawn_text(&engine, "main2").is_empty());
    }

    #[test]
    fn viewport_motion_is_visible_through_lookup() {
        let mut engine = engine_with(&["main"]);
        if let Some(v) = engine.viewport_mut("main") {
            v.translate(crate::coords::Vec2::new(10.0, -5.0));
        }
        let bounds = engine.main_viewport().map(|v| v.bounds());
        assert_eq!(bounds.map(|b| b.center), Some(crate::coords::Vec2::new(10.0, -5.0)));
    }
}
