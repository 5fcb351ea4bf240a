use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::engine::{RuntimeCommand, SceneEngine};
use crate::input::platform::winit::translate_window_event;
use crate::input::InputEvent;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Open the window borderless-fullscreen on the current monitor.
    pub start_fullscreen: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "orrery".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            start_fullscreen: false,
        }
    }
}

/// Entry point for the runtime.
///
/// The window only shows pixels if the host gives the main viewport a
/// `Surface` that paints; the bundled `Canvas` just records draw commands.
pub struct Runtime;

impl Runtime {
    /// Runs `engine` until the window closes, an `Exit` command is drained,
    /// or a tick fails. A failed tick is returned as the error.
    ///
    /// The engine should already be initialized; ticks before that do nothing.
    pub fn run(config: RuntimeConfig, engine: SceneEngine) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, engine);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct AppState {
    config: RuntimeConfig,
    engine: SceneEngine,

    window: Option<Window>,
    exit_requested: bool,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, engine: SceneEngine) -> Self {
        Self {
            config,
            engine,
            window: None,
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);
        if self.config.start_fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        // The main viewport's surface and the pointer origin follow the window.
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        self.resize_main(size.width as f32, size.height as f32);

        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn resize_main(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            // Minimized; keep the last usable size.
            return;
        }
        if let Some(main) = self.engine.main_viewport_mut() {
            main.surface_mut().resize(width, height);
        }
        self.engine.handle_input(&InputEvent::SurfaceResized { width, height });
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop) {
        for cmd in self.engine.drain_commands() {
            match cmd {
                RuntimeCommand::EnterFullscreen => {
                    if let Some(w) = &self.window {
                        w.set_fullscreen(Some(Fullscreen::Borderless(None)));
                    }
                }
                RuntimeCommand::ExitFullscreen => {
                    if let Some(w) = self.window.as_ref().filter(|w| w.fullscreen().is_some()) {
                        w.set_fullscreen(None);
                    }
                }
                RuntimeCommand::Exit => self.request_exit(),
            }
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.failure = Some(e);
            self.request_exit();
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // One tick per animation frame.
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(window) = self.window.as_ref() else {
            return;
        };

        let translated = translate_window_event(window, &event);
        match translated {
            Some(InputEvent::SurfaceResized { width, height }) => self.resize_main(width, height),
            Some(ev) => self.engine.handle_input(&ev),
            None => {}
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.window = None;
                self.request_exit();
                event_loop.exit();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self.window.as_ref().map(|w| {
                    w.request_redraw();
                    w.inner_size().to_logical::<f64>(w.scale_factor())
                });
                if let Some(size) = size {
                    self.resize_main(size.width as f32, size.height as f32);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.engine.tick() {
                    log::error!("engine stopped: {e}");
                    self.failure = Some(anyhow::Error::new(e).context("engine tick failed"));
                    self.request_exit();
                }
                self.apply_commands(event_loop);
            }

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
