use super::loading::{paint_indicator, Loader};
use super::{EngineError, EngineState, LoadPlan, Phase, SceneEngine};

impl SceneEngine {
    /// Advances the scheduler by one animation tick.
    ///
    /// While loading, decodes up to `images_per_tick` images and paints the
    /// loading indicator. While running, runs exactly one frame. Before
    /// `initialize` it does nothing.
    ///
    /// An image that fails to load is returned as `EngineError::AssetLoad`;
    /// the engine stays in `Loading` and the failed image is attempted again
    /// only if the caller ticks again.
    pub fn tick(&mut self) -> Result<(), EngineError> {
        match self.state {
            EngineState::Uninitialized => {
                log::trace!("tick before initialize; ignored");
                Ok(())
            }
            EngineState::Loading => {
                self.time = self.clock.tick();
                let result = self.advance_loading(self.config.image_budget());
                if self.state == EngineState::Loading {
                    if result.is_ok() && self.config.show_loading_indicator {
                        self.paint_loading_indicator();
                    }
                    self.frame_counter += 1;
                }
                result
            }
            EngineState::Running => {
                self.run_frame();
                Ok(())
            }
        }
    }

    /// Loads everything left in the plan without yielding, then switches to
    /// `Running`. A no-op unless the engine is loading.
    pub fn finish_loading(&mut self) -> Result<(), EngineError> {
        while self.state == EngineState::Loading {
            self.advance_loading(usize::MAX)?;
        }
        Ok(())
    }

    fn advance_loading(&mut self, budget: usize) -> Result<(), EngineError> {
        let Some(mut loader) = self.loader.take() else {
            self.start_running(None);
            return Ok(());
        };

        let mut loaded = 0;
        while loaded < budget {
            let Some(entry) = loader.plan.manifest.images.get(loader.next_image).cloned() else {
                break;
            };

            match loader.plan.source.load_image(&entry.src) {
                Ok(image) => {
                    log::debug!(
                        "loaded image '{}' from '{}' ({}x{})",
                        entry.alias,
                        entry.src,
                        image.width,
                        image.height
                    );
                    self.assets.insert_image(entry.alias, image);
                    loader.next_image += 1;
                    loaded += 1;
                }
                Err(source) => {
                    log::error!("failed to load image '{}' from '{}': {source}", entry.alias, entry.src);
                    self.loader = Some(loader);
                    return Err(EngineError::AssetLoad { alias: entry.alias, src: entry.src, source });
                }
            }
        }

        if loader.images_remaining() > 0 {
            self.loader = Some(loader);
        } else {
            self.open_streams(loader);
        }
        Ok(())
    }

    /// Audio and video are opened, not awaited.
    fn open_streams(&mut self, loader: Loader) {
        let LoadPlan { manifest, mut source, on_load } = loader.plan;

        for entry in manifest.audio {
            let audio = source.open_audio(&entry.src);
            log::debug!("opened audio '{}' from '{}'", entry.alias, entry.src);
            self.assets.insert_audio(entry.alias, audio);
        }
        for entry in manifest.videos {
            let video = source.open_video(&entry.src);
            log::debug!("opened video '{}' from '{}'", entry.alias, entry.src);
            self.assets.insert_video(entry.alias, video);
        }

        self.start_running(on_load);
    }

    fn start_running(&mut self, on_load: Option<super::OnLoad>) {
        self.state = EngineState::Running;
        log::info!(
            "engine running ({} image(s), {} audio, {} video loaded over {} frame(s))",
            self.assets.image_count(),
            self.assets.audio_count(),
            self.assets.video_count(),
            self.frame_counter,
        );

        if let Some(on_load) = on_load {
            on_load(self);
        }
        self.clock.reset();
    }

    fn paint_loading_indicator(&mut self) {
        let frame = self.frame_counter;
        if let Some(main) = self.viewports.first_mut() {
            main.render_overlay(&self.assets, frame, |ctx| paint_indicator(ctx, frame));
        }
    }

    /// One regular frame: pre-render scripts, every viewport, post-render
    /// scripts, then the input edge rotation. The order is fixed.
    fn run_frame(&mut self) {
        self.time = self.clock.tick();

        if let Some(key) = self.config.fullscreen_exit_key {
            if self.input.key_pressed(key) {
                self.exit_fullscreen();
            }
        }

        self.run_scripts(Phase::PreRender);

        let frame = self.frame_counter;
        for viewport in &mut self.viewports {
            viewport.render(&self.assets, frame);
        }

        self.run_scripts(Phase::PostRender);

        self.input.end_frame();
        self.frame_counter += 1;
    }
}
