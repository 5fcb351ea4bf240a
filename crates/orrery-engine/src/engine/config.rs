use crate::input::Key;

/// Engine behavior knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Key that leaves fullscreen when pressed. `None` disables the hook.
    pub fullscreen_exit_key: Option<Key>,
    /// Paint the orbit indicator on the main viewport while loading.
    pub show_loading_indicator: bool,
    /// Images decoded per tick while loading. Values below 1 are treated as 1.
    pub images_per_tick: usize,
}

impl EngineConfig {
    #[inline]
    pub(crate) fn image_budget(&self) -> usize {
        self.images_per_tick.max(1)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fullscreen_exit_key: Some(Key::Escape),
            show_loading_indicator: true,
            images_per_tick: 1,
        }
    }
}
