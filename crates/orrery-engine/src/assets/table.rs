use std::collections::HashMap;

use crate::coords::Vec2;

/// Decoded image, straight-alpha RGBA8, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageAsset {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self { width, height, pixels }
    }

    #[inline]
    pub fn natural_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Handle to an audio stream. Playback belongs to the host; the engine only
/// keeps the handle addressable by alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAsset {
    pub src: String,
}

/// Handle to a video stream. Same contract as `AudioAsset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAsset {
    pub src: String,
}

/// Alias → asset tables, one per kind. Read-only once the engine is running.
#[derive(Debug, Default)]
pub struct Assets {
    images: HashMap<String, ImageAsset>,
    audio: HashMap<String, AudioAsset>,
    videos: HashMap<String, VideoAsset>,
}

impl Assets {
    pub fn image(&self, alias: &str) -> Option<&ImageAsset> {
        self.images.get(alias)
    }

    pub fn audio(&self, alias: &str) -> Option<&AudioAsset> {
        self.audio.get(alias)
    }

    pub fn video(&self, alias: &str) -> Option<&VideoAsset> {
        self.videos.get(alias)
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn audio_count(&self) -> usize {
        self.audio.len()
    }

    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// Later inserts under the same alias replace earlier ones.
    pub fn insert_image(&mut self, alias: impl Into<String>, image: ImageAsset) {
        self.images.insert(alias.into(), image);
    }

    pub fn insert_audio(&mut self, alias: impl Into<String>, audio: AudioAsset) {
        self.audio.insert(alias.into(), audio);
    }

    pub fn insert_video(&mut self, alias: impl Into<String>, video: VideoAsset) {
        self.videos.insert(alias.into(), video);
    }
}
