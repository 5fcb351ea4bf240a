use std::collections::HashMap;
use std::path::PathBuf;

use super::{AssetError, AudioAsset, ImageAsset, VideoAsset};

/// Where asset bytes come from.
///
/// Images are decoded eagerly and may fail. Audio and video are only opened
/// as handles; whether they ever become playable is not the engine's concern.
pub trait AssetSource {
    fn load_image(&mut self, src: &str) -> Result<ImageAsset, AssetError>;

    fn open_audio(&mut self, src: &str) -> AudioAsset {
        AudioAsset { src: src.to_string() }
    }

    fn open_video(&mut self, src: &str) -> VideoAsset {
        VideoAsset { src: src.to_string() }
    }
}

/// Loads images from disk, relative to `root`.
#[derive(Debug, Clone, Default)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for FsAssetSource {
    fn load_image(&mut self, src: &str) -> Result<ImageAsset, AssetError> {
        let path = self.root.join(src);

        let reader = image::ImageReader::open(&path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|source| AssetError::Io { path: path.clone(), source })?;
        let decoded = reader
            .decode()
            .map_err(|source| AssetError::Decode { path: path.clone(), source })?;

        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(ImageAsset::new(width, height, rgba.into_raw()))
    }
}

/// In-memory source keyed by `src`. Useful for generated art and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    images: HashMap<String, ImageAsset>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, src: impl Into<String>, image: ImageAsset) -> Self {
        self.images.insert(src.into(), image);
        self
    }
}

impl AssetSource for MemoryAssetSource {
    fn load_image(&mut self, src: &str) -> Result<ImageAsset, AssetError> {
        self.images
            .get(src)
            .cloned()
            .ok_or_else(|| AssetError::NotFound { src: src.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_returns_registered_images() {
        let mut source = MemoryAssetSource::new().with_image("a.png", ImageAsset::new(1, 1, vec![255; 4]));
        assert_eq!(source.load_image("a.png").map(|i| i.width).ok(), Some(1));
        assert!(matches!(source.load_image("b.png"), Err(AssetError::NotFound { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut source = FsAssetSource::new("/nonexistent-orrery-assets");
        let err = source.load_image("ship.png");
        assert!(matches!(err, Err(AssetError::Io { .. })));
    }

    #[test]
    fn audio_and_video_open_without_loading() {
        let mut source = FsAssetSource::new("/nonexistent-orrery-assets");
        assert_eq!(source.open_audio("beep.ogg").src, "beep.ogg");
        assert_eq!(source.open_video("intro.webm").src, "intro.webm");
    }
}
