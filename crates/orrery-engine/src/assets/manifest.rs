/// One `{src, alias}` pair. `alias` is the key drawables look the asset up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub src: String,
    pub alias: String,
}

impl AssetEntry {
    pub fn new(src: impl Into<String>, alias: impl Into<String>) -> Self {
        Self { src: src.into(), alias: alias.into() }
    }
}

/// Everything to load before the engine starts running, per kind, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    pub images: Vec<AssetEntry>,
    pub audio: Vec<AssetEntry>,
    pub videos: Vec<AssetEntry>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(mut self, src: impl Into<String>, alias: impl Into<String>) -> Self {
        self.images.push(AssetEntry::new(src, alias));
        self
    }

    pub fn audio(mut self, src: impl Into<String>, alias: impl Into<String>) -> Self {
        self.audio.push(AssetEntry::new(src, alias));
        self
    }

    pub fn video(mut self, src: impl Into<String>, alias: impl Into<String>) -> Self {
        self.videos.push(AssetEntry::new(src, alias));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.audio.is_empty() && self.videos.is_empty()
    }
}
