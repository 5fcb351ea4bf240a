//! Named asset tables populated before the first frame.

mod error;
mod manifest;
mod source;
mod table;

pub use error::AssetError;
pub use manifest::{AssetEntry, AssetManifest};
pub use source::{AssetSource, FsAssetSource, MemoryAssetSource};
pub use table::{Assets, AudioAsset, ImageAsset, VideoAsset};
