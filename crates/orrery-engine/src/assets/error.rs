use std::fmt;
use std::path::PathBuf;

/// Failure to produce an asset from its source.
#[derive(Debug)]
pub enum AssetError {
    /// The file could not be opened or read.
    Io { path: PathBuf, source: std::io::Error },
    /// The bytes were read but are not a decodable image.
    Decode { path: PathBuf, source: image::ImageError },
    /// The source has nothing registered under this name.
    NotFound { src: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            AssetError::Decode { path, source } => {
                write!(f, "cannot decode {}: {source}", path.display())
            }
            AssetError::NotFound { src } => write!(f, "no asset at '{src}'"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            AssetError::Decode { source, .. } => Some(source),
            AssetError::NotFound { .. } => None,
        }
    }
}
