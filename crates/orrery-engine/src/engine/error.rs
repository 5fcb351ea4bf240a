use std::fmt;

use crate::assets::AssetError;

/// Errors reported by `SceneEngine::initialize` and by the frame scheduler.
///
/// Configuration errors leave the engine exactly as it was before the call.
#[derive(Debug)]
pub enum EngineError {
    AlreadyInitialized,
    NoViewports,
    /// The viewport's surface has a zero, negative or non-finite size.
    InvalidSurface { viewport: String },
    DuplicateViewport { name: String },
    /// An image in the manifest could not be loaded. Startup cannot continue.
    AssetLoad { alias: String, src: String, source: AssetError },
}

impl EngineError {
    /// True for errors caused by how `initialize` was called, as opposed to
    /// failures while loading.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, EngineError::AssetLoad { .. })
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::AlreadyInitialized => write!(f, "engine was already initialized"),
            EngineError::NoViewports => write!(f, "no viewports given to initialize"),
            EngineError::InvalidSurface { viewport } => {
                write!(f, "viewport '{viewport}' has an unusable surface size")
            }
            EngineError::DuplicateViewport { name } => {
                write!(f, "more than one viewport is named '{name}'")
            }
            EngineError::AssetLoad { alias, src, source } => {
                write!(f, "failed to load image '{alias}' from '{src}': {source}")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::AssetLoad { source, .. } => Some(source),
            _ => None,
        }
    }
}
