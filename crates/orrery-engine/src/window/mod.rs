//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window that shows the main viewport, and
//! drives the engine once per redraw. Painting is up to the viewport surfaces
//! the host supplies.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
