//! Orrery engine crate.
//!
//! A small 2D scene engine: drawables registered once and filtered per
//! viewport, scripts run around the render pass, edge-triggered input, and a
//! winit runtime that ticks it all once per animation frame.

pub mod assets;
pub mod coords;
pub mod engine;
pub mod input;
pub mod logging;
pub mod scene;
pub mod time;
pub mod window;
