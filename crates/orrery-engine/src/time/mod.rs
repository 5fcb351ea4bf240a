//! Frame timing.
//!
//! The engine owns one `FrameClock` and ticks it once per animation frame;
//! scripts read the resulting `FrameTime` through the engine.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
