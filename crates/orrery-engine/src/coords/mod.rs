//! Coordinate and geometry types shared by the scene, engine and input layers.
//!
//! World space:
//! - +X right, +Y up
//! - angles in degrees, counter-clockwise
//!
//! Surface space (what `Surface` implementations receive) is top-left origin, +Y down.
//! The conversion lives in `scene::transform`.

mod bounds;
mod color;
mod vec2;

pub use bounds::BoundsRect;
pub use color::Color;
pub use vec2::Vec2;
