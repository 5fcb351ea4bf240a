use crate::coords::{BoundsRect, Vec2};

/// Local transform of a drawable, relative to whatever anchor it is drawn under.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Degrees, counter-clockwise.
    pub angle: f32,
    pub scale: Vec2,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec2::ZERO,
        angle: 0.0,
        scale: Vec2::ONE,
    };

    #[inline]
    pub fn at(position: Vec2) -> Self {
        Self { position, ..Self::IDENTITY }
    }

    #[inline]
    pub fn rotated(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    #[inline]
    pub fn scaled(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Fully composed transform in world space, after anchor resolution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldTransform {
    pub position: Vec2,
    /// Degrees in surface orientation (clockwise positive).
    pub angle: f32,
    pub scale: Vec2,
}

/// Transform handed to a `Surface`: translate, then rotate, then scale.
///
/// `translation` is in surface pixels (top-left origin, +Y down);
/// `rotation` is in degrees, clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenTransform {
    pub translation: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
}

/// Read-only snapshot of a viewport's camera, valid for one render pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraView<'a> {
    pub name: &'a str,
    pub position: Vec2,
    pub angle: f32,
    pub scale: Vec2,
    /// Surface size in pixels.
    pub size: Vec2,
}

impl CameraView<'_> {
    /// World-space region the camera sees, centered on the camera position.
    #[inline]
    pub fn bounds(&self) -> BoundsRect {
        BoundsRect::new(self.position, self.size)
    }

    /// True when a box of `extent` centered at `world_position` intersects the view.
    #[inline]
    pub fn sees(&self, world_position: Vec2, extent: Vec2) -> bool {
        self.bounds().overlaps(&BoundsRect::new(world_position, extent))
    }

    /// Maps a world transform into surface space.
    pub fn to_screen(&self, world: &WorldTransform) -> ScreenTransform {
        ScreenTransform {
            translation: Vec2::new(
                self.size.x / 2.0 + world.position.x - self.position.x,
                self.size.y / 2.0 - world.position.y + self.position.y,
            ),
            rotation: world.angle + self.angle,
            scale: world.scale.mul_components(self.scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(position: Vec2) -> CameraView<'static> {
        CameraView {
            name: "main",
            position,
            angle: 0.0,
            scale: Vec2::ONE,
            size: Vec2::new(800.0, 600.0),
        }
    }

    #[test]
    fn world_origin_maps_to_surface_center() {
        let world = WorldTransform { position: Vec2::ZERO, angle: 0.0, scale: Vec2::ONE };
        let screen = camera(Vec2::ZERO).to_screen(&world);
        assert_eq!(screen.translation, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn world_up_is_surface_up() {
        let world = WorldTransform { position: Vec2::new(10.0, 100.0), angle: 0.0, scale: Vec2::ONE };
        let screen = camera(Vec2::ZERO).to_screen(&world);
        assert_eq!(screen.translation, Vec2::new(410.0, 200.0));
    }

    #[test]
    fn camera_offset_shifts_the_scene_opposite() {
        let world = WorldTransform { position: Vec2::ZERO, angle: 0.0, scale: Vec2::ONE };
        let screen = camera(Vec2::new(50.0, 50.0)).to_screen(&world);
        assert_eq!(screen.translation, Vec2::new(350.0, 350.0));
    }

    #[test]
    fn camera_angle_and_scale_compose() {
        let mut cam = camera(Vec2::ZERO);
        cam.angle = 10.0;
        cam.scale = Vec2::new(2.0, 3.0);
        let world = WorldTransform { position: Vec2::ZERO, angle: -30.0, scale: Vec2::new(0.5, 2.0) };
        let screen = cam.to_screen(&world);
        assert_eq!(screen.rotation, -20.0);
        assert_eq!(screen.scale, Vec2::new(1.0, 6.0));
    }

    #[test]
    fn sees_uses_camera_position() {
        let cam = camera(Vec2::new(1000.0, 0.0));
        assert!(cam.sees(Vec2::new(1000.0, 0.0), Vec2::new(10.0, 10.0)));
        assert!(!cam.sees(Vec2::ZERO, Vec2::new(10.0, 10.0)));
    }
}
