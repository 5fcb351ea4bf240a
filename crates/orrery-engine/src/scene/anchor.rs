use crate::coords::Vec2;

use super::transform::{Transform, WorldTransform};

/// Accumulated parent transform threaded from an owner drawable into the
/// drawables it paints itself (pooled projectiles, sprites inside a ship, ...).
///
/// Anchors are built per draw call and never stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Anchor {
    /// World position of the owner. Children add their local position to it.
    pub parent_position: Vec2,
    /// Accumulated offset in surface orientation (+Y down).
    pub position: Vec2,
    /// Accumulated angle in degrees, surface orientation.
    pub angle: f32,
    /// Accumulated scale.
    pub scale: Vec2,
}

impl Anchor {
    /// The identity anchor every viewport starts a render pass with.
    pub const ROOT: Anchor = Anchor {
        parent_position: Vec2::ZERO,
        position: Vec2::ZERO,
        angle: 0.0,
        scale: Vec2::ONE,
    };

    /// Resolves a leaf's local transform against this anchor.
    ///
    /// The angle is negated because world angles run counter-clockwise while
    /// surfaces rotate clockwise.
    #[inline]
    pub fn resolve(&self, local: &Transform) -> WorldTransform {
        WorldTransform {
            position: local.position + self.parent_position,
            angle: -local.angle + self.angle,
            scale: local.scale.mul_components(self.scale),
        }
    }

    /// Anchor for the children of a drawable whose local transform is `local`.
    #[inline]
    pub fn child(&self, local: &Transform) -> Anchor {
        Anchor {
            parent_position: local.position + self.parent_position,
            position: self.position + Vec2::new(local.position.x, -local.position.y),
            angle: -local.angle + self.angle,
            scale: local.scale.mul_components(self.scale),
        }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::ROOT
    }
}
