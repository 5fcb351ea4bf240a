use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D point or displacement in world units.
///
/// World space is +X right, +Y up. Angles are in degrees, counter-clockwise
/// from the positive X axis.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);
    pub const ONE: Vec2 = Vec2::new(1.0, 1.0);
    pub const UP: Vec2 = Vec2::new(0.0, 1.0);
    pub const DOWN: Vec2 = Vec2::new(0.0, -1.0);
    pub const LEFT: Vec2 = Vec2::new(-1.0, 0.0);
    pub const RIGHT: Vec2 = Vec2::new(1.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn one() -> Self {
        Self::ONE
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Overwrites both components in place.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Multiplies both components by `scalar` in place.
    #[inline]
    pub fn scale_by(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }

    /// Divides both components by `scalar` in place.
    #[inline]
    pub fn divide_by(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
    }

    /// Componentwise product.
    #[inline]
    pub fn mul_components(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x * rhs.x, self.y * rhs.y)
    }

    #[inline]
    pub fn squared_magnitude(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.squared_magnitude().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// The zero vector has no direction; its components come back as NaN.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        self / self.magnitude()
    }

    /// Angle to the positive X axis in degrees, in `[-180, 180]`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }

    #[inline]
    pub fn determinant(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unsigned angle between the two vectors in degrees, in `[0, 180]`.
    #[inline]
    pub fn angle_to(self, other: Vec2) -> f32 {
        self.determinant(other).atan2(self.dot(other)).to_degrees().abs()
    }

    #[inline]
    pub fn distance_to(self, other: Vec2) -> f32 {
        (other - self).magnitude()
    }

    /// Unit vector pointing along `degrees`.
    #[inline]
    pub fn from_angle(degrees: f32) -> Vec2 {
        let r = degrees.to_radians();
        Vec2::new(r.cos(), r.sin())
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── magnitude / normalized ────────────────────────────────────────────

    #[test]
    fn magnitude_of_3_4_is_5() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.squared_magnitude(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vec2::new(10.0, -10.0).normalized();
        assert!(close(n.magnitude(), 1.0));
        assert!(close(n.x, -n.y));
    }

    // ── angles ────────────────────────────────────────────────────────────

    #[test]
    fn angle_is_measured_from_positive_x() {
        assert!(close(Vec2::RIGHT.angle(), 0.0));
        assert!(close(Vec2::UP.angle(), 90.0));
        assert!(close(Vec2::DOWN.angle(), -90.0));
        assert!(close(Vec2::LEFT.angle(), 180.0));
    }

    #[test]
    fn angle_to_is_unsigned() {
        assert!(close(Vec2::RIGHT.angle_to(Vec2::UP), 90.0));
        assert!(close(Vec2::RIGHT.angle_to(Vec2::DOWN), 90.0));
        assert!(close(Vec2::RIGHT.angle_to(Vec2::LEFT), 180.0));
    }

    #[test]
    fn from_angle_round_trips_through_angle() {
        assert!(close(Vec2::from_angle(45.0).angle(), 45.0));
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn in_place_ops_mutate() {
        let mut v = Vec2::new(1.0, 2.0);
        v += Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(2.0, 3.0));
        v -= Vec2::new(2.0, 0.0);
        assert_eq!(v, Vec2::new(0.0, 3.0));
        v.scale_by(2.0);
        assert_eq!(v, Vec2::new(0.0, 6.0));
        v.divide_by(3.0);
        assert_eq!(v, Vec2::new(0.0, 2.0));
        v.set(-1.0, -1.0);
        assert_eq!(v, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn distance_and_dot() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.dot(b), 9.0);
        assert_eq!(a.determinant(b), 1.0);
    }

    #[test]
    fn display_format() {
        assert_eq!(Vec2::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
