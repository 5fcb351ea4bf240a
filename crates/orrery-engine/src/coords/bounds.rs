use super::Vec2;

/// Axis-aligned box described by its center and full extent.
///
/// Used for visibility culling: a viewport's bounds are compared against each
/// drawable's world-space bounds before anything is submitted to a surface.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoundsRect {
    pub center: Vec2,
    pub size: Vec2,
}

impl BoundsRect {
    #[inline]
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    #[inline]
    pub fn half_extent(self) -> Vec2 {
        self.size / 2.0
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.center - self.half_extent()
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.center + self.half_extent()
    }

    /// Builds the smallest box enclosing `points`, centered on `center`.
    ///
    /// The extent is `max - min` of the point cloud; an empty slice yields a
    /// zero-sized box.
    pub fn enclosing(center: Vec2, points: &[Vec2]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::new(center, Vec2::ZERO);
        };

        let (mut lo, mut hi) = (*first, *first);
        for p in rest {
            lo.x = lo.x.min(p.x);
            lo.y = lo.y.min(p.y);
            hi.x = hi.x.max(p.x);
            hi.y = hi.y.max(p.y);
        }

        Self::new(center, hi - lo)
    }

    /// Strict overlap test on both axes.
    ///
    /// Boxes that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &BoundsRect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());

        a_max.x > b_min.x && a_min.x < b_max.x && a_max.y > b_min.y && a_min.y < b_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(cx: f32, cy: f32, w: f32, h: f32) -> BoundsRect {
        BoundsRect::new(Vec2::new(cx, cy), Vec2::new(w, h))
    }

    // ── overlaps ──────────────────────────────────────────────────────────

    #[test]
    fn overlapping_boxes() {
        assert!(b(0.0, 0.0, 10.0, 10.0).overlaps(&b(4.0, 4.0, 10.0, 10.0)));
    }

    #[test]
    fn contained_box_overlaps() {
        assert!(b(0.0, 0.0, 100.0, 100.0).overlaps(&b(10.0, -10.0, 2.0, 2.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        // Right edge of `a` at x=5, left edge of `c` at x=5.
        let a = b(0.0, 0.0, 10.0, 10.0);
        let c = b(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn separated_on_one_axis_only() {
        assert!(!b(0.0, 0.0, 10.0, 10.0).overlaps(&b(0.0, 50.0, 10.0, 10.0)));
        assert!(!b(0.0, 0.0, 10.0, 10.0).overlaps(&b(-50.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let boxes = [
            b(0.0, 0.0, 10.0, 10.0),
            b(5.0, 5.0, 1.0, 1.0),
            b(10.0, 0.0, 10.0, 10.0),
            b(-3.0, 8.0, 4.0, 20.0),
            b(100.0, 100.0, 0.0, 0.0),
        ];
        for a in &boxes {
            for c in &boxes {
                assert_eq!(a.overlaps(c), c.overlaps(a), "{a:?} vs {c:?}");
            }
        }
    }

    // ── enclosing ─────────────────────────────────────────────────────────

    #[test]
    fn enclosing_uses_point_extent() {
        let pts = [Vec2::new(-2.0, 1.0), Vec2::new(3.0, -4.0), Vec2::new(0.0, 6.0)];
        let r = BoundsRect::enclosing(Vec2::new(7.0, 7.0), &pts);
        assert_eq!(r.center, Vec2::new(7.0, 7.0));
        assert_eq!(r.size, Vec2::new(5.0, 10.0));
    }

    #[test]
    fn enclosing_empty_is_zero_sized() {
        let r = BoundsRect::enclosing(Vec2::ZERO, &[]);
        assert_eq!(r.size, Vec2::ZERO);
    }
}
