//! BoundingBox - axis-aligned rectangle relative to an entity origin
//!
//! `intersects` is an open-interval test (touching edges do not overlap),
//! `contains` is closed on all four edges. Collision code relies on both.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Same box moved by `(dx, dy)`. Used to place an entity-relative box in world space.
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// The four sampled corner points of this box placed at `(x, y)`.
    ///
    /// Far edges are inset by one unit so a box that exactly fills a tile
    /// does not sample the neighbouring tile.
    pub fn corners_at(&self, x: f32, y: f32) -> [(f32, f32); 4] {
        let left = x + self.x;
        let top = y + self.y;
        let right = left + self.width - 1.0;
        let bottom = top + self.height - 1.0;
        [(left, top), (right, top), (left, bottom), (right, bottom)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BoundingBox::new(0.0, 0.0, 10.0, 10.0), BoundingBox::new(5.0, 5.0, 10.0, 10.0), true)]
    #[case(BoundingBox::new(0.0, 0.0, 10.0, 10.0), BoundingBox::new(10.0, 0.0, 10.0, 10.0), false)]
    #[case(BoundingBox::new(0.0, 0.0, 10.0, 10.0), BoundingBox::new(0.0, 10.0, 10.0, 10.0), false)]
    #[case(BoundingBox::new(0.0, 0.0, 10.0, 10.0), BoundingBox::new(2.0, 2.0, 2.0, 2.0), true)]
    #[case(BoundingBox::new(-5.0, -5.0, 4.0, 4.0), BoundingBox::new(0.0, 0.0, 3.0, 3.0), false)]
    #[case(BoundingBox::new(0.0, 0.0, 10.0, 10.0), BoundingBox::new(9.5, 9.5, 1.0, 1.0), true)]
    fn intersects_is_symmetric(
        #[case] a: BoundingBox,
        #[case] b: BoundingBox,
        #[case] expected: bool,
    ) {
        assert_eq!(a.intersects(&b), expected);
        assert_eq!(b.intersects(&a), expected);
    }

    #[test]
    fn shared_edge_is_contained_but_not_intersecting() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 10.0, 10.0);

        assert!(!a.intersects(&b));
        assert!(a.contains(10.0, 5.0));
        assert!(b.contains(10.0, 5.0));
    }

    #[test]
    fn contains_is_closed_on_every_edge() {
        let b = BoundingBox::new(2.0, 3.0, 4.0, 5.0);
        assert!(b.contains(2.0, 3.0));
        assert!(b.contains(6.0, 8.0));
        assert!(b.contains(2.0, 8.0));
        assert!(b.contains(6.0, 3.0));
        assert!(!b.contains(6.01, 5.0));
        assert!(!b.contains(4.0, 2.99));
    }

    #[test]
    fn translated_moves_origin_only() {
        let b = BoundingBox::new(-16.0, -8.0, 32.0, 32.0).translated(100.0, 50.0);
        assert_eq!(b, BoundingBox::new(84.0, 42.0, 32.0, 32.0));
    }

    #[test]
    fn corners_inset_far_edges() {
        let corners = BoundingBox::new(0.0, 0.0, 32.0, 32.0).corners_at(64.0, 32.0);
        assert_eq!(corners, [(64.0, 32.0), (95.0, 32.0), (64.0, 63.0), (95.0, 63.0)]);
    }
}
