//! Axis-aligned rectangle tests
//!
//! Scene coordinates are screen pixels: x grows right, y grows down, and a
//! box is anchored at its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box of the given size at a position
    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Falling-onto test
///
/// The candidate box lands on `platform` when it overlaps it and the previous
/// bottom edge was at or above the platform top. Sides and undersides are
/// never blocked.
pub fn lands_on(candidate: &Aabb, previous_bottom: f32, platform: &Aabb) -> bool {
    candidate.overlaps(platform) && previous_bottom <= platform.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_lands_on_from_above() {
        let platform = Aabb::new(200.0, 200.0, 100.0, 20.0);
        // Previously bottom at 198, now sunk 5px into the platform
        let candidate = Aabb::new(220.0, 145.0, 40.0, 60.0);
        assert!(lands_on(&candidate, 198.0, &platform));
        // Level with the top also counts
        assert!(lands_on(&candidate, 200.0, &platform));
    }

    #[test]
    fn test_no_landing_from_below_or_side() {
        let platform = Aabb::new(200.0, 200.0, 100.0, 20.0);
        let candidate = Aabb::new(220.0, 190.0, 40.0, 60.0);
        // Bottom edge was already below the platform top
        assert!(!lands_on(&candidate, 255.0, &platform));
        // No overlap at all
        let beside = Aabb::new(320.0, 150.0, 40.0, 60.0);
        assert!(!lands_on(&beside, 190.0, &platform));
    }
}
