//! Axis-aligned bounding boxes and overlap testing
//!
//! The whole game runs on one predicate: do two rectangles overlap. The test
//! is strict on every edge, so boxes that merely touch do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }
}

/// Standard AABB overlap test
///
/// `a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top`
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_identical_boxes_overlap() {
        let a = boxed(100.0, 490.0, 40.0, 40.0);
        assert!(aabb_overlap(&a, &a));
    }

    #[test]
    fn test_partial_overlap() {
        let a = boxed(100.0, 500.0, 40.0, 40.0);
        let b = boxed(100.0, 490.0, 40.0, 40.0);
        assert!(aabb_overlap(&a, &b));
        assert!(aabb_overlap(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = boxed(0.0, 0.0, 40.0, 40.0);
        let right = boxed(40.0, 0.0, 40.0, 40.0);
        let below = boxed(0.0, 40.0, 40.0, 40.0);
        assert!(!aabb_overlap(&a, &right));
        assert!(!aabb_overlap(&a, &below));
    }

    #[test]
    fn test_separated_boxes_miss() {
        let a = boxed(0.0, 0.0, 40.0, 40.0);
        let b = boxed(200.0, 0.0, 40.0, 40.0);
        assert!(!aabb_overlap(&a, &b));

        let c = boxed(0.0, 300.0, 40.0, 40.0);
        assert!(!aabb_overlap(&a, &c));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = boxed(0.0, 0.0, 100.0, 100.0);
        let inner = boxed(40.0, 40.0, 10.0, 10.0);
        assert!(aabb_overlap(&outer, &inner));
        assert!(aabb_overlap(&inner, &outer));
    }

    proptest! {
        /// Overlap is symmetric for arbitrary box pairs
        #[test]
        fn prop_overlap_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = boxed(ax, ay, aw, ah);
            let b = boxed(bx, by, bw, bh);
            prop_assert_eq!(aabb_overlap(&a, &b), aabb_overlap(&b, &a));
        }

        /// Two boxes with identical coordinates always overlap
        #[test]
        fn prop_identical_overlap(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..100.0, h in 1.0f32..100.0,
        ) {
            let a = boxed(x, y, w, h);
            prop_assert!(aabb_overlap(&a, &a));
        }

        /// Boxes separated by more than their combined extents on one axis
        /// never overlap
        #[test]
        fn prop_separated_never_overlap(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
            gap in 0.1f32..50.0,
        ) {
            let a = boxed(x, y, aw, ah);
            // Shifted past a's right edge by a positive gap
            let horizontal = boxed(x + aw + gap, y, bw, bh);
            prop_assert!(!aabb_overlap(&a, &horizontal));
            // Shifted past a's bottom edge
            let vertical = boxed(x, y + ah + gap, bw, bh);
            prop_assert!(!aabb_overlap(&a, &vertical));
        }
    }
}
