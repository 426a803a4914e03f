//! Axis-aligned pixel rectangles
//!
//! Every entity (ship, laser, meteor) is a rectangle covering
//! `[x, x + w) × [y, y + h)` in screen space, y pointing down.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A positioned sprite box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given sprite size with its origin at `pos`
    pub fn from_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// True if the rectangle covers no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check whether two rectangles share a non-empty area.
    ///
    /// Edges that only touch do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_detected() {
        let meteor = Rect::new(100, 100, 50, 50);
        let laser = Rect::new(110, 110, 10, 10);
        assert!(meteor.intersects(&laser));
        assert!(laser.intersects(&meteor));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
        assert!(!a.intersects(&Rect::new(-10, -10, 10, 10)));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(5, 5, 0, 3)));
        assert!(!a.intersects(&Rect::new(5, 5, 3, -1)));
    }

    #[test]
    fn test_far_edges_do_not_overflow() {
        let far = Rect::new(i32::MAX - 10, i32::MAX - 10, 99, 75);
        assert_eq!(far.right(), i32::MAX);
        assert_eq!(far.bottom(), i32::MAX);
        assert!(!far.intersects(&Rect::new(0, 0, 101, 84)));
        assert!(far.intersects(&Rect::new(i32::MAX - 5, i32::MAX - 5, 3, 3)));
    }

    proptest! {
        #[test]
        fn test_any_positive_overlap_registers(
            x in -500i32..500, y in -500i32..500,
            w in 1i32..200, h in 1i32..200,
            dx in 0i32..200, dy in 0i32..200,
        ) {
            let a = Rect::new(x, y, w, h);
            // Offset strictly inside a so at least one pixel is shared
            let b = Rect::new(x + dx % w, y + dy % h, 1, 1);
            prop_assert!(a.intersects(&b));
            prop_assert!(b.intersects(&a));
        }

        #[test]
        fn test_separated_on_x_never_registers(
            x in -500i32..500, y in -500i32..500,
            w in 1i32..200, h in 1i32..200,
            gap in 0i32..100, oy in -50i32..50,
        ) {
            let a = Rect::new(x, y, w, h);
            let b = Rect::new(x + w + gap, y + oy, w, h);
            prop_assert!(!a.intersects(&b));
            prop_assert!(!b.intersects(&a));
        }

        #[test]
        fn test_separated_on_y_never_registers(
            x in -500i32..500, y in -500i32..500,
            w in 1i32..200, h in 1i32..200,
            gap in 0i32..100, ox in -50i32..50,
        ) {
            let a = Rect::new(x, y, w, h);
            let b = Rect::new(x + ox, y - h - gap, w, h);
            prop_assert!(!a.intersects(&b));
        }
    }
}
