//=========================================================================
// Axis-Aligned Bounding Box
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Aabb ================================================================

/// Axis-aligned box in world units (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates a box from its corners. `min` must not exceed `max`.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y);
        Self { min, max }
    }

    /// Creates a box from its top-left corner and size.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin, origin + size)
    }

    /// Open-interval overlap test: touching edges do not overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::from_origin_size(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::from_origin_size(Vec2::splat(5.0), Vec2::splat(10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Aabb::from_origin_size(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::from_origin_size(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn center_and_size() {
        let a = Aabb::new(Vec2::new(2.0, 4.0), Vec2::new(6.0, 12.0));
        assert_eq!(a.center(), Vec2::new(4.0, 8.0));
        assert_eq!(a.size(), Vec2::new(4.0, 8.0));
    }
}
