//! Axis-aligned rectangle geometry for physics bodies
//!
//! Every body in the scene (paddle, ball, bricks, ground sensor) is an
//! axis-aligned rectangle described by its center and half extents.
//! Coordinates are screen-space: x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Center position
    pub center: Vec2,
    /// Half extents (half width, half height)
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Build from a full sprite size instead of half extents
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    /// Minimum corner (top-left)
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    /// Maximum corner (bottom-right)
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Check overlap with another box (touching edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() < self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() < self.half.y + other.half.y
    }

    /// Check if a point is inside the box (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half.x && d.y <= self.half.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let aabb = Aabb::from_size(Vec2::new(100.0, 50.0), Vec2::new(64.0, 32.0));
        assert_eq!(aabb.min(), Vec2::new(68.0, 34.0));
        assert_eq!(aabb.max(), Vec2::new(132.0, 66.0));
        assert_eq!(aabb.left(), 68.0);
        assert_eq!(aabb.top(), 34.0);
    }

    #[test]
    fn test_overlaps() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(15.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));

        let far = Aabb::new(Vec2::new(30.0, 0.0), Vec2::new(5.0, 5.0));
        assert!(!a.overlaps(&far));

        // Exactly touching edges is not an overlap
        let touching = Aabb::new(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&touching));
    }

    #[test]
    fn test_contains_point() {
        let aabb = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
        assert!(aabb.contains_point(Vec2::new(5.0, 5.0)));
        assert!(aabb.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!aabb.contains_point(Vec2::new(10.1, 5.0)));
    }
}
