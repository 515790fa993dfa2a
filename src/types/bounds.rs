//! Axis-aligned bounding boxes, used by the box shape helpers

use super::{Vector2, Vector3};
use std::fmt;

/// 2D bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum point (lower-left corner)
    pub min: Vector2,
    /// Maximum point (upper-right corner)
    pub max: Vector2,
}

impl BoundingBox2D {
    /// Create a new bounding box from min and max points
    pub fn new(min: Vector2, max: Vector2) -> Self {
        BoundingBox2D { min, max }
    }

    /// An inverted box (min = +inf, max = -inf) that any point expands
    pub fn empty() -> Self {
        BoundingBox2D {
            min: Vector2::splat(f64::INFINITY),
            max: Vector2::splat(f64::NEG_INFINITY),
        }
    }

    /// Create a box from its center and side lengths
    pub fn from_center_extents(center: Vector2, extents: Vector2) -> Self {
        let half = extents / 2.0;
        BoundingBox2D::new(center - half, center + half)
    }

    /// Create a bounding box that contains all given points
    pub fn from_points(points: &[Vector2]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut bbox = BoundingBox2D::empty();
        for point in points {
            bbox.expand_to_include(*point);
        }
        Some(bbox)
    }

    /// True if no point has been included yet
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Side lengths of the box
    pub fn extents(&self) -> Vector2 {
        self.max - self.min
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Vector2 {
        (self.min + self.max) / 2.0
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand the bounding box to include another point
    pub fn expand_to_include(&mut self, point: Vector2) {
        self.min = self.min.min(&point);
        self.max = self.max.max(&point);
    }
}

impl fmt::Display for BoundingBox2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox2D[{} -> {}]", self.min, self.max)
    }
}

/// 3D bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox3D {
    /// Minimum point (lower-left-back corner)
    pub min: Vector3,
    /// Maximum point (upper-right-front corner)
    pub max: Vector3,
}

impl BoundingBox3D {
    /// Create a new bounding box from min and max points
    pub fn new(min: Vector3, max: Vector3) -> Self {
        BoundingBox3D { min, max }
    }

    /// An inverted box (min = +inf, max = -inf) that any point expands
    pub fn empty() -> Self {
        BoundingBox3D {
            min: Vector3::splat(f64::INFINITY),
            max: Vector3::splat(f64::NEG_INFINITY),
        }
    }

    /// Create a box from its center and side lengths
    pub fn from_center_extents(center: Vector3, extents: Vector3) -> Self {
        let half = extents / 2.0;
        BoundingBox3D::new(center - half, center + half)
    }

    /// Create a bounding box that contains all given points
    pub fn from_points(points: &[Vector3]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut bbox = BoundingBox3D::empty();
        for point in points {
            bbox.expand_to_include(*point);
        }
        Some(bbox)
    }

    /// True if no point has been included yet
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Side lengths of the box
    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) / 2.0
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Vector3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Expand the bounding box to include another point
    pub fn expand_to_include(&mut self, point: Vector3) {
        self.min = self.min.min(&point);
        self.max = self.max.max(&point);
    }
}

impl fmt::Display for BoundingBox3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox3D[{} -> {}]", self.min, self.max)
    }
}
