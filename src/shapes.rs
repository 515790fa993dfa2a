//! Polylines, polygons and boxes
//!
//! Shapes built from a count reference the most recent `n` positions
//! (`-n .. -1`). Shapes built from points or coordinate buffers write the
//! positions first. Degenerate shapes (polylines with fewer than 2 points,
//! polygons with fewer than 3) write nothing.

use tracing::trace;

use crate::document::ObjDocument;
use crate::elements::{Attachments, Corner, ElementKind};
use crate::io::obj::value::Coordinates;
use crate::types::{BoundingBox2D, BoundingBox3D, Vector2, Vector3};

/// Layout of an interleaved coordinate buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// `x y x y ...`
    Two,
    /// `x y z x y z ...`
    Three,
}

impl Dimension {
    /// Number of values per point
    pub const fn len(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

/// Relative references to the most recent `n` records, oldest first
fn trailing(n: usize) -> impl Iterator<Item = i64> + Clone {
    let n = n as i64;
    -n..0
}

impl ObjDocument {
    // ==================== Polylines ====================

    /// Polyline through the most recent `n` positions. A closed polyline
    /// repeats its first reference
    pub fn polyline(&mut self, n: usize, closed: bool) -> &mut Self {
        self.polyline_with(n, closed, Attachments::empty())
    }

    /// Polyline through the most recent `n` position and normal pairs
    pub fn polyline_vn(&mut self, n: usize, closed: bool) -> &mut Self {
        self.polyline_with(n, closed, Attachments::NORMAL)
    }

    /// Polyline through the most recent `n` vertices, each corner also
    /// referencing the attached record kinds with the same relative index
    pub fn polyline_with(&mut self, n: usize, closed: bool, attachments: Attachments) -> &mut Self {
        if n < 2 {
            trace!("Skipping polyline with {} points", n);
            return self;
        }

        let first = closed.then(|| Corner::uniform(-(n as i64), attachments));
        let corners = trailing(n)
            .map(|i| Corner::uniform(i, attachments))
            .chain(first);
        self.element(ElementKind::Line, corners)
    }

    /// Polyline through explicit position references
    pub fn polyline_ids(&mut self, indices: &[i64]) -> &mut Self {
        if indices.len() < 2 {
            trace!("Skipping polyline with {} points", indices.len());
            return self;
        }
        self.element(ElementKind::Line, indices.iter().copied())
    }

    /// Write `points` as positions then a polyline through them
    pub fn polyline_through<P: Coordinates>(&mut self, points: &[P], closed: bool) -> &mut Self {
        if points.len() < 2 {
            trace!("Skipping polyline with {} points", points.len());
            return self;
        }
        for point in points {
            self.position(*point);
        }
        self.polyline(points.len(), closed)
    }

    /// Write the points of an interleaved coordinate buffer as positions
    /// then a polyline through them. Trailing values that do not form a
    /// whole point are ignored
    pub fn polyline_from_coords(
        &mut self,
        coords: &[f64],
        dimension: Dimension,
        closed: bool,
    ) -> &mut Self {
        let n = coords.len() / dimension.len();
        if n < 2 {
            trace!("Skipping polyline with {} points", n);
            return self;
        }
        self.positions_from_coords(coords, dimension).polyline(n, closed)
    }

    // ==================== Polygons ====================

    /// Face on the most recent `n` positions
    pub fn polygon(&mut self, n: usize) -> &mut Self {
        if n < 3 {
            trace!("Skipping polygon with {} points", n);
            return self;
        }
        self.element(ElementKind::Face, trailing(n))
    }

    /// Face on explicit position references
    pub fn polygon_ids(&mut self, indices: &[i64]) -> &mut Self {
        if indices.len() < 3 {
            trace!("Skipping polygon with {} points", indices.len());
            return self;
        }
        self.face_element(indices)
    }

    /// Write `points` as positions then a face on them
    pub fn polygon_through<P: Coordinates>(&mut self, points: &[P]) -> &mut Self {
        if points.len() < 3 {
            trace!("Skipping polygon with {} points", points.len());
            return self;
        }
        for point in points {
            self.position(*point);
        }
        self.polygon(points.len())
    }

    /// Write the points of an interleaved coordinate buffer as positions
    /// then a face on them
    pub fn polygon_from_coords(&mut self, coords: &[f64], dimension: Dimension) -> &mut Self {
        let n = coords.len() / dimension.len();
        if n < 3 {
            trace!("Skipping polygon with {} points", n);
            return self;
        }
        self.positions_from_coords(coords, dimension).polygon(n)
    }

    fn positions_from_coords(&mut self, coords: &[f64], dimension: Dimension) -> &mut Self {
        for chunk in coords.chunks_exact(dimension.len()) {
            match dimension {
                Dimension::Two => self.position(Vector2::new(chunk[0], chunk[1])),
                Dimension::Three => self.position(Vector3::new(chunk[0], chunk[1], chunk[2])),
            };
        }
        self
    }

    // ==================== Boxes ====================

    /// Outline of an axis-aligned rectangle as a 5 point polyline starting
    /// and ending at `min`
    pub fn box2_min_max(&mut self, min: Vector2, max: Vector2) -> &mut Self {
        let corners = [
            min,
            Vector2::new(max.x, min.y),
            max,
            Vector2::new(min.x, max.y),
            min,
        ];
        self.polyline_through(&corners, false)
    }

    /// Rectangle outline from its center and side lengths
    pub fn box2_center_extents(&mut self, center: Vector2, extents: Vector2) -> &mut Self {
        self.box2_bounds(&BoundingBox2D::from_center_extents(center, extents))
    }

    /// Rectangle outline of a bounding box
    pub fn box2_bounds(&mut self, bounds: &BoundingBox2D) -> &mut Self {
        self.box2_min_max(bounds.min, bounds.max)
    }

    /// Wireframe of an axis-aligned box as a single 16 point polyline that
    /// visits every edge
    pub fn box3_min_max(&mut self, min: Vector3, max: Vector3) -> &mut Self {
        let p = |x: bool, y: bool, z: bool| {
            Vector3::new(
                if x { max.x } else { min.x },
                if y { max.y } else { min.y },
                if z { max.z } else { min.z },
            )
        };
        let (o, i) = (false, true);
        let corners = [
            p(o, o, o),
            p(i, o, o),
            p(i, i, o),
            p(o, i, o),
            p(o, o, o),
            p(o, o, i),
            p(i, o, i),
            p(i, o, o),
            p(i, o, i),
            p(i, i, i),
            p(i, i, o),
            p(i, i, i),
            p(o, i, i),
            p(o, i, o),
            p(o, i, i),
            p(o, o, i),
        ];
        self.polyline_through(&corners, false)
    }

    /// Box wireframe from its center and side lengths
    pub fn box3_center_extents(&mut self, center: Vector3, extents: Vector3) -> &mut Self {
        self.box3_bounds(&BoundingBox3D::from_center_extents(center, extents))
    }

    /// Box wireframe of a bounding box
    pub fn box3_bounds(&mut self, bounds: &BoundingBox3D) -> &mut Self {
        self.box3_min_max(bounds.min, bounds.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_relative_references() {
        let mut obj = ObjDocument::new();
        obj.polyline(4, false).polyline(3, true);
        assert_eq!(obj.as_str(), "l -4 -3 -2 -1\nl -3 -2 -1 -3");
    }

    #[test]
    fn test_polyline_vn() {
        let mut obj = ObjDocument::new();
        obj.polyline_vn(4, false);
        assert_eq!(obj.as_str(), "l -4//-4 -3//-3 -2//-2 -1//-1");
    }

    #[test]
    fn test_polyline_with_texcoords() {
        let mut obj = ObjDocument::new();
        obj.polyline_with(2, true, Attachments::TEXCOORD);
        assert_eq!(obj.as_str(), "l -2/-2 -1/-1 -2/-2");
    }

    #[test]
    fn test_degenerate_shapes_write_nothing() {
        let mut obj = ObjDocument::new();
        obj.polyline(0, false)
            .polyline(1, true)
            .polyline_ids(&[1])
            .polyline_through::<Vector2>(&[], false)
            .polyline_from_coords(&[1.0, 2.0, 3.0], Dimension::Two, false)
            .polygon(2)
            .polygon_ids(&[1, 2])
            .polygon_through(&[Vector2::ZERO, Vector2::UNIT_X])
            .polygon_from_coords(&[0.0; 6], Dimension::Three);
        assert!(obj.is_empty());
        assert_eq!(obj.position_count(), 0);
    }

    #[test]
    fn test_polyline_ids() {
        let mut obj = ObjDocument::new();
        obj.polyline_ids(&[1, 2, 3, 4, 5]);
        assert_eq!(obj.as_str(), "l 1 2 3 4 5");
    }

    #[test]
    fn test_polyline_from_coords_ignores_partial_point() {
        let mut obj = ObjDocument::new();
        obj.polyline_from_coords(&[0.0, 0.0, 1.0, 0.0, 9.0], Dimension::Two, false);
        assert_eq!(obj.as_str(), "v 0 0\nv 1 0\nl -2 -1");
    }

    #[test]
    fn test_polygon_from_coords_3d() {
        let mut obj = ObjDocument::new();
        obj.polygon_from_coords(
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            Dimension::Three,
        );
        assert_eq!(obj.as_str(), "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1");
    }

    #[test]
    fn test_box2_min_max() {
        let mut obj = ObjDocument::new();
        obj.box2_min_max(Vector2::new(-10.0, -10.0), Vector2::new(10.0, 10.0));
        assert_eq!(
            obj.as_str(),
            "v -10 -10\nv 10 -10\nv 10 10\nv -10 10\nv -10 -10\nl -5 -4 -3 -2 -1"
        );
    }

    #[test]
    fn test_box2_center_extents_matches_min_max() {
        let mut a = ObjDocument::new();
        a.box2_center_extents(Vector2::new(1.0, 2.0), Vector2::new(4.0, 2.0));
        let mut b = ObjDocument::new();
        b.box2_min_max(Vector2::new(-1.0, 1.0), Vector2::new(3.0, 3.0));
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_box3_visits_every_edge() {
        let mut obj = ObjDocument::new();
        obj.box3_min_max(Vector3::ZERO, Vector3::splat(1.0));
        assert_eq!(obj.position_count(), 16);

        let points: Vec<&str> = obj
            .as_str()
            .lines()
            .filter_map(|line| line.strip_prefix("v "))
            .collect();
        assert_eq!(points[0], "0 0 0");
        assert_eq!(points[15], "0 0 1");

        let mut edges = std::collections::HashSet::new();
        for pair in points.windows(2) {
            let mut edge = [pair[0], pair[1]];
            edge.sort();
            edges.insert(edge);
        }
        assert_eq!(edges.len(), 12);
        assert!(obj.as_str().ends_with("l -16 -15 -14 -13 -12 -11 -10 -9 -8 -7 -6 -5 -4 -3 -2 -1"));
    }

    #[test]
    fn test_box3_bounds() {
        let bounds = BoundingBox3D::from_center_extents(Vector3::ZERO, Vector3::splat(2.0));
        let mut a = ObjDocument::new();
        a.box3_bounds(&bounds);
        let mut b = ObjDocument::new();
        b.box3_center_extents(Vector3::ZERO, Vector3::splat(2.0));
        assert_eq!(a.as_str(), b.as_str());
        assert!(a.as_str().starts_with("v -1 -1 -1\nv 1 -1 -1\n"));
    }
}
