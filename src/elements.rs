//! Point, line and face elements
//!
//! Elements reference earlier vertex data records by 1-based index. Negative
//! indices count back from the current line, so `-1` is the most recently
//! written record of that kind. References are resolved through
//! [`ObjDocument::resolve_index`] and therefore honor the document's
//! [`IndexMode`](crate::IndexMode).
//!
//! The `*_with_positions` compounds write their vertex data immediately
//! before the element and reference it relatively. Documents built only from
//! compounds can be concatenated freely.

use bitflags::bitflags;

use crate::document::{ObjDocument, RecordKind};
use crate::io::obj::value::Coordinates;
use crate::types::Vector3;

/// Reference to the most recent position
pub const LAST_POINT: i64 = -1;

/// References to the two most recent positions
pub const LAST_SEGMENT: [i64; 2] = [-2, -1];

/// References to the three most recent positions
pub const LAST_TRIANGLE: [i64; 3] = [-3, -2, -1];

bitflags! {
    /// Extra vertex data referenced by each corner of an element
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attachments: u8 {
        /// Corners reference a `vt` record (`v/t`)
        const TEXCOORD = 1 << 0;
        /// Corners reference a `vn` record (`v//n`)
        const NORMAL = 1 << 1;
    }
}

/// Kind of element directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `p`
    Point,
    /// `l`
    Line,
    /// `f`
    Face,
}

impl ElementKind {
    /// The obj directive for this element kind
    pub const fn directive(self) -> &'static str {
        match self {
            ElementKind::Point => "p",
            ElementKind::Line => "l",
            ElementKind::Face => "f",
        }
    }
}

/// One corner of an element: a position reference with optional texture
/// coordinate and normal references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corner {
    pub position: i64,
    pub texcoord: Option<i64>,
    pub normal: Option<i64>,
}

impl Corner {
    /// Corner referencing only a position
    pub const fn new(position: i64) -> Self {
        Corner {
            position,
            texcoord: None,
            normal: None,
        }
    }

    /// Corner referencing a position and a normal
    pub const fn with_normal(position: i64, normal: i64) -> Self {
        Corner {
            position,
            texcoord: None,
            normal: Some(normal),
        }
    }

    /// Corner referencing a position and a texture coordinate
    pub const fn with_texcoord(position: i64, texcoord: i64) -> Self {
        Corner {
            position,
            texcoord: Some(texcoord),
            normal: None,
        }
    }

    /// Corner referencing a position, a texture coordinate and a normal
    pub const fn with_texcoord_normal(position: i64, texcoord: i64, normal: i64) -> Self {
        Corner {
            position,
            texcoord: Some(texcoord),
            normal: Some(normal),
        }
    }

    /// Corner using the same index for every attached record kind. Used when
    /// vertex data is written interleaved, one of each kind per vertex
    pub fn uniform(index: i64, attachments: Attachments) -> Self {
        Corner {
            position: index,
            texcoord: attachments.contains(Attachments::TEXCOORD).then_some(index),
            normal: attachments.contains(Attachments::NORMAL).then_some(index),
        }
    }
}

impl From<i64> for Corner {
    fn from(position: i64) -> Self {
        Corner::new(position)
    }
}

impl ObjDocument {
    /// Write an element directive with the given corners. Nothing is written
    /// when there are no corners
    pub fn element<I>(&mut self, kind: ElementKind, corners: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Corner>,
    {
        let mut corners = corners.into_iter().peekable();
        if corners.peek().is_none() {
            return self;
        }

        self.directive(kind.directive());
        for corner in corners {
            self.write_corner(corner.into());
        }
        self
    }

    fn write_corner(&mut self, corner: Corner) {
        let position = self.resolve_index(RecordKind::Position, corner.position);
        self.insert(position);
        if corner.texcoord.is_none() && corner.normal.is_none() {
            return;
        }

        self.add('/');
        if let Some(texcoord) = corner.texcoord {
            let texcoord = self.resolve_index(RecordKind::TexCoord, texcoord);
            self.add(texcoord);
        }
        if let Some(normal) = corner.normal {
            let normal = self.resolve_index(RecordKind::Normal, normal);
            self.add('/').add(normal);
        }
    }

    // ==================== Points ====================

    /// `p i`
    pub fn point_element(&mut self, index: i64) -> &mut Self {
        self.element(ElementKind::Point, [index])
    }

    /// Point on the most recent position
    pub fn point(&mut self) -> &mut Self {
        self.point_element(LAST_POINT)
    }

    /// `p v//n`. Prism reads point normals
    pub fn point_vn(&mut self, position: i64, normal: i64) -> &mut Self {
        self.element(ElementKind::Point, [Corner::with_normal(position, normal)])
    }

    // ==================== Segments ====================

    /// `l i j`
    pub fn segment_element(&mut self, i: i64, j: i64) -> &mut Self {
        self.element(ElementKind::Line, [i, j])
    }

    /// Segment between the two most recent positions
    pub fn segment(&mut self) -> &mut Self {
        self.element(ElementKind::Line, LAST_SEGMENT)
    }

    /// `l v1//n1 v2//n2`. Prism reads segment normals
    pub fn segment_vn(&mut self, positions: [i64; 2], normals: [i64; 2]) -> &mut Self {
        let corners = [
            Corner::with_normal(positions[0], normals[0]),
            Corner::with_normal(positions[1], normals[1]),
        ];
        self.element(ElementKind::Line, corners)
    }

    // ==================== Faces ====================

    /// `f i j k ...` with any number of corners
    pub fn face_element(&mut self, indices: &[i64]) -> &mut Self {
        self.element(ElementKind::Face, indices.iter().copied())
    }

    /// `f i j k`
    pub fn triangle_element(&mut self, i: i64, j: i64, k: i64) -> &mut Self {
        self.element(ElementKind::Face, [i, j, k])
    }

    /// Triangle on the three most recent positions
    pub fn triangle(&mut self) -> &mut Self {
        self.element(ElementKind::Face, LAST_TRIANGLE)
    }

    /// `f v1//n1 v2//n2 v3//n3`
    pub fn triangle_vn(&mut self, positions: [i64; 3], normals: [i64; 3]) -> &mut Self {
        let corners = [0, 1, 2].map(|c| Corner::with_normal(positions[c], normals[c]));
        self.element(ElementKind::Face, corners)
    }

    /// `f v1/t1 v2/t2 v3/t3`. Prism ignores texture coordinates
    pub fn triangle_vt(&mut self, positions: [i64; 3], texcoords: [i64; 3]) -> &mut Self {
        let corners = [0, 1, 2].map(|c| Corner::with_texcoord(positions[c], texcoords[c]));
        self.element(ElementKind::Face, corners)
    }

    /// `f v1/t1/n1 v2/t2/n2 v3/t3/n3`. Arguments follow the wire order
    pub fn triangle_vnt(
        &mut self,
        positions: [i64; 3],
        texcoords: [i64; 3],
        normals: [i64; 3],
    ) -> &mut Self {
        let corners = [0, 1, 2]
            .map(|c| Corner::with_texcoord_normal(positions[c], texcoords[c], normals[c]));
        self.element(ElementKind::Face, corners)
    }

    // ==================== Compounds ====================

    /// Write a position then a point on it
    pub fn point_with_position<P: Coordinates>(&mut self, position: P) -> &mut Self {
        self.position(position).point()
    }

    /// Write a position and normal then a point on them
    pub fn point_with_position_vn<P: Coordinates>(
        &mut self,
        position: P,
        normal: Vector3,
    ) -> &mut Self {
        self.position(position).normal(normal).point_vn(-1, -1)
    }

    /// Write two positions then a segment between them
    pub fn segment_with_positions<P: Coordinates>(&mut self, a: P, b: P) -> &mut Self {
        self.position(a).position(b).segment()
    }

    /// Write two position and normal pairs then a segment on them
    pub fn segment_with_positions_vn<P: Coordinates>(
        &mut self,
        positions: [P; 2],
        normals: [Vector3; 2],
    ) -> &mut Self {
        for c in 0..2 {
            self.position(positions[c]).normal(normals[c]);
        }
        self.segment_vn(LAST_SEGMENT, LAST_SEGMENT)
    }

    /// Write three positions then a triangle on them
    pub fn triangle_with_positions<P: Coordinates>(&mut self, a: P, b: P, c: P) -> &mut Self {
        self.position(a).position(b).position(c).triangle()
    }

    /// Write three position and normal pairs then a triangle on them
    pub fn triangle_with_positions_vn<P: Coordinates>(
        &mut self,
        positions: [P; 3],
        normals: [Vector3; 3],
    ) -> &mut Self {
        for c in 0..3 {
            self.position(positions[c]).normal(normals[c]);
        }
        self.triangle_vn(LAST_TRIANGLE, LAST_TRIANGLE)
    }

    /// Write three position and texture coordinate pairs then a triangle on
    /// them
    pub fn triangle_with_positions_vt<P: Coordinates, T: Coordinates>(
        &mut self,
        positions: [P; 3],
        texcoords: [T; 3],
    ) -> &mut Self {
        for c in 0..3 {
            self.position(positions[c]).texcoord(texcoords[c]);
        }
        self.triangle_vt(LAST_TRIANGLE, LAST_TRIANGLE)
    }

    /// Write three position, normal and texture coordinate triples then a
    /// triangle on them
    pub fn triangle_with_positions_vnt<P: Coordinates, T: Coordinates>(
        &mut self,
        positions: [P; 3],
        normals: [Vector3; 3],
        texcoords: [T; 3],
    ) -> &mut Self {
        for c in 0..3 {
            self.position(positions[c])
                .normal(normals[c])
                .texcoord(texcoords[c]);
        }
        self.triangle_vnt(LAST_TRIANGLE, LAST_TRIANGLE, LAST_TRIANGLE)
    }
}
