//! Writing triangle meshes
//!
//! [`MeshSource`] is the seam between an application's mesh type and the
//! document: implement it to dump any indexed triangle mesh with
//! [`ObjDocument::mesh`]. [`TriangleMesh`] is a minimal owned implementation.

use tracing::debug;

use crate::document::ObjDocument;
use crate::elements::{Attachments, Corner, ElementKind};
use crate::error::{ObjError, Result};
use crate::types::{BoundingBox3D, Vector2, Vector3};

/// Read access to an indexed triangle mesh
pub trait MeshSource {
    /// Number of vertices
    fn vertex_count(&self) -> usize;

    /// Position of vertex `v`
    fn position(&self, v: usize) -> Vector3;

    /// True if every vertex has a normal
    fn has_normals(&self) -> bool {
        false
    }

    /// Normal of vertex `v`
    fn normal(&self, _v: usize) -> Vector3 {
        Vector3::ZERO
    }

    /// True if every vertex has a texture coordinate
    fn has_texcoords(&self) -> bool {
        false
    }

    /// Texture coordinate of vertex `v`
    fn texcoord(&self, _v: usize) -> Vector2 {
        Vector2::ZERO
    }

    /// Number of triangles
    fn triangle_count(&self) -> usize;

    /// Vertex indices of triangle `t`, 0-based
    fn triangle(&self, t: usize) -> [usize; 3];
}

/// How [`ObjDocument::mesh`] writes a mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshWriteOptions {
    /// Write each vertex once and reference it by absolute index.
    /// Otherwise every triangle writes its own three corners and references
    /// them relatively, which keeps the output safe to concatenate.
    ///
    /// Default: false
    pub shared_vertices: bool,
    /// Flip the winding of every triangle.
    ///
    /// Default: false
    pub reverse_orientation: bool,
    /// Write vertex normals when the source has them.
    ///
    /// Default: true
    pub write_normals: bool,
    /// Write texture coordinates when the source has them.
    ///
    /// Default: true
    pub write_texcoords: bool,
    /// Annotate positions with `VID n`, the source vertex index.
    ///
    /// Default: false
    pub annotate_vertex_ids: bool,
    /// Annotate faces with `TID n`, the source triangle index.
    ///
    /// Default: false
    pub annotate_triangle_ids: bool,
}

impl Default for MeshWriteOptions {
    fn default() -> Self {
        Self {
            shared_vertices: false,
            reverse_orientation: false,
            write_normals: true,
            write_texcoords: true,
            annotate_vertex_ids: false,
            annotate_triangle_ids: false,
        }
    }
}

/// An owned indexed triangle mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    pub positions: Vec<Vector3>,
    /// Empty, or one normal per position
    pub normals: Vec<Vector3>,
    /// Empty, or one texture coordinate per position
    pub texcoords: Vec<Vector2>,
    pub triangles: Vec<[usize; 3]>,
}

impl TriangleMesh {
    /// Create a mesh without normals or texture coordinates
    pub fn new(positions: Vec<Vector3>, triangles: Vec<[usize; 3]>) -> Self {
        TriangleMesh {
            positions,
            normals: Vec::new(),
            texcoords: Vec::new(),
            triangles,
        }
    }

    /// Create a mesh with three unshared vertices per triangle
    pub fn from_triangle_soup(triangles: &[[Vector3; 3]]) -> Self {
        let positions = triangles.iter().flatten().copied().collect();
        let triangles = (0..triangles.len())
            .map(|t| [3 * t, 3 * t + 1, 3 * t + 2])
            .collect();
        TriangleMesh::new(positions, triangles)
    }

    /// Attach per-vertex normals
    pub fn with_normals(mut self, normals: Vec<Vector3>) -> Self {
        self.normals = normals;
        self
    }

    /// Attach per-vertex texture coordinates
    pub fn with_texcoords(mut self, texcoords: Vec<Vector2>) -> Self {
        self.texcoords = texcoords;
        self
    }

    /// Bounding box of all positions, `None` for an empty mesh
    pub fn bounds(&self) -> Option<BoundingBox3D> {
        BoundingBox3D::from_points(&self.positions)
    }
}

impl MeshSource for TriangleMesh {
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn position(&self, v: usize) -> Vector3 {
        self.positions[v]
    }

    fn has_normals(&self) -> bool {
        !self.normals.is_empty() && self.normals.len() == self.positions.len()
    }

    fn normal(&self, v: usize) -> Vector3 {
        self.normals[v]
    }

    fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty() && self.texcoords.len() == self.positions.len()
    }

    fn texcoord(&self, v: usize) -> Vector2 {
        self.texcoords[v]
    }

    fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    fn triangle(&self, t: usize) -> [usize; 3] {
        self.triangles[t]
    }
}

impl ObjDocument {
    /// Write a triangle mesh.
    ///
    /// Every triangle is checked before anything is written, so on error the
    /// document is unchanged. When vertex or triangle ids are annotated a
    /// `set_annotations_visible` command is appended so the labels show up.
    pub fn mesh<M: MeshSource + ?Sized>(
        &mut self,
        source: &M,
        options: &MeshWriteOptions,
    ) -> Result<&mut Self> {
        let vertex_count = source.vertex_count();
        for t in 0..source.triangle_count() {
            let triangle = source.triangle(t);
            if let Some(v) = triangle.iter().find(|&&v| v >= vertex_count) {
                return Err(ObjError::InvalidMesh(format!(
                    "triangle {} references vertex {} but the mesh has {} vertices",
                    t, v, vertex_count
                )));
            }
        }

        let mut attachments = Attachments::empty();
        if options.write_normals && source.has_normals() {
            attachments |= Attachments::NORMAL;
        }
        if options.write_texcoords && source.has_texcoords() {
            attachments |= Attachments::TEXCOORD;
        }

        if options.shared_vertices {
            self.shared_vertex_mesh(source, options, attachments);
        } else {
            self.triangle_soup_mesh(source, options, attachments);
        }

        if options.annotate_vertex_ids || options.annotate_triangle_ids {
            self.set_annotations_visible(true);
        }

        debug!(
            "Wrote mesh with {} vertices and {} triangles (shared vertices: {})",
            vertex_count,
            source.triangle_count(),
            options.shared_vertices
        );
        Ok(self)
    }

    fn mesh_vertex<M: MeshSource + ?Sized>(
        &mut self,
        source: &M,
        v: usize,
        options: &MeshWriteOptions,
        attachments: Attachments,
    ) {
        self.position(source.position(v));
        if options.annotate_vertex_ids {
            self.annotate("VID").insert(v);
        }
        if attachments.contains(Attachments::NORMAL) {
            self.normal(source.normal(v));
        }
        if attachments.contains(Attachments::TEXCOORD) {
            self.texcoord(source.texcoord(v));
        }
    }

    fn oriented_triangle<M: MeshSource + ?Sized>(
        source: &M,
        t: usize,
        options: &MeshWriteOptions,
    ) -> [usize; 3] {
        let [a, b, c] = source.triangle(t);
        if options.reverse_orientation {
            [a, c, b]
        } else {
            [a, b, c]
        }
    }

    fn triangle_soup_mesh<M: MeshSource + ?Sized>(
        &mut self,
        source: &M,
        options: &MeshWriteOptions,
        attachments: Attachments,
    ) {
        for t in 0..source.triangle_count() {
            for v in Self::oriented_triangle(source, t, options) {
                self.mesh_vertex(source, v, options, attachments);
            }
            let corners = [-3, -2, -1].map(|i| Corner::uniform(i, attachments));
            self.element(ElementKind::Face, corners);
            if options.annotate_triangle_ids {
                self.annotate("TID").insert(t);
            }
        }
    }

    fn shared_vertex_mesh<M: MeshSource + ?Sized>(
        &mut self,
        source: &M,
        options: &MeshWriteOptions,
        attachments: Attachments,
    ) {
        let position_base = self.position_count() as i64 + 1;
        let normal_base = self.normal_count() as i64 + 1;
        let texcoord_base = self.texcoord_count() as i64 + 1;

        for v in 0..source.vertex_count() {
            self.mesh_vertex(source, v, options, attachments);
        }

        for t in 0..source.triangle_count() {
            let corners = Self::oriented_triangle(source, t, options).map(|v| {
                let v = v as i64;
                Corner {
                    position: position_base + v,
                    texcoord: attachments
                        .contains(Attachments::TEXCOORD)
                        .then_some(texcoord_base + v),
                    normal: attachments
                        .contains(Attachments::NORMAL)
                        .then_some(normal_base + v),
                }
            });
            self.element(ElementKind::Face, corners);
            if options.annotate_triangle_ids {
                self.annotate("TID").insert(t);
            }
        }
    }
}
