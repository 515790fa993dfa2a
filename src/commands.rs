//! Command annotations
//!
//! A command annotation is a line of the form `#! name args...`. Prism runs
//! the named console command after the whole file has loaded, so these can be
//! written at any point in the document.
//!
//! Most console commands take the index of a Prism item as their first
//! argument. Item 0 is the geometry in the file itself; items created by
//! earlier commands get higher indices. The named setters below always target
//! item 0.

use crate::document::ObjDocument;
use crate::io::obj::value::ObjValue;
use crate::types::Color;

macro_rules! item_setters {
    ($($(#[$doc:meta])* $name:ident($arg:ident: $ty:ty);)*) => {
        impl ObjDocument {
            $(
                $(#[$doc])*
                pub fn $name(&mut self, $arg: $ty) -> &mut Self {
                    self.item_command(stringify!($name), 0).insert($arg)
                }
            )*
        }
    };
}

impl ObjDocument {
    /// Start a command annotation on a new line. Arguments are added with
    /// [`ObjDocument::insert`]
    pub fn command(&mut self, name: &str) -> &mut Self {
        self.begin_line().hash().bang().insert(name)
    }

    /// Start a command annotation whose first argument is a Prism item index
    pub fn item_command(&mut self, name: &str, item_index: usize) -> &mut Self {
        self.command(name).insert(item_index)
    }

    /// Command annotation with arguments
    pub fn command_with<T: ObjValue>(&mut self, name: &str, args: &[T]) -> &mut Self {
        self.command(name);
        for arg in args {
            self.insert(arg);
        }
        self
    }
}

item_setters! {
    // Annotation labels

    /// Show or hide annotation labels. Prism hides them by default
    set_annotations_visible(visible: bool);
    /// Color of annotation text
    set_annotations_color(color: Color);
    /// Scale of annotation text, in [0.2, 1.0]. Prism defaults to 0.4
    set_annotations_scale(scale: f32);

    // Vertex labels

    /// Show or hide vertex index labels
    set_vertex_index_labels_visible(visible: bool);
    /// Show or hide vertex position labels
    set_vertex_position_labels_visible(visible: bool);
    /// Color of vertex labels
    set_vertex_label_color(color: Color);
    /// Scale of vertex label text
    set_vertex_label_scale(scale: f32);

    // Point labels

    /// Show or hide point index labels
    set_point_index_labels_visible(visible: bool);
    /// Color of point labels
    set_point_label_color(color: Color);
    /// Scale of point label text
    set_point_label_scale(scale: f32);

    // Segment labels

    /// Show or hide segment index labels
    set_segment_index_labels_visible(visible: bool);
    /// Color of segment labels
    set_segment_label_color(color: Color);
    /// Scale of segment label text
    set_segment_label_scale(scale: f32);

    // Triangle labels

    /// Show or hide triangle index labels
    set_triangle_index_labels_visible(visible: bool);
    /// Color of triangle labels
    set_triangle_label_color(color: Color);
    /// Scale of triangle label text
    set_triangle_label_scale(scale: f32);

    // Rendering

    /// Show or hide vertices, the positions referenced by any element
    set_vertices_visible(visible: bool);
    /// Color of vertices
    set_vertices_color(color: Color);
    /// Size of vertices in pixels
    set_vertices_size(size: i32);
    /// Show or hide points (`p` elements)
    set_points_visible(visible: bool);
    /// Color of points
    set_points_color(color: Color);
    /// Size of points in pixels
    set_points_size(size: i32);
    /// Show or hide segments (`l` elements)
    set_segments_visible(visible: bool);
    /// Color of segments
    set_segments_color(color: Color);
    /// Width of segments in pixels
    set_segments_width(width: f32);
    /// Show or hide triangle edges
    set_edges_visible(visible: bool);
    /// Color of triangle edges
    set_edges_color(color: Color);
    /// Width of triangle edges in pixels
    set_edges_width(width: f32);
    /// Show or hide triangles (`f` elements)
    set_triangles_visible(visible: bool);
    /// Color of triangles
    set_triangles_color(color: Color);
}
