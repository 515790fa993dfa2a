//! # prism-obj
//!
//! A Rust library for writing Wavefront .obj files extended with the
//! annotation conventions of the Prism geometry viewer.
//!
//! Obj files are plain text, which makes them a convenient format for
//! dumping geometry while debugging. Prism adds meaning to obj comments so
//! the dumped geometry can carry extra information:
//!
//! - text after the first `#` on a line is the *annotation* of that line's
//!   element and is shown as a label in the viewer
//! - text after a second `#` is a regular comment
//! - lines starting with `#!` are *command annotations*, console commands
//!   Prism runs once the file has loaded
//!
//! ## Quick Start
//!
//! ```rust
//! use prism_obj::{Color, ObjDocument, Vector2, Vector3};
//!
//! let mut obj = ObjDocument::new();
//!
//! // A labelled triangle
//! obj.position(Vector3::new(0.0, 0.0, 1.0)).an("Vertex A");
//! obj.position(Vector3::new(3.0, 0.0, 1.0)).an("Vertex B");
//! obj.position(Vector3::new(3.0, 3.0, 1.0)).an("Vertex C");
//! obj.triangle().an("Triangle ABC");
//!
//! // A closed polyline and its bounding box
//! let star = [
//!     Vector2::new(0.0, 10.0),
//!     Vector2::new(3.0, 3.0),
//!     Vector2::new(10.0, 0.0),
//!     Vector2::new(3.0, -3.0),
//! ];
//! obj.polyline_through(&star, true).an("star");
//! obj.box2_min_max(Vector2::new(0.0, -3.0), Vector2::new(10.0, 10.0));
//!
//! // Show annotations once Prism has loaded the file
//! obj.set_annotations_visible(true);
//! obj.set_annotations_color(Color::BLUE);
//!
//! assert!(obj.as_str().starts_with("v 0 0 1 # Vertex A\n"));
//! ```
//!
//! ## Architecture
//!
//! - [`ObjDocument`] - the text buffer, its line state and record counters
//! - [`LineContext`] - which region of the current line text goes to
//! - [`IndexMode`] - relative (concatenation safe) or absolute references
//! - elements, shapes, commands and meshes are `impl ObjDocument` blocks in
//!   their own modules
//! - [`ObjWriter`] - hands a finished document to a file or stream
//!
//! Documents written with relative references only can be concatenated with
//! [`ObjDocument::append_document`] and stay valid.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod commands;
pub mod document;
pub mod elements;
pub mod error;
pub mod io;
pub mod line_context;
pub mod mesh;
pub mod shapes;
pub mod types;

// Re-export commonly used types
pub use document::{ObjConfiguration, ObjDocument, RecordKind};
pub use error::{ObjError, Result};
pub use line_context::{IndexMode, LineContext};
pub use types::{BoundingBox2D, BoundingBox3D, Color, Vector2, Vector3, Vector4};

pub use elements::{Attachments, Corner, ElementKind, LAST_POINT, LAST_SEGMENT, LAST_TRIANGLE};
pub use mesh::{MeshSource, MeshWriteOptions, TriangleMesh};
pub use shapes::Dimension;

pub use io::obj::{Coordinates, ObjValue};
pub use io::{write_obj, ObjWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
