//! Common value types used when writing obj files

mod bounds;
mod color;
mod vector;

pub use bounds::{BoundingBox2D, BoundingBox3D};
pub use color::Color;
pub use vector::{Vector2, Vector3, Vector4};
