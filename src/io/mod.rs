//! I/O module for writing Prism flavoured obj files

pub mod obj;

pub use obj::{write_obj, ObjWriter};
