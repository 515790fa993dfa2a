//! Obj writer module

pub mod value;

pub use value::{
    format_float, write_float, Coordinates, ObjValue, ROUND_TRIP_DIGITS_F32,
    ROUND_TRIP_DIGITS_F64,
};

use crate::document::ObjDocument;
use crate::error::{ObjError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Obj file writer
pub struct ObjWriter {
    document: ObjDocument,
    /// Whether to end the output with a line terminator if the document
    /// does not already
    pub trailing_newline: bool,
}

impl ObjWriter {
    /// Create a new obj writer. Output ends with a line terminator
    pub fn new(document: ObjDocument) -> Self {
        Self {
            document,
            trailing_newline: true,
        }
    }

    /// Set whether to end the output with a line terminator
    pub fn set_trailing_newline(&mut self, trailing_newline: bool) {
        self.trailing_newline = trailing_newline;
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if path.file_name().is_none() {
            return Err(ObjError::InvalidPath(path.display().to_string()));
        }

        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.write_to_writer(writer)?;
        debug!("Wrote obj file {:?}", path);
        Ok(())
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let text = self.document.as_str();
        writer.write_all(text.as_bytes())?;
        if self.trailing_newline && !text.is_empty() && !text.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write to a byte vector (useful for testing)
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    /// Get a reference to the document
    pub fn document(&self) -> &ObjDocument {
        &self.document
    }

    /// Take the document back
    pub fn into_document(self) -> ObjDocument {
        self.document
    }
}

/// Convenience function to write a document to a file
pub fn write_obj<P: AsRef<Path>>(document: &ObjDocument, path: P) -> Result<()> {
    let writer = ObjWriter::new(document.clone());
    writer.write_to_file(path)
}
