//! Obj document builder
//!
//! [`ObjDocument`] is an append-only text buffer plus the small amount of
//! state needed to write Prism flavoured obj files correctly:
//!
//! - the [`LineContext`] of the current line, so annotations started on a
//!   line concatenate and comments are demarcated by a second `#`
//! - running counts of position, normal and texture-coordinate records, so
//!   relative references can be rewritten as absolute ones on request
//! - the precision used to format floating-point data
//!
//! Every builder method returns `&mut Self` so calls can be chained:
//!
//! ```rust
//! use prism_obj::{ObjDocument, Vector3};
//!
//! let mut obj = ObjDocument::new();
//! obj.position(Vector3::new(0.0, 0.0, 1.0)).an("Vertex A");
//! obj.position(Vector3::new(3.0, 0.0, 1.0)).an("Vertex B");
//! obj.position(Vector3::new(3.0, 3.0, 1.0)).an("Vertex C");
//! obj.triangle().annotate("Triangle ABC");
//!
//! assert_eq!(
//!     obj.as_str(),
//!     "v 0 0 1 # Vertex A\nv 3 0 1 # Vertex B\nv 3 3 1 # Vertex C\nf -3 -2 -1 # Triangle ABC"
//! );
//! ```

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::io::obj::value::{Coordinates, ObjValue, ROUND_TRIP_DIGITS_F64};
use crate::io::obj::ObjWriter;
use crate::line_context::{IndexMode, LineContext};
use crate::types::Vector3;

/// Settings applied when a document is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjConfiguration {
    /// How negative element references are written.
    ///
    /// Default: [`IndexMode::Relative`].
    pub index_mode: IndexMode,
    /// Significant decimal digits for floating-point data.
    ///
    /// Default: 17, enough to round-trip any `f64`.
    pub precision: usize,
}

impl Default for ObjConfiguration {
    fn default() -> Self {
        Self {
            index_mode: IndexMode::Relative,
            precision: ROUND_TRIP_DIGITS_F64,
        }
    }
}

/// Kinds of vertex data record. Each kind is indexed independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `v` records
    Position,
    /// `vn` records
    Normal,
    /// `vt` records
    TexCoord,
}

impl RecordKind {
    /// The obj directive that starts a record of this kind
    pub const fn directive(self) -> &'static str {
        match self {
            RecordKind::Position => "v",
            RecordKind::Normal => "vn",
            RecordKind::TexCoord => "vt",
        }
    }
}

/// An obj file under construction
#[derive(Debug, Clone, PartialEq)]
pub struct ObjDocument {
    buffer: String,
    context: LineContext,
    position_count: usize,
    normal_count: usize,
    texcoord_count: usize,
    index_mode: IndexMode,
    precision: usize,
}

impl ObjDocument {
    /// Create an empty document with the default configuration
    pub fn new() -> Self {
        Self::with_configuration(ObjConfiguration::default())
    }

    /// Create an empty document with a custom configuration
    pub fn with_configuration(config: ObjConfiguration) -> Self {
        ObjDocument {
            buffer: String::new(),
            context: LineContext::Geometry,
            position_count: 0,
            normal_count: 0,
            texcoord_count: 0,
            index_mode: config.index_mode,
            precision: config.precision,
        }
    }

    /// The current index mode and precision
    pub fn configuration(&self) -> ObjConfiguration {
        ObjConfiguration {
            index_mode: self.index_mode,
            precision: self.precision,
        }
    }

    // ==================== Contents ====================

    /// The text written so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Take the text, consuming the document
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Length of the text in bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Region of the current line that text is appended to
    pub fn line_context(&self) -> LineContext {
        self.context
    }

    /// Number of `#` characters on the current line, clamped to 2
    pub fn hash_count(&self) -> usize {
        self.context.hash_count()
    }

    /// Number of `v` records written
    pub fn position_count(&self) -> usize {
        self.position_count
    }

    /// Number of `vn` records written
    pub fn normal_count(&self) -> usize {
        self.normal_count
    }

    /// Number of `vt` records written
    pub fn texcoord_count(&self) -> usize {
        self.texcoord_count
    }

    /// Number of records of the given kind written
    pub fn record_count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Position => self.position_count,
            RecordKind::Normal => self.normal_count,
            RecordKind::TexCoord => self.texcoord_count,
        }
    }

    // ==================== Settings ====================

    /// How element references are written
    pub fn index_mode(&self) -> IndexMode {
        self.index_mode
    }

    /// Change how element references written from now on are resolved
    pub fn set_index_mode(&mut self, mode: IndexMode) -> &mut Self {
        self.index_mode = mode;
        self
    }

    /// `true` selects [`IndexMode::Relative`], `false` [`IndexMode::Absolute`]
    pub fn set_use_relative_indices(&mut self, use_relative_indices: bool) -> &mut Self {
        self.set_index_mode(IndexMode::from_relative(use_relative_indices))
    }

    /// True if negative references are written as-is
    pub fn uses_relative_indices(&self) -> bool {
        self.index_mode == IndexMode::Relative
    }

    /// Significant digits used for floating-point data
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Set the significant digits used for floating-point data written from
    /// now on.
    ///
    /// Lowering the precision makes numeric annotations easier to read;
    /// restore it afterwards with [`Self::set_precision_to_roundtrip_floats`]
    /// so coordinates stay exact.
    pub fn set_precision(&mut self, digits: usize) -> &mut Self {
        self.precision = digits;
        self
    }

    /// Use enough digits to round-trip `f64` data through the text exactly
    pub fn set_precision_to_roundtrip_floats(&mut self) -> &mut Self {
        self.set_precision(ROUND_TRIP_DIGITS_F64)
    }

    // ==================== Characters ====================

    /// Append text verbatim. The line context is not updated, so text
    /// containing `#` or newlines should go through the dedicated calls
    pub fn append_raw(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Append a formatted value with no separator
    pub fn add<T: ObjValue>(&mut self, value: T) -> &mut Self {
        value.write_value(&mut self.buffer, self.precision);
        self
    }

    /// Append a space then a formatted value
    pub fn insert<T: ObjValue>(&mut self, value: T) -> &mut Self {
        self.space().add(value)
    }

    /// Append a space
    pub fn space(&mut self) -> &mut Self {
        self.buffer.push(' ');
        self
    }

    /// End the current line
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.context = self.context.after_newline();
        self
    }

    /// Append a `#`, advancing the line context
    pub fn hash(&mut self) -> &mut Self {
        self.buffer.push('#');
        self.context = self.context.after_hash();
        self
    }

    /// Append a `!`, used by command annotations
    pub fn bang(&mut self) -> &mut Self {
        self.buffer.push('!');
        self
    }

    /// Append an `@`, used by attributes
    pub fn at(&mut self) -> &mut Self {
        self.buffer.push('@');
        self
    }

    /// Make sure the next text starts a fresh line. An empty line is reused
    pub(crate) fn begin_line(&mut self) -> &mut Self {
        if self.buffer.is_empty() || self.buffer.ends_with('\n') {
            self.context = LineContext::Geometry;
            self
        } else {
            self.newline()
        }
    }

    /// Start a directive on its own line
    pub(crate) fn directive(&mut self, name: &str) -> &mut Self {
        self.begin_line();
        self.buffer.push_str(name);
        self
    }

    // ==================== Annotations and comments ====================

    /// Start the annotation string of the current line unless one is
    /// already started. The space before the `#` keeps the hash from being
    /// glued to a number by other obj parsers
    pub fn start_annotation(&mut self) -> &mut Self {
        if self.context == LineContext::Geometry {
            self.space().hash();
        }
        self
    }

    /// Add `value` to the annotation string of the current line.
    /// Repeated calls on one line build a single annotation
    pub fn annotate<T: ObjValue>(&mut self, value: T) -> &mut Self {
        self.start_annotation().insert(value)
    }

    /// Annotate with `text` then end the line. Empty text only ends the line
    pub fn an(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.annotate(text);
        }
        self.newline()
    }

    /// Add `@ value` to the annotation string of the current line.
    ///
    /// Attributes are a naming convention for typed data inside annotation
    /// strings, so several can be attached to one element.
    pub fn attribute<T: ObjValue>(&mut self, value: T) -> &mut Self {
        self.start_annotation().space().at().insert(value)
    }

    /// Write hashes until the current line has two, after which text is
    /// ignored by Prism
    pub fn ensure_comment(&mut self) -> &mut Self {
        while self.context.hash_count() < 2 {
            self.hash();
        }
        self
    }

    /// Comment out the rest of the line then append `text`
    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.ensure_comment().append_raw(text)
    }

    // ==================== Vertex data ====================

    /// Write a `v x y [z]` position record
    pub fn position<P: Coordinates>(&mut self, position: P) -> &mut Self {
        self.position_count += 1;
        self.directive(RecordKind::Position.directive()).insert(position)
    }

    /// Write a `vn x y z` normal record
    pub fn normal(&mut self, normal: Vector3) -> &mut Self {
        self.normal_count += 1;
        self.directive(RecordKind::Normal.directive()).insert(normal)
    }

    /// Write a `vt u v [w]` texture coordinate record
    pub fn texcoord<P: Coordinates>(&mut self, texcoord: P) -> &mut Self {
        self.texcoord_count += 1;
        self.directive(RecordKind::TexCoord.directive()).insert(texcoord)
    }

    /// Write a `g name` group directive. Prism ignores groups
    pub fn group(&mut self, name: &str) -> &mut Self {
        self.directive("g").insert(name)
    }

    /// Resolve a 1-based reference to a record of `kind`.
    ///
    /// Positive indices are absolute and pass through. Negative indices
    /// count back from the current line and pass through in relative mode;
    /// in absolute mode `-1` becomes the number of records written so far.
    /// Zero is never valid and is written unchanged.
    pub fn resolve_index(&self, kind: RecordKind, index: i64) -> i64 {
        self.index_mode.resolve(index, self.record_count(kind))
    }

    // ==================== Combining and output ====================

    /// Append another document between newlines.
    ///
    /// `other` must only use relative references, otherwise its elements
    /// point at the wrong records. Its record counts are added to ours so
    /// absolute references written afterwards stay correct.
    pub fn append_document(&mut self, other: &ObjDocument) -> &mut Self {
        self.newline();
        self.buffer.push_str(&other.buffer);
        self.position_count += other.position_count;
        self.normal_count += other.normal_count;
        self.texcoord_count += other.texcoord_count;
        self.newline()
    }

    /// Write the text to any sink
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<()> {
        sink.write_all(self.buffer.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Write the text to a file, replacing its contents. The text is
    /// written verbatim, without a trailing line terminator.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = ObjWriter::new(self.clone());
        writer.set_trailing_newline(false);
        writer.write_to_file(path)
    }
}

impl Default for ObjDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl AsRef<str> for ObjDocument {
    fn as_ref(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector2;

    #[test]
    fn test_new_document_defaults() {
        let obj = ObjDocument::new();
        assert!(obj.is_empty());
        assert_eq!(obj.hash_count(), 0);
        assert_eq!(obj.precision(), 17);
        assert_eq!(obj.index_mode(), IndexMode::Relative);
        assert_eq!(obj.configuration(), ObjConfiguration::default());
    }

    #[test]
    fn test_with_configuration() {
        let obj = ObjDocument::with_configuration(ObjConfiguration {
            index_mode: IndexMode::Absolute,
            precision: 4,
        });
        assert!(!obj.uses_relative_indices());
        assert_eq!(obj.precision(), 4);
    }

    #[test]
    fn test_directives_start_new_lines() {
        let mut obj = ObjDocument::new();
        obj.position(Vector2::new(0.0, 0.0))
            .position(Vector3::new(1.0, 2.0, 3.0))
            .normal(Vector3::UNIT_Z)
            .texcoord(Vector2::new(0.5, 0.25));
        assert_eq!(obj.as_str(), "v 0 0\nv 1 2 3\nvn 0 0 1\nvt 0.5 0.25");
        assert_eq!(obj.position_count(), 2);
        assert_eq!(obj.normal_count(), 1);
        assert_eq!(obj.texcoord_count(), 1);
    }

    #[test]
    fn test_directive_reuses_empty_line() {
        let mut obj = ObjDocument::new();
        obj.position(Vector2::new(1.0, 1.0)).newline();
        obj.position(Vector2::new(2.0, 2.0));
        assert_eq!(obj.as_str(), "v 1 1\nv 2 2");
    }

    #[test]
    fn test_start_annotation_is_idempotent() {
        let mut obj = ObjDocument::new();
        obj.start_annotation().start_annotation();
        assert_eq!(obj.as_str(), " #");
        assert_eq!(obj.hash_count(), 1);

        obj.annotate("these").annotate("are").annotate("concatenated");
        assert_eq!(obj.as_str(), " # these are concatenated");
        assert_eq!(obj.hash_count(), 1);
    }

    #[test]
    fn test_ensure_comment_tops_up_to_two_hashes() {
        let mut obj = ObjDocument::new();
        obj.ensure_comment();
        assert_eq!(obj.as_str(), "##");

        let mut obj = ObjDocument::new();
        obj.annotate("label").ensure_comment().append_raw("ignored");
        assert_eq!(obj.as_str(), " # label#ignored");
        assert_eq!(obj.hash_count(), 2);

        obj.ensure_comment();
        assert_eq!(obj.as_str(), " # label#ignored");
    }

    #[test]
    fn test_newline_resets_line_context() {
        let mut obj = ObjDocument::new();
        obj.comment("header").newline().annotate(1);
        assert_eq!(obj.as_str(), "##header\n # 1");
        assert_eq!(obj.hash_count(), 1);
    }

    #[test]
    fn test_attribute_joins_annotation() {
        let mut obj = ObjDocument::new();
        obj.position(Vector2::new(3.0, 3.0))
            .annotate("some string")
            .attribute(42)
            .attribute(Vector2::new(0.0, 0.0));
        assert_eq!(obj.as_str(), "v 3 3 # some string @ 42 @ 0 0");
    }

    #[test]
    fn test_attribute_starts_annotation() {
        let mut obj = ObjDocument::new();
        obj.attribute(1.5);
        assert_eq!(obj.as_str(), " # @ 1.5");
    }

    #[test]
    fn test_an_with_empty_text_only_ends_line() {
        let mut obj = ObjDocument::new();
        obj.position(Vector2::new(1.0, 2.0)).an("");
        assert_eq!(obj.as_str(), "v 1 2\n");
        assert_eq!(obj.hash_count(), 0);
    }

    #[test]
    fn test_precision_is_free_running() {
        let mut obj = ObjDocument::new();
        obj.position(Vector2::new(0.1, 0.0));
        obj.set_precision(3).annotate(1.0 / 3.0);
        obj.set_precision_to_roundtrip_floats().position(Vector2::new(0.1, 0.0));
        assert_eq!(
            obj.as_str(),
            "v 0.10000000000000001 0 # 0.333\nv 0.10000000000000001 0"
        );
    }

    #[test]
    fn test_precision_beyond_exact_expansion() {
        let mut huge = ObjDocument::new();
        huge.set_precision(70_000).position(Vector2::new(0.1, 0.0));
        let mut exact = ObjDocument::new();
        exact.set_precision(767).position(Vector2::new(0.1, 0.0));
        assert_eq!(huge.as_str(), exact.as_str());
        assert!(huge.as_str().starts_with("v 0.1000000000000000055511151231257827"));
    }

    #[test]
    fn test_resolve_index_per_kind() {
        let mut obj = ObjDocument::new();
        obj.set_index_mode(IndexMode::Absolute);
        for i in 0..5 {
            obj.position(Vector2::new(i as f64, 0.0));
        }
        obj.normal(Vector3::UNIT_Z).normal(Vector3::UNIT_Y);
        assert_eq!(obj.resolve_index(RecordKind::Position, -1), 5);
        assert_eq!(obj.resolve_index(RecordKind::Normal, -1), 2);
        assert_eq!(obj.resolve_index(RecordKind::TexCoord, -1), 0);
        assert_eq!(obj.resolve_index(RecordKind::Position, 2), 2);

        obj.set_use_relative_indices(true);
        assert_eq!(obj.resolve_index(RecordKind::Position, -1), -1);
    }

    #[test]
    fn test_group_directive() {
        let mut obj = ObjDocument::new();
        obj.group("walls").position(Vector2::ZERO);
        assert_eq!(obj.as_str(), "g walls\nv 0 0");
        assert_eq!(obj.position_count(), 1);
    }

    #[test]
    fn test_append_document_adds_counts() {
        let mut first = ObjDocument::new();
        first.position(Vector2::ZERO);
        let mut second = ObjDocument::new();
        second.position(Vector2::ZERO).position(Vector2::ZERO);

        first.append_document(&second);
        assert_eq!(first.as_str(), "v 0 0\nv 0 0\nv 0 0\n");
        assert_eq!(first.position_count(), 3);
        assert_eq!(first.hash_count(), 0);
    }

    #[test]
    fn test_write_to_sink() {
        let mut obj = ObjDocument::new();
        obj.position(Vector2::new(1.0, 2.0));
        let mut sink = Vec::new();
        obj.write_to(&mut sink).unwrap();
        assert_eq!(sink, b"v 1 2");
    }

    #[test]
    fn test_write_to_file_rejects_directory_path() {
        let mut obj = ObjDocument::new();
        obj.position(Vector2::new(1.0, 2.0));
        let err = obj.write_to_file("..").unwrap_err();
        assert!(matches!(err, crate::error::ObjError::InvalidPath(_)));
    }

    #[test]
    fn test_display_matches_buffer() {
        let mut obj = ObjDocument::new();
        obj.comment("hello");
        assert_eq!(obj.to_string(), "##hello");
    }
}
