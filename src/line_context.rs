//! Per-line state of an obj document
//!
//! Prism gives `#` characters meaning beyond the plain obj comment syntax:
//!
//! - no `#` on a line: geometry is being written
//! - after the first `#`: the text is the line's *annotation string*
//! - after the second `#`: the text is a comment and is ignored
//!
//! [`LineContext`] tracks which of these regions the end of the current line
//! is in. Only a hash advances it and only a newline resets it.

/// Which region of the current line text is appended to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineContext {
    /// No `#` written since the last newline
    #[default]
    Geometry,
    /// One `#` written: text is part of the annotation string
    Annotating,
    /// Two or more `#` written: text is ignored by Prism
    Commented,
}

impl LineContext {
    /// Context after writing one more `#` on this line
    pub const fn after_hash(self) -> Self {
        match self {
            LineContext::Geometry => LineContext::Annotating,
            LineContext::Annotating | LineContext::Commented => LineContext::Commented,
        }
    }

    /// Context after a line terminator
    pub const fn after_newline(self) -> Self {
        LineContext::Geometry
    }

    /// Number of `#` characters on the line, clamped to 2
    pub const fn hash_count(self) -> usize {
        match self {
            LineContext::Geometry => 0,
            LineContext::Annotating => 1,
            LineContext::Commented => 2,
        }
    }

    /// True once an annotation (or comment) has been started on this line
    pub const fn has_annotation(self) -> bool {
        !matches!(self, LineContext::Geometry)
    }

    /// True if text appended now is ignored by Prism
    pub const fn is_commented(self) -> bool {
        matches!(self, LineContext::Commented)
    }
}

/// How element references to earlier records are written
///
/// Indices are always given 1-based and may be negative, counting back from
/// the current line (`-1` is the most recent record of that kind). This mode
/// decides what ends up in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexMode {
    /// Negative indices are written as-is. Documents written this way can be
    /// concatenated with [`crate::ObjDocument::append_document`].
    #[default]
    Relative,
    /// Negative indices are converted to positive ones using the running
    /// record counters. Needed by viewers without negative index support.
    Absolute,
}

impl IndexMode {
    /// Mode for the `use_relative_indices` flag
    pub const fn from_relative(use_relative_indices: bool) -> Self {
        if use_relative_indices {
            IndexMode::Relative
        } else {
            IndexMode::Absolute
        }
    }

    /// Resolve `index` against `count` records of its kind written so far
    pub const fn resolve(self, index: i64, count: usize) -> i64 {
        match self {
            IndexMode::Absolute if index < 0 => count as i64 + 1 + index,
            _ => index,
        }
    }
}
