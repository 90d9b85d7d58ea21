//! Source location tracking

use serde::Serialize;
use std::fmt;

/// Half-open byte range `[beg, end)` into a source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Start offset (inclusive)
    pub beg: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[inline]
    pub fn new(beg: usize, end: usize) -> Self {
        Self { beg, end }
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.beg)
    }

    /// Check if span is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.beg == self.end
    }

    /// Check if an offset falls inside the span
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.beg <= offset && offset < self.end
    }

    /// Smallest span covering both `self` and `other`
    #[inline]
    pub fn to(&self, other: Span) -> Span {
        Span::new(self.beg.min(other.beg), self.end.max(other.end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.beg, self.end)
    }
}

/// Source buffer plus a derived line-start table
///
/// The table is built once at construction and read-only afterwards; it
/// backs offset -> (line, column) lookup and line-text fetch for
/// diagnostic rendering.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name (or `<input>` for in-memory sources)
    pub name: String,
    /// Raw source text
    pub content: String,
    /// Byte offset where each line begins, with a trailing sentinel
    line_offsets: Vec<usize>,
}

impl SourceFile {
    /// Create a new source file and build its line table
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let mut line_offsets = vec![0];
        for (i, b) in content.bytes().enumerate() {
            if b == b'\n' {
                line_offsets.push(i + 1);
            }
        }
        line_offsets.push(content.len());

        Self {
            name: name.into(),
            content,
            line_offsets,
        }
    }

    /// Number of lines in the buffer
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_offsets.len() - 1
    }

    /// Translate a byte offset into a 1-based (line, column) pair
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = self
            .line_offsets
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
            .min(self.line_count().saturating_sub(1));
        let column = offset - self.line_offsets[line] + 1;
        (line + 1, column)
    }

    /// Fetch the verbatim text of a 1-based line, without its terminator
    pub fn line_text(&self, line: usize) -> &str {
        if line == 0 || line > self.line_count() {
            return "";
        }
        let beg = self.line_offsets[line - 1];
        let end = self.line_offsets[line];
        self.content[beg..end].trim_end_matches(['\n', '\r'])
    }

    /// Slice the source text covered by a span
    #[inline]
    pub fn slice(&self, span: Span) -> &str {
        let beg = span.beg.min(self.content.len());
        let end = span.end.min(self.content.len());
        &self.content[beg..end]
    }
}
