//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations as
//! byte ranges inside a file, and the per-file index that maps those byte
//! offsets back to line/column pairs.
//!
//! # Examples
//!
//! ```
//! use hxc_util::span::{FileRegistry, Span};
//!
//! let mut registry = FileRegistry::new();
//! let file = registry.init("Main.hx");
//! registry.register_newline(file, 6);
//!
//! let span = Span::new(file, 8, 11);
//! assert_eq!(registry.get_error_line(span), 2);
//! ```

mod line_index;
mod registry;

pub use line_index::{FileState, LineStart};
pub use registry::{FileRegistry, PosCoords};

use crate::error::{SourceMapError, SourceMapResult};

/// Offset used by [`Span::UNKNOWN`] for both ends.
pub const UNKNOWN_OFFSET: usize = usize::MAX;

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as paths are added to a [`FileRegistry`].
///
/// # Examples
///
/// ```
/// use hxc_util::span::FileId;
///
/// let id = FileId(0);
/// assert_eq!(id.index(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// Create a new FileId
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// A dummy FileId for testing
    pub const DUMMY: FileId = FileId(0);
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// A half-open byte range `start..end` in the file identified by `file`.
/// Line and column information is not stored; ask the [`FileRegistry`].
///
/// # Examples
///
/// ```
/// use hxc_util::span::{FileId, Span};
///
/// let span = Span::new(FileId(0), 10, 20);
/// assert_eq!(span.len(), 10);
/// assert!(Span::UNKNOWN.is_unknown());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// File identifier
    pub file: FileId,
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
}

impl Span {
    /// Span of a location nobody knows.
    pub const UNKNOWN: Span = Span {
        file: FileId::DUMMY,
        start: UNKNOWN_OFFSET,
        end: UNKNOWN_OFFSET,
    };

    /// Create a new span
    #[inline]
    pub const fn new(file: FileId, start: usize, end: usize) -> Self {
        Self { file, start, end }
    }

    /// Create a span, rejecting reversed ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use hxc_util::span::{FileId, Span};
    ///
    /// assert!(Span::try_new(FileId(0), 4, 2).is_err());
    /// ```
    pub fn try_new(file: FileId, start: usize, end: usize) -> SourceMapResult<Self> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        Ok(Self::new(file, start, end))
    }

    /// A one-byte span at `offset`.
    #[inline]
    pub const fn at(file: FileId, offset: usize) -> Self {
        Self {
            file,
            start: offset,
            end: offset + 1,
        }
    }

    /// Whether this is the unknown sentinel.
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.start == UNKNOWN_OFFSET && self.end == UNKNOWN_OFFSET
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering `self` and `other` (same file assumed).
    ///
    /// # Examples
    ///
    /// ```
    /// use hxc_util::span::{FileId, Span};
    ///
    /// let a = Span::new(FileId(0), 2, 4);
    /// let b = Span::new(FileId(0), 8, 9);
    /// assert_eq!(a.to(b), Span::new(FileId(0), 2, 9));
    /// ```
    pub fn to(self, other: Span) -> Span {
        Span {
            file: self.file,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(FileId(1), 3, 7);
        assert_eq!(span.file, FileId(1));
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_unknown());
    }

    #[test]
    fn test_span_at() {
        let span = Span::at(FileId(0), 5);
        assert_eq!((span.start, span.end), (5, 6));
    }

    #[test]
    fn test_unknown_span() {
        assert!(Span::UNKNOWN.is_unknown());
        assert!(Span::default().is_unknown());
        assert!(Span::UNKNOWN.is_empty());
    }

    #[test]
    fn test_try_new() {
        assert!(Span::try_new(FileId(0), 1, 1).is_ok());
        assert!(matches!(
            Span::try_new(FileId(0), 2, 1),
            Err(SourceMapError::InvalidSpan { start: 2, end: 1 })
        ));
    }

    #[test]
    fn test_span_to() {
        let a = Span::new(FileId(0), 5, 6);
        let b = Span::new(FileId(0), 1, 2);
        assert_eq!(a.to(b), Span::new(FileId(0), 1, 6));
    }
}
