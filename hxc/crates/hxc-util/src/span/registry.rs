//! Registry of per-file position indexes.

use std::path::Path;

use indexmap::IndexMap;

use super::{FileId, FileState, Span};
use crate::config::ColumnMode;
use crate::error::{SourceMapError, SourceMapResult};

/// Line/column coordinates of both ends of a span, columns already shifted
/// by the registry's [`ColumnMode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PosCoords {
    pub start_line: u32,
    pub start_col: usize,
    pub end_line: u32,
    pub end_col: usize,
}

/// Maps file paths to their position indexes
///
/// A path may be known without an index; its index is then read from disk
/// the first time a position in it is resolved.
///
/// # Examples
///
/// ```
/// use hxc_util::span::{FileRegistry, Span};
///
/// let mut registry = FileRegistry::new();
/// let file = registry.init("Main.hx");
/// registry.register_newline(file, 10);
///
/// let coords = registry.get_pos_coords(Span::new(file, 12, 15));
/// assert_eq!((coords.start_line, coords.start_col), (2, 3));
/// ```
#[derive(Debug, Default)]
pub struct FileRegistry {
    files: IndexMap<String, Option<FileState>>,
    column_mode: ColumnMode,
}

impl FileRegistry {
    /// Create an empty registry with 1-based columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry rendering columns per `mode`
    pub fn with_column_mode(mode: ColumnMode) -> Self {
        Self {
            files: IndexMap::new(),
            column_mode: mode,
        }
    }

    #[inline]
    pub fn column_mode(&self) -> ColumnMode {
        self.column_mode
    }

    #[inline]
    pub fn set_column_mode(&mut self, mode: ColumnMode) {
        self.column_mode = mode;
    }

    /// Number of known paths.
    #[inline]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns the id of `path`, registering it without an index if needed.
    ///
    /// Positions in a path registered this way are resolved by reading the
    /// file.
    pub fn file_id(&mut self, path: &str) -> FileId {
        match self.files.get_index_of(path) {
            Some(index) => FileId(index),
            None => FileId(self.files.insert_full(path.to_owned(), None).0),
        }
    }

    /// Id of an already known path.
    pub fn lookup(&self, path: &str) -> Option<FileId> {
        self.files.get_index_of(path).map(FileId)
    }

    /// Starts a fresh index for `path`, replacing any previous one.
    pub fn init(&mut self, path: &str) -> FileId {
        let (index, _) = self.files.insert_full(path.to_owned(), Some(FileState::new()));
        FileId(index)
    }

    /// Path registered under `id`.
    pub fn path(&self, id: FileId) -> SourceMapResult<&str> {
        self.files
            .get_index(id.0)
            .map(|(path, _)| path.as_str())
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    /// Index of `id`, if one has been built or loaded.
    pub fn state(&self, id: FileId) -> Option<&FileState> {
        self.files.get_index(id.0).and_then(|(_, state)| state.as_ref())
    }

    /// Records a newline in `id` ending right before `offset`.
    pub fn register_newline(&mut self, id: FileId, offset: usize) {
        match self.files.get_index_mut(id.0) {
            Some((_, state)) => state
                .get_or_insert_with(FileState::new)
                .register_newline(offset),
            None => tracing::warn!(file = id.0, "newline registered for unknown file"),
        }
    }

    /// Maps `offset` in `id` to `(line, column)` with a 0-based column.
    ///
    /// Files without an index are read and indexed on first use. A file that
    /// cannot be read is given an index with a single line.
    pub fn resolve(&mut self, id: FileId, offset: usize) -> (u32, usize) {
        let Some((path, slot)) = self.files.get_index_mut(id.0) else {
            tracing::warn!(file = id.0, "position lookup in unknown file");
            return (1, offset);
        };
        let state = slot.get_or_insert_with(|| {
            FileState::load(Path::new(path)).unwrap_or_else(|err| {
                tracing::warn!(%err, "using empty position index");
                FileState::new()
            })
        });
        state.resolve(offset)
    }

    /// Line of the start of `span`, or 0 when the span is unknown.
    pub fn get_error_line(&mut self, span: Span) -> u32 {
        if span.is_unknown() {
            return 0;
        }
        self.resolve(span.file, span.start).0
    }

    /// Coordinates of both ends of `span`.
    ///
    /// Unknown spans yield all zeroes.
    pub fn get_pos_coords(&mut self, span: Span) -> PosCoords {
        if span.is_unknown() {
            return PosCoords::default();
        }
        let base = self.column_mode.base();
        let (start_line, start_col) = self.resolve(span.file, span.start);
        let (end_line, end_col) = self.resolve(span.file, span.end);
        PosCoords {
            start_line,
            start_col: start_col + base,
            end_line,
            end_col: end_col + base,
        }
    }

    /// Renders the location of `span` for a diagnostic.
    ///
    /// `printer` turns `(path, line)` into the leading label.
    ///
    /// # Examples
    ///
    /// ```
    /// use hxc_util::span::{FileRegistry, Span};
    ///
    /// let mut registry = FileRegistry::new();
    /// let file = registry.init("Main.hx");
    /// let text = registry.format_pos(Span::new(file, 4, 9), |path, line| {
    ///     format!("{}:{}:", path, line)
    /// });
    /// assert_eq!(text, "Main.hx:1: characters 5-10");
    /// ```
    pub fn format_pos<F>(&mut self, span: Span, printer: F) -> String
    where
        F: Fn(&str, u32) -> String,
    {
        if span.is_unknown() {
            return "(unknown)".to_string();
        }
        let coords = self.get_pos_coords(span);
        let path = self.path(span.file).unwrap_or("?");
        let label = printer(path, coords.start_line);
        if coords.start_line != coords.end_line {
            format!("{} lines {}-{}", label, coords.start_line, coords.end_line)
        } else if coords.start_col == coords.end_col {
            format!("{} character {}", label, coords.start_col)
        } else {
            format!(
                "{} characters {}-{}",
                label, coords.start_col, coords.end_col
            )
        }
    }
}
