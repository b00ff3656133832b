//! Per-file position index.
//!
//! The lexer appends one [`LineStart`] per newline it consumes; lookups
//! materialize a sorted table from those entries on demand and remember the
//! last bucket they landed in.

use std::path::Path;

use crate::error::{SourceMapError, SourceMapResult};

/// Start of a line: byte offset of its first byte and its 1-based number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineStart {
    /// Byte offset of the first byte of the line
    pub offset: usize,
    /// Line number, starting at 1
    pub line: u32,
}

impl LineStart {
    const FIRST: LineStart = LineStart { offset: 0, line: 1 };
}

/// Position index for one source file
///
/// # Examples
///
/// ```
/// use hxc_util::span::FileState;
///
/// let mut state = FileState::new();
/// state.register_newline(4);
/// assert_eq!(state.resolve(2), (1, 2));
/// assert_eq!(state.resolve(6), (2, 2));
/// ```
#[derive(Clone, Debug)]
pub struct FileState {
    /// Current line counter
    line: u32,
    /// Value of `line` when `table` was last rebuilt
    built_for: u32,
    /// Entries in registration order; the first is always (0, 1)
    recorded: Vec<LineStart>,
    /// Strictly ascending copy of `recorded`
    table: Vec<LineStart>,
    /// Index into `table` of the last bucket a lookup hit
    memo: Option<usize>,
}

impl Default for FileState {
    fn default() -> Self {
        Self::new()
    }
}

impl FileState {
    /// A state with only the first line recorded.
    pub fn new() -> Self {
        Self {
            line: 1,
            built_for: 1,
            recorded: vec![LineStart::FIRST],
            table: vec![LineStart::FIRST],
            memo: None,
        }
    }

    /// Builds the index of a whole source text at once.
    ///
    /// `\n`, `\r` and `\r\n` each end one line.
    ///
    /// # Examples
    ///
    /// ```
    /// use hxc_util::span::FileState;
    ///
    /// let state = FileState::from_source(b"a\r\nb\rc\nd");
    /// assert_eq!(state.line_count(), 4);
    /// ```
    pub fn from_source(source: &[u8]) -> Self {
        let mut state = Self::new();
        let mut i = 0;
        while i < source.len() {
            match source[i] {
                b'\r' if source.get(i + 1) == Some(&b'\n') => {
                    i += 2;
                    state.register_newline(i);
                },
                b'\r' | b'\n' => {
                    i += 1;
                    state.register_newline(i);
                },
                _ => i += 1,
            }
        }
        state
    }

    /// Reads `path` and indexes its contents.
    pub fn load(path: &Path) -> SourceMapResult<Self> {
        let bytes = std::fs::read(path).map_err(|error| SourceMapError::Read {
            path: path.to_path_buf(),
            error,
        })?;
        let state = Self::from_source(&bytes);
        tracing::debug!(
            path = %path.display(),
            lines = state.line_count(),
            "indexed file for position lookup"
        );
        Ok(state)
    }

    /// Records that a new line starts at `offset`.
    ///
    /// Must be called exactly once per newline sequence, with the offset of
    /// the byte right after it.
    #[inline]
    pub fn register_newline(&mut self, offset: usize) {
        self.line += 1;
        self.recorded.push(LineStart {
            offset,
            line: self.line,
        });
    }

    /// Number of lines recorded so far.
    #[inline]
    pub fn line_count(&self) -> u32 {
        self.line
    }

    /// Line starts in the order they were registered.
    #[inline]
    pub fn line_starts(&self) -> &[LineStart] {
        &self.recorded
    }

    /// Maps a byte offset to `(line, column)`.
    ///
    /// The line is 1-based, the column is the 0-based byte distance from the
    /// start of that line. Offsets past the last recorded line start resolve
    /// against the last line.
    pub fn resolve(&mut self, offset: usize) -> (u32, usize) {
        if self.built_for != self.line {
            self.rebuild();
        }

        if let Some(index) = self.memo {
            let start = self.table[index].offset;
            let next = self
                .table
                .get(index + 1)
                .map_or(usize::MAX, |entry| entry.offset);
            if start <= offset && offset < next {
                return (self.table[index].line, offset - start);
            }
        }

        // table[0] is (0, 1), so at least one entry satisfies the predicate
        let index = self
            .table
            .partition_point(|entry| entry.offset <= offset)
            .saturating_sub(1);
        self.memo = Some(index);
        let entry = self.table[index];
        (entry.line, offset - entry.offset)
    }

    fn rebuild(&mut self) {
        let mut table = self.recorded.clone();
        table.sort_by_key(|entry| entry.offset);
        table.dedup_by_key(|entry| entry.offset);
        tracing::trace!(
            entries = table.len(),
            line = self.line,
            "rebuilt line table"
        );
        self.table = table;
        self.built_for = self.line;
        self.memo = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    /// Line/column computed by walking the text from the start.
    fn naive(source: &[u8], offset: usize) -> (u32, usize) {
        let mut line = 1;
        let mut line_start = 0;
        let mut i = 0;
        while i < offset.min(source.len()) {
            match source[i] {
                b'\r' if source.get(i + 1) == Some(&b'\n') => {
                    if i + 2 > offset {
                        break;
                    }
                    i += 2;
                    line += 1;
                    line_start = i;
                },
                b'\r' | b'\n' => {
                    i += 1;
                    line += 1;
                    line_start = i;
                },
                _ => i += 1,
            }
        }
        (line, offset - line_start)
    }

    fn to_source(picks: &[u8]) -> Vec<u8> {
        picks
            .iter()
            .map(|b| match b % 5 {
                0 => b'\n',
                1 => b'\r',
                2 => b' ',
                3 => b'x',
                _ => b'y',
            })
            .collect()
    }

    #[test]
    fn test_new_state() {
        let mut state = FileState::new();
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.line_starts(), &[LineStart { offset: 0, line: 1 }]);
        assert_eq!(state.resolve(0), (1, 0));
        assert_eq!(state.resolve(42), (1, 42));
    }

    #[test]
    fn test_register_newline() {
        let mut state = FileState::new();
        state.register_newline(3);
        state.register_newline(7);
        assert_eq!(state.line_count(), 3);
        assert_eq!(state.resolve(0), (1, 0));
        assert_eq!(state.resolve(2), (1, 2));
        assert_eq!(state.resolve(3), (2, 0));
        assert_eq!(state.resolve(6), (2, 3));
        assert_eq!(state.resolve(7), (3, 0));
        assert_eq!(state.resolve(20), (3, 13));
    }

    #[test]
    fn test_rebuild_after_more_lines() {
        let mut state = FileState::new();
        state.register_newline(5);
        assert_eq!(state.resolve(8), (2, 3));
        state.register_newline(10);
        assert_eq!(state.resolve(8), (2, 3));
        assert_eq!(state.resolve(12), (3, 2));
    }

    #[test]
    fn test_memo_out_of_order_queries() {
        let mut state = FileState::from_source(b"ab\ncd\nef\ngh");
        assert_eq!(state.resolve(10), (4, 1));
        assert_eq!(state.resolve(1), (1, 1));
        assert_eq!(state.resolve(4), (2, 1));
        assert_eq!(state.resolve(4), (2, 1));
        assert_eq!(state.resolve(7), (3, 1));
    }

    #[test]
    fn test_from_source_terminators() {
        let mut state = FileState::from_source(b"a\r\nb\rc\nd");
        assert_eq!(state.line_count(), 4);
        assert_eq!(state.resolve(3), (2, 0));
        assert_eq!(state.resolve(5), (3, 0));
        assert_eq!(state.resolve(7), (4, 0));
    }

    #[test]
    fn test_crlf_counts_once() {
        assert_eq!(FileState::from_source(b"\r\n").line_count(), 2);
        assert_eq!(FileState::from_source(b"\n\r").line_count(), 3);
        assert_eq!(FileState::from_source(b"\r\r\n").line_count(), 3);
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileState::load(&dir.path().join("Missing.hx")).unwrap_err();
        assert!(matches!(err, SourceMapError::Read { .. }));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Main.hx");
        std::fs::write(&path, "class Main {\n}\n").unwrap();
        let mut state = FileState::load(&path).unwrap();
        assert_eq!(state.line_count(), 3);
        assert_eq!(state.resolve(13), (2, 0));
    }

    #[quickcheck]
    fn prop_resolve_matches_scan(picks: Vec<u8>, query: usize) -> bool {
        let source = to_source(&picks);
        let offset = query % (source.len() + 1);
        let mut state = FileState::from_source(&source);
        state.resolve(offset) == naive(&source, offset)
    }

    #[quickcheck]
    fn prop_resolve_idempotent(picks: Vec<u8>, a: usize, b: usize) -> bool {
        let source = to_source(&picks);
        let a = a % (source.len() + 1);
        let b = b % (source.len() + 1);
        let mut state = FileState::from_source(&source);
        let first = state.resolve(a);
        let _ = state.resolve(b);
        state.resolve(a) == first
    }

    #[quickcheck]
    fn prop_line_within_recorded(picks: Vec<u8>, query: usize) -> bool {
        let source = to_source(&picks);
        let mut state = FileState::from_source(&source);
        let (line, _) = state.resolve(query % (source.len() + 1));
        line >= 1 && line <= state.line_count()
    }
}
