//! Lexing session state.
//!
//! A [`LexContext`] owns the file registry, knows which file is currently
//! being lexed, and carries the configuration and unescaper used by every
//! [`crate::Lexer`] built on it. Lexing a nested file (an include, a macro
//! generated module) switches the current file with [`LexContext::enter`]
//! and gets it back when the returned guard is dropped.

use std::fmt;
use std::ops::{Deref, DerefMut};

use hxc_util::{FileId, FileRegistry, LexerConfig, PosCoords, Span};

use crate::error::LexError;
use crate::escape::{EscapeError, StandardUnescape, Unescape};

/// Opaque token for the file that was current when it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedFile(Option<FileId>);

/// State shared by all lexers of one compilation.
///
/// # Example
///
/// ```
/// use hxc_lex::{LexContext, Lexer};
///
/// let mut ctx = LexContext::new();
/// ctx.init("Main.hx");
/// let tokens: Vec<_> = Lexer::new("a\n+ b", &mut ctx).collect();
/// assert_eq!(tokens.len(), 3);
///
/// let plus = tokens[1].as_ref().unwrap().span;
/// assert_eq!(ctx.get_error_line(plus), 2);
/// ```
pub struct LexContext {
    registry: FileRegistry,
    current: Option<FileId>,
    config: LexerConfig,
    unescaper: Box<dyn Unescape>,
}

impl fmt::Debug for LexContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexContext")
            .field("registry", &self.registry)
            .field("current", &self.current)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for LexContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LexContext {
    /// Creates a context with the default configuration.
    pub fn new() -> Self {
        Self::with_config(LexerConfig::default())
    }

    /// Creates a context with the given configuration.
    pub fn with_config(config: LexerConfig) -> Self {
        Self {
            registry: FileRegistry::with_column_mode(config.column_mode),
            current: None,
            config,
            unescaper: Box::new(StandardUnescape),
        }
    }

    /// Replaces the escape sequence decoder.
    pub fn with_unescaper(mut self, unescaper: impl Unescape + 'static) -> Self {
        self.unescaper = Box::new(unescaper);
        self
    }

    /// Starts lexing `path`: resets its position index and makes it current.
    pub fn init(&mut self, path: &str) -> FileId {
        let file = self.registry.init(path);
        self.current = Some(file);
        tracing::debug!(path, file = file.index(), "lexing file");
        file
    }

    /// The file new lexers read into.
    #[inline]
    pub fn current_file(&self) -> Option<FileId> {
        self.current
    }

    /// Remembers the current file.
    #[inline]
    pub fn save(&self) -> SavedFile {
        SavedFile(self.current)
    }

    /// Makes a previously saved file current again.
    pub fn restore(&mut self, saved: SavedFile) {
        tracing::debug!(file = ?saved.0.map(|f| f.index()), "restored lexing file");
        self.current = saved.0;
    }

    /// Starts lexing `path` until the returned guard is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use hxc_lex::LexContext;
    ///
    /// let mut ctx = LexContext::new();
    /// let outer = ctx.init("Outer.hx");
    /// {
    ///     let scope = ctx.enter("Inner.hx");
    ///     assert_ne!(scope.current_file(), Some(outer));
    /// }
    /// assert_eq!(ctx.current_file(), Some(outer));
    /// ```
    pub fn enter(&mut self, path: &str) -> FileScope<'_> {
        let saved = self.save();
        let file = self.init(path);
        FileScope {
            ctx: self,
            saved,
            file,
        }
    }

    /// The path-to-index registry.
    #[inline]
    pub fn registry(&self) -> &FileRegistry {
        &self.registry
    }

    /// Mutable access to the registry.
    #[inline]
    pub fn registry_mut(&mut self) -> &mut FileRegistry {
        &mut self.registry
    }

    /// Session configuration.
    #[inline]
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Decodes the raw text of a string literal.
    pub fn unescape(&self, raw: &str) -> Result<String, EscapeError> {
        self.unescaper.unescape(raw)
    }

    pub(crate) fn register_newline(&mut self, file: FileId, offset: usize) {
        self.registry.register_newline(file, offset);
    }

    /// Line on which `span` starts; 0 for [`Span::UNKNOWN`].
    pub fn get_error_line(&mut self, span: Span) -> u32 {
        self.registry.get_error_line(span)
    }

    /// Line and column of both ends of `span`.
    pub fn get_pos_coords(&mut self, span: Span) -> PosCoords {
        self.registry.get_pos_coords(span)
    }

    /// Renders the location of `span`, see [`FileRegistry::format_pos`].
    pub fn format_pos<F>(&mut self, span: Span, printer: F) -> String
    where
        F: Fn(&str, u32) -> String,
    {
        self.registry.format_pos(span, printer)
    }

    /// Renders `error` as `"<location>: <message>"`.
    ///
    /// # Example
    ///
    /// ```
    /// use hxc_lex::{LexContext, Lexer};
    ///
    /// let mut ctx = LexContext::new();
    /// ctx.init("Main.hx");
    /// let err = Lexer::new("x = `", &mut ctx).find_map(Result::err).unwrap();
    /// let text = ctx.format_error(&err, |path, line| format!("{}:{}:", path, line));
    /// assert_eq!(text, "Main.hx:1: characters 5-6: Invalid character '`'");
    /// ```
    pub fn format_error<F>(&mut self, error: &LexError, printer: F) -> String
    where
        F: Fn(&str, u32) -> String,
    {
        format!("{}: {}", self.format_pos(error.span(), printer), error)
    }
}

/// Keeps a file current for as long as it lives.
///
/// Dereferences to the [`LexContext`] so lexers can be built on it.
pub struct FileScope<'a> {
    ctx: &'a mut LexContext,
    saved: SavedFile,
    file: FileId,
}

impl FileScope<'_> {
    /// The file this scope made current.
    #[inline]
    pub fn file(&self) -> FileId {
        self.file
    }
}

impl Deref for FileScope<'_> {
    type Target = LexContext;

    fn deref(&self) -> &LexContext {
        self.ctx
    }
}

impl DerefMut for FileScope<'_> {
    fn deref_mut(&mut self) -> &mut LexContext {
        self.ctx
    }
}

impl Drop for FileScope<'_> {
    fn drop(&mut self) {
        self.ctx.restore(self.saved);
    }
}
