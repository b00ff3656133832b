//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use hxc_util::{FileId, Span};

use crate::context::LexContext;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::is_ascii_ident_start;

/// Path given to sources lexed without a current file.
pub(crate) const ANONYMOUS_FILE: &str = "<anonymous>";

const BOM: &str = "\u{FEFF}";

/// Lexer over one source text.
///
/// Tokens are read on demand with [`Lexer::next_token`] or by iterating.
/// Every newline consumed is recorded in the position index of the file the
/// lexer was created for, so spans can later be turned into line numbers
/// through the [`LexContext`].
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Session state: position indexes, configuration, unescaper.
    pub(crate) ctx: &'a mut LexContext,

    /// File the source belongs to.
    file: FileId,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Whether the BOM and `#!` line have been checked.
    header_checked: bool,

    /// Set once the iterator has yielded `Eof` or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for `source` in the context's current file.
    ///
    /// Without a current file, one named `<anonymous>` is started.
    pub fn new(source: &'a str, ctx: &'a mut LexContext) -> Self {
        let file = match ctx.current_file() {
            Some(file) => file,
            None => ctx.init(ANONYMOUS_FILE),
        };
        Self {
            cursor: Cursor::new(source),
            ctx,
            file,
            token_start: 0,
            header_checked: false,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Whitespace and newlines are skipped; comments are returned as tokens.
    /// `<` is always an operator here; markup literals are only read by
    /// [`Lexer::try_markup`]. At the end of input this keeps returning
    /// [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.ensure_header();

        loop {
            self.token_start = self.cursor.position();

            if self.cursor.is_at_end() {
                return Ok(self.token(TokenKind::Eof));
            }

            let kind = match self.cursor.current_char() {
                ' ' | '\t' => {
                    self.cursor.advance();
                    continue;
                },
                '\r' | '\n' => {
                    self.newline();
                    continue;
                },
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                '[' => self.single(TokenKind::LBracket),
                ']' => self.single(TokenKind::RBracket),
                '{' => self.single(TokenKind::LBrace),
                '}' => self.single(TokenKind::RBrace),
                ',' => self.single(TokenKind::Comma),
                ';' => self.single(TokenKind::Semicolon),
                ':' => self.single(TokenKind::Colon),
                '@' => self.single(TokenKind::At),
                '+' => self.lex_plus(),
                '-' => self.lex_minus(),
                '*' => self.lex_star(),
                '/' => self.lex_slash()?,
                '%' => self.lex_percent(),
                '=' => self.lex_equals(),
                '!' => self.lex_bang(),
                '<' => self.lex_less(),
                '>' => self.lex_greater(),
                '&' => self.lex_ampersand(),
                '|' => self.lex_pipe(),
                '^' => self.lex_caret(),
                '?' => self.lex_question(),
                '.' => self.lex_dot(),
                '~' => self.lex_tilde()?,
                '"' => self.lex_double_string()?,
                '\'' => self.lex_single_string()?,
                '#' => self.lex_directive()?,
                '$' => self.lex_splice(),
                c if c.is_ascii_digit() => self.lex_number(),
                c if is_ascii_ident_start(c) => self.lex_identifier(),
                c => {
                    self.cursor.advance();
                    return Err(LexError::InvalidCharacter {
                        ch: c,
                        span: self.span_from(self.token_start),
                    });
                },
            };

            return Ok(self.token(kind));
        }
    }

    /// Runs the header skip before the first token, whichever entry point
    /// reads it.
    pub(crate) fn ensure_header(&mut self) {
        if !self.header_checked {
            self.header_checked = true;
            if self.ctx.config().skip_header {
                self.skip_header();
            }
        }
    }

    /// Skips one leading byte-order mark and one `#!` line.
    fn skip_header(&mut self) {
        if self.cursor.match_str(BOM) {
            tracing::trace!("skipped byte-order mark");
        }
        if self.cursor.starts_with("#!") {
            self.take_until(b"\r\n");
            tracing::trace!("skipped #! line");
        }
    }

    /// Consumes one character and yields `kind`.
    #[inline]
    pub(crate) fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// A token spanning from the current token start to the cursor.
    #[inline]
    pub(crate) fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.span_from(self.token_start))
    }

    /// Span from `start` to the cursor.
    #[inline]
    pub(crate) fn span_from(&self, start: usize) -> Span {
        Span::new(self.file, start, self.cursor.position())
    }

    /// Span of `len` bytes at `start`.
    #[inline]
    pub(crate) fn span_at(&self, start: usize, len: usize) -> Span {
        Span::new(self.file, start, start + len)
    }

    /// Consumes `\r\n`, `\r` or `\n` at the cursor and records the new line.
    ///
    /// Returns the consumed text.
    pub(crate) fn newline(&mut self) -> &'a str {
        let start = self.cursor.position();
        if self.cursor.match_char('\r') {
            self.cursor.match_char('\n');
        } else {
            self.cursor.advance();
        }
        self.ctx.register_newline(self.file, self.cursor.position());
        self.cursor.slice_from(start)
    }

    /// Consumes bytes up to (not including) the first of `stops` or the end.
    ///
    /// `stops` must be ASCII.
    pub(crate) fn take_until(&mut self, stops: &[u8]) -> &'a str {
        let start = self.cursor.position();
        let rest = self.cursor.remaining().as_bytes();
        let len = rest
            .iter()
            .position(|b| stops.contains(b))
            .unwrap_or(rest.len());
        self.cursor.advance_bytes(len);
        self.cursor.slice_from(start)
    }

    /// Skips spaces, tabs and newlines.
    pub(crate) fn skip_blanks(&mut self) {
        loop {
            match self.cursor.peek_byte(0) {
                Some(b' ' | b'\t') => self.cursor.advance(),
                Some(b'\r' | b'\n') => {
                    self.newline();
                },
                _ => break,
            }
        }
    }

    /// The file this lexer records positions in.
    #[inline]
    pub fn file(&self) -> FileId {
        self.file
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Session the lexer reports into.
    #[inline]
    pub fn context(&mut self) -> &mut LexContext {
        &mut *self.ctx
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    /// Yields tokens until `Eof` (not yielded) or the first error (yielded).
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}
