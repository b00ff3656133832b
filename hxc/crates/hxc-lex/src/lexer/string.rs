//! String literal lexing.
//!
//! Two literal styles exist. Double-quoted strings are plain; single-quoted
//! strings may embed `${expr}` interpolations, whose text is kept in the
//! literal for the parser to expand. An interpolation may itself contain
//! strings of either style, nested as deep as the source goes.
//!
//! Every scanner returns the raw text it read and leaves the cursor after
//! its closing delimiter. Escapes are only validated once the whole
//! literal has been read.

use crate::error::{LexError, LexResult};
use crate::token::{QuoteKind, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `"..."`.
    pub(crate) fn lex_double_string(&mut self) -> LexResult<TokenKind> {
        let open = self.cursor.position();
        self.cursor.advance();
        let raw = self.scan_double_string(open)?;
        self.finish_string(&raw, open, QuoteKind::Double)
    }

    /// Lexes `'...'`.
    pub(crate) fn lex_single_string(&mut self) -> LexResult<TokenKind> {
        let open = self.cursor.position();
        self.cursor.advance();
        let raw = self.scan_single_string(open)?;
        self.finish_string(&raw, open, QuoteKind::Single)
    }

    /// Decodes escapes in `raw`, read from a literal opened at `open`.
    fn finish_string(&self, raw: &str, open: usize, quote: QuoteKind) -> LexResult<TokenKind> {
        match self.ctx.unescape(raw) {
            Ok(value) => Ok(TokenKind::String { value, quote }),
            Err(err) => {
                let at = open + 1 + err.offset;
                Err(LexError::InvalidEscape {
                    ch: err.ch,
                    message: err.message,
                    span: self.span_at(at, err.ch.len_utf8()),
                })
            },
        }
    }

    /// Reads a double-quoted body; the cursor is just past the quote at
    /// `open`.
    pub(crate) fn scan_double_string(&mut self, open: usize) -> LexResult<String> {
        let mut raw = String::new();
        loop {
            match self.cursor.peek_byte(0) {
                None => {
                    return Err(LexError::UnterminatedString {
                        span: self.span_at(open, 1),
                    })
                },
                Some(b'"') => {
                    self.cursor.advance();
                    return Ok(raw);
                },
                Some(b'\\') => {
                    let len = match self.cursor.peek_byte(1) {
                        Some(b'"' | b'\\') => 2,
                        _ => 1,
                    };
                    raw.push_str(&self.cursor.remaining()[..len]);
                    self.cursor.advance_bytes(len);
                },
                Some(b'\r' | b'\n') => raw.push_str(self.newline()),
                Some(_) => raw.push_str(self.take_until(b"\"\\\r\n")),
            }
        }
    }

    /// Reads a single-quoted body; the cursor is just past the quote at
    /// `open`.
    pub(crate) fn scan_single_string(&mut self, open: usize) -> LexResult<String> {
        let mut raw = String::new();
        loop {
            match self.cursor.peek_byte(0) {
                None => {
                    return Err(LexError::UnterminatedString {
                        span: self.span_at(open, 1),
                    })
                },
                Some(b'\'') => {
                    self.cursor.advance();
                    return Ok(raw);
                },
                Some(b'\\') => {
                    let len = match self.cursor.peek_byte(1) {
                        Some(b'\'' | b'\\' | b'$') => 2,
                        _ => 1,
                    };
                    raw.push_str(&self.cursor.remaining()[..len]);
                    self.cursor.advance_bytes(len);
                },
                Some(b'$') => match self.cursor.peek_byte(1) {
                    Some(b'$') => {
                        raw.push_str("$$");
                        self.cursor.advance_bytes(2);
                    },
                    Some(b'{') => {
                        let code_open = self.cursor.position();
                        raw.push_str("${");
                        self.cursor.advance_bytes(2);
                        let code = self.scan_interpolation(code_open)?;
                        raw.push_str(&code);
                    },
                    _ => {
                        raw.push('$');
                        self.cursor.advance();
                    },
                },
                Some(b'\r' | b'\n') => raw.push_str(self.newline()),
                Some(_) => raw.push_str(self.take_until(b"'\\$\r\n")),
            }
        }
    }

    /// Reads the expression of a `${...}` opened at `code_open`, up to and
    /// including its closing brace.
    ///
    /// Braces must balance. Nested strings are read with their own scanner
    /// and put back between their quotes. Block comments are dropped, line
    /// comments kept.
    pub(crate) fn scan_interpolation(&mut self, code_open: usize) -> LexResult<String> {
        let mut code = String::new();
        let mut depth = 0usize;
        loop {
            match self.cursor.peek_byte(0) {
                None => {
                    return Err(LexError::UnclosedCode {
                        span: self.span_at(code_open, 2),
                    })
                },
                Some(b'{') => {
                    depth += 1;
                    code.push('{');
                    self.cursor.advance();
                },
                Some(b'}') => {
                    code.push('}');
                    self.cursor.advance();
                    if depth == 0 {
                        return Ok(code);
                    }
                    depth -= 1;
                },
                Some(b'"') => {
                    let open = self.cursor.position();
                    self.cursor.advance();
                    let inner = self.scan_double_string(open)?;
                    code.push('"');
                    code.push_str(&inner);
                    code.push('"');
                },
                Some(b'\'') => {
                    let open = self.cursor.position();
                    self.cursor.advance();
                    let inner = self.scan_single_string(open)?;
                    code.push('\'');
                    code.push_str(&inner);
                    code.push('\'');
                },
                Some(b'/') => match self.cursor.peek_byte(1) {
                    Some(b'*') => {
                        let open = self.cursor.position();
                        self.cursor.advance_bytes(2);
                        self.scan_block_comment(open)?;
                    },
                    Some(b'/') => code.push_str(self.take_until(b"\r\n")),
                    _ => {
                        code.push('/');
                        self.cursor.advance();
                    },
                },
                Some(b'\r' | b'\n') => code.push_str(self.newline()),
                Some(_) => code.push_str(self.take_until(b"{}\"'/\r\n")),
            }
        }
    }
}
