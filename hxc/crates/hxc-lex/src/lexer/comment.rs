//! Comment lexing.
//!
//! Comments are tokens: the parser decides whether to keep them (for
//! documentation) or drop them.

use crate::error::{LexError, LexResult};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `// ...` up to, not including, the line terminator.
    pub(crate) fn lex_line_comment(&mut self) -> TokenKind {
        self.cursor.advance_bytes(2);
        let text = self.take_until(b"\r\n");
        TokenKind::LineComment(text.to_owned())
    }

    /// Lexes `/* ... */`.
    pub(crate) fn lex_block_comment(&mut self) -> LexResult<TokenKind> {
        let open = self.cursor.position();
        self.cursor.advance_bytes(2);
        let text = self.scan_block_comment(open)?;
        Ok(TokenKind::BlockComment(text))
    }

    /// Reads a block comment body; the cursor is just past the `/*` at
    /// `open`.
    ///
    /// Returns the text between the delimiters. Block comments do not nest.
    pub(crate) fn scan_block_comment(&mut self, open: usize) -> LexResult<String> {
        let mut text = String::new();
        loop {
            match self.cursor.peek_byte(0) {
                None => {
                    return Err(LexError::UnclosedComment {
                        span: self.span_at(open, 2),
                    })
                },
                Some(b'*') if self.cursor.peek_byte(1) == Some(b'/') => {
                    self.cursor.advance_bytes(2);
                    return Ok(text);
                },
                Some(b'*') => {
                    self.cursor.advance();
                    text.push('*');
                },
                Some(b'\r' | b'\n') => text.push_str(self.newline()),
                Some(_) => text.push_str(self.take_until(b"*\r\n")),
            }
        }
    }
}
