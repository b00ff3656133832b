//! Regular expression literal lexing: `~/pattern/options`.

use crate::error::{LexError, LexResult};
use crate::token::TokenKind;
use crate::unicode::{hex_digit_to_value, is_regex_escape, is_regex_option};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a regular expression; the cursor is at the `~` of `~/`.
    ///
    /// The pattern may not contain a raw line break. `\/`, `\r`, `\n` and
    /// `\t` are translated, other permitted escapes are kept as written so
    /// the regex engine sees them.
    pub(crate) fn lex_regex(&mut self) -> LexResult<TokenKind> {
        let open = self.cursor.position();
        self.cursor.advance_bytes(2);
        let unterminated = LexError::UnterminatedRegexp {
            span: self.span_at(open, 2),
        };

        let mut pattern = String::new();
        loop {
            match self.cursor.peek_byte(0) {
                None | Some(b'\r' | b'\n') => return Err(unterminated),
                Some(b'/') => {
                    self.cursor.advance();
                    break;
                },
                Some(b'\\') => {
                    let escape_at = self.cursor.position();
                    self.cursor.advance();
                    if self.cursor.is_at_end() {
                        return Err(unterminated);
                    }
                    let c = self.cursor.current_char();
                    match c {
                        '/' => pattern.push('/'),
                        'r' => pattern.push('\r'),
                        'n' => pattern.push('\n'),
                        't' => pattern.push('\t'),
                        'u' | 'U' if self.has_hex4_after_escape() => {
                            self.cursor.advance_bytes(5);
                            pattern.push_str(self.cursor.slice_from(escape_at));
                            continue;
                        },
                        c if is_regex_escape(c) => {
                            pattern.push('\\');
                            pattern.push(c);
                        },
                        c => {
                            let at = self.cursor.position();
                            return Err(LexError::InvalidCharacter {
                                ch: c,
                                span: self.span_at(at, c.len_utf8()),
                            });
                        },
                    }
                    self.cursor.advance();
                },
                Some(_) => pattern.push_str(self.take_until(b"/\\\r\n")),
            }
        }

        let options_start = self.cursor.position();
        loop {
            let c = self.cursor.current_char();
            if is_regex_option(c) {
                self.cursor.advance();
            } else if c.is_ascii_lowercase() {
                let at = self.cursor.position();
                return Err(LexError::InvalidOption {
                    span: self.span_at(at, 1),
                });
            } else {
                break;
            }
        }
        let options = self.cursor.slice_from(options_start).to_owned();

        Ok(TokenKind::Regex { pattern, options })
    }

    /// Whether the four characters after the current `u`/`U` are hex digits.
    fn has_hex4_after_escape(&self) -> bool {
        (1..=4).all(|i| {
            self.cursor
                .peek_byte(i)
                .map_or(false, |b| hex_digit_to_value(b as char).is_some())
        })
    }
}
