//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.
//! Values are not parsed: the token keeps the digits as written and the
//! type suffix split off by [`split_suffix`].

use crate::literal::{split_suffix, NumericContext};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `1_000`, `7i64`
    /// - Hexadecimal: `0xFF`, `0xFFu8`
    /// - Binary: `0b1010`
    /// - Float: `3.14`, `.5`, `1e10`, `2.5e-3`, `1f64`
    /// - Interval start: `0...` yields `IntInterval("0")`
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        let start = self.cursor.position();

        if self.cursor.current_char() == '.' {
            self.cursor.advance();
            self.eat_digits();
            self.eat_exponent();
            self.eat_suffix(b"f");
            return self.float_from(start);
        }

        if self.cursor.current_char() == '0' {
            let radix_digit: Option<fn(u8) -> bool> = match self.cursor.peek_byte(1) {
                Some(b'x') => Some(is_hex_digit as fn(u8) -> bool),
                Some(b'b') => Some(is_bin_digit as fn(u8) -> bool),
                _ => None,
            };
            if let Some(is_digit) = radix_digit {
                let first = self.cursor.peek_byte(2);
                if first.map_or(false, |b| b == b'_' || is_digit(b)) {
                    self.cursor.advance_bytes(2);
                    self.cursor
                        .eat_while(|c| c == '_' || (c.is_ascii() && is_digit(c as u8)));
                    self.eat_suffix(b"iu");
                    return self.int_from(start);
                }
            }
        }

        self.eat_digits();

        if self.cursor.starts_with("...") {
            let digits = self.cursor.slice_from(start).to_owned();
            self.cursor.advance_bytes(3);
            return TokenKind::IntInterval(digits);
        }

        let mut is_float = false;
        if self.cursor.current_char() == '.' && self.cursor.char_at(1).is_ascii_digit() {
            self.cursor.advance();
            self.eat_digits();
            is_float = true;
        }
        is_float |= self.eat_exponent();

        if self.eat_suffix(b"f") || is_float {
            return self.float_from(start);
        }

        self.eat_suffix(b"iu");
        self.int_from(start)
    }

    fn eat_digits(&mut self) {
        self.cursor.eat_while(|c| c == '_' || c.is_ascii_digit());
    }

    /// Consumes `e` or `E`, an optional sign and at least one digit.
    ///
    /// Nothing is consumed unless a digit follows.
    fn eat_exponent(&mut self) -> bool {
        if !matches!(self.cursor.peek_byte(0), Some(b'e' | b'E')) {
            return false;
        }
        let digit_at = match self.cursor.peek_byte(1) {
            Some(b'+' | b'-') => 2,
            _ => 1,
        };
        if !self.cursor.peek_byte(digit_at).map_or(false, |b| b.is_ascii_digit()) {
            return false;
        }
        self.cursor.advance_bytes(digit_at);
        self.eat_digits();
        true
    }

    /// Consumes a type suffix: one of `letters` followed by digits.
    fn eat_suffix(&mut self, letters: &[u8]) -> bool {
        let starts = self
            .cursor
            .peek_byte(0)
            .map_or(false, |b| letters.contains(&b));
        let has_digit = self.cursor.peek_byte(1).map_or(false, |b| b.is_ascii_digit());
        if !(starts && has_digit) {
            return false;
        }
        self.cursor.advance();
        self.cursor.eat_while(|c| c.is_ascii_digit());
        true
    }

    fn int_from(&self, start: usize) -> TokenKind {
        let (digits, suffix) = split_suffix(self.cursor.slice_from(start), NumericContext::Int);
        TokenKind::Int {
            digits: digits.to_owned(),
            suffix: suffix.map(str::to_owned),
        }
    }

    fn float_from(&self, start: usize) -> TokenKind {
        let (digits, suffix) = split_suffix(self.cursor.slice_from(start), NumericContext::Float);
        TokenKind::Float {
            digits: digits.to_owned(),
            suffix: suffix.map(str::to_owned),
        }
    }
}

fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

fn is_bin_digit(b: u8) -> bool {
    b == b'0' || b == b'1'
}
