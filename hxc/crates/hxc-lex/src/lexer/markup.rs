//! Markup literal lexing.
//!
//! A markup literal is an inline element such as `<div class="x">..</div>`
//! or `<br/>`. It ends when the element that opened it is closed; elements
//! with the same name nested inside are counted, everything else is plain
//! text. Since `<` is also an operator, the parser decides when a markup
//! literal may start and asks for one with [`Lexer::try_markup`].
//!
//! [`Lexer::next_token`] never produces [`TokenKind::Markup`]: through it,
//! `<a x="y"/>` is `Lt Ident Ident Assign String Slash Gt`.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_markup_name_continue, is_markup_name_start};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads a markup literal if one starts at the next token position.
    ///
    /// Returns `Ok(None)`, having consumed only whitespace, when the next
    /// character is not `<` followed by an element name.
    ///
    /// # Example
    ///
    /// ```
    /// use hxc_lex::{LexContext, Lexer, TokenKind};
    ///
    /// let mut ctx = LexContext::new();
    /// let mut lexer = Lexer::new(" <b>hi</b>;", &mut ctx);
    /// let token = lexer.try_markup().unwrap().unwrap();
    /// assert_eq!(token.kind, TokenKind::Markup("<b>hi</b>".into()));
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Semicolon);
    /// ```
    pub fn try_markup(&mut self) -> LexResult<Option<Token>> {
        self.ensure_header();
        self.skip_blanks();

        let open = self.cursor.position();
        if self.cursor.peek_byte(0) != Some(b'<') || !is_markup_name_start(self.cursor.char_at(1)) {
            return Ok(None);
        }
        self.token_start = open;
        self.cursor.advance();
        let name = self.scan_markup_name();

        let open_tag = format!("<{}", name);
        let close_tag = format!("</{}>", name);
        let mut text = open_tag.clone();
        let mut depth = 0usize;
        let mut in_open = true;

        loop {
            match self.cursor.peek_byte(0) {
                None => {
                    return Err(LexError::UnterminatedMarkup {
                        span: self.span_at(open, 1),
                    })
                },
                Some(b'\r' | b'\n') => text.push_str(self.newline()),
                Some(b'<') => {
                    if let Some(tag) = self.scan_closing_tag() {
                        text.push_str(tag);
                        in_open = false;
                        if tag == close_tag {
                            if depth == 0 {
                                return Ok(Some(self.token(TokenKind::Markup(text))));
                            }
                            depth -= 1;
                        }
                    } else if is_markup_name_start(self.cursor.char_at(1)) {
                        let start = self.cursor.position();
                        self.cursor.advance();
                        self.scan_markup_name();
                        let tag = self.cursor.slice_from(start);
                        text.push_str(tag);
                        in_open = tag == open_tag;
                        if in_open {
                            depth += 1;
                        }
                    } else {
                        text.push('<');
                        self.cursor.advance();
                    }
                },
                Some(b'/') if self.cursor.peek_byte(1) == Some(b'>') => {
                    self.cursor.advance_bytes(2);
                    text.push_str("/>");
                    if in_open {
                        if depth == 0 {
                            return Ok(Some(self.token(TokenKind::Markup(text))));
                        }
                        depth -= 1;
                        in_open = false;
                    }
                },
                Some(b'>') => {
                    self.cursor.advance();
                    text.push('>');
                    in_open = false;
                },
                Some(b'/') => {
                    self.cursor.advance();
                    text.push('/');
                },
                Some(_) => text.push_str(self.take_until(b"</>\r\n")),
            }
        }
    }

    /// Consumes an element name; the cursor is on its first character.
    fn scan_markup_name(&mut self) -> &'a str {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.eat_while(is_markup_name_continue);
        self.cursor.slice_from(start)
    }

    /// Consumes `</name>` at the cursor, or nothing if it is not one.
    fn scan_closing_tag(&mut self) -> Option<&'a str> {
        if self.cursor.peek_byte(1) != Some(b'/') || !is_markup_name_start(self.cursor.char_at(2)) {
            return None;
        }
        let snapshot = self.cursor.snapshot();
        let start = self.cursor.position();
        self.cursor.advance_bytes(2);
        self.scan_markup_name();
        if self.cursor.match_char('>') {
            Some(self.cursor.slice_from(start))
        } else {
            self.cursor.restore(snapshot);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::TokenKind;
    use crate::{LexContext, Lexer};

    fn markup(source: &str) -> Option<TokenKind> {
        let mut ctx = LexContext::new();
        let mut lexer = Lexer::new(source, &mut ctx);
        lexer.try_markup().unwrap().map(|t| t.kind)
    }

    fn text(s: &str) -> Option<TokenKind> {
        Some(TokenKind::Markup(s.into()))
    }

    #[test]
    fn test_self_closing() {
        assert_eq!(markup("<br/>"), text("<br/>"));
        assert_eq!(markup("<img src='a.png' />rest"), text("<img src='a.png' />"));
    }

    #[test]
    fn test_simple_element() {
        assert_eq!(markup("<a>text</a> after"), text("<a>text</a>"));
    }

    #[test]
    fn test_nested_same_name() {
        assert_eq!(markup("<a><a></a></a>x"), text("<a><a></a></a>"));
        assert_eq!(markup("<a><a/></a>x"), text("<a><a/></a>"));
    }

    #[test]
    fn test_other_elements_are_text() {
        assert_eq!(
            markup("<div><br/><span>x</span></div>;"),
            text("<div><br/><span>x</span></div>")
        );
    }

    #[test]
    fn test_prefix_name_is_not_same_element() {
        assert_eq!(markup("<a><ab></ab></a>"), text("<a><ab></ab></a>"));
    }

    #[test]
    fn test_stray_delimiters_kept() {
        assert_eq!(markup("<a>1 < 2 / 3 > 0</a>"), text("<a>1 < 2 / 3 > 0</a>"));
        assert_eq!(markup("<a></ b></a>"), text("<a></ b></a>"));
    }

    #[test]
    fn test_not_markup() {
        assert_eq!(markup("< a"), None);
        assert_eq!(markup("<1"), None);
        assert_eq!(markup("a<b"), None);
    }

    #[test]
    fn test_next_token_never_yields_markup() {
        let mut ctx = LexContext::new();
        let kinds: Vec<_> = Lexer::new(r#"<a x="y"/>"#, &mut ctx)
            .map(|t| t.unwrap().kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Lt,
                TokenKind::Ident("a".into()),
                TokenKind::Ident("x".into()),
                TokenKind::Assign,
                TokenKind::String {
                    value: "y".into(),
                    quote: crate::token::QuoteKind::Double,
                },
                TokenKind::Slash,
                TokenKind::Gt,
            ]
        );
    }

    #[test]
    fn test_not_markup_leaves_operator() {
        let mut ctx = LexContext::new();
        let mut lexer = Lexer::new(" <= 1", &mut ctx);
        assert!(lexer.try_markup().unwrap().is_none());
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LtEq);
    }

    #[test]
    fn test_unicode_names() {
        assert_eq!(markup("<caf\u{e9}>x</caf\u{e9}>"), text("<caf\u{e9}>x</caf\u{e9}>"));
        assert_eq!(markup("<svg:rect/>"), text("<svg:rect/>"));
    }

    #[test]
    fn test_span_and_lines() {
        let mut ctx = LexContext::new();
        ctx.init("M.hx");
        let (token, next) = {
            let mut lexer = Lexer::new("x = <p>\r\n</p>;", &mut ctx);
            lexer.next_token().unwrap();
            lexer.next_token().unwrap();
            let token = lexer.try_markup().unwrap().unwrap();
            (token, lexer.next_token().unwrap())
        };
        assert_eq!((token.span.start, token.span.end), (4, 13));
        assert_eq!(ctx.get_error_line(next.span), 2);
    }

    #[test]
    fn test_unterminated() {
        let mut ctx = LexContext::new();
        let err = Lexer::new("  <a><b></b>", &mut ctx).try_markup().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedMarkup { .. }));
        assert_eq!((err.span().start, err.span().end), (2, 3));
    }
}
