//! Identifier, keyword, directive and splice lexing.

use crate::error::{LexError, LexResult};
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::unicode::{is_ascii_ident_continue, is_ascii_ident_start};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        let start = self.cursor.position();
        self.cursor.eat_while(is_ascii_ident_continue);
        ident_or_keyword(self.cursor.slice_from(start))
    }

    /// Lexes `#name`.
    pub(crate) fn lex_directive(&mut self) -> LexResult<TokenKind> {
        let hash = self.cursor.position();
        self.cursor.advance();
        if !is_ascii_ident_start(self.cursor.current_char()) {
            return Err(LexError::InvalidCharacter {
                ch: '#',
                span: self.span_at(hash, 1),
            });
        }
        let start = self.cursor.position();
        self.cursor.eat_while(is_ascii_ident_continue);
        Ok(TokenKind::Directive(self.cursor.slice_from(start).to_owned()))
    }

    /// Lexes `$name`; the name may be empty.
    pub(crate) fn lex_splice(&mut self) -> TokenKind {
        self.cursor.advance();
        let start = self.cursor.position();
        self.cursor.eat_while(is_ascii_ident_continue);
        TokenKind::Splice(self.cursor.slice_from(start).to_owned())
    }

    /// Reads the next token of a directive condition.
    ///
    /// After `#if` or `#elseif` the parser switches to this mode, in which a
    /// dotted path such as `js.node` or `haxe.4_0` is one token. Only the
    /// first segment has to start with a letter or underscore. Block comments
    /// are skipped rather than returned. Anything else is lexed as usual.
    ///
    /// # Example
    ///
    /// ```
    /// use hxc_lex::{Keyword, LexContext, Lexer, TokenKind};
    ///
    /// let mut ctx = LexContext::new();
    /// let mut lexer = Lexer::new("#if flash.net || true", &mut ctx);
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Directive("if".into()));
    /// assert_eq!(lexer.next_directive_token().unwrap().kind, TokenKind::Ident("flash.net".into()));
    /// assert_eq!(lexer.next_directive_token().unwrap().kind, TokenKind::OrOr);
    /// assert_eq!(lexer.next_directive_token().unwrap().kind, TokenKind::Keyword(Keyword::True));
    /// ```
    pub fn next_directive_token(&mut self) -> LexResult<Token> {
        self.ensure_header();
        loop {
            self.skip_blanks();
            if self.cursor.starts_with("/*") {
                let open = self.cursor.position();
                self.cursor.advance_bytes(2);
                self.scan_block_comment(open)?;
                continue;
            }
            if !is_ascii_ident_start(self.cursor.current_char()) {
                return self.next_token();
            }

            self.token_start = self.cursor.position();
            loop {
                self.cursor.eat_while(is_ascii_ident_continue);
                if self.cursor.current_char() == '.' && is_ascii_ident_continue(self.cursor.char_at(1)) {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
            let kind = ident_or_keyword(self.cursor.slice_from(self.token_start));
            return Ok(self.token(kind));
        }
    }
}

fn ident_or_keyword(text: &str) -> TokenKind {
    match keyword_from_ident(text) {
        Some(keyword) => TokenKind::Keyword(keyword),
        None => TokenKind::Ident(text.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::{Keyword, TokenKind};
    use crate::{LexContext, Lexer};

    fn lex_all(source: &str) -> Vec<TokenKind> {
        let mut ctx = LexContext::new();
        Lexer::new(source, &mut ctx).map(|t| t.unwrap().kind).collect()
    }

    fn ident(name: &str) -> TokenKind {
        TokenKind::Ident(name.into())
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            lex_all("foo _bar Baz9 __T"),
            vec![ident("foo"), ident("_bar"), ident("Baz9"), ident("__T")]
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            lex_all("class function classy"),
            vec![
                TokenKind::Keyword(Keyword::Class),
                TokenKind::Keyword(Keyword::Function),
                ident("classy"),
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_all("Class"), vec![ident("Class")]);
    }

    #[test]
    fn test_directive() {
        assert_eq!(
            lex_all("#if debug #end"),
            vec![
                TokenKind::Directive("if".into()),
                ident("debug"),
                TokenKind::Directive("end".into()),
            ]
        );
    }

    #[test]
    fn test_bare_hash_is_invalid() {
        let mut ctx = LexContext::new();
        let err = Lexer::new("x # y", &mut ctx).nth(1).unwrap().unwrap_err();
        assert!(matches!(err, LexError::InvalidCharacter { ch: '#', .. }));
        assert_eq!((err.span().start, err.span().end), (2, 3));
    }

    #[test]
    fn test_splice() {
        assert_eq!(
            lex_all("$e $ $1x"),
            vec![
                TokenKind::Splice("e".into()),
                TokenKind::Splice(String::new()),
                TokenKind::Splice("1x".into()),
            ]
        );
    }

    #[test]
    fn test_directive_mode_dotted_path() {
        let mut ctx = LexContext::new();
        let mut lexer = Lexer::new("a.b.c (js)", &mut ctx);
        let token = lexer.next_directive_token().unwrap();
        assert_eq!(token.kind, ident("a.b.c"));
        assert_eq!((token.span.start, token.span.end), (0, 5));
        assert_eq!(lexer.next_directive_token().unwrap().kind, TokenKind::LParen);
        assert_eq!(lexer.next_directive_token().unwrap().kind, ident("js"));
    }

    #[test]
    fn test_directive_mode_numeric_segment() {
        let mut ctx = LexContext::new();
        let mut lexer = Lexer::new("#if haxe.4_0 js", &mut ctx);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Directive("if".into()));
        let token = lexer.next_directive_token().unwrap();
        assert_eq!(token.kind, ident("haxe.4_0"));
        assert_eq!((token.span.start, token.span.end), (4, 12));
        assert_eq!(lexer.next_directive_token().unwrap().kind, ident("js"));
    }

    #[test]
    fn test_directive_mode_leading_digit_is_number() {
        let mut ctx = LexContext::new();
        let mut lexer = Lexer::new("4.0", &mut ctx);
        assert!(matches!(
            lexer.next_directive_token().unwrap().kind,
            TokenKind::Float { .. }
        ));
    }

    #[test]
    fn test_directive_mode_trailing_dot() {
        let mut ctx = LexContext::new();
        let mut lexer = Lexer::new("a. b", &mut ctx);
        assert_eq!(lexer.next_directive_token().unwrap().kind, ident("a"));
        assert_eq!(lexer.next_directive_token().unwrap().kind, TokenKind::Dot);
    }

    #[test]
    fn test_directive_mode_skips_block_comments() {
        let mut ctx = LexContext::new();
        ctx.init("D.hx");
        let token = {
            let mut lexer = Lexer::new("/* a\n */ !cpp", &mut ctx);
            assert_eq!(lexer.next_directive_token().unwrap().kind, TokenKind::Not);
            lexer.next_directive_token().unwrap()
        };
        assert_eq!(token.kind, ident("cpp"));
        assert_eq!(ctx.get_error_line(token.span), 2);
    }

    #[test]
    fn test_directive_mode_keeps_line_comments() {
        let mut ctx = LexContext::new();
        let mut lexer = Lexer::new("// x", &mut ctx);
        assert_eq!(
            lexer.next_directive_token().unwrap().kind,
            TokenKind::LineComment(" x".into())
        );
    }

    #[test]
    fn test_directive_mode_keyword() {
        let mut ctx = LexContext::new();
        let mut lexer = Lexer::new("false", &mut ctx);
        assert_eq!(
            lexer.next_directive_token().unwrap().kind,
            TokenKind::Keyword(Keyword::False)
        );
    }
}
