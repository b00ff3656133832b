//! Operator and punctuation lexing.
//!
//! Every operator is read with maximal munch: the longest spelling that
//! matches wins.

use crate::error::LexResult;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles: `+`, `++`, `+=`
    pub(crate) fn lex_plus(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('+') {
            TokenKind::Increment
        } else if self.cursor.match_char('=') {
            TokenKind::PlusEq
        } else {
            TokenKind::Plus
        }
    }

    /// Handles: `-`, `--`, `-=`, `->`
    pub(crate) fn lex_minus(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('-') {
            TokenKind::Decrement
        } else if self.cursor.match_char('=') {
            TokenKind::MinusEq
        } else if self.cursor.match_char('>') {
            TokenKind::Arrow
        } else {
            TokenKind::Minus
        }
    }

    /// Handles: `*`, `*=`
    pub(crate) fn lex_star(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::StarEq
        } else {
            TokenKind::Star
        }
    }

    /// Lexes slash, slash-equals, or a comment.
    ///
    /// Handles: `/`, `/=`, `// ...`, `/* ... */`
    pub(crate) fn lex_slash(&mut self) -> LexResult<TokenKind> {
        if self.cursor.starts_with("//") {
            return Ok(self.lex_line_comment());
        }
        if self.cursor.starts_with("/*") {
            return self.lex_block_comment();
        }

        self.cursor.advance();
        if self.cursor.match_char('=') {
            Ok(TokenKind::SlashEq)
        } else {
            Ok(TokenKind::Slash)
        }
    }

    /// Handles: `%`, `%=`
    pub(crate) fn lex_percent(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::PercentEq
        } else {
            TokenKind::Percent
        }
    }

    /// Handles: `=`, `==`, `=>`
    pub(crate) fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::EqEq
        } else if self.cursor.match_char('>') {
            TokenKind::FatArrow
        } else {
            TokenKind::Assign
        }
    }

    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::NotEq
        } else {
            TokenKind::Not
        }
    }

    /// Handles: `<`, `<=`, `<<`, `<<=`
    pub(crate) fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::LtEq
        } else if self.cursor.match_char('<') {
            if self.cursor.match_char('=') {
                TokenKind::ShlEq
            } else {
                TokenKind::Shl
            }
        } else {
            TokenKind::Lt
        }
    }

    /// Handles: `>`, `>=`, `>>`, `>>=`, `>>>`, `>>>=`
    pub(crate) fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::GtEq
        } else if self.cursor.match_char('>') {
            if self.cursor.match_char('=') {
                TokenKind::ShrEq
            } else if self.cursor.match_char('>') {
                if self.cursor.match_char('=') {
                    TokenKind::UShrEq
                } else {
                    TokenKind::UShr
                }
            } else {
                TokenKind::Shr
            }
        } else {
            TokenKind::Gt
        }
    }

    /// Handles: `&`, `&=`, `&&`, `&&=`
    pub(crate) fn lex_ampersand(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            if self.cursor.match_char('=') {
                TokenKind::AndAndEq
            } else {
                TokenKind::AndAnd
            }
        } else if self.cursor.match_char('=') {
            TokenKind::AmpEq
        } else {
            TokenKind::Amp
        }
    }

    /// Handles: `|`, `|=`, `||`, `||=`
    pub(crate) fn lex_pipe(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            if self.cursor.match_char('=') {
                TokenKind::OrOrEq
            } else {
                TokenKind::OrOr
            }
        } else if self.cursor.match_char('=') {
            TokenKind::PipeEq
        } else {
            TokenKind::Pipe
        }
    }

    /// Handles: `^`, `^=`
    pub(crate) fn lex_caret(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::CaretEq
        } else {
            TokenKind::Caret
        }
    }

    /// Handles: `?`, `?.`, `??`, `??=`
    pub(crate) fn lex_question(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('?') {
            if self.cursor.match_char('=') {
                TokenKind::NullCoalEq
            } else {
                TokenKind::NullCoal
            }
        } else if self.cursor.match_char('.') {
            TokenKind::QuestionDot
        } else {
            TokenKind::Question
        }
    }

    /// Lexes dot, spread, or a float starting with a dot.
    ///
    /// Handles: `.`, `...`, `.5`
    pub(crate) fn lex_dot(&mut self) -> TokenKind {
        if self.cursor.char_at(1).is_ascii_digit() {
            return self.lex_number();
        }
        if self.cursor.match_str("...") {
            return TokenKind::Spread;
        }
        self.cursor.advance();
        TokenKind::Dot
    }

    /// Lexes bitwise not or a regular expression literal.
    ///
    /// Handles: `~`, `~/pattern/options`
    pub(crate) fn lex_tilde(&mut self) -> LexResult<TokenKind> {
        if self.cursor.starts_with("~/") {
            return self.lex_regex();
        }
        self.cursor.advance();
        Ok(TokenKind::BitNot)
    }
}
