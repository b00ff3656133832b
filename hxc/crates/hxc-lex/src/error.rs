//! Lexical errors.

use hxc_util::Span;
use thiserror::Error;

/// An error that stops the current token.
///
/// Every variant carries the span it is reported at. For unterminated
/// constructs that is the opening delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token
    #[error("Invalid character {}", describe_char(.ch))]
    InvalidCharacter {
        /// Offending character
        ch: char,
        /// Where it is
        span: Span,
    },

    /// End of input inside a string literal
    #[error("Unterminated string")]
    UnterminatedString {
        /// Opening quote
        span: Span,
    },

    /// End of input or a raw newline inside a regular expression
    #[error("Unterminated regular expression")]
    UnterminatedRegexp {
        /// The `~/` opener
        span: Span,
    },

    /// End of input inside a block comment
    #[error("Unclosed comment")]
    UnclosedComment {
        /// The `/*` opener
        span: Span,
    },

    /// End of input inside a `${...}` interpolation
    #[error("Unclosed code string")]
    UnclosedCode {
        /// The `${` opener
        span: Span,
    },

    /// Escape sequence rejected by the unescaper
    #[error("Invalid escape sequence \\{ch}{}", message_suffix(.message))]
    InvalidEscape {
        /// Character after the backslash
        ch: char,
        /// Explanation
        message: Option<String>,
        /// The escaped character
        span: Span,
    },

    /// Unknown letter after a regular expression
    #[error("Invalid regular expression option")]
    InvalidOption {
        /// The offending letter
        span: Span,
    },

    /// End of input inside a markup literal
    #[error("Unterminated markup literal")]
    UnterminatedMarkup {
        /// The opening `<`
        span: Span,
    },
}

fn describe_char(ch: &char) -> String {
    let code = *ch as u32;
    if code > 32 && code < 128 {
        format!("'{}'", ch)
    } else {
        format!("0x{:02X}", code)
    }
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(". {}", message),
        None => String::new(),
    }
}

impl LexError {
    /// Where the error is reported.
    pub fn span(&self) -> Span {
        match self {
            LexError::InvalidCharacter { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::UnterminatedRegexp { span }
            | LexError::UnclosedComment { span }
            | LexError::UnclosedCode { span }
            | LexError::InvalidEscape { span, .. }
            | LexError::InvalidOption { span }
            | LexError::UnterminatedMarkup { span } => *span,
        }
    }
}

/// Result type alias for lexing
pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use hxc_util::FileId;

    fn span() -> Span {
        Span::new(FileId(0), 3, 4)
    }

    #[test]
    fn test_invalid_character_printable() {
        let err = LexError::InvalidCharacter { ch: '`', span: span() };
        assert_eq!(err.to_string(), "Invalid character '`'");
    }

    #[test]
    fn test_invalid_character_control() {
        let err = LexError::InvalidCharacter { ch: '\u{1}', span: span() };
        assert_eq!(err.to_string(), "Invalid character 0x01");
        let err = LexError::InvalidCharacter { ch: ' ', span: span() };
        assert_eq!(err.to_string(), "Invalid character 0x20");
        let err = LexError::InvalidCharacter { ch: '\u{7f}', span: span() };
        assert_eq!(err.to_string(), "Invalid character 0x7F");
    }

    #[test]
    fn test_invalid_escape_message() {
        let err = LexError::InvalidEscape {
            ch: 'u',
            message: Some("UTF-16 surrogates are not allowed in strings.".into()),
            span: span(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid escape sequence \\u. UTF-16 surrogates are not allowed in strings."
        );
        let bare = LexError::InvalidEscape { ch: 'q', message: None, span: span() };
        assert_eq!(bare.to_string(), "Invalid escape sequence \\q");
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            LexError::UnterminatedRegexp { span: span() }.to_string(),
            "Unterminated regular expression"
        );
        assert_eq!(
            LexError::UnclosedCode { span: span() }.to_string(),
            "Unclosed code string"
        );
        assert_eq!(
            LexError::InvalidOption { span: span() }.to_string(),
            "Invalid regular expression option"
        );
        assert_eq!(
            LexError::UnterminatedMarkup { span: span() }.to_string(),
            "Unterminated markup literal"
        );
    }

    #[test]
    fn test_span_accessor() {
        assert_eq!(LexError::UnclosedComment { span: span() }.span(), span());
    }
}
