//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Span`] of source text it was
//! read from. Keywords get their own closed enum so the parser can match on
//! them without comparing strings.

use std::fmt;

use hxc_util::Span;
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Quote style of a string literal.
///
/// Single-quoted strings may contain `${...}` interpolations, which the
/// consumer expands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    /// `"..."`
    Double,
    /// `'...'`
    Single,
}

impl QuoteKind {
    /// The quote character itself.
    pub fn as_char(self) -> char {
        match self {
            QuoteKind::Double => '"',
            QuoteKind::Single => '\'',
        }
    }
}

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// Reserved words.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Source spelling of the keyword.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }
        }
    };
}

keywords! {
    Function => "function",
    Class => "class",
    Var => "var",
    If => "if",
    Else => "else",
    While => "while",
    Do => "do",
    For => "for",
    Break => "break",
    Continue => "continue",
    Return => "return",
    Extends => "extends",
    Implements => "implements",
    Import => "import",
    Switch => "switch",
    Case => "case",
    Default => "default",
    Static => "static",
    Public => "public",
    Private => "private",
    Try => "try",
    Catch => "catch",
    New => "new",
    This => "this",
    Throw => "throw",
    Extern => "extern",
    Enum => "enum",
    In => "in",
    Interface => "interface",
    Untyped => "untyped",
    Cast => "cast",
    Override => "override",
    Typedef => "typedef",
    Dynamic => "dynamic",
    Package => "package",
    Inline => "inline",
    Using => "using",
    Null => "null",
    True => "true",
    False => "false",
    Abstract => "abstract",
    Macro => "macro",
    Final => "final",
    Operator => "operator",
    Overload => "overload",
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    static ref KEYWORDS: FxHashMap<&'static str, Keyword> = Keyword::ALL
        .iter()
        .map(|&keyword| (keyword.as_str(), keyword))
        .collect();
}

/// Looks up an identifier in the keyword table.
///
/// The match is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use hxc_lex::token::{keyword_from_ident, Keyword};
///
/// assert_eq!(keyword_from_ident("class"), Some(Keyword::Class));
/// assert_eq!(keyword_from_ident("Class"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Keyword> {
    KEYWORDS.get(ident).copied()
}

/// Whether `name` could be written as a plain identifier.
///
/// It must start with an ASCII letter or underscore, continue with letters,
/// digits or underscores, and not be a keyword.
///
/// # Example
///
/// ```
/// use hxc_lex::token::is_valid_identifier;
///
/// assert!(is_valid_identifier("_tmp1"));
/// assert!(!is_valid_identifier("1abc"));
/// assert!(!is_valid_identifier("var"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {},
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) && keyword_from_ident(name).is_none()
}

/// The kind of a token, with any text it carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input
    Eof,

    // ===== Names =====
    /// Identifier that is not a keyword
    Ident(String),
    /// Reserved word
    Keyword(Keyword),

    // ===== Literals =====
    /// Integer literal, digits as written, with an optional type suffix
    Int {
        /// Digits including any `0x`/`0b` prefix and underscores
        digits: String,
        /// Suffix such as `i32` or `u8`
        suffix: Option<String>,
    },
    /// Floating-point literal
    Float {
        /// Literal text without the suffix
        digits: String,
        /// Suffix such as `f64`
        suffix: Option<String>,
    },
    /// String literal after escape processing
    String {
        /// Decoded contents
        value: String,
        /// Which quote delimited it
        quote: QuoteKind,
    },
    /// Regular expression literal `~/pattern/options`
    Regex {
        /// Pattern with the delimiter escapes resolved
        pattern: String,
        /// Option letters
        options: String,
    },
    /// Integer directly followed by `...`
    IntInterval(String),
    /// Markup literal, text from the opening `<` to the end of the element
    Markup(String),

    // ===== Unary operators =====
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `~`
    BitNot,
    /// `!`
    Not,

    // ===== Binary operators =====
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `=`
    Assign,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    UShr,
    /// `??`
    NullCoal,

    // ===== Compound assignment =====
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,
    /// `%=`
    PercentEq,
    /// `&=`
    AmpEq,
    /// `|=`
    PipeEq,
    /// `^=`
    CaretEq,
    /// `<<=`
    ShlEq,
    /// `>>=`
    ShrEq,
    /// `>>>=`
    UShrEq,
    /// `&&=`
    AndAndEq,
    /// `||=`
    OrOrEq,
    /// `??=`
    NullCoalEq,

    // ===== Punctuation =====
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `?.`
    QuestionDot,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `?`
    Question,
    /// `->`
    Arrow,
    /// `=>`
    FatArrow,
    /// `...`
    Spread,
    /// `@`
    At,

    // ===== Trivia and preprocessor =====
    /// `// text`, the text after the slashes
    LineComment(String),
    /// `/* text */`, the text between the delimiters
    BlockComment(String),
    /// `#name`
    Directive(String),
    /// `$name`
    Splice(String),
}

impl TokenKind {
    /// Whether this is a comment token.
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment(_) | TokenKind::BlockComment(_))
    }

    /// Fixed spelling of operators and punctuation, `None` for tokens that
    /// carry text.
    pub fn punct_str(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Increment => "++",
            TokenKind::Decrement => "--",
            TokenKind::BitNot => "~",
            TokenKind::Not => "!",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Assign => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::UShr => ">>>",
            TokenKind::NullCoal => "??",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::PercentEq => "%=",
            TokenKind::AmpEq => "&=",
            TokenKind::PipeEq => "|=",
            TokenKind::CaretEq => "^=",
            TokenKind::ShlEq => "<<=",
            TokenKind::ShrEq => ">>=",
            TokenKind::UShrEq => ">>>=",
            TokenKind::AndAndEq => "&&=",
            TokenKind::OrOrEq => "||=",
            TokenKind::NullCoalEq => "??=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::QuestionDot => "?.",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Question => "?",
            TokenKind::Arrow => "->",
            TokenKind::FatArrow => "=>",
            TokenKind::Spread => "...",
            TokenKind::At => "@",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.punct_str() {
            return f.write_str(text);
        }
        match self {
            TokenKind::Eof => f.write_str("<eof>"),
            TokenKind::Ident(name) => f.write_str(name),
            TokenKind::Keyword(keyword) => f.write_str(keyword.as_str()),
            TokenKind::Int { digits, suffix } | TokenKind::Float { digits, suffix } => {
                f.write_str(digits)?;
                if let Some(suffix) = suffix {
                    f.write_str(suffix)?;
                }
                Ok(())
            },
            TokenKind::String { value, quote } => {
                let q = quote.as_char();
                write!(f, "{}{}{}", q, value, q)
            },
            TokenKind::Regex { pattern, options } => write!(f, "~/{}/{}", pattern, options),
            TokenKind::IntInterval(digits) => write!(f, "{}...", digits),
            TokenKind::Markup(text) => f.write_str(text),
            TokenKind::LineComment(text) => write!(f, "//{}", text),
            TokenKind::BlockComment(text) => write!(f, "/*{}*/", text),
            TokenKind::Directive(name) => write!(f, "#{}", name),
            TokenKind::Splice(name) => write!(f, "${}", name),
            // punctuation handled above
            _ => Ok(()),
        }
    }
}

/// A token and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What was read
    pub kind: TokenKind,
    /// Byte range of the token text
    pub span: Span,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Whether this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_is_complete() {
        for &keyword in Keyword::ALL {
            assert_eq!(keyword_from_ident(keyword.as_str()), Some(keyword));
        }
        assert_eq!(Keyword::ALL.len(), 45);
    }

    #[test]
    fn test_keyword_lookup_case_sensitive() {
        assert_eq!(keyword_from_ident("null"), Some(Keyword::Null));
        assert_eq!(keyword_from_ident("Null"), None);
        assert_eq!(keyword_from_ident("functions"), None);
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("a"));
        assert!(is_valid_identifier("_"));
        assert!(is_valid_identifier("MyClass2"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("9lives"));
        assert!(!is_valid_identifier("a-b"));
        assert!(!is_valid_identifier("caf\u{e9}"));
        assert!(!is_valid_identifier("function"));
    }

    #[test]
    fn test_display_operators() {
        assert_eq!(TokenKind::UShrEq.to_string(), ">>>=");
        assert_eq!(TokenKind::NullCoal.to_string(), "??");
        assert_eq!(TokenKind::Spread.to_string(), "...");
    }

    #[test]
    fn test_display_literals() {
        let int = TokenKind::Int {
            digits: "0xFF".into(),
            suffix: Some("u8".into()),
        };
        assert_eq!(int.to_string(), "0xFFu8");

        let string = TokenKind::String {
            value: "hi".into(),
            quote: QuoteKind::Single,
        };
        assert_eq!(string.to_string(), "'hi'");

        let regex = TokenKind::Regex {
            pattern: "a+".into(),
            options: "gi".into(),
        };
        assert_eq!(regex.to_string(), "~/a+/gi");
        assert_eq!(TokenKind::IntInterval("1".into()).to_string(), "1...");
        assert_eq!(TokenKind::Keyword(Keyword::Untyped).to_string(), "untyped");
        assert_eq!(TokenKind::Splice("e".into()).to_string(), "$e");
    }

    #[test]
    fn test_is_comment() {
        assert!(TokenKind::LineComment(String::new()).is_comment());
        assert!(!TokenKind::Slash.is_comment());
    }
}
