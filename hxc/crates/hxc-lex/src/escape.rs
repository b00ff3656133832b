//! Escape sequence decoding for string literals.
//!
//! The string sub-lexers only find where a literal ends; the raw text between
//! the quotes is handed to an [`Unescape`] implementation. The lexer uses
//! [`StandardUnescape`] unless the context is given another one.

use thiserror::Error;

use crate::unicode::parse_hex_codepoint;

const NO_HEX: &str = "Must be followed by a hexadecimal sequence.";
const NO_BRACED_HEX: &str =
    "Must be followed by a hexadecimal sequence enclosed in curly brackets.";
const MAX_CODEPOINT: &str = "Maximum allowed value for unicode escape sequence is \\u{10FFFF}";
const SURROGATE: &str = "UTF-16 surrogates are not allowed in strings.";

/// A malformed escape sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid escape sequence \\{ch}{}", message_suffix(.message))]
pub struct EscapeError {
    /// Character after the backslash, or the backslash itself when the text
    /// ends right after it
    pub ch: char,
    /// Byte offset of `ch` in the raw text
    pub offset: usize,
    /// Extra explanation
    pub message: Option<String>,
}

impl EscapeError {
    /// Creates a new escape error
    pub fn new(ch: char, offset: usize, message: Option<String>) -> Self {
        Self { ch, offset, message }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(". {}", message),
        None => String::new(),
    }
}

/// Turns the raw text of a string literal into its value.
pub trait Unescape: Send {
    /// Decodes `raw`, the text between the quotes.
    fn unescape(&self, raw: &str) -> Result<String, EscapeError>;
}

impl<F> Unescape for F
where
    F: Fn(&str) -> Result<String, EscapeError> + Send,
{
    fn unescape(&self, raw: &str) -> Result<String, EscapeError> {
        self(raw)
    }
}

/// The escape rules of the language.
///
/// | Escape | Value |
/// |---|---|
/// | `\n` `\r` `\t` | LF, CR, TAB |
/// | `\"` `\'` `\\` | the character |
/// | `\0`..`\3` + 2 octal digits | byte up to 127 |
/// | `\xHH` | byte up to 127 |
/// | `\uHHHH`, `\u{H..}` | code point up to U+10FFFF, no surrogates |
///
/// `\$` is rejected. The single-quoted scanner keeps it verbatim so it never
/// opens an interpolation, but what it decodes to is left to an unescaper that
/// knows how the consumer expands `$`; a literal dollar is written `$$`.
///
/// # Example
///
/// ```
/// use hxc_lex::escape::{StandardUnescape, Unescape};
///
/// let value = StandardUnescape.unescape(r"a\tb\u{1F600}").unwrap();
/// assert_eq!(value, "a\tb\u{1F600}");
/// assert!(StandardUnescape.unescape(r"\q").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardUnescape;

impl Unescape for StandardUnescape {
    fn unescape(&self, raw: &str) -> Result<String, EscapeError> {
        let bytes = raw.as_bytes();
        let mut out = String::with_capacity(raw.len());
        let mut plain_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'\\' {
                i += 1;
                continue;
            }
            out.push_str(&raw[plain_start..i]);

            let at = i + 1;
            let Some(c) = raw[at..].chars().next() else {
                return Err(EscapeError::new('\\', i, None));
            };
            let fail = |message: Option<&str>| EscapeError::new(c, at, message.map(str::to_owned));

            let next = match c {
                'n' => {
                    out.push('\n');
                    at + 1
                },
                'r' => {
                    out.push('\r');
                    at + 1
                },
                't' => {
                    out.push('\t');
                    at + 1
                },
                '"' | '\'' | '\\' => {
                    out.push(c);
                    at + 1
                },
                '0'..='3' => {
                    let digits = raw
                        .get(at..at + 3)
                        .filter(|d| d.bytes().all(|b| (b'0'..=b'7').contains(&b)))
                        .ok_or_else(|| fail(None))?;
                    let value = u32::from_str_radix(digits, 8).map_err(|_| fail(None))?;
                    if value > 0x7F {
                        return Err(EscapeError::new(c, at, Some(too_large(value))));
                    }
                    out.push(value as u8 as char);
                    at + 3
                },
                'x' => {
                    let value = raw
                        .get(at + 1..at + 3)
                        .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
                        .and_then(parse_hex_codepoint)
                        .ok_or_else(|| fail(Some(NO_HEX)))?;
                    if value > 0x7F {
                        return Err(EscapeError::new(c, at, Some(too_large(value))));
                    }
                    out.push(value as u8 as char);
                    at + 3
                },
                'u' => {
                    let (value, end) = match raw
                        .get(at + 1..at + 5)
                        .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
                        .and_then(parse_hex_codepoint)
                    {
                        Some(value) => (value, at + 5),
                        None if bytes.get(at + 1) == Some(&b'{') => {
                            let close = raw[at + 2..]
                                .find('}')
                                .map(|rel| at + 2 + rel)
                                .ok_or_else(|| fail(Some(NO_BRACED_HEX)))?;
                            let value = parse_hex_codepoint(&raw[at + 2..close])
                                .ok_or_else(|| fail(Some(NO_BRACED_HEX)))?;
                            if value > 0x10FFFF {
                                return Err(fail(Some(MAX_CODEPOINT)));
                            }
                            (value, close + 1)
                        },
                        None => return Err(fail(Some(NO_BRACED_HEX))),
                    };
                    if (0xD800..0xE000).contains(&value) {
                        return Err(fail(Some(SURROGATE)));
                    }
                    let ch = char::from_u32(value).ok_or_else(|| fail(Some(MAX_CODEPOINT)))?;
                    out.push(ch);
                    end
                },
                _ => return Err(fail(None)),
            };

            i = next;
            plain_start = next;
        }

        out.push_str(&raw[plain_start..]);
        Ok(out)
    }
}

fn too_large(value: u32) -> String {
    format!(
        "Values greater than \\x7f are not allowed. Use \\u00{:02x} instead.",
        value
    )
}
