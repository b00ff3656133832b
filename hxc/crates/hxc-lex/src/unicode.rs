//! Character classes used by the lexer.
//!
//! Identifiers are ASCII only. Markup element names follow the XML `Name`
//! production, so they accept a much wider range of code points.

/// Checks if a character can start an identifier: `[A-Za-z_]`.
///
/// # Example
///
/// ```
/// use hxc_lex::unicode::is_ascii_ident_start;
///
/// assert!(is_ascii_ident_start('a'));
/// assert!(is_ascii_ident_start('_'));
/// assert!(!is_ascii_ident_start('1'));
/// assert!(!is_ascii_ident_start('α'));
/// ```
#[inline]
pub fn is_ascii_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ascii_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Returns the value of a hexadecimal digit.
///
/// # Example
///
/// ```
/// use hxc_lex::unicode::hex_digit_to_value;
///
/// assert_eq!(hex_digit_to_value('a'), Some(10));
/// assert_eq!(hex_digit_to_value('F'), Some(15));
/// assert_eq!(hex_digit_to_value('g'), None);
/// ```
#[inline]
pub fn hex_digit_to_value(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

/// Parses a run of hexadecimal digits into a code point value.
///
/// Returns `None` for an empty string, a non-hex character, or a value that
/// does not fit in 32 bits.
pub fn parse_hex_codepoint(hex: &str) -> Option<u32> {
    if hex.is_empty() {
        return None;
    }
    hex.chars().try_fold(0u32, |acc, c| {
        let digit = c.to_digit(16)?;
        acc.checked_mul(16)?.checked_add(digit)
    })
}

/// Checks if a character can start a markup element name.
///
/// # Example
///
/// ```
/// use hxc_lex::unicode::is_markup_name_start;
///
/// assert!(is_markup_name_start('d'));
/// assert!(is_markup_name_start(':'));
/// assert!(is_markup_name_start('é'));
/// assert!(!is_markup_name_start('-'));
/// assert!(!is_markup_name_start('1'));
/// ```
pub fn is_markup_name_start(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// Checks if a character can continue a markup element name.
pub fn is_markup_name_continue(c: char) -> bool {
    is_markup_name_start(c)
        || matches!(c,
            '-' | '.' | '0'..='9'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

/// Characters that may follow a backslash in a regular expression literal
/// and are kept as written.
///
/// `u`/`U` escapes are checked separately since they need four hex digits.
pub fn is_regex_escape(c: char) -> bool {
    matches!(c,
        '\\' | '$' | '.' | '*' | '+' | '^' | '|' | '{' | '}' | '[' | ']' | '(' | ')' | '?' | '-'
        | '0'..='9'
        | 'w' | 'W' | 'b' | 'B' | 's' | 'S' | 'd' | 'D' | 'x')
}

/// Regular expression option letters.
#[inline]
pub fn is_regex_option(c: char) -> bool {
    matches!(c, 'g' | 'i' | 'm' | 's' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_chars() {
        for c in 'a'..='z' {
            assert!(is_ascii_ident_start(c), "{} should be ident start", c);
        }
        for c in '0'..='9' {
            assert!(!is_ascii_ident_start(c), "{} should not be ident start", c);
            assert!(is_ascii_ident_continue(c));
        }
        assert!(!is_ascii_ident_continue('$'));
    }

    #[test]
    fn test_parse_hex_codepoint() {
        assert_eq!(parse_hex_codepoint("41"), Some(0x41));
        assert_eq!(parse_hex_codepoint("10FFFF"), Some(0x10FFFF));
        assert_eq!(parse_hex_codepoint(""), None);
        assert_eq!(parse_hex_codepoint("4g"), None);
        assert_eq!(parse_hex_codepoint("FFFFFFFFF"), None);
    }

    #[test]
    fn test_markup_name_chars() {
        assert!(is_markup_name_continue('-'));
        assert!(is_markup_name_continue('.'));
        assert!(is_markup_name_continue('7'));
        assert!(is_markup_name_continue('\u{B7}'));
        assert!(!is_markup_name_continue(' '));
        assert!(!is_markup_name_continue('>'));
        assert!(!is_markup_name_continue('/'));
        assert!(!is_markup_name_start('\u{D7}'));
    }

    #[test]
    fn test_regex_classes() {
        for c in ['\\', '$', '.', '(', ']', '-', '5', 'w', 'D', 'x'] {
            assert!(is_regex_escape(c), "{} should be allowed", c);
        }
        assert!(!is_regex_escape('q'));
        assert!(!is_regex_escape('u'));
        assert!(is_regex_option('g'));
        assert!(!is_regex_option('z'));
    }
}
