//! Numeric literal helpers.

/// Which kind of literal a suffix is being split from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericContext {
    /// Suffixes start at `i` or `u`
    Int,
    /// Suffixes start at `i`, `u` or `f`
    Float,
}

/// Splits a numeric literal into its value text and type suffix.
///
/// The suffix begins at the first suffix letter. An underscore directly
/// before it is a separator and belongs to neither part.
///
/// # Example
///
/// ```
/// use hxc_lex::literal::{split_suffix, NumericContext};
///
/// assert_eq!(split_suffix("123i32", NumericContext::Int), ("123", Some("i32")));
/// assert_eq!(split_suffix("1_000_f64", NumericContext::Float), ("1_000", Some("f64")));
/// assert_eq!(split_suffix("42", NumericContext::Int), ("42", None));
/// ```
pub fn split_suffix(text: &str, context: NumericContext) -> (&str, Option<&str>) {
    let is_pivot = |b: u8| match context {
        NumericContext::Int => b == b'i' || b == b'u',
        NumericContext::Float => b == b'i' || b == b'u' || b == b'f',
    };

    let Some(pivot) = text.bytes().position(is_pivot) else {
        return (text, None);
    };

    let literal_end = if pivot > 0 && text.as_bytes()[pivot - 1] == b'_' {
        pivot - 1
    } else {
        pivot
    };
    (&text[..literal_end], Some(&text[pivot..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_suffixes() {
        assert_eq!(split_suffix("0u8", NumericContext::Int), ("0", Some("u8")));
        assert_eq!(split_suffix("7_i64", NumericContext::Int), ("7", Some("i64")));
        assert_eq!(split_suffix("0xFFu8", NumericContext::Int), ("0xFF", Some("u8")));
    }

    #[test]
    fn test_int_context_ignores_f() {
        assert_eq!(split_suffix("0xff", NumericContext::Int), ("0xff", None));
    }

    #[test]
    fn test_float_suffixes() {
        assert_eq!(split_suffix("1.5f64", NumericContext::Float), ("1.5", Some("f64")));
        assert_eq!(split_suffix("1f32", NumericContext::Float), ("1", Some("f32")));
        assert_eq!(split_suffix("2.5e3", NumericContext::Float), ("2.5e3", None));
    }

    #[test]
    fn test_underscore_kept_inside_digits() {
        assert_eq!(split_suffix("1_000", NumericContext::Int), ("1_000", None));
        assert_eq!(split_suffix("1__i8", NumericContext::Int), ("1_", Some("i8")));
    }

    #[test]
    fn test_leading_pivot() {
        assert_eq!(split_suffix("i32", NumericContext::Int), ("", Some("i32")));
    }
}
