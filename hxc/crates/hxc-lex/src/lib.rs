//! hxc-lex - Lexical Analyzer for Haxe Source
//!
//! This crate turns Haxe source text into a stream of tokens for the parser
//! and keeps, per file, the position index that maps the byte offsets in
//! token spans back to lines and columns.
//!
//! # Example Usage
//!
//! ```
//! use hxc_lex::{Keyword, LexContext, Lexer, TokenKind};
//!
//! let mut ctx = LexContext::new();
//! let file = ctx.init("Main.hx");
//!
//! let tokens: Vec<_> = Lexer::new("class Main {\n}", &mut ctx)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Class));
//!
//! // Spans carry offsets only; the context turns them into lines.
//! assert_eq!(ctx.get_error_line(tokens[3].span), 2);
//! let label = |path: &str, line: u32| format!("{}:{}:", path, line);
//! assert_eq!(ctx.format_pos(tokens[3].span, label), "Main.hx:2: characters 1-2");
//! assert_eq!(ctx.registry().path(file).unwrap(), "Main.hx");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, keywords and the keyword table
//! - [`lexer`] - Main lexer and its sub-lexers
//! - [`cursor`] - Character cursor for source traversal
//! - [`context`] - Session state: file indexes, current file, configuration
//! - [`escape`] - Escape decoding for string literals
//! - [`literal`] - Numeric suffix handling
//! - [`unicode`] - Character classes for names, markup and regexes
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0xFF`, `0b1010`, `123i32`, `0xFFu8`
//! - **Float**: `3.14`, `.5`, `1e10`, `1.5f64`
//! - **String**: `"plain"`, `'interpolated ${expr}'`
//! - **Regex**: `~/pattern/gi`
//! - **Interval**: `0...` (the integer before a `...`)
//! - **Markup**: `<div>..</div>`, read on request through [`Lexer::try_markup`]
//!
//! ## Special
//!
//! - **Comments**: returned as tokens, not skipped
//! - **Directives**: `#if`, `#end`, read in condition mode with
//!   [`Lexer::next_directive_token`]
//! - **Splices**: `$name`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod context;
pub mod cursor;
pub mod error;
pub mod escape;
pub mod lexer;
pub mod literal;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use context::{FileScope, LexContext, SavedFile};
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use escape::{EscapeError, StandardUnescape, Unescape};
pub use lexer::Lexer;
pub use literal::{split_suffix, NumericContext};
pub use token::{is_valid_identifier, keyword_from_ident, Keyword, QuoteKind, Token, TokenKind};
