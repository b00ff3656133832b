//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and newline bookkeeping
//! - `operator` - Operator and punctuation lexing
//! - `number` - Number literal lexing
//! - `identifier` - Identifiers, keywords, `#directives`, `$splices` and
//!   the directive argument mode
//! - `comment` - Line and block comments
//! - `string` - Both string literal styles and `${...}` interpolations
//! - `regex` - `~/pattern/options` literals
//! - `markup` - Inline markup literals

mod comment;
mod core;
mod identifier;
mod markup;
mod number;
mod operator;
mod regex;
mod string;

pub use self::core::Lexer;
