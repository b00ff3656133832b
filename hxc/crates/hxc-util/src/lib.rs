//! hxc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the types shared by every phase of the hxc compiler:
//! source locations, the per-file position index used to turn byte offsets
//! back into line/column pairs, and the configuration consulted when those
//! coordinates are rendered.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. OFFSETS FIRST
//!    Tokens only carry byte offsets. Lines and columns are computed on
//!    demand from the index built while lexing, so the hot path never pays
//!    for line tracking beyond one append per newline.
//!
//! 2. EVERY FILE IS RESOLVABLE
//!    A span may point into a file this process never lexed (an included
//!    resource, a file named by a macro). The registry reads such files once
//!    and indexes them with the same structure the lexer builds.
//
// ============================================================================
// POSITION INDEX
// ============================================================================
//
// Each file keeps a list of (line start offset, line number) pairs in the
// order they were discovered plus a sorted table materialized from it:
//
// ```
// recorded:  (0,1) (12,2) (30,3) (31,4)      appended per newline
// table:     [0]   [12]   [30]   [31]        rebuilt when the line count moves
// memo:             ^ last bucket hit
// ```
//
// A query first checks the memoized bucket, which turns the common pattern
// of resolving offsets in increasing order into O(1) work, and otherwise
// binary-searches the table: O(log n).

pub mod config;
pub mod error;
pub mod span;

pub use config::{ColumnMode, LexerConfig};
pub use error::{ConfigError, ConfigResult, SourceMapError, SourceMapResult};
pub use span::{FileId, FileRegistry, FileState, LineStart, PosCoords, Span, UNKNOWN_OFFSET};
