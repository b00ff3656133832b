//! Edge case tests for hxc-lex
