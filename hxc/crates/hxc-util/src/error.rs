//! Core error types for hxc-util crate
//!
//! This module defines error types used throughout the util crate.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for source registry operations
#[derive(Debug, Error)]
pub enum SourceMapError {
    /// File id does not belong to this registry
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Failed to read a file for fallback resolution
    #[error("Failed to read {path}: {error}")]
    Read {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config {path}: {error}")]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::LexerConfig`]
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for source registry operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

/// Result type alias for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
