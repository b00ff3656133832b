//! Lexer configuration.
//!
//! Settings are plain data with serde defaults so a project can keep them in
//! an `hxc.toml` next to its sources:
//!
//! ```toml
//! column_mode = "legacy"
//! skip_header = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "hxc.toml";

/// How columns are numbered when positions are rendered.
///
/// The position index always stores 0-based byte columns; the mode is only
/// applied by [`crate::FileRegistry::get_pos_coords`] and friends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnMode {
    /// Historical output format: columns start at 0.
    Legacy,
    /// Columns start at 1.
    #[default]
    Default,
}

impl ColumnMode {
    /// Value added to a 0-based column before it is shown.
    #[inline]
    pub const fn base(self) -> usize {
        match self {
            ColumnMode::Legacy => 0,
            ColumnMode::Default => 1,
        }
    }
}

/// Lexer configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Column numbering used for diagnostics.
    #[serde(default)]
    pub column_mode: ColumnMode,

    /// Skip a leading byte-order mark and `#!` line before the first token.
    #[serde(default = "default_true")]
    pub skip_header: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            column_mode: ColumnMode::default(),
            skip_header: true,
        }
    }
}

impl LexerConfig {
    /// Parses a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration file.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded lexer config");
        Ok(config)
    }

    /// Loads `hxc.toml` from `dir`, or the defaults when it does not exist.
    pub fn load_from_dir(dir: &Path) -> ConfigResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            Ok(Self::default())
        }
    }
}
