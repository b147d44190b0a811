// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Format configuration (TOML)
//!
//! ```toml
//! max_function_key = 12
//! max_chain_len = 20
//! validate_keys = true
//! group_headings = true
//!
//! [stabilize]
//! global = false
//! keys = { F1 = true }
//! aliases = { Attack = false }
//! ```

use crate::stabilize::StabilizationPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Function keys above F12 are rejected unless configured otherwise.
pub const DEFAULT_MAX_FUNCTION_KEY: u8 = 12;

/// Longest chain the game client accepts on one key.
pub const DEFAULT_MAX_CHAIN_LEN: usize = 20;

/// Errors from loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Settings shared by the parser, validators and serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Highest valid function key number.
    pub max_function_key: u8,
    /// Maximum number of commands in one chain.
    pub max_chain_len: usize,
    /// Reject keybind lines whose key is not a known key name.
    pub validate_keys: bool,
    /// Emit a `# <Group>` comment before each key group.
    pub group_headings: bool,
    pub stabilize: StabilizationPolicy,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_function_key: DEFAULT_MAX_FUNCTION_KEY,
            max_chain_len: DEFAULT_MAX_CHAIN_LEN,
            validate_keys: true,
            group_headings: true,
            stabilize: StabilizationPolicy::default(),
        }
    }
}

impl FormatConfig {
    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded format config");
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
