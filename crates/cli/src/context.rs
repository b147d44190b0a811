// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved configuration, catalog and output format shared by commands.

use anyhow::{Context as _, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use stobind_core::{CommandCatalog, FormatConfig};
use stobind_format::Parser;

use crate::env;
use crate::output::OutputFormat;

pub struct Context {
    pub config: FormatConfig,
    pub catalog: CommandCatalog,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve config and catalog from flags, environment and defaults.
    pub fn load(
        config_flag: Option<&Path>,
        catalog_flag: Option<&Path>,
        format: OutputFormat,
    ) -> Result<Self> {
        let config = match resolve_config_path(config_flag) {
            Some(path) => FormatConfig::load(&path)?,
            None => FormatConfig::default(),
        };
        let catalog = match resolve_catalog_path(catalog_flag) {
            Some(path) => CommandCatalog::load(&path)?,
            None => CommandCatalog::builtin().clone(),
        };
        Ok(Self {
            config,
            catalog,
            format,
        })
    }

    pub fn parser(&self) -> Parser<'_> {
        Parser::new(&self.catalog, &self.config)
    }
}

/// Config path: --config > STOBIND_CONFIG > default location (if it exists).
pub fn resolve_config_path(flag: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = flag.map(Path::to_path_buf).or_else(env::config_path) {
        return Some(path);
    }
    let default = env::default_config_path()?;
    if default.is_file() {
        tracing::debug!(path = %default.display(), "using default config");
        Some(default)
    } else {
        None
    }
}

/// Catalog path: --catalog > STOBIND_CATALOG. `None` means the built-in catalog.
pub fn resolve_catalog_path(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(env::catalog_path)
}

/// Read a whole input file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
