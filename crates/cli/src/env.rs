// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

// --- Config ---

/// Explicit config file: STOBIND_CONFIG
pub fn config_path() -> Option<PathBuf> {
    non_empty("STOBIND_CONFIG").map(PathBuf::from)
}

/// Default config location: XDG_CONFIG_HOME/stobind/config.toml > platform config dir
pub fn default_config_path() -> Option<PathBuf> {
    let base = non_empty("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)?;
    Some(base.join("stobind").join("config.toml"))
}

// --- Catalog ---

/// Replacement command catalog: STOBIND_CATALOG
pub fn catalog_path() -> Option<PathBuf> {
    non_empty("STOBIND_CATALOG").map(PathBuf::from)
}

// --- Logging ---

/// Log filter directive: STOBIND_LOG > RUST_LOG
pub fn log_filter() -> Option<String> {
    non_empty("STOBIND_LOG").or_else(|| non_empty("RUST_LOG"))
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
