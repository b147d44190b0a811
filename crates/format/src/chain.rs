// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command chain splitting

use crate::classify::Classifier;
use regex::Regex;
use std::sync::LazyLock;
use stobind_core::{AliasEntry, AtomicCommand};

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\$\$\s*").expect("constant regex pattern is valid"));

/// Split a chain body on `$$`, trimming each segment and dropping empty ones.
///
/// Order of the remaining segments is preserved.
pub fn split_chain(raw: &str) -> Vec<&str> {
    SEPARATOR
        .split(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split and classify a chain body. Command ids are `<owner>#<index>`.
pub fn parse_chain(raw: &str, owner: &str, classifier: &Classifier<'_>) -> Vec<AtomicCommand> {
    split_chain(raw)
        .into_iter()
        .enumerate()
        .map(|(i, segment)| classifier.command(segment, format!("{}#{}", owner, i)))
        .collect()
}

/// Build an alias from its `$$`-joined body.
///
/// The inverse of [`AliasEntry::command_string`].
pub fn parse_alias(name: &str, raw: &str, classifier: &Classifier<'_>) -> AliasEntry {
    AliasEntry::new(name, parse_chain(raw, name, classifier))
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
