// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution-order stabilization
//!
//! The game client runs one key's chain in bind order, but makes no promise
//! about ordering across keys fired in the same tick. Mirroring a chain of
//! length `n` into `forward ++ reverse(forward[..n-1])` makes its net effect
//! independent of where a repeated press lands in that ordering.
//!
//! Mirroring is not idempotent. Apply it once, to the canonical chain, at
//! export time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mirror a chain into a palindrome of length `2n - 1`.
///
/// Chains of length 0 or 1 are returned unchanged.
pub fn mirror<T: Clone>(chain: &[T]) -> Vec<T> {
    let Some((_, head)) = chain.split_last() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(chain.len() + head.len());
    out.extend_from_slice(chain);
    out.extend(head.iter().rev().cloned());
    out
}

/// When to mirror chains on export.
///
/// A per-key or per-alias override always wins over `global`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StabilizationPolicy {
    pub global: bool,
    pub keys: BTreeMap<String, bool>,
    pub aliases: BTreeMap<String, bool>,
}

impl StabilizationPolicy {
    pub fn new(global: bool) -> Self {
        Self {
            global,
            ..Self::default()
        }
    }

    /// Override the policy for one key.
    pub fn with_key(mut self, key: impl Into<String>, stabilize: bool) -> Self {
        self.keys.insert(key.into(), stabilize);
        self
    }

    /// Override the policy for one alias.
    pub fn with_alias(mut self, name: impl Into<String>, stabilize: bool) -> Self {
        self.aliases.insert(name.into(), stabilize);
        self
    }

    pub fn stabilize_key(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(self.global)
    }

    pub fn stabilize_alias(&self, name: &str) -> bool {
        self.aliases.get(name).copied().unwrap_or(self.global)
    }
}

#[cfg(test)]
#[path = "stabilize_tests.rs"]
mod tests;
