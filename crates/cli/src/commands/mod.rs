// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod classify;
pub mod fmt;
pub mod parse;
pub mod validate;

/// `1 keybind`, `2 keybinds`, `2 aliases`
pub(crate) fn plural(count: usize, noun: &str) -> String {
    match count {
        1 => format!("{} {}", count, noun),
        _ if noun.ends_with('s') => format!("{} {}es", count, noun),
        _ => format!("{} {}s", count, noun),
    }
}
