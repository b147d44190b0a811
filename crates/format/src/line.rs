// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line classification
//!
//! Each line is recognised, in priority order, as a comment, an alias
//! definition, a `/bind` directive, a standard keybind, or a blank line.
//! Anything else is invalid.

use regex::Regex;
use std::sync::LazyLock;

// Allow expect here as the regexes are compile-time verified to be valid
#[allow(clippy::expect_used)]
static ALIAS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?i:alias)\s+([^\s"<]+)\s*(?:<&(.*?)&>|"(.*?)")\s*(?:;\s*(.*?))?\s*$"#)
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static BIND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*/bind\s+(\S+)\s+"(.*?)"(?:\s+"[^"]*")?\s*$"#)
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static KEYBIND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(\S+)\s+"(.*?)"(?:\s+"[^"]*")?\s*$"#)
        .expect("constant regex pattern is valid")
});

/// A classified line, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Whitespace only.
    Blank,
    /// Trimmed line starting with `#` or `;`.
    Comment(&'a str),
    /// `alias <name> <& body &>` or `alias <name> "body"`, with an optional
    /// `; description` suffix. The name is not validated here.
    Alias {
        name: &'a str,
        body: &'a str,
        description: Option<&'a str>,
    },
    /// `<key> "body" ""` or `/bind <key> "body"`.
    Keybind {
        key: &'a str,
        body: &'a str,
        directive: bool,
    },
    Invalid,
}

/// Classify one line of a keybind file.
pub fn classify_line(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') || trimmed.starts_with(';') {
        return Line::Comment(trimmed);
    }
    if let Some(caps) = ALIAS_PATTERN.captures(line) {
        let body = caps.get(2).or_else(|| caps.get(3));
        if let (Some(name), Some(body)) = (caps.get(1), body) {
            return Line::Alias {
                name: name.as_str(),
                body: body.as_str(),
                description: caps
                    .get(4)
                    .map(|m| m.as_str())
                    .filter(|d| !d.is_empty()),
            };
        }
    }
    for (pattern, directive) in [(&*BIND_PATTERN, true), (&*KEYBIND_PATTERN, false)] {
        if let Some(caps) = pattern.captures(line) {
            if let (Some(key), Some(body)) = (caps.get(1), caps.get(2)) {
                return Line::Keybind {
                    key: key.as_str(),
                    body: body.as_str(),
                    directive,
                };
            }
        }
    }
    Line::Invalid
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
