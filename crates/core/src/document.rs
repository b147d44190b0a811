// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed documents and the profile model they merge into

use crate::command::AtomicCommand;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between commands in a chain.
pub const CHAIN_SEPARATOR: &str = " $$ ";

fn join_commands(commands: &[AtomicCommand]) -> String {
    commands
        .iter()
        .map(AtomicCommand::command)
        .collect::<Vec<_>>()
        .join(CHAIN_SEPARATOR)
}

/// A key and the chain bound to it. An empty chain unbinds the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindEntry {
    pub key: String,
    pub commands: Vec<AtomicCommand>,
}

impl KeybindEntry {
    pub fn new(key: impl Into<String>, commands: Vec<AtomicCommand>) -> Self {
        Self {
            key: key.into(),
            commands,
        }
    }

    /// Raw command strings in chain order.
    pub fn command_strings(&self) -> Vec<&str> {
        self.commands.iter().map(AtomicCommand::command).collect()
    }

    /// Chain joined with ` $$ `.
    pub fn command_string(&self) -> String {
        join_commands(&self.commands)
    }
}

/// A named alias and its chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub commands: Vec<AtomicCommand>,
}

impl AliasEntry {
    pub fn new(name: impl Into<String>, commands: Vec<AtomicCommand>) -> Self {
        Self {
            name: name.into(),
            description: None,
            commands,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn command_strings(&self) -> Vec<&str> {
        self.commands.iter().map(AtomicCommand::command).collect()
    }

    /// Chain joined with ` $$ `; the inverse of splitting an alias body.
    pub fn command_string(&self) -> String {
        join_commands(&self.commands)
    }
}

/// A comment line, kept verbatim (trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub line: usize,
    pub content: String,
}

/// A line that could not be parsed. Recorded, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("line {line}: {message}")]
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

impl LineError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Result of parsing one text blob.
///
/// Keys and alias names are unique; the last definition wins but keeps the
/// position of the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub keybinds: IndexMap<String, KeybindEntry>,
    pub aliases: IndexMap<String, AliasEntry>,
    pub comments: Vec<Comment>,
    pub errors: Vec<LineError>,
}

impl ParsedDocument {
    /// True when no line failed to parse.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn keybind(&self, key: &str) -> Option<&KeybindEntry> {
        self.keybinds.get(key)
    }

    pub fn alias(&self, name: &str) -> Option<&AliasEntry> {
        self.aliases.get(name)
    }
}

/// Longer-lived keybind and alias set that documents are merged into and
/// that the serializer renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub keybinds: IndexMap<String, KeybindEntry>,
    #[serde(default)]
    pub aliases: IndexMap<String, AliasEntry>,
}

impl Profile {
    /// Merge a parsed document. A definition for an existing key or alias
    /// replaces the old chain; it is never appended to it.
    pub fn apply(&mut self, doc: ParsedDocument) {
        for (key, entry) in doc.keybinds {
            if self.keybinds.insert(key.clone(), entry).is_some() {
                tracing::debug!(key = %key, "keybind replaced on merge");
            }
        }
        for (name, entry) in doc.aliases {
            if self.aliases.insert(name.clone(), entry).is_some() {
                tracing::debug!(alias = %name, "alias replaced on merge");
            }
        }
    }

    /// Bind a chain to a key, replacing any previous binding.
    pub fn bind(&mut self, entry: KeybindEntry) {
        self.keybinds.insert(entry.key.clone(), entry);
    }

    /// Define an alias, replacing any previous definition.
    pub fn define(&mut self, entry: AliasEntry) {
        self.aliases.insert(entry.name.clone(), entry);
    }

    pub fn is_empty(&self) -> bool {
        self.keybinds.is_empty() && self.aliases.is_empty()
    }
}

impl From<ParsedDocument> for Profile {
    fn from(doc: ParsedDocument) -> Self {
        Self {
            keybinds: doc.keybinds,
            aliases: doc.aliases,
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
