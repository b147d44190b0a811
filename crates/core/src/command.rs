// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic commands and their derived display metadata.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Icon used for commands that match no catalog entry.
pub const CUSTOM_ICON: &str = "⚙️";

/// Semantic category of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandCategory {
    Targeting,
    Combat,
    Tray,
    Power,
    Movement,
    Communication,
    System,
    Custom,
}

impl CommandCategory {
    pub const ALL: [CommandCategory; 8] = [
        CommandCategory::Targeting,
        CommandCategory::Combat,
        CommandCategory::Tray,
        CommandCategory::Power,
        CommandCategory::Movement,
        CommandCategory::Communication,
        CommandCategory::System,
        CommandCategory::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandCategory::Targeting => "targeting",
            CommandCategory::Combat => "combat",
            CommandCategory::Tray => "tray",
            CommandCategory::Power => "power",
            CommandCategory::Movement => "movement",
            CommandCategory::Communication => "communication",
            CommandCategory::System => "system",
            CommandCategory::Custom => "custom",
        }
    }

    /// Map a catalog category id to a category. Unknown ids are `Custom`.
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(id))
            .unwrap_or(CommandCategory::Custom)
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single extracted parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

impl ParamValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Int(_) => None,
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

/// Named parameters extracted from a command string.
pub type Parameters = BTreeMap<String, ParamValue>;

/// Display metadata derived from a raw command string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classified {
    pub category: CommandCategory,
    pub icon: String,
    pub text: String,
    pub parameters: Option<Parameters>,
}

impl Classified {
    /// Fallback classification: `custom` with a humanized label.
    pub fn custom(raw: &str) -> Self {
        Self {
            category: CommandCategory::Custom,
            icon: CUSTOM_ICON.to_string(),
            text: humanize(raw),
            parameters: None,
        }
    }
}

/// The smallest unit of a chain: one directive between `$$` separators.
///
/// Only `command` matters for round-tripping. The remaining fields are
/// derived from it and may be recomputed at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicCommand {
    command: String,
    #[serde(rename = "type")]
    category: CommandCategory,
    icon: String,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameters: Option<Parameters>,
    id: String,
}

impl AtomicCommand {
    pub fn new(command: impl Into<String>, classified: Classified, id: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            category: classified.category,
            icon: classified.icon,
            text: classified.text,
            parameters: classified.parameters,
            id: id.into(),
        }
    }

    /// Build a command with fallback metadata, without consulting a catalog.
    pub fn unclassified(command: impl Into<String>, id: impl Into<String>) -> Self {
        let command = command.into();
        let classified = Classified::custom(&command);
        Self::new(command, classified, id)
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn category(&self) -> CommandCategory {
        self.category
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> Option<&Parameters> {
        self.parameters.as_ref()
    }

    /// Get a single parameter by name.
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.parameters.as_ref()?.get(name)
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl AsRef<str> for AtomicCommand {
    fn as_ref(&self) -> &str {
        &self.command
    }
}

/// Turn a raw command into a readable label.
///
/// `_` and `+` become spaces, a space is inserted where a lowercase letter or
/// digit is followed by a capital, and runs of whitespace collapse.
pub fn humanize(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 8);
    let mut prev: Option<char> = None;
    for ch in raw.chars() {
        let ch = if ch == '_' || ch == '+' { ' ' } else { ch };
        if ch.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
        {
            spaced.push(' ');
        }
        spaced.push(ch);
        prev = Some(ch);
    }
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
