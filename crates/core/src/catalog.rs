// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-definition catalog
//!
//! A read-only table of known commands, grouped by category:
//! `categoryId → { name, icon, commands: { commandId → CommandDef } }`.
//! The classifier and validators receive it by reference; nothing in this
//! workspace keeps a global catalog.

use crate::command::{CommandCategory, CUSTOM_ICON};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Catalog shipped with the crate.
const BUILTIN_JSON: &str = include_str!("../catalog/builtin.json");

// Allow expect here as the embedded catalog is covered by tests
#[allow(clippy::expect_used)]
static BUILTIN: LazyLock<CommandCatalog> = LazyLock::new(|| {
    CommandCatalog::from_json(BUILTIN_JSON).expect("embedded catalog is valid JSON")
});

/// Errors from loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Game environment a command applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Space,
    Ground,
    Both,
}

/// Parameter value type in a command schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Number,
    Text,
}

/// Schema for one command parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDef {
    #[serde(rename = "type")]
    pub kind: ParamKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

fn default_icon() -> String {
    CUSTOM_ICON.to_string()
}

/// A known command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDef {
    /// Canonical command text.
    pub command: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default)]
    pub customizable: bool,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, ParamDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
}

impl CommandDef {
    /// The command text up to the first whitespace.
    pub fn base_keyword(&self) -> &str {
        self.command.split_whitespace().next().unwrap_or("")
    }
}

/// A named group of commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub commands: IndexMap<String, CommandDef>,
}

/// One row of the catalog, as yielded by [`CommandCatalog::entries`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub category_id: &'a str,
    pub command_id: &'a str,
    pub category: CommandCategory,
    pub def: &'a CommandDef,
}

/// Read-only command catalog, categories kept in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandCatalog {
    categories: IndexMap<String, CategoryDef>,
}

impl CommandCatalog {
    /// The catalog embedded in this crate.
    pub fn builtin() -> &'static CommandCatalog {
        &BUILTIN
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            commands = catalog.len(),
            "loaded command catalog"
        );
        Ok(catalog)
    }

    /// Get a category by id
    pub fn category(&self, category_id: &str) -> Option<&CategoryDef> {
        self.categories.get(category_id)
    }

    /// Iterate categories in file order
    pub fn categories(&self) -> impl Iterator<Item = (&str, &CategoryDef)> {
        self.categories.iter().map(|(id, def)| (id.as_str(), def))
    }

    /// Get a command definition by category and command id
    pub fn get(&self, category_id: &str, command_id: &str) -> Option<&CommandDef> {
        self.categories.get(category_id)?.commands.get(command_id)
    }

    /// Iterate every command in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.categories.iter().flat_map(|(category_id, cat)| {
            let category = CommandCategory::from_id(category_id);
            cat.commands
                .iter()
                .map(move |(command_id, def)| CatalogEntry {
                    category_id,
                    command_id,
                    category,
                    def,
                })
        })
    }

    /// Icon for a category, falling back to the generic glyph.
    pub fn category_icon(&self, category_id: &str) -> &str {
        self.categories
            .get(category_id)
            .and_then(|c| c.icon.as_deref())
            .unwrap_or(CUSTOM_ICON)
    }

    /// Total number of commands across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(|c| c.commands.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
