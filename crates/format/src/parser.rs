// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document parsing
//!
//! Drives the line classifier and chain parser over a whole file. Parsing
//! never aborts: each bad line is recorded as a [`LineError`] and the rest
//! of the file still contributes to the document.

use crate::chain::{parse_alias, parse_chain};
use crate::classify::Classifier;
use crate::line::{classify_line, Line};
use stobind_core::{
    is_valid_alias_name, Comment, CommandCatalog, FormatConfig, KeybindEntry, LineError,
    ParsedDocument, ValidationError, Validator,
};

/// Line error message for lines that match no known syntax.
const INVALID_FORMAT: &str = "Invalid keybind format";

/// Parses keybind files against a command catalog.
#[derive(Debug, Clone)]
pub struct Parser<'c> {
    classifier: Classifier<'c>,
    validator: Validator,
    validate_keys: bool,
}

impl<'c> Parser<'c> {
    pub fn new(catalog: &'c CommandCatalog, config: &FormatConfig) -> Self {
        Self {
            classifier: Classifier::new(catalog),
            validator: Validator::new(config),
            validate_keys: config.validate_keys,
        }
    }

    pub fn classifier(&self) -> &Classifier<'c> {
        &self.classifier
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Parse a complete text blob.
    ///
    /// A `;` comment directly above an alias becomes its description unless
    /// the alias line carries its own `; description` suffix.
    pub fn parse(&self, text: &str) -> ParsedDocument {
        let mut doc = ParsedDocument::default();
        let mut pending_description: Option<String> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            match classify_line(raw) {
                Line::Blank => pending_description = None,
                Line::Comment(content) => {
                    pending_description = content
                        .strip_prefix(';')
                        .map(str::trim)
                        .filter(|d| !d.is_empty())
                        .map(str::to_string);
                    doc.comments.push(Comment {
                        line,
                        content: content.to_string(),
                    });
                }
                Line::Alias {
                    name,
                    body,
                    description,
                } => {
                    let preceding = pending_description.take();
                    if !is_valid_alias_name(name) {
                        reject(&mut doc, line, format!("Invalid alias name '{}'", name));
                        continue;
                    }
                    let mut alias = parse_alias(name, body, &self.classifier);
                    alias.description = description.map(str::to_string).or(preceding);
                    if doc.aliases.insert(name.to_string(), alias).is_some() {
                        tracing::debug!(line, alias = name, "duplicate alias, last definition wins");
                    }
                }
                Line::Keybind { key, body, .. } => {
                    pending_description = None;
                    if self.validate_keys && !self.validator.is_valid_key(key) {
                        reject(&mut doc, line, format!("Invalid key name '{}'", key));
                        continue;
                    }
                    let entry = KeybindEntry::new(key, parse_chain(body, key, &self.classifier));
                    if doc.keybinds.insert(key.to_string(), entry).is_some() {
                        tracing::debug!(line, key, "duplicate keybind, last definition wins");
                    }
                }
                Line::Invalid => {
                    pending_description = None;
                    reject(&mut doc, line, INVALID_FORMAT);
                }
            }
        }

        tracing::debug!(
            keybinds = doc.keybinds.len(),
            aliases = doc.aliases.len(),
            errors = doc.errors.len(),
            "parsed document"
        );
        doc
    }
}

fn reject(doc: &mut ParsedDocument, line: usize, message: impl Into<String>) {
    let error = LineError::new(line, message);
    tracing::debug!(line, message = %error.message, "rejected line");
    doc.errors.push(error);
}

/// Parse with the built-in catalog and default configuration.
pub fn parse(text: &str) -> ParsedDocument {
    Parser::new(CommandCatalog::builtin(), &FormatConfig::default()).parse(text)
}

/// Validate every chain in a parsed document.
///
/// Keybinds with an empty chain are explicit unbinds and are not checked.
/// Aliases are always checked.
pub fn validate_document(doc: &ParsedDocument, validator: &Validator) -> Vec<ValidationError> {
    let keybinds = doc
        .keybinds
        .values()
        .filter(|entry| !entry.commands.is_empty())
        .map(|entry| validator.validate_chain(&entry.key, &entry.commands));
    let aliases = doc
        .aliases
        .values()
        .map(|alias| validator.validate_alias(&alias.name, &alias.commands));

    keybinds
        .chain(aliases)
        .filter_map(Result::err)
        .flatten()
        .collect()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
