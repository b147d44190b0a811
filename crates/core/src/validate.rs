// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key name, alias name and chain validation
//!
//! Validators collect every applicable error instead of stopping at the
//! first, so callers can show all problems with a chain at once.

use crate::config::FormatConfig;
use crate::keys::KeyCatalog;
use serde::Serialize;
use thiserror::Error;

/// A rule violated by a key, alias name or chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid key name '{key}'")]
    InvalidKey { key: String },

    #[error(
        "invalid alias name '{name}': must start with a letter or underscore \
         and contain only letters, digits and underscores"
    )]
    InvalidAliasName { name: String },

    #[error("'{key}' has no commands")]
    EmptyChain { key: String },

    #[error("command {} of '{key}' is empty", index + 1)]
    EmptyCommand { key: String, index: usize },

    #[error("'{key}' has {count} commands; at most {max} are allowed")]
    TooManyCommands {
        key: String,
        count: usize,
        max: usize,
    },
}

/// `{valid, errors}` view of a validation result for display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl From<Result<(), Vec<ValidationError>>> for ValidationReport {
    fn from(result: Result<(), Vec<ValidationError>>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                errors: Vec::new(),
            },
            Err(errors) => Self {
                valid: false,
                errors: errors.iter().map(ToString::to_string).collect(),
            },
        }
    }
}

/// Check an alias identifier: `^[a-zA-Z_][a-zA-Z0-9_]*$`.
pub fn is_valid_alias_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Validates keys, alias names and chains against a key catalog and
/// chain length limit.
#[derive(Debug, Clone)]
pub struct Validator {
    keys: KeyCatalog,
    max_chain_len: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&FormatConfig::default())
    }
}

impl Validator {
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            keys: KeyCatalog::new(config.max_function_key),
            max_chain_len: config.max_chain_len,
        }
    }

    pub fn keys(&self) -> &KeyCatalog {
        &self.keys
    }

    pub fn max_chain_len(&self) -> usize {
        self.max_chain_len
    }

    pub fn is_valid_key(&self, key: &str) -> bool {
        self.keys.is_valid(key)
    }

    /// Validate a keybind: key name, emptiness, empty elements, length.
    pub fn validate_chain<C: AsRef<str>>(
        &self,
        key: &str,
        commands: &[C],
    ) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if !self.keys.is_valid(key) {
            errors.push(ValidationError::InvalidKey {
                key: key.to_string(),
            });
        }
        self.check_commands(key, commands, &mut errors);
        finish(errors)
    }

    /// Validate an alias: identifier, emptiness, empty elements, length.
    pub fn validate_alias<C: AsRef<str>>(
        &self,
        name: &str,
        commands: &[C],
    ) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if !is_valid_alias_name(name) {
            errors.push(ValidationError::InvalidAliasName {
                name: name.to_string(),
            });
        }
        self.check_commands(name, commands, &mut errors);
        finish(errors)
    }

    fn check_commands<C: AsRef<str>>(
        &self,
        owner: &str,
        commands: &[C],
        errors: &mut Vec<ValidationError>,
    ) {
        if commands.is_empty() {
            errors.push(ValidationError::EmptyChain {
                key: owner.to_string(),
            });
        }
        for (index, cmd) in commands.iter().enumerate() {
            if cmd.as_ref().trim().is_empty() {
                errors.push(ValidationError::EmptyCommand {
                    key: owner.to_string(),
                    index,
                });
            }
        }
        if commands.len() > self.max_chain_len {
            errors.push(ValidationError::TooManyCommands {
                key: owner.to_string(),
                count: commands.len(),
                max: self.max_chain_len,
            });
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
