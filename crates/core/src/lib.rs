// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stobind-core: data model, catalogs and validation for keybind files

pub mod catalog;
pub mod command;
pub mod config;
pub mod document;
pub mod keys;
pub mod stabilize;
pub mod validate;

pub use catalog::{
    CatalogEntry, CatalogError, CategoryDef, CommandCatalog, CommandDef, Environment, ParamDef,
    ParamKind,
};
pub use command::{
    humanize, AtomicCommand, Classified, CommandCategory, ParamValue, Parameters, CUSTOM_ICON,
};
pub use config::{ConfigError, FormatConfig};
pub use document::{
    AliasEntry, Comment, KeybindEntry, LineError, ParsedDocument, Profile, CHAIN_SEPARATOR,
};
pub use keys::{compare_keys, group_keys, KeyCatalog, KeyGroup};
pub use stabilize::{mirror, StabilizationPolicy};
pub use validate::{is_valid_alias_name, ValidationError, ValidationReport, Validator};
