// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stobind parse`: parse a keybind file and summarize it.

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use stobind_core::ParsedDocument;

use super::plural;
use crate::color;
use crate::context::{read_input, Context};
use crate::output::{chain_summary, print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct ParseArgs {
    /// Keybind file, or `-` for stdin
    pub file: PathBuf,
}

pub fn handle(args: ParseArgs, ctx: &Context) -> Result<()> {
    let text = read_input(&args.file)?;
    let doc = ctx.parser().parse(&text);

    match ctx.format {
        OutputFormat::Json => print_json(&doc)?,
        OutputFormat::Text => write_summary(&doc, &mut std::io::stdout().lock())?,
    }
    Ok(())
}

/// One-line totals, e.g. `2 keybinds, 1 alias, 0 errors`.
pub fn totals(doc: &ParsedDocument) -> String {
    format!(
        "{}, {}, {}",
        plural(doc.keybinds.len(), "keybind"),
        plural(doc.aliases.len(), "alias"),
        plural(doc.errors.len(), "error")
    )
}

fn write_summary(doc: &ParsedDocument, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", color::header(&totals(doc)))?;

    let mut keybinds = Table::new(vec![Column::left("KEY"), Column::left("COMMANDS")]);
    for entry in doc.keybinds.values() {
        keybinds.row(vec![
            entry.key.clone(),
            chain_summary(&entry.command_strings()),
        ]);
    }
    if !keybinds.is_empty() {
        writeln!(out)?;
        keybinds.render(out)?;
    }

    let mut aliases = Table::new(vec![
        Column::left("ALIAS"),
        Column::left("COMMANDS").with_max(60),
        Column::muted("DESCRIPTION"),
    ]);
    for alias in doc.aliases.values() {
        aliases.row(vec![
            alias.name.clone(),
            chain_summary(&alias.command_strings()),
            alias.description.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    if !aliases.is_empty() {
        writeln!(out)?;
        aliases.render(out)?;
    }

    if !doc.errors.is_empty() {
        writeln!(out)?;
        for error in &doc.errors {
            writeln!(out, "{}", error)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
