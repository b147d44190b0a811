// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stobind classify`: show how a command chain is interpreted.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use stobind_core::{AtomicCommand, Classified};
use stobind_format::{parse_chain, Classifier};

use crate::context::Context;
use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Command chain, e.g. `FireAll $$ +TrayExecByTray 0 0`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Classification {
    pub commands: Vec<AtomicCommand>,
    pub range: Option<Classified>,
}

impl Classification {
    pub fn new(raw: &str, classifier: &Classifier<'_>) -> Self {
        let commands = parse_chain(raw, "cli", classifier);
        let range = classifier.classify_range(&commands);
        Self { commands, range }
    }
}

pub fn handle(args: ClassifyArgs, ctx: &Context) -> Result<()> {
    let raw = args.command.join(" ");
    let parser = ctx.parser();
    let result = Classification::new(&raw, parser.classifier());

    match ctx.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => write_text(&result, &mut std::io::stdout().lock())?,
    }
    Ok(())
}

/// `name=value` pairs, or `-` when the command has none.
pub fn params_summary(command: &AtomicCommand) -> String {
    match command.parameters() {
        Some(params) if !params.is_empty() => params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" "),
        _ => "-".to_string(),
    }
}

fn write_text(result: &Classification, out: &mut impl Write) -> Result<()> {
    let mut table = Table::new(vec![
        Column::left("COMMAND").with_max(40),
        Column::category("CATEGORY"),
        Column::muted("PARAMS"),
        Column::left("TEXT"),
    ]);
    for command in &result.commands {
        table.row(vec![
            command.command().to_string(),
            command.category().to_string(),
            params_summary(command),
            format!("{} {}", command.icon(), command.text()),
        ]);
    }
    table.render(out)?;
    if let Some(range) = &result.range {
        writeln!(out, "range: {} {}", range.icon, range.text)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
