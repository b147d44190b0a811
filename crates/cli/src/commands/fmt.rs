// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stobind fmt`: rewrite a keybind file in canonical form.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use stobind_core::{FormatConfig, Profile};
use stobind_format::{serialize, SerializeOptions};

use crate::context::{read_input, Context};
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct FmtArgs {
    /// Keybind file, or `-` for stdin
    pub file: PathBuf,

    /// Mirror every chain for deterministic execution order
    #[arg(long)]
    pub stabilize: bool,

    /// Mirror this key's chain (repeatable)
    #[arg(long = "stabilize-key", value_name = "KEY")]
    pub stabilize_keys: Vec<String>,

    /// Never mirror this key's chain, even with --stabilize (repeatable)
    #[arg(long = "no-stabilize-key", value_name = "KEY")]
    pub no_stabilize_keys: Vec<String>,

    /// Mirror this alias's chain (repeatable)
    #[arg(long = "stabilize-alias", value_name = "NAME")]
    pub stabilize_aliases: Vec<String>,

    /// Never mirror this alias's chain (repeatable)
    #[arg(long = "no-stabilize-alias", value_name = "NAME")]
    pub no_stabilize_aliases: Vec<String>,

    /// Comment block placed before everything else
    #[arg(long)]
    pub header: Option<String>,

    /// Comment block placed after everything else
    #[arg(long)]
    pub footer: Option<String>,

    /// Omit the `# <Group>` heading before each key group
    #[arg(long)]
    pub no_headings: bool,
}

impl FmtArgs {
    /// Layer command-line overrides on top of the configured options.
    pub fn options(&self, config: &FormatConfig) -> SerializeOptions {
        let mut options = SerializeOptions::from(config);
        let policy = &mut options.policy;
        if self.stabilize {
            policy.global = true;
        }
        for key in &self.stabilize_keys {
            policy.keys.insert(key.clone(), true);
        }
        for key in &self.no_stabilize_keys {
            policy.keys.insert(key.clone(), false);
        }
        for name in &self.stabilize_aliases {
            policy.aliases.insert(name.clone(), true);
        }
        for name in &self.no_stabilize_aliases {
            policy.aliases.insert(name.clone(), false);
        }
        if self.header.is_some() {
            options.header = self.header.clone();
        }
        if self.footer.is_some() {
            options.footer = self.footer.clone();
        }
        if self.no_headings {
            options.group_headings = false;
        }
        options
    }
}

pub fn handle(args: FmtArgs, ctx: &Context) -> Result<()> {
    let text = read_input(&args.file)?;
    let doc = ctx.parser().parse(&text);
    for error in &doc.errors {
        tracing::debug!(line = error.line, "dropping unparsable line from output");
        eprintln!("warning: {} (line dropped)", error);
    }
    let errors = doc.errors.clone();
    let formatted = serialize(&Profile::from(doc), &args.options(&ctx.config));

    match ctx.format {
        OutputFormat::Text => print!("{}", formatted),
        OutputFormat::Json => print_json(&serde_json::json!({
            "text": formatted,
            "errors": errors,
        }))?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "fmt_tests.rs"]
mod tests;
