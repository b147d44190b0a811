// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stobind validate`: check a keybind file; exit 2 on any problem.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use stobind_core::{LineError, ParsedDocument, ValidationError};
use stobind_format::validate_document;

use super::plural;
use crate::color;
use crate::context::{read_input, Context};
use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

/// Exit code when the file has line or chain errors.
pub const EXIT_INVALID: i32 = 2;

#[derive(Args)]
pub struct ValidateArgs {
    /// Keybind file, or `-` for stdin
    pub file: PathBuf,
}

/// Everything wrong with one file.
#[derive(Debug, Serialize)]
pub struct Report {
    pub valid: bool,
    pub keybinds: usize,
    pub aliases: usize,
    pub line_errors: Vec<LineError>,
    pub chain_errors: Vec<String>,
}

impl Report {
    pub fn new(doc: &ParsedDocument, chain_errors: &[ValidationError]) -> Self {
        Self {
            valid: doc.is_clean() && chain_errors.is_empty(),
            keybinds: doc.keybinds.len(),
            aliases: doc.aliases.len(),
            line_errors: doc.errors.clone(),
            chain_errors: chain_errors.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn problem_count(&self) -> usize {
        self.line_errors.len() + self.chain_errors.len()
    }
}

pub fn handle(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let text = read_input(&args.file)?;
    let parser = ctx.parser();
    let doc = parser.parse(&text);
    let chain_errors = validate_document(&doc, parser.validator());
    let report = Report::new(&doc, &chain_errors);

    match ctx.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_text(&report),
    }

    if report.valid {
        Ok(())
    } else {
        Err(ExitError::new(EXIT_INVALID, String::new()).into())
    }
}

fn print_text(report: &Report) {
    for error in &report.line_errors {
        println!("{}", error);
    }
    for error in &report.chain_errors {
        println!("{}", error);
    }
    let totals = format!(
        "{}, {}",
        plural(report.keybinds, "keybind"),
        plural(report.aliases, "alias")
    );
    if report.valid {
        println!("{}", color::status(true, &totals));
    } else {
        let detail = format!("{} ({})", plural(report.problem_count(), "problem"), totals);
        println!("{}", color::status(false, &detail));
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
