// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Join raw command strings for one-line display.
pub fn chain_summary(commands: &[&str]) -> String {
    if commands.is_empty() {
        "(unbound)".to_string()
    } else {
        commands.join(" $$ ")
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
