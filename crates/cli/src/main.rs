// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stobind - Star Trek Online keybind and alias file tool

mod color;
mod commands;
mod context;
mod env;
mod exit_error;
mod output;
mod table;

use output::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{classify, fmt, parse, validate};
use std::path::PathBuf;

use crate::context::Context;

#[derive(Parser)]
#[command(
    name = "stobind",
    version,
    about = "Parse, validate and format Star Trek Online keybind files"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Config file (TOML)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Command catalog (JSON) replacing the built-in one
    #[arg(long, value_name = "PATH", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a keybind file and summarize its contents
    Parse(parse::ParseArgs),
    /// Rewrite a keybind file in canonical form
    Fmt(fmt::FmtArgs),
    /// Check a keybind file; exits 2 if anything is wrong
    Validate(validate::ValidateArgs),
    /// Show how a command chain is classified
    Classify(classify::ClassifyArgs),
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr so stdout stays clean for formatted output.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand provided: print help and exit 0
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let ctx = Context::load(cli.config.as_deref(), cli.catalog.as_deref(), cli.output)?;
    tracing::debug!(commands = ctx.catalog.len(), "catalog loaded");

    match command {
        Commands::Parse(args) => parse::handle(args, &ctx)?,
        Commands::Fmt(args) => fmt::handle(args, &ctx)?,
        Commands::Validate(args) => validate::handle(args, &ctx)?,
        Commands::Classify(args) => classify::handle(args, &ctx)?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
