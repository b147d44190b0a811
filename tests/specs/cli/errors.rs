//! CLI error handling specs
//!
//! Verify error messages and exit codes for bad input.

use crate::prelude::*;

#[test]
fn missing_file_reports_path() {
    let temp = Project::empty();
    temp.stobind()
        .args(&["parse", "nope.txt"])
        .exits(1)
        .stderr_has("Error: failed to read nope.txt");
}

#[test]
fn unknown_subcommand_is_usage_error() {
    cli()
        .args(&["frobnicate"])
        .exits(2)
        .stderr_has("unrecognized subcommand");
}

#[test]
fn bad_output_format_is_usage_error() {
    cli()
        .args(&["-o", "yaml", "parse", "-"])
        .exits(2)
        .stderr_has("invalid value 'yaml'");
}

#[test]
fn classify_requires_a_command() {
    cli().args(&["classify"]).exits(2);
}
