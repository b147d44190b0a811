//! Help and version output specs

use crate::prelude::*;

#[test]
fn no_subcommand_prints_help() {
    cli()
        .passes()
        .stdout_has("Usage:")
        .stdout_has("parse")
        .stdout_has("fmt")
        .stdout_has("validate")
        .stdout_has("classify");
}

#[test]
fn version_flag() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_has("stobind 0.1.0");
}

#[test]
fn fmt_help_lists_stabilize_flags() {
    cli()
        .args(&["fmt", "--help"])
        .passes()
        .stdout_has("--stabilize")
        .stdout_has("--stabilize-key <KEY>")
        .stdout_has("--no-headings");
}
