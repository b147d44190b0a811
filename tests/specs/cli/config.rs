//! Config and catalog resolution specs
//!
//! `--config` beats `STOBIND_CONFIG`; `--catalog` replaces the built-in
//! catalog entirely.

use crate::prelude::*;

const THREE_COMMANDS: &str = "F1 \"FireAll $$ Target_Self $$ Target_Clear\" \"\"\n";

#[test]
fn config_flag_limits_chain_length() {
    let temp = Project::empty();
    temp.file("binds.txt", THREE_COMMANDS);
    temp.file("short.toml", "max_chain_len = 2\n");

    temp.stobind()
        .args(&["--config", "short.toml", "validate", "binds.txt"])
        .exits(2)
        .stdout_has("'F1' has 3 commands; at most 2 are allowed");
}

#[test]
fn config_from_environment() {
    let temp = Project::empty();
    temp.file("binds.txt", THREE_COMMANDS);
    temp.file("short.toml", "max_chain_len = 2\n");

    temp.stobind()
        .env("STOBIND_CONFIG", temp.path().join("short.toml"))
        .args(&["validate", "binds.txt"])
        .exits(2);
}

#[test]
fn config_flag_beats_environment() {
    let temp = Project::empty();
    temp.file("binds.txt", THREE_COMMANDS);
    temp.file("short.toml", "max_chain_len = 2\n");
    temp.file("long.toml", "max_chain_len = 5\n");

    temp.stobind()
        .env("STOBIND_CONFIG", temp.path().join("short.toml"))
        .args(&["--config", "long.toml", "validate", "binds.txt"])
        .passes()
        .stdout_has("ok: 1 keybind, 0 aliases");
}

#[test]
fn default_config_location_is_used() {
    let temp = Project::empty();
    temp.file("binds.txt", THREE_COMMANDS);
    temp.file("xdg/stobind/config.toml", "max_chain_len = 2\n");

    temp.stobind()
        .env("XDG_CONFIG_HOME", temp.path().join("xdg"))
        .args(&["validate", "binds.txt"])
        .exits(2);
}

#[test]
fn invalid_config_is_reported() {
    let temp = Project::empty();
    temp.file("binds.txt", THREE_COMMANDS);
    temp.file("bad.toml", "max_chain_lenn = 2\n");

    temp.stobind()
        .args(&["--config", "bad.toml", "parse", "binds.txt"])
        .exits(1)
        .stderr_has("invalid config TOML");
}

#[test]
fn config_enables_stabilization() {
    let temp = Project::empty();
    temp.file("binds.txt", "F1 \"A $$ B\" \"\"\nF2 \"C $$ D\" \"\"\n");
    temp.file("config.toml", "[stabilize]\nkeys = { F2 = true }\n");

    temp.stobind()
        .args(&["--config", "config.toml", "fmt", "binds.txt"])
        .passes()
        .stdout_eq("# Function Keys\nF1 \"A $$ B\" \"\"\nF2 \"C $$ D $$ C\" \"\"\n");
}

#[test]
fn custom_catalog_replaces_builtin() {
    let temp = Project::empty();
    temp.file(
        "catalog.json",
        r#"{
  "combat": {
    "name": "Combat",
    "icon": "⚔️",
    "commands": {
      "volley": { "command": "Volley", "name": "Fire Volley", "icon": "💥" }
    }
  }
}"#,
    );

    let run = temp
        .stobind()
        .args(&["--catalog", "catalog.json", "-o", "json", "classify", "Volley $$ FireAll"])
        .passes();
    let json = run.json();
    assert_eq!(json["commands"][0]["type"], "combat");
    assert_eq!(json["commands"][0]["text"], "Fire Volley");
    // FireAll is unknown to this catalog
    assert_eq!(json["commands"][1]["type"], "custom");
}

#[test]
fn invalid_catalog_is_reported() {
    let temp = Project::empty();
    temp.file("catalog.json", "[1, 2");

    temp.stobind()
        .args(&["--catalog", "catalog.json", "classify", "FireAll"])
        .exits(1)
        .stderr_has("invalid catalog JSON");
}
