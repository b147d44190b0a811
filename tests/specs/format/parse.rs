//! `stobind parse` specs

use crate::prelude::*;

#[test]
fn text_summary() {
    let temp = Project::empty();
    temp.file("binds.txt", SPACE_BINDS);

    temp.stobind().args(&["parse", "binds.txt"]).passes().stdout_eq(
        "\
2 keybinds, 1 alias, 0 errors

KEY    COMMANDS
F1     AttackAll
Space  +TrayExecByTray 0 0 $$ +TrayExecByTray 0 1

ALIAS      COMMANDS                      DESCRIPTION
AttackAll  FireAll $$ Target_Enemy_Near  Fires everything
",
    );
}

#[test]
fn reads_stdin() {
    cli()
        .args(&["parse", "-"])
        .stdin(SPACE_BINDS)
        .passes()
        .stdout_has("2 keybinds, 1 alias, 0 errors");
}

#[test]
fn bad_lines_are_listed_but_not_fatal() {
    cli()
        .args(&["parse", "-"])
        .stdin(BROKEN_BINDS)
        .passes()
        .stdout_has("2 keybinds, 0 aliases, 2 errors")
        .stdout_has("line 2: Invalid keybind format")
        .stdout_has("line 3: Invalid alias name '1Bad'");
}

#[test]
fn json_document() {
    let run = cli()
        .args(&["parse", "-", "-o", "json"])
        .stdin(SPACE_BINDS)
        .passes();
    let json = run.json();

    let space = &json["keybinds"]["Space"]["commands"];
    assert_eq!(space[0]["command"], "+TrayExecByTray 0 0");
    assert_eq!(space[0]["type"], "tray");
    assert_eq!(space[0]["text"], "Execute Tray 1 Slot 1");
    assert_eq!(space[1]["id"], "Space#1");

    let alias = &json["aliases"]["AttackAll"];
    assert_eq!(alias["description"], "Fires everything");
    assert_eq!(alias["commands"][1]["command"], "Target_Enemy_Near");
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(0));
}

#[test]
fn unknown_function_key_is_rejected() {
    cli()
        .args(&["parse", "-"])
        .stdin("F13 \"FireAll\" \"\"\n")
        .passes()
        .stdout_has("line 1: Invalid key name 'F13'");
}
