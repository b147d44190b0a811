//! `stobind classify` specs

use crate::prelude::*;

#[test]
fn tray_chain_shows_range() {
    cli()
        .args(&[
            "classify",
            "+TrayExecByTray 0 0 $$ +TrayExecByTray 0 1 $$ +TrayExecByTray 0 2",
        ])
        .passes()
        .stdout_has("COMMAND")
        .stdout_has("Execute Tray 1 Slot 3")
        .stdout_has("slot=2 tray=0")
        .stdout_has("range: ")
        .stdout_has("Execute Tray 1 Slots 1-3");
}

#[test]
fn words_are_joined() {
    let run = cli()
        .args(&["-o", "json", "classify", "+TrayExecByTray", "2", "5"])
        .passes();
    let json = run.json();
    assert_eq!(json["commands"][0]["command"], "+TrayExecByTray 2 5");
    assert_eq!(json["commands"][0]["text"], "Execute Tray 3 Slot 6");
    assert!(json["range"].is_null());
}

#[test]
fn negative_arguments_pass_through() {
    cli()
        .args(&["classify", "throttleadjust", "-25"])
        .passes()
        .stdout_has("throttleadjust -25");
}

#[test]
fn unknown_commands_are_custom() {
    let run = cli()
        .args(&["-o", "json", "classify", "+power_exec Reroute_Weapons"])
        .passes();
    assert_eq!(run.json()["commands"][0]["type"], "custom");
}
