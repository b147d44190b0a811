// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-file import scenarios.

use stobind_core::{CommandCatalog, CommandCategory, FormatConfig, Profile};
use stobind_format::{parse, validate_document, Parser};

const SPACE_BINDS: &str = r#"
# Space combat binds
; Full volley on the nearest target
alias Volley <& Target_Enemy_Near $$ FireAll &>
alias Call "team "attack $Target""

F1 "Volley" ""
F2 "+STOTrayExecByTray 0 0 $$ +STOTrayExecByTray 0 1 $$ +STOTrayExecByTray 0 2" ""
F3 "" ""
Space "+fullimpulse" ""
Ctrl+T "Call" ""
/bind Shift+1 "TrayExecByTrayWithBackup 1 2 0 3 0"
"#;

#[test]
fn space_binds_parse_cleanly() {
    let doc = super::parse_clean(SPACE_BINDS);

    let keys: Vec<&str> = doc.keybinds.keys().map(String::as_str).collect();
    assert_eq!(keys, ["F1", "F2", "F3", "Space", "Ctrl+T", "Shift+1"]);

    let names: Vec<&str> = doc.aliases.keys().map(String::as_str).collect();
    assert_eq!(names, ["Volley", "Call"]);

    assert_eq!(doc.comments.len(), 2);
    assert_eq!(doc.comments[0].line, 2);
}

#[test]
fn alias_description_and_classification() {
    let doc = super::parse_clean(SPACE_BINDS);

    let volley = doc.alias("Volley").unwrap();
    assert_eq!(
        volley.description.as_deref(),
        Some("Full volley on the nearest target")
    );
    assert_eq!(volley.commands[0].category(), CommandCategory::Targeting);
    assert_eq!(volley.commands[1].category(), CommandCategory::Combat);

    let call = doc.alias("Call").unwrap();
    assert_eq!(call.command_strings(), ["team \"attack $Target\""]);
    assert_eq!(call.commands[0].category(), CommandCategory::Communication);
}

#[test]
fn tray_chain_is_classified_per_command() {
    let doc = super::parse_clean(SPACE_BINDS);
    let f2 = doc.keybind("F2").unwrap();
    let labels: Vec<&str> = f2.commands.iter().map(|c| c.text()).collect();
    assert_eq!(
        labels,
        [
            "Execute Tray 1 Slot 1",
            "Execute Tray 1 Slot 2",
            "Execute Tray 1 Slot 3"
        ]
    );

    let parser = Parser::new(CommandCatalog::builtin(), &FormatConfig::default());
    let range = parser.classifier().classify_range(&f2.commands).unwrap();
    assert_eq!(range.text, "Execute Tray 1 Slots 1-3");
}

#[test]
fn alias_invocation_is_custom() {
    let doc = super::parse_clean(SPACE_BINDS);
    let f1 = doc.keybind("F1").unwrap();
    assert_eq!(f1.commands[0].category(), CommandCategory::Custom);
}

#[test]
fn document_validates() {
    let doc = super::parse_clean(SPACE_BINDS);
    let parser = Parser::new(CommandCatalog::builtin(), &FormatConfig::default());
    assert!(validate_document(&doc, parser.validator()).is_empty());
}

#[test]
fn hand_edited_file_recovers_from_bad_lines() {
    let text = "\
F1 \"FireAll\" \"\"
this is not a bind
alias 2fast <& FireAll &>
F99 \"FireAll\" \"\"
F2 \"FireTorps\" \"\"
";
    let doc = parse(text);
    super::assert_error_lines(
        &doc,
        &[
            (2, "Invalid keybind format"),
            (3, "Invalid alias name '2fast'"),
            (4, "Invalid key name 'F99'"),
        ],
    );
    assert_eq!(doc.keybinds.len(), 2);
}

#[test]
fn merging_documents_overwrites_by_key() {
    let mut profile = Profile::from(parse("F1 \"a $$ b\" \"\"\nalias X <& one &>"));
    profile.apply(parse("F1 \"c\" \"\"\nF2 \"d\" \"\"\nalias X <& two &>"));

    assert_eq!(profile.keybinds["F1"].command_strings(), ["c"]);
    assert_eq!(profile.keybinds["F2"].command_strings(), ["d"]);
    assert_eq!(profile.aliases["X"].command_strings(), ["two"]);
}
