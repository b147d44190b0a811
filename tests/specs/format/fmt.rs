//! `stobind fmt` specs

use crate::prelude::*;

const FORMATTED: &str = "\
; Fires everything
alias AttackAll <& FireAll $$ Target_Enemy_Near &>

# Function Keys
F1 \"AttackAll\" \"\"

# Special Keys
Space \"+TrayExecByTray 0 0 $$ +TrayExecByTray 0 1\" \"\"
";

#[test]
fn canonical_output() {
    cli()
        .args(&["fmt", "-"])
        .stdin(SPACE_BINDS)
        .passes()
        .stdout_eq(FORMATTED)
        .stderr_empty();
}

#[test]
fn formatting_is_a_fixed_point() {
    cli()
        .args(&["fmt", "-"])
        .stdin(FORMATTED)
        .passes()
        .stdout_eq(FORMATTED);
}

#[test]
fn keys_are_grouped_and_sorted() {
    let input = "\
Ctrl+A \"Target_Self\" \"\"
F10 \"FireAll\" \"\"
B \"Target_Clear\" \"\"
F2 \"FireAll\" \"\"
";
    cli().args(&["fmt", "-"]).stdin(input).passes().stdout_eq(
        "\
# Function Keys
F2 \"FireAll\" \"\"
F10 \"FireAll\" \"\"

# Letter Keys
B \"Target_Clear\" \"\"

# Modifier Combinations
Ctrl+A \"Target_Self\" \"\"
",
    );
}

#[test]
fn no_headings() {
    cli()
        .args(&["fmt", "-", "--no-headings"])
        .stdin("F2 \"FireAll\" \"\"\nB \"Target_Clear\" \"\"\n")
        .passes()
        .stdout_eq("F2 \"FireAll\" \"\"\n\nB \"Target_Clear\" \"\"\n");
}

#[test]
fn stabilize_everything_except_one_key() {
    cli()
        .args(&["fmt", "-", "--stabilize", "--no-stabilize-key", "F2"])
        .stdin("F1 \"A $$ B $$ C\" \"\"\nF2 \"A $$ B\" \"\"\n")
        .passes()
        .stdout_eq("# Function Keys\nF1 \"A $$ B $$ C $$ B $$ A\" \"\"\nF2 \"A $$ B\" \"\"\n");
}

#[test]
fn stabilize_one_alias() {
    cli()
        .args(&["fmt", "-", "--stabilize-alias", "Go"])
        .stdin("alias Go <& A $$ B &>\nalias Stay <& A $$ B &>\n")
        .passes()
        .stdout_eq("alias Go <& A $$ B $$ A &>\nalias Stay <& A $$ B &>\n");
}

#[test]
fn header_and_footer() {
    cli()
        .args(&["fmt", "-", "--header", "My binds\nv2", "--footer", "end"])
        .stdin("F1 \"FireAll\" \"\"\n")
        .passes()
        .stdout_eq("# My binds\n# v2\n\n# Function Keys\nF1 \"FireAll\" \"\"\n\n# end\n");
}

#[test]
fn dropped_lines_warn_on_stderr() {
    cli()
        .args(&["fmt", "-"])
        .stdin(BROKEN_BINDS)
        .passes()
        .stdout_eq("# Function Keys\nF1 \"FireAll\" \"\"\nF2 \"Target_Self\" \"\"\n")
        .stderr_has("warning: line 2: Invalid keybind format (line dropped)")
        .stderr_has("warning: line 3: Invalid alias name '1Bad' (line dropped)");
}

#[test]
fn json_output() {
    let run = cli()
        .args(&["-o", "json", "fmt", "-"])
        .stdin(BROKEN_BINDS)
        .passes();
    let json = run.json();
    assert_eq!(
        json["text"],
        "# Function Keys\nF1 \"FireAll\" \"\"\nF2 \"Target_Self\" \"\"\n"
    );
    assert_eq!(json["errors"][0]["line"], 2);
}
