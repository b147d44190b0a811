// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical text generation
//!
//! Layout: header, aliases sorted by name, keybinds grouped and sorted by
//! key, footer. Sections are separated by one blank line.

use stobind_core::{
    group_keys, mirror, AliasEntry, FormatConfig, KeybindEntry, Profile, StabilizationPolicy,
    CHAIN_SEPARATOR,
};

/// Options for [`serialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Leading comment block. Lines not already starting with `#` or `;`
    /// are prefixed with `# `.
    pub header: Option<String>,
    /// Trailing comment block, formatted like the header.
    pub footer: Option<String>,
    pub policy: StabilizationPolicy,
    /// Emit `# <Group>` before each key group.
    pub group_headings: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            header: None,
            footer: None,
            policy: StabilizationPolicy::default(),
            group_headings: true,
        }
    }
}

impl From<&FormatConfig> for SerializeOptions {
    fn from(config: &FormatConfig) -> Self {
        Self {
            policy: config.stabilize.clone(),
            group_headings: config.group_headings,
            ..Self::default()
        }
    }
}

/// Render a profile as keybind file text.
///
/// Chains are mirrored where the policy asks for it. The input is never
/// modified, so serializing the same profile twice yields the same text.
pub fn serialize(profile: &Profile, options: &SerializeOptions) -> String {
    let mut sections: Vec<String> = Vec::new();

    if let Some(header) = non_blank(&options.header) {
        sections.push(comment_block(header));
    }

    let mut aliases: Vec<&AliasEntry> = profile.aliases.values().collect();
    aliases.sort_by(|a, b| a.name.cmp(&b.name));
    if !aliases.is_empty() {
        let mut block = String::new();
        for alias in aliases {
            let stabilize = options.policy.stabilize_alias(&alias.name);
            block.push_str(&alias_lines(alias, stabilize));
        }
        sections.push(block);
    }

    for (group, keys) in group_keys(profile.keybinds.keys().map(String::as_str)) {
        let mut block = String::new();
        if options.group_headings {
            block.push_str(&format!("# {}\n", group.label()));
        }
        for key in keys {
            if let Some(entry) = profile.keybinds.get(key) {
                let stabilize = options.policy.stabilize_key(key);
                block.push_str(&keybind_line(entry, stabilize));
            }
        }
        sections.push(block);
    }

    if let Some(footer) = non_blank(&options.footer) {
        sections.push(comment_block(footer));
    }

    tracing::debug!(
        keybinds = profile.keybinds.len(),
        aliases = profile.aliases.len(),
        "serialized profile"
    );
    sections.join("\n")
}

/// `<Key> "<cmd1> $$ <cmd2>" ""`
fn keybind_line(entry: &KeybindEntry, stabilize: bool) -> String {
    format!(
        "{} \"{}\" \"\"\n",
        entry.key,
        chain_text(entry.command_strings(), stabilize)
    )
}

/// Optional `; <description>` line, then `alias <Name> <& <cmds> &>`.
fn alias_lines(alias: &AliasEntry, stabilize: bool) -> String {
    let mut out = String::new();
    if let Some(description) = alias.description.as_deref() {
        // Descriptions occupy exactly one comment line.
        let description = description.split_whitespace().collect::<Vec<_>>().join(" ");
        if !description.is_empty() {
            out.push_str(&format!("; {}\n", description));
        }
    }
    let chain = chain_text(alias.command_strings(), stabilize);
    if chain.is_empty() {
        out.push_str(&format!("alias {} <& &>\n", alias.name));
    } else {
        out.push_str(&format!("alias {} <& {} &>\n", alias.name, chain));
    }
    out
}

fn chain_text(commands: Vec<&str>, stabilize: bool) -> String {
    let commands = if stabilize { mirror(&commands) } else { commands };
    commands.join(CHAIN_SEPARATOR)
}

fn non_blank(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.trim().is_empty())
}

fn comment_block(text: &str) -> String {
    text.lines()
        .map(|line| {
            let line = line.trim_end();
            if line.starts_with('#') || line.starts_with(';') {
                format!("{}\n", line)
            } else if line.is_empty() {
                "#\n".to_string()
            } else {
                format!("# {}\n", line)
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "serialize_tests.rs"]
mod tests;
