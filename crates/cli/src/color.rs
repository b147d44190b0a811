// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI styling for text output.

use std::io::IsTerminal;
use stobind_core::CommandCategory;

pub mod codes {
    /// Section headers and totals: steel blue
    pub const HEADER: u8 = 74;
    /// Descriptions, parameters: darker grey
    pub const MUTED: u8 = 240;

    pub const TARGETING: u8 = 208;
    pub const COMBAT: u8 = 167;
    pub const TRAY: u8 = 110;
    pub const POWER: u8 = 179;
    pub const MOVEMENT: u8 = 114;
    pub const COMMUNICATION: u8 = 140;
    pub const SYSTEM: u8 = 250;
    /// Unrecognized commands
    pub const CUSTOM: u8 = 245;
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

/// Header color, when color is enabled.
pub fn header(text: &str) -> String {
    if should_colorize() {
        apply_header(text)
    } else {
        text.to_string()
    }
}

pub(crate) fn apply_header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub(crate) fn apply_muted(text: &str) -> String {
    paint(codes::MUTED, text)
}

pub fn category_code(category: CommandCategory) -> u8 {
    match category {
        CommandCategory::Targeting => codes::TARGETING,
        CommandCategory::Combat => codes::COMBAT,
        CommandCategory::Tray => codes::TRAY,
        CommandCategory::Power => codes::POWER,
        CommandCategory::Movement => codes::MOVEMENT,
        CommandCategory::Communication => codes::COMMUNICATION,
        CommandCategory::System => codes::SYSTEM,
        CommandCategory::Custom => codes::CUSTOM,
    }
}

/// Color a cell holding a category id. Other text is returned as is.
pub(crate) fn apply_category(text: &str) -> String {
    let id = text.trim_end();
    if id.is_empty() {
        return text.to_string();
    }
    paint(category_code(CommandCategory::from_id(id)), text)
}

/// `ok:` in green or `invalid:` in red, followed by `detail`.
pub fn status(ok: bool, detail: &str) -> String {
    let (label, code) = if ok { ("ok:", 32) } else { ("invalid:", 31) };
    if should_colorize() {
        format!("\x1b[{code}m{label}{RESET} {detail}")
    } else {
        format!("{label} {detail}")
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
