// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key names: the catalog of bindable keys, key ordering, and grouping
//!
//! Membership is case-insensitive. A modifier combination is one of
//! [`MODIFIERS`] joined with `+` to any base key.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Modifier prefixes accepted in `<Modifier>+<Key>` combinations.
pub const MODIFIERS: &[&str] = &["Ctrl", "Alt", "Shift", "Control"];

/// Highest function key the game client exposes.
pub const MAX_FUNCTION_KEY: u8 = 24;

/// Named keyboard keys.
pub const SPECIAL_KEYS: &[&str] = &[
    "Space",
    "Tab",
    "Enter",
    "Escape",
    "Backspace",
    "Up",
    "Down",
    "Left",
    "Right",
    "Home",
    "End",
    "PageUp",
    "PageDown",
    "Insert",
    "Delete",
    "CapsLock",
    "Pause",
    "ScrollLock",
    "Tilde",
    "Minus",
    "Equals",
    "LeftBracket",
    "RightBracket",
    "Backslash",
    "Semicolon",
    "Apostrophe",
    "Comma",
    "Period",
    "Slash",
];

/// Numeric keypad keys other than the digits.
const NUMPAD_EXTRA: &[&str] = &[
    "Add",
    "Subtract",
    "Multiply",
    "Divide",
    "Decimal",
    "NumpadEnter",
];

/// Mouse buttons, drags, clicks and wheel directions.
const MOUSE_KEYS: &[&str] = &[
    "Lbutton",
    "Rbutton",
    "Mbutton",
    "Button4",
    "Button5",
    "Lclick",
    "Rclick",
    "Mclick",
    "Ldblclick",
    "Rdblclick",
    "Mdblclick",
    "Leftdrag",
    "Rightdrag",
    "Middledrag",
    "Wheelplus",
    "Wheelminus",
];

/// Gamepad buttons, d-pad, sticks and triggers.
const GAMEPAD_KEYS: &[&str] = &[
    "Joypad_up",
    "Joypad_down",
    "Joypad_left",
    "Joypad_right",
    "Lstick_up",
    "Lstick_down",
    "Lstick_left",
    "Lstick_right",
    "Rstick_up",
    "Rstick_down",
    "Rstick_left",
    "Rstick_right",
    "Lefttrigger",
    "Righttrigger",
    "Leftshoulder",
    "Rightshoulder",
    "Joy_start",
    "Joy_back",
];

/// Number of numbered gamepad buttons (`Joy1`..`Joy16`).
const JOY_BUTTONS: u8 = 16;

/// Set of bindable key names.
#[derive(Debug, Clone)]
pub struct KeyCatalog {
    names: HashSet<String>,
    max_function_key: u8,
}

impl Default for KeyCatalog {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_FUNCTION_KEY)
    }
}

impl KeyCatalog {
    /// Build the catalog with function keys `F1..=F{max_function_key}`.
    ///
    /// `max_function_key` is clamped to [`MAX_FUNCTION_KEY`].
    pub fn new(max_function_key: u8) -> Self {
        let max_function_key = max_function_key.min(MAX_FUNCTION_KEY);
        let base = base_keys(max_function_key);
        let mut names: HashSet<String> = HashSet::with_capacity(base.len() * (MODIFIERS.len() + 1));
        for key in &base {
            for modifier in MODIFIERS {
                names.insert(format!("{}+{}", modifier, key).to_lowercase());
            }
        }
        names.extend(base.into_iter().map(|k| k.to_lowercase()));
        Self {
            names,
            max_function_key,
        }
    }

    pub fn max_function_key(&self) -> u8 {
        self.max_function_key
    }

    /// Case-insensitive membership test. Empty input is invalid.
    pub fn is_valid(&self, key: &str) -> bool {
        !key.is_empty() && self.names.contains(&key.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Every unmodified key name.
fn base_keys(max_function_key: u8) -> Vec<String> {
    let mut keys = Vec::new();
    keys.extend((1..=max_function_key).map(|n| format!("F{}", n)));
    keys.extend(('A'..='Z').map(String::from));
    keys.extend((0..=9).map(|n| n.to_string()));
    keys.extend((0..=9).map(|n| format!("numpad{}", n)));
    keys.extend((1..=JOY_BUTTONS).map(|n| format!("Joy{}", n)));
    keys.extend(
        SPECIAL_KEYS
            .iter()
            .chain(NUMPAD_EXTRA)
            .chain(MOUSE_KEYS)
            .chain(GAMEPAD_KEYS)
            .map(|k| k.to_string()),
    );
    keys
}

/// Sort position of a single key.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Function(u32),
    /// Top-row digits sort before numpad digits.
    Number(bool, u32),
    Letter(char),
    Other(String, String),
}

fn function_number(key: &str) -> Option<u32> {
    let rest = key.strip_prefix('F').or_else(|| key.strip_prefix('f'))?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

fn number_key(key: &str) -> Option<(bool, u32)> {
    let lower = key.to_ascii_lowercase();
    let (numpad, digit) = match lower.strip_prefix("numpad") {
        Some(rest) => (true, rest),
        None => (false, lower.as_str()),
    };
    let mut chars = digit.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).map(|d| (numpad, d)),
        _ => None,
    }
}

fn letter_key(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

fn sort_key(key: &str) -> SortKey {
    if let Some(n) = function_number(key) {
        return SortKey::Function(n);
    }
    if let Some((numpad, d)) = number_key(key) {
        return SortKey::Number(numpad, d);
    }
    if let Some(c) = letter_key(key) {
        return SortKey::Letter(c);
    }
    SortKey::Other(key.to_lowercase(), key.to_string())
}

/// Key comparator: function keys (numerically), then numbers, then
/// letters, then everything else case-insensitively.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Section a key is emitted under when serializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum KeyGroup {
    Function,
    Number,
    Letter,
    Special,
    Modifier,
    Other,
}

impl KeyGroup {
    /// All groups in emission order.
    pub const ORDER: [KeyGroup; 6] = [
        KeyGroup::Function,
        KeyGroup::Number,
        KeyGroup::Letter,
        KeyGroup::Special,
        KeyGroup::Modifier,
        KeyGroup::Other,
    ];

    /// Classify a key. Anything containing `+` is a modifier combination.
    pub fn of(key: &str) -> Self {
        if key.len() > 1 && key.contains('+') {
            return KeyGroup::Modifier;
        }
        match sort_key(key) {
            SortKey::Function(_) => KeyGroup::Function,
            SortKey::Number(..) => KeyGroup::Number,
            SortKey::Letter(_) => KeyGroup::Letter,
            SortKey::Other(..) => {
                if SPECIAL_KEYS.iter().any(|s| s.eq_ignore_ascii_case(key)) {
                    KeyGroup::Special
                } else {
                    KeyGroup::Other
                }
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KeyGroup::Function => "Function Keys",
            KeyGroup::Number => "Number Keys",
            KeyGroup::Letter => "Letter Keys",
            KeyGroup::Special => "Special Keys",
            KeyGroup::Modifier => "Modifier Combinations",
            KeyGroup::Other => "Other",
        }
    }
}

impl fmt::Display for KeyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Partition keys into non-empty groups, in [`KeyGroup::ORDER`], each sorted
/// with [`compare_keys`].
pub fn group_keys<'a, I>(keys: I) -> Vec<(KeyGroup, Vec<&'a str>)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<(KeyGroup, Vec<&'a str>)> =
        KeyGroup::ORDER.iter().map(|g| (*g, Vec::new())).collect();
    for key in keys {
        let group = KeyGroup::of(key);
        if let Some((_, members)) = groups.iter_mut().find(|(g, _)| *g == group) {
            members.push(key);
        }
    }
    groups.retain(|(_, members)| !members.is_empty());
    for (_, members) in &mut groups {
        members.sort_by(|a, b| compare_keys(a, b));
    }
    groups
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod tests;
