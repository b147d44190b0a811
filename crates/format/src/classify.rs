// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command classification against a command catalog
//!
//! Rules run in order and the first match wins:
//!
//! 1. **exact**: the raw string is an entry's command (case-sensitive) or
//!    display name (case-insensitive).
//! 2. **tray**: `TrayExec` commands, with numeric arguments extracted.
//! 3. **prefix**: the raw command's first token equals an entry's base
//!    keyword, ignoring a leading `+` and `STO` infix. Outside the tray
//!    family the raw string must also literally start with the entry's
//!    command as a whole token, so chat payloads that merely mention a
//!    keyword stay put.
//!
//! Anything else falls back to `custom`.

use serde::Serialize;
use stobind_core::{
    AtomicCommand, CatalogEntry, Classified, CommandCatalog, CommandCategory, ParamKind,
    ParamValue, Parameters,
};

/// Slots per tray in the game client.
const SLOTS_PER_TRAY: u32 = 10;

/// Strip an optional leading `+` and `STO` infix from a command keyword.
fn normalize_keyword(keyword: &str) -> &str {
    let keyword = keyword.strip_prefix('+').unwrap_or(keyword);
    keyword.strip_prefix("STO").unwrap_or(keyword)
}

/// Display number for a 0-based tray or slot index.
fn one_based(index: u32) -> u64 {
    u64::from(index) + 1
}

/// Strip one pair of surrounding double quotes.
fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s)
}

/// A parsed `TrayExecByTray` / `TrayExecByTrayWithBackup` invocation.
///
/// Trays and slots are 0-based as written in the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrayCall {
    pub active: Option<u32>,
    pub tray: u32,
    pub slot: u32,
    pub backup: Option<(u32, u32)>,
}

impl TrayCall {
    /// Parse a tray execution command, accepting the `+`, `STO` and
    /// explicit-active-flag spellings.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        let head = tokens.next()?;
        let pressed = head.starts_with('+');
        let name = normalize_keyword(head).to_ascii_lowercase();
        let args: Vec<u32> = tokens
            .map(|t| t.parse().ok())
            .collect::<Option<Vec<_>>>()?;

        match (name.as_str(), args.as_slice()) {
            ("trayexecbytray", &[tray, slot]) => Some(TrayCall {
                active: None,
                tray,
                slot,
                backup: None,
            }),
            ("trayexecbytray", &[active, tray, slot]) if !pressed => Some(TrayCall {
                active: Some(active),
                tray,
                slot,
                backup: None,
            }),
            ("trayexecbytraywithbackup", &[tray, slot, bt, bs]) => Some(TrayCall {
                active: None,
                tray,
                slot,
                backup: Some((bt, bs)),
            }),
            ("trayexecbytraywithbackup", &[active, tray, slot, bt, bs]) if !pressed => {
                Some(TrayCall {
                    active: Some(active),
                    tray,
                    slot,
                    backup: Some((bt, bs)),
                })
            }
            _ => None,
        }
    }

    pub fn parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert("tray".into(), ParamValue::Int(i64::from(self.tray)));
        params.insert("slot".into(), ParamValue::Int(i64::from(self.slot)));
        if let Some(active) = self.active {
            params.insert("active".into(), ParamValue::Int(i64::from(active)));
        }
        if let Some((tray, slot)) = self.backup {
            params.insert("backup_tray".into(), ParamValue::Int(i64::from(tray)));
            params.insert("backup_slot".into(), ParamValue::Int(i64::from(slot)));
        }
        params
    }

    /// 1-based display label, e.g. `Execute Tray 3 Slot 6`.
    pub fn label(&self) -> String {
        let mut label = format!(
            "Execute Tray {} Slot {}",
            one_based(self.tray),
            one_based(self.slot)
        );
        if let Some((tray, slot)) = self.backup {
            label.push_str(&format!(
                " (backup Tray {} Slot {})",
                one_based(tray),
                one_based(slot)
            ));
        }
        label
    }

    /// Position across all trays; `None` when it does not fit in `u32`.
    fn linear_index(&self) -> Option<u32> {
        self.tray
            .checked_mul(SLOTS_PER_TRAY)?
            .checked_add(self.slot)
    }

    /// Whether `next` executes the slot right after this one.
    fn is_followed_by(&self, next: &TrayCall) -> bool {
        match (self.linear_index(), next.linear_index()) {
            (Some(a), Some(b)) => a.checked_add(1) == Some(b),
            _ => false,
        }
    }
}

/// A chain that executes consecutive tray slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrayRange {
    pub start_tray: u32,
    pub start_slot: u32,
    pub end_tray: u32,
    pub end_slot: u32,
    pub with_backup: bool,
}

impl TrayRange {
    /// Detect a run of two or more tray executions on consecutive slots.
    ///
    /// A run may continue from slot 9 of one tray into slot 0 of the next.
    pub fn detect(commands: &[AtomicCommand]) -> Option<Self> {
        if commands.len() < 2 {
            return None;
        }
        let calls = commands
            .iter()
            .map(|c| TrayCall::parse(c.command()))
            .collect::<Option<Vec<_>>>()?;
        let first = calls.first()?;
        let last = calls.last()?;
        let with_backup = first.backup.is_some();
        let consecutive = calls.windows(2).all(|pair| {
            pair[0].is_followed_by(&pair[1]) && pair[1].backup.is_some() == with_backup
        });
        if !consecutive {
            return None;
        }
        Some(Self {
            start_tray: first.tray,
            start_slot: first.slot,
            end_tray: last.tray,
            end_slot: last.slot,
            with_backup,
        })
    }

    pub fn parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert("start_tray".into(), i64::from(self.start_tray).into());
        params.insert("start_slot".into(), i64::from(self.start_slot).into());
        params.insert("end_tray".into(), i64::from(self.end_tray).into());
        params.insert("end_slot".into(), i64::from(self.end_slot).into());
        params
    }

    /// 1-based display label.
    pub fn label(&self) -> String {
        if self.start_tray == self.end_tray {
            format!(
                "Execute Tray {} Slots {}-{}",
                one_based(self.start_tray),
                one_based(self.start_slot),
                one_based(self.end_slot)
            )
        } else {
            format!(
                "Execute Tray {} Slot {} to Tray {} Slot {}",
                one_based(self.start_tray),
                one_based(self.start_slot),
                one_based(self.end_tray),
                one_based(self.end_slot)
            )
        }
    }
}

/// A classification rule: returns `Some` when it claims the command.
type Rule<'c> = fn(&Classifier<'c>, &str) -> Option<Classified>;

/// Maps raw command strings to category, icon, label and parameters.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'c> {
    catalog: &'c CommandCatalog,
}

impl<'c> Classifier<'c> {
    pub fn new(catalog: &'c CommandCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c CommandCatalog {
        self.catalog
    }

    /// Classify one atomic command. Never fails; unmatched commands are
    /// `custom`.
    pub fn classify(&self, raw: &str) -> Classified {
        let raw = raw.trim();
        let rules: [(&str, Rule<'c>); 3] = [
            ("exact", Self::exact),
            ("tray", Self::tray),
            ("prefix", Self::prefix),
        ];
        for (name, rule) in rules {
            if let Some(classified) = rule(self, raw) {
                tracing::trace!(rule = name, command = raw, category = %classified.category, "classified");
                return classified;
            }
        }
        tracing::trace!(command = raw, "no catalog match, classified as custom");
        Classified::custom(raw)
    }

    /// Classify and wrap into an [`AtomicCommand`].
    pub fn command(&self, raw: &str, id: impl Into<String>) -> AtomicCommand {
        let raw = raw.trim();
        AtomicCommand::new(raw, self.classify(raw), id)
    }

    /// Rule 1: exact command text, then display name.
    pub fn exact(&self, raw: &str) -> Option<Classified> {
        let entry = self
            .catalog
            .entries()
            .find(|e| e.def.command == raw)
            .or_else(|| {
                self.catalog
                    .entries()
                    .find(|e| e.def.name.eq_ignore_ascii_case(raw))
            })?;
        Some(Classified {
            category: entry.category,
            icon: entry.def.icon.clone(),
            text: entry.def.name.clone(),
            parameters: None,
        })
    }

    /// Rule 2: tray execution with numeric parameters.
    pub fn tray(&self, raw: &str) -> Option<Classified> {
        if !raw.to_ascii_lowercase().contains("trayexec") {
            return None;
        }
        let call = TrayCall::parse(raw)?;
        let wanted = if call.backup.is_some() {
            "trayexecbytraywithbackup"
        } else {
            "trayexecbytray"
        };
        let icon = self
            .tray_entries()
            .find(|e| normalize_keyword(e.def.base_keyword()).eq_ignore_ascii_case(wanted))
            .map(|e| e.def.icon.clone())
            .unwrap_or_else(|| self.catalog.category_icon("tray").to_string());
        Some(Classified {
            category: CommandCategory::Tray,
            icon,
            text: call.label(),
            parameters: Some(call.parameters()),
        })
    }

    /// Rule 3: conservative keyword match.
    pub fn prefix(&self, raw: &str) -> Option<Classified> {
        let head = raw.split_whitespace().next()?;
        let keyword = normalize_keyword(head);
        self.catalog.entries().find_map(|entry| {
            let base = normalize_keyword(entry.def.base_keyword());
            if base.is_empty() || !base.eq_ignore_ascii_case(keyword) {
                return None;
            }
            if entry.category == CommandCategory::Tray {
                return Some(Classified {
                    category: CommandCategory::Tray,
                    icon: entry.def.icon.clone(),
                    text: entry.def.name.clone(),
                    parameters: None,
                });
            }
            let rest = raw.strip_prefix(entry.def.command.as_str())?;
            // The entry's command must end on a token boundary
            if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                return None;
            }
            Some(self.bind_parameters(entry, rest.trim()))
        })
    }

    /// Classify a whole chain as a tray range, if it is one.
    pub fn classify_range(&self, commands: &[AtomicCommand]) -> Option<Classified> {
        let range = TrayRange::detect(commands)?;
        let icon = self
            .catalog
            .get("tray", "tray_range")
            .map(|d| d.icon.clone())
            .unwrap_or_else(|| self.catalog.category_icon("tray").to_string());
        Some(Classified {
            category: CommandCategory::Tray,
            icon,
            text: range.label(),
            parameters: Some(range.parameters()),
        })
    }

    fn tray_entries(&self) -> impl Iterator<Item = CatalogEntry<'c>> {
        self.catalog
            .entries()
            .filter(|e| e.category == CommandCategory::Tray)
    }

    /// Bind the text after an entry's command to its parameter schema.
    fn bind_parameters(&self, entry: CatalogEntry<'_>, rest: &str) -> Classified {
        let def = entry.def;
        let mut classified = Classified {
            category: entry.category,
            icon: def.icon.clone(),
            text: def.name.clone(),
            parameters: None,
        };
        if rest.is_empty() || def.parameters.is_empty() {
            return classified;
        }

        let mut params = Parameters::new();
        match def.parameters.first() {
            Some((name, param)) if def.parameters.len() == 1 && param.kind == ParamKind::Text => {
                params.insert(name.clone(), ParamValue::from(unquote(rest)));
            }
            _ => {
                for ((name, param), token) in def.parameters.iter().zip(rest.split_whitespace()) {
                    let value = match param.kind {
                        ParamKind::Number => token
                            .parse::<i64>()
                            .map(ParamValue::Int)
                            .unwrap_or_else(|_| ParamValue::from(token)),
                        ParamKind::Text => ParamValue::from(unquote(token)),
                    };
                    params.insert(name.clone(), value);
                }
            }
        }

        let values: Vec<String> = def
            .parameters
            .keys()
            .filter_map(|name| params.get(name).map(ToString::to_string))
            .collect();
        classified.text = format!("{}: {}", def.name, values.join(", "));
        classified.parameters = Some(params);
        classified
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
