// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Column-aligned table renderer for text output.

use std::io::Write;

use crate::color;

/// How a cell's text is styled after padding.
pub enum CellStyle {
    Plain,
    /// Apply [`color::apply_muted()`].
    Muted,
    /// Cell holds a category id; colored by [`color::apply_category()`].
    Category,
}

/// A column definition in a [`Table`].
pub struct Column {
    pub name: &'static str,
    pub style: CellStyle,
    /// Maximum width in characters (`None` = unlimited). Longer values are
    /// truncated with a trailing `…`.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn left(name: &'static str) -> Self {
        Self {
            name,
            style: CellStyle::Plain,
            max_width: None,
        }
    }

    pub fn muted(name: &'static str) -> Self {
        Self {
            name,
            style: CellStyle::Muted,
            max_width: None,
        }
    }

    pub fn category(name: &'static str) -> Self {
        Self {
            name,
            style: CellStyle::Category,
            max_width: None,
        }
    }

    pub fn with_max(mut self, max: usize) -> Self {
        self.max_width = Some(max);
        self
    }
}

/// A left-aligned table that auto-computes column widths from data.
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    colorize: bool,
}

/// Column separator: double space.
const SEP: &str = "  ";

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colorize: color::should_colorize(),
        }
    }

    /// Create a table that never emits color codes.
    #[cfg(test)]
    pub fn plain(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colorize: false,
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render header and rows. Nothing is written for an empty table.
    ///
    /// The last column is never padded. Color is applied after padding so
    /// escapes don't affect widths.
    pub fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let widths = self.compute_widths();
        let last = self.columns.len().saturating_sub(1);

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let padded = pad(col.name, widths[i], i == last);
                if self.colorize {
                    color::apply_header(&padded)
                } else {
                    padded
                }
            })
            .collect();
        writeln!(out, "{}", header.join(SEP))?;

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let raw = row.get(i).map(String::as_str).unwrap_or("");
                    let padded = pad(&truncate(raw, col.max_width), widths[i], i == last);
                    match col.style {
                        CellStyle::Muted if self.colorize => color::apply_muted(&padded),
                        CellStyle::Category if self.colorize => color::apply_category(&padded),
                        _ => padded,
                    }
                })
                .collect();
            writeln!(out, "{}", cells.join(SEP))?;
        }
        Ok(())
    }

    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let max_data = self
                    .rows
                    .iter()
                    .map(|row| {
                        let len = row.get(i).map(|s| s.chars().count()).unwrap_or(0);
                        col.max_width.map_or(len, |max| len.min(max))
                    })
                    .max()
                    .unwrap_or(0);
                col.name.chars().count().max(max_data)
            })
            .collect()
    }
}

fn pad(text: &str, width: usize, is_last: bool) -> String {
    if is_last {
        text.to_string()
    } else {
        let fill = width.saturating_sub(text.chars().count());
        format!("{}{}", text, " ".repeat(fill))
    }
}

fn truncate(s: &str, max: Option<usize>) -> String {
    match max {
        Some(m) if m > 0 && s.chars().count() > m => {
            let mut out: String = s.chars().take(m - 1).collect();
            out.push('…');
            out
        }
        _ => s.to_string(),
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
