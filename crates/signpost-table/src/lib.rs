//! Unicode-aware column formatting for terminal tables.
//!
//! This crate provides the small tabular capability used by catalog-style
//! help output: rows of text cells rendered as aligned columns, with a
//! per-table maximum column width clamp. Width calculations use Unicode
//! display widths (CJK characters count as 2 columns).
//!
//! ```rust
//! use signpost_table::Table;
//!
//! let mut table = Table::new().max_col_width(80);
//! table.add_row(["  list           ", "list apps"]);
//! table.add_row(["  deploy         ", "deploy app"]);
//!
//! let rendered = table.to_string();
//! assert!(rendered.contains("list apps"));
//! ```

use std::fmt;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pads a string on the right with spaces up to `width` display columns.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    for _ in current..width {
        out.push(' ');
    }
    out
}

/// Truncates a string to fit within `max_width` display columns, appending
/// an ellipsis when truncation occurs.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    // One column is reserved for the ellipsis marker.
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// A simple column-aligned table.
///
/// Column widths are derived from the widest cell in each column, clamped to
/// [`max_col_width`](Table::max_col_width). Cells wider than the clamp are
/// truncated with an ellipsis. Rendered lines never carry trailing
/// whitespace.
#[derive(Clone, Debug)]
pub struct Table {
    max_col_width: usize,
    separator: String,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Table {
            max_col_width: usize::MAX,
            separator: "  ".to_string(),
            rows: Vec::new(),
        }
    }

    /// Sets the maximum width of any column, in display columns.
    pub fn max_col_width(mut self, width: usize) -> Self {
        self.max_col_width = width;
        self
    }

    /// Sets the string placed between adjacent cells (default: two spaces).
    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.separator = sep.into();
        self
    }

    /// Appends one row of cells.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolved width of each column: widest cell, clamped.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths = Vec::new();
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                let w = display_width(cell).min(self.max_col_width);
                if col == widths.len() {
                    widths.push(w);
                } else if w > widths[col] {
                    widths[col] = w;
                }
            }
        }
        widths
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::new()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let mut line = String::new();
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    line.push_str(&self.separator);
                }
                let cell = if display_width(cell) > widths[col] {
                    truncate_to_width(cell, widths[col])
                } else {
                    cell.clone()
                };
                if col + 1 < row.len() {
                    line.push_str(&pad_right(&cell, widths[col]));
                } else {
                    line.push_str(&cell);
                }
            }
            f.write_str(line.trim_end())?;
        }
        Ok(())
    }
}
