//! Line diffs, inline or as a side-by-side table

use std::fmt;

use colored::Color;
use prettytable::{Cell, Row, Table};

use super::diff_words;
use crate::basic::{self, DiffOp};
use crate::format_table;
use crate::style::Style;

/// Default number of spaces a tab expands to in side-by-side output
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Widest tab expansion accepted; larger widths are clamped
pub const MAX_TAB_WIDTH: usize = 32;

/// One row of a side-by-side diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideBySideRow {
    /// 1-based line number on the old side
    pub old_line: usize,
    /// Rendered old-side text (may span several lines)
    pub old: String,
    /// 1-based line number on the new side
    pub new_line: usize,
    /// Rendered new-side text (may span several lines)
    pub new: String,
}

/// Line-by-line diff, printable through [`fmt::Display`] or as a table
#[derive(Debug, PartialEq, Eq)]
pub struct LineChangeset<'a> {
    old: Vec<&'a str>,
    new: Vec<&'a str>,

    names: Option<(&'a str, &'a str)>,
    diff_only: bool,
    show_lines: bool,
    trim_new_lines: bool,
    tab_width: usize,
}

impl<'a> LineChangeset<'a> {
    /// Create a changeset over pre-split lines
    #[must_use]
    pub const fn new(old: Vec<&'a str>, new: Vec<&'a str>) -> Self {
        Self {
            old,
            new,
            names: None,
            diff_only: false,
            show_lines: true,
            trim_new_lines: true,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Column titles for the side-by-side table
    #[must_use]
    pub const fn names(mut self, old: &'a str, new: &'a str) -> Self {
        self.names = Some((old, new));
        self
    }

    /// Show only changed blocks in the side-by-side table
    #[must_use]
    pub const fn set_diff_only(mut self, val: bool) -> Self {
        self.diff_only = val;
        self
    }

    /// Show line number columns in the side-by-side table
    #[must_use]
    pub const fn set_show_lines(mut self, val: bool) -> Self {
        self.show_lines = val;
        self
    }

    /// Drop leading and trailing empty lines of each block
    #[must_use]
    pub const fn set_trim_new_lines(mut self, val: bool) -> Self {
        self.trim_new_lines = val;
        self
    }

    /// Number of spaces a tab expands to, at most [`MAX_TAB_WIDTH`]
    #[must_use]
    pub const fn set_tab_width(mut self, val: usize) -> Self {
        self.tab_width = if val > MAX_TAB_WIDTH { MAX_TAB_WIDTH } else { val };
        self
    }

    /// Old-side lines
    #[must_use]
    pub fn old_lines(&self) -> &[&'a str] {
        &self.old
    }

    /// New-side lines
    #[must_use]
    pub fn new_lines(&self) -> &[&'a str] {
        &self.new
    }

    /// Compute the edit script
    #[must_use]
    pub fn diff(&self) -> Vec<DiffOp<'_, &'a str>> {
        basic::diff(&self.old, &self.new)
    }

    /// Trimmed view of a block and the number of leading lines dropped
    fn trim_block<'b, 's>(&self, block: &'b [&'s str]) -> (&'b [&'s str], usize) {
        if !self.trim_new_lines {
            return (block, 0);
        }
        let start = block.iter().take_while(|line| line.is_empty()).count();
        let trailing = block[start..].iter().rev().take_while(|line| line.is_empty()).count();
        (&block[start..block.len() - trailing], start)
    }

    fn expand_tabs(&self, text: &str) -> String {
        text.replace('\t', &" ".repeat(self.tab_width))
    }

    fn process_block(&self, block: &[&str], style: Option<Style>) -> (String, usize) {
        let (lines, offset) = self.trim_block(block);
        let text = self.expand_tabs(&lines.join("\n"));
        match style {
            Some(style) => (style.paint_lines(&text), offset),
            None => (text, offset),
        }
    }

    /// Word-level highlighting inside a replaced block
    fn process_replace(&self, old: &[&str], new: &[&str]) -> ((String, String), (usize, usize)) {
        let (old, old_offset) = self.process_block(old, None);
        let (new, new_offset) = self.process_block(new, None);

        let removed = Style::fg(Color::Red);
        let inserted = Style::fg(Color::Green);
        let mut old_out = String::new();
        let mut new_out = String::new();

        for op in diff_words(&old, &new).diff() {
            match op {
                DiffOp::Equal(a) => {
                    let text = a.concat();
                    old_out.push_str(&text);
                    new_out.push_str(&text);
                },
                DiffOp::Insert(a) => new_out.push_str(&inserted.paint_lines(&a.concat())),
                DiffOp::Remove(a) => old_out.push_str(&removed.paint_lines(&a.concat())),
                DiffOp::Replace(a, b) => {
                    old_out.push_str(&removed.paint_lines(&a.concat()));
                    new_out.push_str(&inserted.paint_lines(&b.concat()));
                },
            }
        }

        ((old_out, new_out), (old_offset, new_offset))
    }

    /// Rows of the side-by-side view
    #[must_use]
    pub fn rows(&self) -> Vec<SideBySideRow> {
        let insert = Style::fg(Color::Green);
        let remove = Style::fg(Color::Red);
        let mut old_line = 1;
        let mut new_line = 1;
        let mut rows = Vec::new();

        for op in self.diff() {
            match op {
                DiffOp::Equal(a) => {
                    if !self.diff_only {
                        let (text, offset) = self.process_block(a, None);
                        rows.push(SideBySideRow {
                            old_line: old_line + offset,
                            old: text.clone(),
                            new_line: new_line + offset,
                            new: text,
                        });
                    }
                    old_line += a.len();
                    new_line += a.len();
                },
                DiffOp::Insert(a) => {
                    let (text, offset) = self.process_block(a, Some(insert));
                    rows.push(SideBySideRow {
                        old_line,
                        old: String::new(),
                        new_line: new_line + offset,
                        new: text,
                    });
                    new_line += a.len();
                },
                DiffOp::Remove(a) => {
                    let (text, offset) = self.process_block(a, Some(remove));
                    rows.push(SideBySideRow {
                        old_line: old_line + offset,
                        old: text,
                        new_line,
                        new: String::new(),
                    });
                    old_line += a.len();
                },
                DiffOp::Replace(a, b) => {
                    let ((old, new), (old_offset, new_offset)) = self.process_replace(a, b);
                    rows.push(SideBySideRow {
                        old_line: old_line + old_offset,
                        old,
                        new_line: new_line + new_offset,
                        new,
                    });
                    old_line += a.len();
                    new_line += b.len();
                },
            }
        }

        if self.trim_new_lines {
            rows.retain(|row| !(row.old.trim().is_empty() && row.new.trim().is_empty()));
        }
        rows
    }

    /// Build the side-by-side table
    #[must_use]
    pub fn table(&self) -> Table {
        let mut table = format_table::new();

        if let Some((old, new)) = self.names {
            let title = Style::fg(Color::Cyan);
            let mut header = Vec::with_capacity(4);
            if self.show_lines {
                header.push(Cell::new(""));
            }
            header.push(Cell::new(&title.paint(old)));
            if self.show_lines {
                header.push(Cell::new(""));
            }
            header.push(Cell::new(&title.paint(new)));
            table.set_titles(Row::new(header));
        }

        let rows = self.rows();
        log::debug!("side-by-side table: {} rows", rows.len());
        for row in rows {
            let cells = if self.show_lines {
                vec![
                    Cell::new(&row.old_line.to_string()),
                    Cell::new(&row.old),
                    Cell::new(&row.new_line.to_string()),
                    Cell::new(&row.new),
                ]
            } else {
                vec![Cell::new(&row.old), Cell::new(&row.new)]
            };
            table.add_row(Row::new(cells));
        }
        table
    }

    /// Print the side-by-side table to stdout
    pub fn prettytable(&self) {
        self.table().printstd();
    }

    /// Render the diff inline, one line per source line
    #[must_use]
    pub fn format(&self) -> String {
        let insert = Style::insert();
        let remove = Style::remove();
        let diff = self.diff();
        let mut out: Vec<String> = Vec::with_capacity(diff.len());
        for op in diff {
            match op {
                DiffOp::Equal(a) => out.push(a.join("\n")),
                DiffOp::Insert(a) => out.push(insert.paint(&a.join("\n"))),
                DiffOp::Remove(a) => out.push(remove.paint(&a.join("\n"))),
                DiffOp::Replace(a, b) => {
                    out.push(remove.paint(&a.join("\n")));
                    out.push(insert.paint(&b.join("\n")));
                },
            }
        }
        out.join("\n")
    }
}

impl fmt::Display for LineChangeset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Diff two strings line by line
#[must_use]
pub fn diff_lines<'a>(old: &'a str, new: &'a str) -> LineChangeset<'a> {
    LineChangeset::new(old.lines().collect(), new.lines().collect())
}
