//! Inline char and word diffs

use std::fmt;

use super::{split_chars, split_words};
use crate::basic::{self, DiffOp};
use crate::style::Style;

/// Inline diff of two token sequences, printable through [`fmt::Display`]
#[derive(Debug, PartialEq, Eq)]
pub struct InlineChangeset<'a> {
    old: Vec<&'a str>,
    new: Vec<&'a str>,
    separator: &'a str,
    highlight_whitespace: bool,
    insert_style: Style,
    insert_whitespace_style: Style,
    remove_style: Style,
    remove_whitespace_style: Style,
}

impl<'a> InlineChangeset<'a> {
    /// Create a changeset over pre-split tokens
    #[must_use]
    pub const fn new(old: Vec<&'a str>, new: Vec<&'a str>) -> Self {
        Self {
            old,
            new,
            separator: "",
            highlight_whitespace: true,
            insert_style: Style::insert(),
            insert_whitespace_style: Style::insert_whitespace(),
            remove_style: Style::remove(),
            remove_whitespace_style: Style::remove_whitespace(),
        }
    }

    /// Highlight whitespace inside inserted or removed text
    #[must_use]
    pub const fn set_highlight_whitespace(mut self, val: bool) -> Self {
        self.highlight_whitespace = val;
        self
    }

    /// Style of inserted text
    #[must_use]
    pub const fn set_insert_style(mut self, val: Style) -> Self {
        self.insert_style = val;
        self
    }

    /// Style of inserted whitespace
    #[must_use]
    pub const fn set_insert_whitespace_style(mut self, val: Style) -> Self {
        self.insert_whitespace_style = val;
        self
    }

    /// Style of removed text
    #[must_use]
    pub const fn set_remove_style(mut self, val: Style) -> Self {
        self.remove_style = val;
        self
    }

    /// Style of removed whitespace
    #[must_use]
    pub const fn set_remove_whitespace_style(mut self, val: Style) -> Self {
        self.remove_whitespace_style = val;
        self
    }

    /// Separator placed between tokens when rendering
    #[must_use]
    pub const fn set_separator(mut self, val: &'a str) -> Self {
        self.separator = val;
        self
    }

    /// Old-side tokens
    #[must_use]
    pub fn old_tokens(&self) -> &[&'a str] {
        &self.old
    }

    /// New-side tokens
    #[must_use]
    pub fn new_tokens(&self) -> &[&'a str] {
        &self.new
    }

    /// Compute the edit script
    #[must_use]
    pub fn diff(&self) -> Vec<DiffOp<'_, &'a str>> {
        basic::diff(&self.old, &self.new)
    }

    fn apply_style(&self, style: Style, whitespace_style: Style, tokens: &[&str]) -> String {
        let text = tokens.join(self.separator);
        if !self.highlight_whitespace {
            return style.paint(&text);
        }

        // Paint runs of whitespace and non-whitespace as whole strings.
        let mut out = String::with_capacity(text.len());
        let mut run_start = 0;
        let mut run_is_ws: Option<bool> = None;
        for (idx, c) in text.char_indices() {
            let is_ws = c.is_whitespace();
            if run_is_ws != Some(is_ws) {
                if let Some(prev) = run_is_ws {
                    let s = if prev { whitespace_style } else { style };
                    out.push_str(&s.paint(&text[run_start..idx]));
                }
                run_start = idx;
                run_is_ws = Some(is_ws);
            }
        }
        if let Some(prev) = run_is_ws {
            let s = if prev { whitespace_style } else { style };
            out.push_str(&s.paint(&text[run_start..]));
        }
        out
    }

    fn remove_color(&self, tokens: &[&str]) -> String {
        self.apply_style(self.remove_style, self.remove_whitespace_style, tokens)
    }

    fn insert_color(&self, tokens: &[&str]) -> String {
        self.apply_style(self.insert_style, self.insert_whitespace_style, tokens)
    }

    /// Render the diff with colors
    #[must_use]
    pub fn format(&self) -> String {
        let diff = self.diff();
        let mut out: Vec<String> = Vec::with_capacity(diff.len());
        for op in diff {
            match op {
                DiffOp::Equal(a) => out.push(a.join(self.separator)),
                DiffOp::Insert(a) => out.push(self.insert_color(a)),
                DiffOp::Remove(a) => out.push(self.remove_color(a)),
                DiffOp::Replace(a, b) => {
                    out.push(self.remove_color(a));
                    out.push(self.insert_color(b));
                },
            }
        }
        out.join(self.separator)
    }
}

impl fmt::Display for InlineChangeset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Diff two strings char by char
#[must_use]
pub fn diff_chars<'a>(old: &'a str, new: &'a str) -> InlineChangeset<'a> {
    InlineChangeset::new(split_chars(old), split_chars(new))
}

/// Diff two strings word by word, treating each delimiter char as a word
#[must_use]
pub fn diff_words<'a>(old: &'a str, new: &'a str) -> InlineChangeset<'a> {
    InlineChangeset::new(split_words(old), split_words(new))
}
