//! Terminal styles for diff output
//!
//! Thin wrapper over `colored` so renderers can keep styles as plain values.
//! Painting goes through `colored`, which honors `NO_COLOR`, `CLICOLOR` and
//! [`colored::control::set_override`].

use colored::{Color, Colorize};

/// A foreground color with optional background and strikethrough
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    fg: Color,
    bg: Option<Color>,
    strikethrough: bool,
}

impl Style {
    /// Plain foreground color
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: color,
            bg: None,
            strikethrough: false,
        }
    }

    /// Set the background color
    #[must_use]
    pub const fn on(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Strike the text through
    #[must_use]
    pub const fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Default style for inserted text
    #[must_use]
    pub const fn insert() -> Self {
        Self::fg(Color::Green)
    }

    /// Default style for inserted whitespace
    #[must_use]
    pub const fn insert_whitespace() -> Self {
        Self::fg(Color::White).on(Color::Green)
    }

    /// Default style for removed text
    #[must_use]
    pub const fn remove() -> Self {
        Self::fg(Color::Red).strikethrough()
    }

    /// Default style for removed whitespace
    #[must_use]
    pub const fn remove_whitespace() -> Self {
        Self::fg(Color::White).on(Color::Red)
    }

    /// Apply the style to `text`
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let mut out = text.color(self.fg);
        if let Some(bg) = self.bg {
            out = out.on_color(bg);
        }
        if self.strikethrough {
            out = out.strikethrough();
        }
        out.to_string()
    }

    /// Paint each line of `text` separately so table cells keep their layout
    #[must_use]
    pub fn paint_lines(&self, text: &str) -> String {
        text.split('\n').map(|line| self.paint(line)).collect::<Vec<_>>().join("\n")
    }
}
