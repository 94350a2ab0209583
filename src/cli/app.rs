//! CLI definitions and entry point

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};

use super::commands::{self, DiffOptions};
use prettydiff::config::DiffConfig;
use prettydiff::output::OutputMode;

/// prettydiff - Side-by-side diff for two files
#[derive(Parser, Debug)]
#[command(
    name = "prettydiff",
    version,
    about = "Side-by-side diff for two files",
    long_about = "Compare two text files and print a colored diff.\n\n\
                  By default the files are shown side by side with line numbers,\n\
                  and changed lines are highlighted word by word."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Left file
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Right file
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// How to render the diff
    #[arg(short, long, value_enum, default_value_t = Mode::SideBySide)]
    pub mode: Mode,

    /// Show only changed lines (side-by-side mode)
    #[arg(short, long, overrides_with = "no_diff_only")]
    pub diff_only: bool,

    /// Show unchanged lines too, even if the config enables diff_only
    #[arg(long, overrides_with = "diff_only")]
    pub no_diff_only: bool,

    /// Show line number columns (side-by-side mode)
    #[arg(long, overrides_with = "no_line_numbers")]
    pub line_numbers: bool,

    /// Hide line number columns (side-by-side mode)
    #[arg(long, overrides_with = "line_numbers")]
    pub no_line_numbers: bool,

    /// Drop blank lines at the edges of each block (side-by-side mode)
    #[arg(long, overrides_with = "no_trim")]
    pub trim: bool,

    /// Keep blank lines at the edges of each block (side-by-side mode)
    #[arg(long, overrides_with = "trim")]
    pub no_trim: bool,

    /// Spaces per tab, 0 to 32 (side-by-side mode)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=32))]
    pub tab_width: Option<u8>,

    /// Highlight whitespace in word and char diffs
    #[arg(long, overrides_with = "no_whitespace_highlight")]
    pub whitespace_highlight: bool,

    /// Do not highlight whitespace in word and char diffs
    #[arg(long, overrides_with = "whitespace_highlight")]
    pub no_whitespace_highlight: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// Print a one-line summary after the diff
    #[arg(long)]
    pub summary: bool,

    /// Config file (defaults to ~/.config/prettydiff/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Diff rendering
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Two columns with line numbers
    SideBySide,
    /// Inline, line by line
    Lines,
    /// Inline, word by word
    Words,
    /// Inline, char by char
    Chars,
}

/// Color output policy
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    /// Color when stdout is a terminal
    Auto,
    /// Always emit ANSI colors
    Always,
    /// Never emit ANSI colors
    Never,
}

/// Collapse a `--flag`/`--no-flag` pair; `None` when neither was given
const fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Cli {
    fn diff_only(&self) -> Option<bool> {
        switch(self.diff_only, self.no_diff_only)
    }

    fn line_numbers(&self) -> Option<bool> {
        switch(self.line_numbers, self.no_line_numbers)
    }

    fn trim(&self) -> Option<bool> {
        switch(self.trim, self.no_trim)
    }

    fn whitespace_highlight(&self) -> Option<bool> {
        switch(self.whitespace_highlight, self.no_whitespace_highlight)
    }

    /// Merge command-line flags over the configured defaults
    fn options(&self, config: &DiffConfig) -> DiffOptions {
        let display = &config.display;
        DiffOptions {
            diff_only: self.diff_only().unwrap_or(display.diff_only),
            show_lines: self.line_numbers().unwrap_or(display.show_line_numbers),
            trim_new_lines: self.trim().unwrap_or(display.trim_new_lines),
            tab_width: self.tab_width.map_or(display.tab_width, usize::from),
            highlight_whitespace: self
                .whitespace_highlight()
                .unwrap_or(display.highlight_whitespace),
            summary: self.summary,
        }
    }
}

fn apply_color(when: ColorWhen) {
    match when {
        ColorWhen::Always => colored::control::set_override(true),
        ColorWhen::Never => colored::control::set_override(false),
        ColorWhen::Auto => {
            if !std::io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
        },
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DiffConfig> {
    if let Some(path) = path {
        return DiffConfig::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    Ok(DiffConfig::load().unwrap_or_else(|err| {
        log::warn!("{err}; using defaults");
        DiffConfig::default()
    }))
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    apply_color(cli.color);

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = load_config(cli.config.as_deref())?;
    let options = cli.options(&config);
    log::debug!("options: {options:?}");

    commands::diff_files(&cli.left, &cli.right, cli.mode, options, output_mode)
}
