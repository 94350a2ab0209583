//! Diff command - compare two files

use std::fs;
use std::path::Path;

use anyhow::Context;
use prettydiff::output::{DiffReport, OutputMode};
use prettydiff::text::InlineChangeset;
use prettydiff::{diff_chars, diff_lines, diff_words};

use crate::cli::app::Mode;

/// Resolved rendering options (flags merged over config)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DiffOptions {
    /// Show only changed lines
    pub diff_only: bool,
    /// Show line number columns
    pub show_lines: bool,
    /// Trim blank lines at block edges
    pub trim_new_lines: bool,
    /// Spaces per tab
    pub tab_width: usize,
    /// Highlight whitespace in word and char diffs
    pub highlight_whitespace: bool,
    /// Print a one-line summary after the diff
    pub summary: bool,
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Diff two files and print the result
pub fn diff_files(
    left: &Path,
    right: &Path,
    mode: Mode,
    options: DiffOptions,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let old = read_file(left)?;
    let new = read_file(right)?;
    let left_name = left.to_string_lossy();
    let right_name = right.to_string_lossy();
    log::debug!(
        "diffing {left_name} ({} bytes) against {right_name} ({} bytes) as {mode:?}",
        old.len(),
        new.len()
    );

    let report = match mode {
        Mode::SideBySide | Mode::Lines => {
            let changeset = diff_lines(&old, &new)
                .names(&left_name, &right_name)
                .set_diff_only(options.diff_only)
                .set_show_lines(options.show_lines)
                .set_trim_new_lines(options.trim_new_lines)
                .set_tab_width(options.tab_width);
            let report = DiffReport::from_ops(&left_name, &right_name, "lines", &changeset.diff());

            if output_mode == OutputMode::Human {
                if mode == Mode::SideBySide {
                    print!("{}", changeset.table());
                } else {
                    println!("{changeset}");
                }
            }
            report
        },
        Mode::Words => inline_diff(
            diff_words(&old, &new),
            &left_name,
            &right_name,
            "words",
            options,
            output_mode,
        ),
        Mode::Chars => inline_diff(
            diff_chars(&old, &new),
            &left_name,
            &right_name,
            "chars",
            options,
            output_mode,
        ),
    };

    match output_mode {
        OutputMode::Json => report.render(OutputMode::Json),
        OutputMode::Human if options.summary => report.render(OutputMode::Human),
        OutputMode::Human => {},
    }
    Ok(())
}

fn inline_diff(
    changeset: InlineChangeset<'_>,
    left_name: &str,
    right_name: &str,
    granularity: &str,
    options: DiffOptions,
    output_mode: OutputMode,
) -> DiffReport {
    let changeset = changeset.set_highlight_whitespace(options.highlight_whitespace);
    if output_mode == OutputMode::Human {
        println!("{changeset}");
    }
    DiffReport::from_ops(left_name, right_name, granularity, &changeset.diff())
}
