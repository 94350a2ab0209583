//! Output formatting for human and JSON modes
//!
//! A [`DiffReport`] is a serializable summary of an edit script. In human
//! mode the CLI prints colored diffs directly; the report's human rendering
//! is the one-line summary printed by `--summary`.

use std::fmt::Display;

use serde::Serialize;

use crate::basic::DiffOp;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Element counts of an edit script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    /// Elements common to both sides
    pub equal: usize,
    /// Elements only on the new side (including replacements)
    pub inserted: usize,
    /// Elements only on the old side (including replacements)
    pub removed: usize,
    /// Number of runs that are not `Equal`
    pub hunks: usize,
}

impl DiffStats {
    /// Count the elements of a script
    #[must_use]
    pub fn from_ops<T>(ops: &[DiffOp<'_, T>]) -> Self {
        let mut stats = Self::default();
        for op in ops {
            match *op {
                DiffOp::Equal(a) => stats.equal += a.len(),
                DiffOp::Insert(b) => {
                    stats.inserted += b.len();
                    stats.hunks += 1;
                },
                DiffOp::Remove(a) => {
                    stats.removed += a.len();
                    stats.hunks += 1;
                },
                DiffOp::Replace(a, b) => {
                    stats.removed += a.len();
                    stats.inserted += b.len();
                    stats.hunks += 1;
                },
            }
        }
        stats
    }

    /// Whether both sides are identical
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.hunks == 0
    }
}

/// One run of a script, with 1-based start positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    /// Run kind: `equal`, `insert`, `remove` or `replace`
    pub kind: String,
    /// 1-based position of the run in the old input
    pub old_start: usize,
    /// 1-based position of the run in the new input
    pub new_start: usize,
    /// Old-side elements
    pub old: Vec<String>,
    /// New-side elements
    pub new: Vec<String>,
}

/// Serializable diff result
#[derive(Debug, Serialize)]
pub struct DiffReport {
    /// Name of the old input
    pub left: String,
    /// Name of the new input
    pub right: String,
    /// Granularity used: `lines`, `words` or `chars`
    pub granularity: String,
    /// Element counts
    pub stats: DiffStats,
    /// Every run of the script, equal runs included
    pub hunks: Vec<Hunk>,
}

impl DiffReport {
    /// Build a report from a script
    #[must_use]
    pub fn from_ops<T: Display>(
        left: &str,
        right: &str,
        granularity: &str,
        ops: &[DiffOp<'_, T>],
    ) -> Self {
        let mut old_start = 1;
        let mut new_start = 1;
        let mut hunks = Vec::with_capacity(ops.len());

        for op in ops {
            let old = op.old_slice();
            let new = op.new_slice();
            hunks.push(Hunk {
                kind: op.kind().to_string(),
                old_start,
                new_start,
                old: old.iter().map(ToString::to_string).collect(),
                new: new.iter().map(ToString::to_string).collect(),
            });
            old_start += old.len();
            new_start += new.len();
        }

        Self {
            left: left.to_string(),
            right: right.to_string(),
            granularity: granularity.to_string(),
            stats: DiffStats::from_ops(ops),
            hunks,
        }
    }

    /// One-line human summary
    #[must_use]
    pub fn summary(&self) -> String {
        if self.stats.is_identical() {
            return format!("{} and {} are identical", self.left, self.right);
        }
        format!(
            "{} -> {}: {} inserted, {} removed, {} unchanged {} in {} hunk(s)",
            self.left,
            self.right,
            self.stats.inserted,
            self.stats.removed,
            self.stats.equal,
            self.granularity,
            self.stats.hunks
        )
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.summary()),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
