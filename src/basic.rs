//! Edit scripts over arbitrary slices
//!
//! [`diff`] turns two slices into a list of [`DiffOp`] runs. Every run borrows
//! from the inputs, so no element is cloned.

use std::fmt;

use crate::lcs::Table;
use crate::style::Style;

/// One run of an edit script
#[derive(Debug, PartialEq, Eq)]
pub enum DiffOp<'a, T: 'a> {
    /// Elements present only in the new slice
    Insert(&'a [T]),
    /// Old elements replaced by new ones
    Replace(&'a [T], &'a [T]),
    /// Elements present only in the old slice
    Remove(&'a [T]),
    /// Elements common to both slices
    Equal(&'a [T]),
}

impl<T> Clone for DiffOp<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DiffOp<'_, T> {}

impl<'a, T> DiffOp<'a, T> {
    /// Short lowercase name of the run kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Insert(_) => "insert",
            Self::Replace(..) => "replace",
            Self::Remove(_) => "remove",
            Self::Equal(_) => "equal",
        }
    }

    /// Elements this run consumes from the old slice
    #[must_use]
    pub const fn old_slice(&self) -> &'a [T] {
        match *self {
            Self::Insert(_) => &[],
            Self::Replace(a, _) | Self::Remove(a) | Self::Equal(a) => a,
        }
    }

    /// Elements this run consumes from the new slice
    #[must_use]
    pub const fn new_slice(&self) -> &'a [T] {
        match *self {
            Self::Remove(_) => &[],
            Self::Replace(_, b) | Self::Insert(b) | Self::Equal(b) => b,
        }
    }
}

/// Compute the edit script turning `x` into `y`
///
/// The common prefix and suffix are emitted as `Equal` runs directly; only
/// the differing middle goes through the LCS table. Since both strips are
/// maximal, the middle starts and ends with a mismatch and no two `Equal`
/// runs are ever adjacent.
///
/// ```
/// use prettydiff::basic::{diff, DiffOp};
///
/// let ops = diff(&["a", "b", "c"], &["a", "x", "c"]);
/// assert_eq!(
///     ops,
///     vec![DiffOp::Equal(&["a"][..]), DiffOp::Replace(&["b"][..], &["x"][..]), DiffOp::Equal(&["c"][..])]
/// );
/// ```
#[must_use]
pub fn diff<'a, T: PartialEq>(x: &'a [T], y: &'a [T]) -> Vec<DiffOp<'a, T>> {
    let prefix = x.iter().zip(y).take_while(|(a, b)| a == b).count();
    let suffix = x[prefix..]
        .iter()
        .rev()
        .zip(y[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let x_mid = &x[prefix..x.len() - suffix];
    let y_mid = &y[prefix..y.len() - suffix];

    let mut ops = Vec::new();
    if prefix > 0 {
        ops.push(DiffOp::Equal(&x[..prefix]));
    }

    let (mut i, mut j) = (0, 0);
    for (bi, bj, len) in Table::new(x_mid, y_mid).matches_zero() {
        let removed = &x_mid[i..bi];
        let inserted = &y_mid[j..bj];
        match (removed.is_empty(), inserted.is_empty()) {
            (false, false) => ops.push(DiffOp::Replace(removed, inserted)),
            (false, true) => ops.push(DiffOp::Remove(removed)),
            (true, false) => ops.push(DiffOp::Insert(inserted)),
            (true, true) => {},
        }
        if len > 0 {
            ops.push(DiffOp::Equal(&x_mid[bi..bi + len]));
        }
        i = bi + len;
        j = bj + len;
    }

    if suffix > 0 {
        ops.push(DiffOp::Equal(&x[x.len() - suffix..]));
    }

    log::trace!("diff: {} old, {} new, {} ops", x.len(), y.len(), ops.len());
    ops
}

/// Edit script over two slices with a printable rendering
#[derive(Debug)]
pub struct SliceChangeset<'a, T> {
    /// The computed edit script
    pub diff: Vec<DiffOp<'a, T>>,
}

impl<T: fmt::Display> SliceChangeset<'_, T> {
    /// Render as `[a, -b, +c, d]`, collapsing equal runs to `...` when `skip_same`
    #[must_use]
    pub fn format(&self, skip_same: bool) -> String {
        let removed = Style::remove();
        let inserted = Style::insert();
        let mut items: Vec<String> = Vec::new();

        for op in &self.diff {
            match *op {
                DiffOp::Equal(a) => {
                    if skip_same {
                        items.push("...".to_string());
                    } else {
                        items.extend(a.iter().map(ToString::to_string));
                    }
                },
                DiffOp::Insert(a) => {
                    items.extend(a.iter().map(|e| inserted.paint(&format!("+{e}"))));
                },
                DiffOp::Remove(a) => {
                    items.extend(a.iter().map(|e| removed.paint(&format!("-{e}"))));
                },
                DiffOp::Replace(a, b) => {
                    items.extend(a.iter().map(|e| removed.paint(&format!("-{e}"))));
                    items.extend(b.iter().map(|e| inserted.paint(&format!("+{e}"))));
                },
            }
        }

        format!("[{}]", items.join(", "))
    }
}

impl<T: fmt::Display> fmt::Display for SliceChangeset<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Diff two slices of printable elements
#[must_use]
pub fn diff_slice<'a, T: PartialEq + fmt::Display>(
    x: &'a [T],
    y: &'a [T],
) -> SliceChangeset<'a, T> {
    SliceChangeset { diff: diff(x, y) }
}
