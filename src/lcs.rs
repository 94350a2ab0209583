//! Longest common subsequence table
//!
//! The table is filled from the end of both inputs, so cell `(i, j)` holds the
//! LCS length of `x[i..]` and `y[j..]`. Walking it forward from `(0, 0)` then
//! yields matches in input order without a reversal step.
//!
//! # Examples
//!
//! ```
//! use prettydiff::lcs::Table;
//!
//! let x = ['a', 'b', 'c', 'd'];
//! let y = ['a', 'c', 'd', 'e'];
//! let table = Table::new(&x, &y);
//! assert_eq!(table.length(), 3);
//! assert_eq!(table.matches(), vec![(0, 0), (2, 1), (3, 2)]);
//! ```

/// LCS length table over two slices
#[derive(Debug)]
pub struct Table<'a, T: 'a> {
    x: &'a [T],
    y: &'a [T],
    /// Row-major `(x.len() + 1) * (y.len() + 1)` cells
    cells: Vec<usize>,
}

impl<'a, T: PartialEq> Table<'a, T> {
    /// Build the table for `x` and `y`
    #[must_use]
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        let width = y.len() + 1;
        let mut cells = vec![0; (x.len() + 1) * width];

        for i in (0..x.len()).rev() {
            for j in (0..y.len()).rev() {
                cells[i * width + j] = if x[i] == y[j] {
                    cells[(i + 1) * width + j + 1] + 1
                } else {
                    cells[(i + 1) * width + j].max(cells[i * width + j + 1])
                };
            }
        }

        Self { x, y, cells }
    }

    const fn width(&self) -> usize {
        self.y.len() + 1
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width() + j]
    }

    /// Length of the longest common subsequence
    #[must_use]
    pub fn length(&self) -> usize {
        self.get(0, 0)
    }

    /// Index pairs `(i, j)` with `x[i] == y[j]` forming one LCS, in order
    #[must_use]
    pub fn matches(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.length());
        let (mut i, mut j) = (0, 0);

        while i < self.x.len() && j < self.y.len() {
            if self.x[i] == self.y[j] {
                out.push((i, j));
                i += 1;
                j += 1;
            } else if self.get(i + 1, j) >= self.get(i, j + 1) {
                i += 1;
            } else {
                j += 1;
            }
        }
        out
    }

    /// Contiguous match blocks `(i, j, len)`, terminated by `(x.len(), y.len(), 0)`
    #[must_use]
    pub fn matches_zero(&self) -> Vec<(usize, usize, usize)> {
        let mut blocks: Vec<(usize, usize, usize)> = Vec::new();

        for (i, j) in self.matches() {
            match blocks.last_mut() {
                Some((bi, bj, len)) if *bi + *len == i && *bj + *len == j => *len += 1,
                _ => blocks.push((i, j, 1)),
            }
        }

        blocks.push((self.x.len(), self.y.len(), 0));
        blocks
    }

    /// Elements of the longest common subsequence
    #[must_use]
    pub fn longest_common_subsequence(&self) -> Vec<&'a T> {
        let x = self.x;
        self.matches().into_iter().map(|(i, _)| &x[i]).collect()
    }
}
