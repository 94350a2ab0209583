//! Command implementations

mod diff;

pub use diff::{DiffOptions, diff_files};
