//! prettydiff - Side-by-side and inline colored diffs
//!
//! This library computes edit scripts over slices and text and renders them
//! for the terminal: inline char and word diffs, line diffs, and two-column
//! tables with line numbers.
//!
//! ```
//! use prettydiff::{diff_lines, diff_words};
//!
//! let words = diff_words("The quick brown fox", "The quick red fox");
//! assert_eq!(words.diff().len(), 3);
//!
//! let lines = diff_lines("a\nb\nc", "a\nc").names("left", "right");
//! assert_eq!(lines.diff().len(), 3);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod basic;
pub mod config;
pub mod error;
pub mod format_table;
pub mod lcs;
pub mod output;
pub mod paths;
pub mod style;
pub mod text;

pub use basic::{DiffOp, diff_slice};
pub use text::{diff_chars, diff_lines, diff_words};
