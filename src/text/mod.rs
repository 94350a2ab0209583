//! Text diffing at char, word and line granularity
//!
//! - [`inline`] - char and word diffs rendered inline
//! - [`lines`] - line diffs rendered inline or side-by-side

pub mod inline;
pub mod lines;

pub use inline::{InlineChangeset, diff_chars, diff_words};
pub use lines::{LineChangeset, SideBySideRow, diff_lines};

/// Split a string into one token per `char`
#[must_use]
pub fn split_chars(text: &str) -> Vec<&str> {
    text.char_indices().map(|(idx, c)| &text[idx..idx + c.len_utf8()]).collect()
}

/// Split a string on non-alphanumeric chars, keeping each delimiter as its own token
#[must_use]
pub fn split_words(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut last = 0;
    for (idx, matched) in text.match_indices(|c: char| !c.is_alphanumeric()) {
        if last != idx {
            result.push(&text[last..idx]);
        }
        result.push(matched);
        last = idx + matched.len();
    }
    if last < text.len() {
        result.push(&text[last..]);
    }
    result
}
