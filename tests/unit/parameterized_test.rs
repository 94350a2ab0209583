//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use prettydiff::basic::diff;
use prettydiff::text::{split_chars, split_words};
use test_case::test_case;

// =============================================================================
// Tokenizer Tests
// =============================================================================

#[test_case("", &[] ; "empty string")]
#[test_case("word", &["word"] ; "single word")]
#[test_case("a b", &["a", " ", "b"] ; "space separated")]
#[test_case("a,b", &["a", ",", "b"] ; "comma separated")]
#[test_case("a  b", &["a", " ", " ", "b"] ; "double space")]
#[test_case("fn(x)", &["fn", "(", "x", ")"] ; "call syntax")]
#[test_case("x1 = y2", &["x1", " ", "=", " ", "y2"] ; "digits are alphanumeric")]
fn test_split_words(input: &str, expected: &[&str]) {
    assert_eq!(split_words(input), expected);
}

#[test_case("abc", 3 ; "ascii")]
#[test_case("日本語", 3 ; "cjk")]
#[test_case("a😋b", 3 ; "emoji")]
fn test_split_chars_count(input: &str, expected: usize) {
    assert_eq!(split_chars(input).len(), expected);
}

// =============================================================================
// Edit Script Shape Tests
// =============================================================================

fn kinds(old: &str, new: &str) -> Vec<&'static str> {
    let x: Vec<char> = old.chars().collect();
    let y: Vec<char> = new.chars().collect();
    diff(&x, &y).iter().map(|op| op.kind()).collect()
}

#[test_case("abc", "abc", &["equal"] ; "identical")]
#[test_case("", "abc", &["insert"] ; "pure insert")]
#[test_case("abc", "", &["remove"] ; "pure remove")]
#[test_case("abc", "axc", &["equal", "replace", "equal"] ; "middle replace")]
#[test_case("abc", "abcd", &["equal", "insert"] ; "append")]
#[test_case("abc", "xabc", &["insert", "equal"] ; "prepend")]
#[test_case("abc", "ac", &["equal", "remove", "equal"] ; "middle remove")]
#[test_case("abc", "xyz", &["replace"] ; "disjoint")]
fn test_diff_kinds(old: &str, new: &str, expected: &[&str]) {
    assert_eq!(kinds(old, new), expected);
}
