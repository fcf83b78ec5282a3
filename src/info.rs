//! String inspection utilities
//!
//! Counting and emptiness checks. Character counts and reversal work on
//! `char`s, so combining sequences may be split by [`reverse_string`].
//! Whitespace includes U+FEFF.

use crate::whitespace;

/// Count whitespace-separated words
///
/// # Example
/// ```rust,ignore
/// assert_eq!(count_words("hello   world   test"), 3);
/// assert_eq!(count_words(""), 0);
/// ```
pub fn count_words<'a>(input: impl Into<Option<&'a str>>) -> usize {
    input
        .into()
        .map_or(0, |s| whitespace::words(s).count())
}

/// Count characters, optionally ignoring whitespace
///
/// # Arguments
/// * `input` - String to analyze
/// * `exclude_whitespace` - Skip whitespace characters when counting
///
/// # Example
/// ```rust,ignore
/// assert_eq!(count_chars("hello world", false), 11);
/// assert_eq!(count_chars("hello world", true), 10);
/// ```
pub fn count_chars<'a>(input: impl Into<Option<&'a str>>, exclude_whitespace: bool) -> usize {
    match input.into() {
        None => 0,
        Some(s) if exclude_whitespace => s.chars().filter(|c| !whitespace::is_space(*c)).count(),
        Some(s) => s.chars().count(),
    }
}

/// Reverse the characters of a string
pub fn reverse_string<'a>(input: impl Into<Option<&'a str>>) -> String {
    input
        .into()
        .map(|s| s.chars().rev().collect())
        .unwrap_or_default()
}

/// True for `None` and zero-length strings; whitespace is not empty
pub fn is_empty<'a>(input: impl Into<Option<&'a str>>) -> bool {
    input.into().map_or(true, str::is_empty)
}

/// True for `None`, empty strings and whitespace-only strings
pub fn is_blank<'a>(input: impl Into<Option<&'a str>>) -> bool {
    input.into().map_or(true, |s| whitespace::trim(s).is_empty())
}
