//! Random strings, slugs, comparison and diacritic removal

use crate::cleaning::{clean, RuleSet};
use rand::{thread_rng, Rng};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Character set used by [`random_string`]: A-Z, a-z and 0-9
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Text a missing argument stands for in [`compare_strings`]
const NULL_TEXT: &str = "null";

/// Generate a random alphanumeric string of specified length
///
/// Uses the thread-local generator, which is not meant for secrets.
/// A negative length yields an empty string.
///
/// # Example
/// ```rust,ignore
/// let token = random_string(10);
/// assert_eq!(token.chars().count(), 10);
/// ```
pub fn random_string(length: i64) -> String {
    random_string_with_charset(length, DEFAULT_CHARSET)
}

/// Generate a random string with custom character set
///
/// # Arguments
/// * `length` - The desired length of the random string
/// * `charset` - String containing all allowed characters
///
/// # Example
/// ```rust,ignore
/// let code = random_string_with_charset(6, "0123456789");
/// println!("Numeric code: {}", code); // e.g., "482957"
/// ```
pub fn random_string_with_charset(length: i64, charset: &str) -> String {
    random_string_with_rng(&mut thread_rng(), length, charset)
}

/// Generate a random string drawing from the given generator
///
/// Each character is picked independently and uniformly from `charset`, with
/// replacement. Returns an empty string when `length` is negative or the
/// charset is empty. Pass a seeded generator for reproducible output.
pub fn random_string_with_rng<R: Rng + ?Sized>(rng: &mut R, length: i64, charset: &str) -> String {
    let length = match usize::try_from(length) {
        Ok(length) => length,
        Err(_) => {
            log::debug!("Negative random string length {}", length);
            return String::new();
        }
    };

    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        log::debug!("Empty charset for random string of length {}", length);
        return String::new();
    }

    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

/// Convert string to slug format
///
/// Lowercases and trims, drops characters other than ASCII word characters,
/// whitespace and hyphens, turns whitespace and underscore runs into a single
/// hyphen and strips hyphens from both ends.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(generate_slug("Hello World!"), "hello-world");
/// assert_eq!(generate_slug("JavaScript & TypeScript"), "javascript-typescript");
/// assert_eq!(generate_slug("Café"), "caf"); // run normalize_unicode first to keep "cafe"
/// ```
pub fn generate_slug<'a>(input: impl Into<Option<&'a str>>) -> String {
    clean(input, RuleSet::Slug)
}

/// Compare two strings, returning -1, 0 or 1
///
/// Comparison is ordinal over code points. Unless `case_sensitive` is set both
/// sides are lowercased first. `None` compares as the text `"null"`.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(compare_strings("apple", "banana", false), -1);
/// assert_eq!(compare_strings("Hello", "hello", true), -1);
/// assert_eq!(compare_strings("Hello", "hello", false), 0);
/// ```
pub fn compare_strings<'a, 'b>(
    a: impl Into<Option<&'a str>>,
    b: impl Into<Option<&'b str>>,
    case_sensitive: bool,
) -> i32 {
    let a = a.into().unwrap_or(NULL_TEXT);
    let b = b.into().unwrap_or(NULL_TEXT);

    let ordering = if case_sensitive {
        a.cmp(b)
    } else {
        a.to_lowercase().cmp(&b.to_lowercase())
    };

    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Remove diacritics by canonical decomposition
///
/// Decomposes to NFD and drops combining diacritical marks (U+0300 to U+036F).
///
/// # Example
/// ```rust,ignore
/// assert_eq!(normalize_unicode("résumé"), "resume");
/// ```
pub fn normalize_unicode<'a>(input: impl Into<Option<&'a str>>) -> String {
    input
        .into()
        .map(|s| {
            s.nfd()
                .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
                .collect()
        })
        .unwrap_or_default()
}
