//! String cleaning utilities
//!
//! Every cleaner is a named [`RuleSet`]: an ordered list of [`Step`]s folded
//! over the input from left to right. Order matters, later steps see the
//! output of earlier ones.
//!
//! Lengths used by [`truncate`] are counted in `char`s.

use crate::whitespace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("cleaning: invalid whitespace pattern regex"));

static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s\x{FEFF}]").expect("cleaning: invalid special chars regex"));

static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("cleaning: invalid digits regex"));

static NON_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("cleaning: invalid non-digits regex"));

static NON_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^[:word:]\s\x{FEFF}-]").expect("cleaning: invalid slug filter regex"));

static SLUG_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}_]+").expect("cleaning: invalid slug spaces regex"));

static HYPHEN_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+").expect("cleaning: invalid hyphen runs regex"));

static EDGE_HYPHENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-+|-+$").expect("cleaning: invalid edge hyphens regex"));

/// Suffix appended by [`truncate`]
pub const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

/// A single cleaning step
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Strip leading and trailing whitespace
    Trim,
    Lowercase,
    /// Replace every match of the pattern
    Replace(&'static Regex, &'static str),
}

impl Step {
    pub fn apply(&self, input: &str) -> String {
        match self {
            Step::Trim => whitespace::trim(input).to_string(),
            Step::Lowercase => input.to_lowercase(),
            Step::Replace(pattern, replacement) => {
                pattern.replace_all(input, *replacement).into_owned()
            }
        }
    }
}

/// Named cleaning configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// Remove every whitespace character
    RemoveSpaces,
    /// Trim and collapse interior whitespace runs to one space
    RemoveExtraSpaces,
    /// Keep ASCII letters, ASCII digits and whitespace
    RemoveSpecialChars,
    /// Drop ASCII digits
    RemoveNumbers,
    /// Keep ASCII digits only
    KeepOnlyNumbers,
    /// Trim, then remove all remaining whitespace
    TrimAll,
    /// URL-friendly lowercase slug; only ASCII word characters survive
    Slug,
}

impl RuleSet {
    pub const ALL: [RuleSet; 7] = [
        RuleSet::RemoveSpaces,
        RuleSet::RemoveExtraSpaces,
        RuleSet::RemoveSpecialChars,
        RuleSet::RemoveNumbers,
        RuleSet::KeepOnlyNumbers,
        RuleSet::TrimAll,
        RuleSet::Slug,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleSet::RemoveSpaces => "remove_spaces",
            RuleSet::RemoveExtraSpaces => "remove_extra_spaces",
            RuleSet::RemoveSpecialChars => "remove_special_chars",
            RuleSet::RemoveNumbers => "remove_numbers",
            RuleSet::KeepOnlyNumbers => "keep_only_numbers",
            RuleSet::TrimAll => "trim_all",
            RuleSet::Slug => "slug",
        }
    }

    /// Ordered steps of this rule set
    pub fn steps(self) -> Vec<Step> {
        match self {
            RuleSet::RemoveSpaces => vec![Step::Replace(&WHITESPACE_RUNS, "")],
            RuleSet::RemoveExtraSpaces => vec![Step::Trim, Step::Replace(&WHITESPACE_RUNS, " ")],
            RuleSet::RemoveSpecialChars => vec![Step::Replace(&SPECIAL_CHARS, "")],
            RuleSet::RemoveNumbers => vec![Step::Replace(&DIGITS, "")],
            RuleSet::KeepOnlyNumbers => vec![Step::Replace(&NON_DIGITS, "")],
            RuleSet::TrimAll => vec![Step::Trim, Step::Replace(&WHITESPACE_RUNS, "")],
            RuleSet::Slug => vec![
                Step::Lowercase,
                Step::Trim,
                Step::Replace(&NON_SLUG, ""),
                Step::Replace(&SLUG_SPACES, "-"),
                Step::Replace(&HYPHEN_RUNS, "-"),
                Step::Replace(&EDGE_HYPHENS, ""),
            ],
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply a rule set to a string
///
/// `None` and empty input produce an empty string.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(clean("  a   b ", RuleSet::RemoveExtraSpaces), "a b");
/// assert_eq!(clean(None, RuleSet::TrimAll), "");
/// ```
pub fn clean<'a>(input: impl Into<Option<&'a str>>, rules: RuleSet) -> String {
    let input = match input.into() {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };

    rules
        .steps()
        .iter()
        .fold(input.to_string(), |acc, step| step.apply(&acc))
}

/// Remove all whitespace from a string
///
/// # Example
/// ```rust,ignore
/// assert_eq!(remove_spaces("  test  string  "), "teststring");
/// ```
pub fn remove_spaces<'a>(input: impl Into<Option<&'a str>>) -> String {
    clean(input, RuleSet::RemoveSpaces)
}

/// Trim and keep only single spaces between words
///
/// # Example
/// ```rust,ignore
/// assert_eq!(remove_extra_spaces("  test   string  "), "test string");
/// ```
pub fn remove_extra_spaces<'a>(input: impl Into<Option<&'a str>>) -> String {
    clean(input, RuleSet::RemoveExtraSpaces)
}

/// Keep only ASCII alphanumerics and whitespace
pub fn remove_special_chars<'a>(input: impl Into<Option<&'a str>>) -> String {
    clean(input, RuleSet::RemoveSpecialChars)
}

/// Remove ASCII digits
///
/// # Example
/// ```rust,ignore
/// assert_eq!(remove_numbers("hello123world456"), "helloworld");
/// ```
pub fn remove_numbers<'a>(input: impl Into<Option<&'a str>>) -> String {
    clean(input, RuleSet::RemoveNumbers)
}

/// Keep only ASCII digits
///
/// Decimal points and signs are dropped like any other character, so
/// `"price: $99.99"` becomes `"9999"`.
pub fn keep_only_numbers<'a>(input: impl Into<Option<&'a str>>) -> String {
    clean(input, RuleSet::KeepOnlyNumbers)
}

/// Trim, then remove every remaining whitespace character
///
/// # Example
/// ```rust,ignore
/// assert_eq!(trim_all("  test   string  "), "teststring");
/// ```
pub fn trim_all<'a>(input: impl Into<Option<&'a str>>) -> String {
    clean(input, RuleSet::TrimAll)
}

/// Truncate string to `limit` characters followed by `"..."`
///
/// See [`truncate_with`].
pub fn truncate<'a>(input: impl Into<Option<&'a str>>, limit: i64) -> String {
    truncate_with(input, limit, DEFAULT_TRUNCATE_SUFFIX)
}

/// Truncate string to `limit` characters followed by `suffix`
///
/// The suffix is appended after the first `limit` characters, so a truncated
/// result is `limit + suffix` characters long. Input no longer than `limit`
/// is returned unchanged, as is any input when `limit` is negative.
///
/// # Arguments
/// * `input` - String to truncate
/// * `limit` - Number of characters to keep
/// * `suffix` - Appended when the input was cut
///
/// # Example
/// ```rust,ignore
/// assert_eq!(truncate_with("hello world", 5, "~"), "hello~");
/// assert_eq!(truncate_with("test", 10, "..."), "test");
/// assert_eq!(truncate_with("test", -1, "..."), "test");
/// ```
pub fn truncate_with<'a>(input: impl Into<Option<&'a str>>, limit: i64, suffix: &str) -> String {
    let input = match input.into() {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };

    let limit = match usize::try_from(limit) {
        Ok(limit) => limit,
        Err(_) => {
            log::debug!("Negative truncate limit {}, returning input unchanged", limit);
            return input.to_string();
        }
    };

    match input.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &input[..cut], suffix),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_spaces() {
        assert_eq!(remove_spaces("hello world"), "helloworld");
        assert_eq!(remove_spaces("  test  string  "), "teststring");
        assert_eq!(remove_spaces("tab\tand\nnewline"), "tabandnewline");
    }

    #[test]
    fn test_remove_extra_spaces() {
        assert_eq!(remove_extra_spaces("hello    world"), "hello world");
        assert_eq!(remove_extra_spaces("  test   string  "), "test string");
        assert_eq!(remove_extra_spaces("a\t\tb"), "a b");
    }

    #[test]
    fn test_remove_special_chars() {
        assert_eq!(remove_special_chars("hello@world#123!"), "helloworld123");
        assert_eq!(remove_special_chars("test-string_123"), "teststring123");
        assert_eq!(remove_special_chars("keep spaces"), "keep spaces");
        assert_eq!(remove_special_chars("café"), "caf");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(remove_numbers("hello123world456"), "helloworld");
        assert_eq!(remove_numbers("test123"), "test");
        assert_eq!(keep_only_numbers("hello123world456"), "123456");
        assert_eq!(keep_only_numbers("price: $99.99"), "9999");
        assert_eq!(keep_only_numbers("no digits"), "");
    }

    #[test]
    fn test_trim_all() {
        assert_eq!(trim_all("  hello world  "), "helloworld");
        assert_eq!(trim_all("  test   string  "), "teststring");
    }

    #[test]
    fn test_slug_rule_set() {
        assert_eq!(clean("Hello World!", RuleSet::Slug), "hello-world");
        assert_eq!(clean("  --Multiple__Separators--  ", RuleSet::Slug), "multiple-separators");
        assert_eq!(clean("Café Crème", RuleSet::Slug), "caf-crme");
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(remove_spaces("a\u{FEFF}b"), "ab");
        assert_eq!(remove_extra_spaces("\u{FEFF} a \u{FEFF} b \u{FEFF}"), "a b");
        assert_eq!(trim_all("\u{FEFF}a b\u{FEFF}"), "ab");
        assert_eq!(remove_special_chars("a\u{FEFF}b!"), "a\u{FEFF}b");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello world", 5), "hello...");
        assert_eq!(truncate("hello world", 11), "hello world");
        assert_eq!(truncate("test", 10), "test");
        assert_eq!(truncate("test", 0), "...");
        assert_eq!(truncate("test", -3), "test");
        assert_eq!(truncate("", 3), "");
        assert_eq!(truncate(None, 3), "");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_with("héllo wörld", 7, "…"), "héllo w…");
        assert_eq!(truncate_with("日本語テキスト", 3, ""), "日本語");
    }

    #[test]
    fn test_clean_none_and_empty() {
        for rules in RuleSet::ALL {
            assert_eq!(clean(None, rules), "");
            assert_eq!(clean("", rules), "");
        }
    }

    #[test]
    fn test_rule_set_serde_names() {
        for rules in RuleSet::ALL {
            let json = serde_json::to_string(&rules).unwrap();
            assert_eq!(json, format!("\"{}\"", rules.name()));
        }
    }
}
