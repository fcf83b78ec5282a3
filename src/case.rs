//! Case conversion between naming conventions
//!
//! Two paths produce the seven conventions. Camel and Pascal case split the
//! input into word tokens and re-join them under a per-token casing rule.
//! Snake, kebab, constant and dot case never build a token list: they insert
//! a separator at every lowercase-to-uppercase transition, fold delimiter runs
//! into that separator and case the whole string at once. Title case uses its
//! own whitespace-only tokenization.
//!
//! All positions are counted in `char`s.

use crate::error::{Error, Result};
use crate::whitespace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Anything that is not a word character, whitespace or a hyphen
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s\x{FEFF}-]").expect("case: invalid non-word pattern regex"));

/// Runs of whitespace, underscores and hyphens
static DELIMITER_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}_-]+").expect("case: invalid delimiter pattern regex"));

/// ASCII lowercase letter immediately followed by an ASCII uppercase letter
static CASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("case: invalid case boundary regex"));

/// Per-token casing rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Casing {
    /// Lowercase the first character, keep the rest
    LowerFirst,
    /// Uppercase the first character, lowercase the rest
    UpperFirst,
    UpperAll,
    LowerAll,
    Unchanged,
}

impl Casing {
    /// Apply this rule to a single token
    ///
    /// # Example
    /// ```rust,ignore
    /// assert_eq!(Casing::UpperFirst.apply("hELLO"), "Hello");
    /// assert_eq!(Casing::LowerFirst.apply("HELLO"), "hELLO");
    /// ```
    pub fn apply(self, token: &str) -> String {
        match self {
            Casing::UpperAll => token.to_uppercase(),
            Casing::LowerAll => token.to_lowercase(),
            Casing::Unchanged => token.to_string(),
            Casing::UpperFirst => {
                let mut chars = token.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                }
            }
            Casing::LowerFirst => {
                let mut chars = token.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
                }
            }
        }
    }
}

/// Target naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    Camel,
    Snake,
    Kebab,
    Pascal,
    Title,
    Constant,
    Dot,
}

impl Case {
    pub const ALL: [Case; 7] = [
        Case::Camel,
        Case::Snake,
        Case::Kebab,
        Case::Pascal,
        Case::Title,
        Case::Constant,
        Case::Dot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Snake => "snake",
            Case::Kebab => "kebab",
            Case::Pascal => "pascal",
            Case::Title => "title",
            Case::Constant => "constant",
            Case::Dot => "dot",
        }
    }

    /// Casing rule for the token at `index`
    pub fn casing(self, index: usize) -> Casing {
        match self {
            Case::Camel if index == 0 => Casing::LowerAll,
            Case::Camel | Case::Pascal | Case::Title => Casing::UpperFirst,
            Case::Snake | Case::Kebab | Case::Dot => Casing::LowerAll,
            Case::Constant => Casing::UpperAll,
        }
    }

    /// String placed between re-cased tokens
    pub fn joiner(self) -> &'static str {
        match self {
            Case::Camel | Case::Pascal => "",
            Case::Title => " ",
            Case::Snake | Case::Constant => "_",
            Case::Kebab => "-",
            Case::Dot => ".",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = Error;

    /// Accepts `snake`, `snake_case`, `snakeCase`, `Snake-Case` and similar spellings
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' ' | '.'))
            .collect::<String>()
            .to_lowercase();
        let key = key.strip_suffix("case").unwrap_or(&key);

        let case = match key {
            "camel" | "lowercamel" => Case::Camel,
            "snake" => Case::Snake,
            "kebab" => Case::Kebab,
            "pascal" | "uppercamel" => Case::Pascal,
            "title" => Case::Title,
            "constant" | "uppersnake" | "screamingsnake" => Case::Constant,
            "dot" => Case::Dot,
            _ => {
                log::debug!("Rejected unknown case convention '{}'", s);
                return Err(Error::unknown_case(s));
            }
        };
        Ok(case)
    }
}

fn strip_punctuation(input: &str) -> Cow<'_, str> {
    NON_WORD.replace_all(whitespace::trim(input), "")
}

/// Split a string into word tokens
///
/// Trims the input, drops every character that is not a word character,
/// whitespace or a hyphen, then splits on runs of whitespace, underscores and
/// hyphens. Empty tokens are discarded.
///
/// # Example
/// ```rust,ignore
/// assert_eq!(tokenize("hello, world!"), vec!["hello", "world"]);
/// assert_eq!(tokenize("foo_bar-baz"), vec!["foo", "bar", "baz"]);
/// assert!(tokenize("!!!").is_empty());
/// ```
pub fn tokenize(input: &str) -> Vec<String> {
    let filtered = strip_punctuation(input);
    DELIMITER_RUNS
        .split(&filtered)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a string for title casing: trimmed, whitespace only, no filtering
pub fn tokenize_title(input: &str) -> Vec<&str> {
    whitespace::words(input).collect()
}

/// Re-join tokens under the casing rules of a convention
///
/// # Example
/// ```rust,ignore
/// let tokens = tokenize("hello big world");
/// assert_eq!(apply_casing(&tokens, Case::Camel), "helloBigWorld");
/// assert_eq!(apply_casing(&tokens, Case::Constant), "HELLO_BIG_WORLD");
/// ```
pub fn apply_casing<S: AsRef<str>>(tokens: &[S], case: Case) -> String {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| case.casing(index).apply(token.as_ref()))
        .collect::<Vec<String>>()
        .join(case.joiner())
}

/// Separator insertion at case boundaries followed by delimiter folding.
/// The case's joiner is the separator and its first-token rule cases the result.
/// An inserted separator always sits between two letters, so folding only
/// has to cover the delimiter characters.
fn insert_boundaries(input: &str, case: Case) -> String {
    let separator = case.joiner();
    let filtered = strip_punctuation(input);
    let marked = CASE_BOUNDARY.replace_all(&filtered, format!("${{1}}{}${{2}}", separator));
    let joined = DELIMITER_RUNS.replace_all(&marked, separator);
    case.casing(0).apply(&joined)
}

/// Convert a string to the given naming convention
///
/// `None` and empty input produce an empty string.
///
/// # Arguments
/// * `input` - String to convert
/// * `case` - Target convention
///
/// # Example
/// ```rust,ignore
/// assert_eq!(convert("hello world", Case::Pascal), "HelloWorld");
/// assert_eq!(convert(None, Case::Snake), "");
/// ```
pub fn convert<'a>(input: impl Into<Option<&'a str>>, case: Case) -> String {
    let input = match input.into() {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };

    match case {
        Case::Title => apply_casing(&tokenize_title(input), case),
        Case::Camel | Case::Pascal => apply_casing(&tokenize(input), case),
        Case::Snake | Case::Kebab | Case::Constant | Case::Dot => insert_boundaries(input, case),
    }
}

/// Convert string to camelCase
///
/// # Example
/// ```rust,ignore
/// assert_eq!(to_camel_case("hello world"), "helloWorld");
/// assert_eq!(to_camel_case("Hello-World"), "helloWorld");
/// ```
pub fn to_camel_case<'a>(input: impl Into<Option<&'a str>>) -> String {
    convert(input, Case::Camel)
}

/// Convert string to snake_case
///
/// # Example
/// ```rust,ignore
/// assert_eq!(to_snake_case("HelloWorld"), "hello_world");
/// assert_eq!(to_snake_case("hello-world"), "hello_world");
/// ```
pub fn to_snake_case<'a>(input: impl Into<Option<&'a str>>) -> String {
    convert(input, Case::Snake)
}

/// Convert string to kebab-case
///
/// # Example
/// ```rust,ignore
/// assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
/// assert_eq!(to_kebab_case("hello_world"), "hello-world");
/// ```
pub fn to_kebab_case<'a>(input: impl Into<Option<&'a str>>) -> String {
    convert(input, Case::Kebab)
}

/// Convert string to PascalCase
///
/// # Example
/// ```rust,ignore
/// assert_eq!(to_pascal_case("hello world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
/// ```
pub fn to_pascal_case<'a>(input: impl Into<Option<&'a str>>) -> String {
    convert(input, Case::Pascal)
}

/// Capitalize the first letter of each whitespace-separated word
///
/// Hyphens and underscores are kept inside words, so `"hello-world"` becomes
/// `"Hello-world"`.
pub fn to_title_case<'a>(input: impl Into<Option<&'a str>>) -> String {
    convert(input, Case::Title)
}

/// Convert string to CONSTANT_CASE
///
/// # Example
/// ```rust,ignore
/// assert_eq!(to_constant_case("hello world"), "HELLO_WORLD");
/// assert_eq!(to_constant_case("getURL"), "GET_URL");
/// ```
pub fn to_constant_case<'a>(input: impl Into<Option<&'a str>>) -> String {
    convert(input, Case::Constant)
}

/// Convert string to dot.case
///
/// # Example
/// ```rust,ignore
/// assert_eq!(to_dot_case("HelloWorld"), "hello.world");
/// assert_eq!(to_dot_case("hello-world"), "hello.world");
/// ```
pub fn to_dot_case<'a>(input: impl Into<Option<&'a str>>) -> String {
    convert(input, Case::Dot)
}
