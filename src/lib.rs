//! string-master - stateless string transformation helpers
//!
//! Provides:
//! - Case conversion (camel, snake, kebab, pascal, title, constant, dot)
//! - Cleaning (whitespace, special characters, digits, truncation)
//! - Inspection (word and character counts, emptiness checks)
//! - Random strings, slugs, comparison and diacritic removal
//! - Configurable transformation pipelines
//!
//! Every function accepting text takes `impl Into<Option<&str>>`, so both
//! `"text"` and `None` can be passed. `None` never panics; it maps to an empty
//! string, zero or `true` depending on the function. Lengths and positions are
//! counted in Unicode scalar values (`char`).
//!
//! # Usage
//! ```rust
//! use string_master::{generate_slug, to_camel_case, to_snake_case, truncate};
//!
//! assert_eq!(to_camel_case("hello world"), "helloWorld");
//! assert_eq!(to_snake_case("HelloWorld"), "hello_world");
//! assert_eq!(generate_slug("Hello World!"), "hello-world");
//! assert_eq!(truncate("hello world", 5), "hello...");
//! assert_eq!(to_camel_case(None), "");
//! ```

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod advanced;
pub mod case;
pub mod cleaning;
pub mod error;
pub mod info;
pub mod pipeline;
pub(crate) mod whitespace;

pub use advanced::{
    compare_strings, generate_slug, normalize_unicode, random_string, random_string_with_charset,
    random_string_with_rng, DEFAULT_CHARSET,
};
pub use case::{
    apply_casing, convert, to_camel_case, to_constant_case, to_dot_case, to_kebab_case,
    to_pascal_case, to_snake_case, to_title_case, tokenize, tokenize_title, Case, Casing,
};
pub use cleaning::{
    clean, keep_only_numbers, remove_extra_spaces, remove_numbers, remove_spaces,
    remove_special_chars, trim_all, truncate, truncate_with, RuleSet, Step,
    DEFAULT_TRUNCATE_SUFFIX,
};
pub use error::{Error, Result};
pub use info::{count_chars, count_words, is_blank, is_empty, reverse_string};
pub use pipeline::{Pipeline, Transform};
