//! Whitespace definition shared by the tokenizers, cleaners and counters
//!
//! Unicode `White_Space` characters plus U+FEFF (zero width no-break space,
//! the byte order mark). Regex patterns spell the same set as `[\s\x{FEFF}]`.

/// U+FEFF, which `char::is_whitespace` does not cover
pub const BOM: char = '\u{FEFF}';

pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == BOM
}

pub fn trim(input: &str) -> &str {
    input.trim_matches(is_space)
}

/// Non-empty runs between whitespace
pub fn words(input: &str) -> impl Iterator<Item = &str> {
    input.split(is_space).filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_is_space() {
        assert!(is_space(BOM));
        assert!(is_space('\u{3000}'));
        assert!(!is_space('a'));
    }

    #[test]
    fn test_trim_and_words() {
        assert_eq!(trim("\u{FEFF} hello \t\u{FEFF}"), "hello");
        assert_eq!(words("a\u{FEFF}b  c").collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(words("   ").count(), 0);
    }
}
