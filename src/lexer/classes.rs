//! Unicode character classes shared by the recognizers.
//!
//! Each class is a single-character regex over a Unicode general category,
//! compiled once on first use.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DIGIT: Regex = Regex::new(r"^\p{Nd}$").unwrap();
    static ref LETTER: Regex = Regex::new(r"^\p{L}$").unwrap();
    static ref LETTER_OR_DIGIT: Regex = Regex::new(r"^[\p{L}\p{Nd}]$").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"^\s$").unwrap();
    static ref SYMBOL: Regex = Regex::new(r"^\p{S}$").unwrap();
    static ref PUNCTUATION: Regex = Regex::new(r"^\p{P}$").unwrap();
}

fn matches(class: &Regex, c: char) -> bool {
    let mut buffer = [0u8; 4];
    class.is_match(c.encode_utf8(&mut buffer))
}

pub fn is_digit(c: char) -> bool {
    matches(&DIGIT, c)
}

pub fn is_letter(c: char) -> bool {
    matches(&LETTER, c)
}

pub fn is_letter_or_digit(c: char) -> bool {
    matches(&LETTER_OR_DIGIT, c)
}

pub fn is_whitespace(c: char) -> bool {
    matches(&WHITESPACE, c)
}

/// Math, currency, modifier and other symbols (`\p{S}`).
pub fn is_symbol(c: char) -> bool {
    matches(&SYMBOL, c)
}

/// Connector, dash, open, close, quote and other punctuation (`\p{P}`).
pub fn is_punctuation(c: char) -> bool {
    matches(&PUNCTUATION, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_class() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(is_digit('٣'));
        assert!(!is_digit('a'));
        assert!(!is_digit('½'));
    }

    #[test]
    fn test_letter_classes() {
        assert!(is_letter('a'));
        assert!(is_letter('Ж'));
        assert!(!is_letter('_'));
        assert!(is_letter_or_digit('7'));
        assert!(!is_letter_or_digit('-'));
    }

    #[test]
    fn test_symbol_and_punctuation_are_disjoint() {
        for c in ['+', '<', '>', '=', '$', '^', '`', '|', '~'] {
            assert!(is_symbol(c), "{c:?} should be a symbol");
            assert!(!is_punctuation(c), "{c:?} should not be punctuation");
        }
        for c in ['!', '"', '#', '%', '&', '*', ',', '.', '/', ':', ';', '?', '@', '[', ']', '_', '-'] {
            assert!(is_punctuation(c), "{c:?} should be punctuation");
            assert!(!is_symbol(c), "{c:?} should not be a symbol");
        }
    }

    #[test]
    fn test_sentinel_belongs_to_no_class() {
        assert!(!is_digit('\0'));
        assert!(!is_letter_or_digit('\0'));
        assert!(!is_whitespace('\0'));
        assert!(!is_symbol('\0'));
        assert!(!is_punctuation('\0'));
    }

    #[test]
    fn test_whitespace_class() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\n'));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\u{a0}'));
        assert!(!is_whitespace('x'));
    }
}
