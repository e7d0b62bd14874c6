//! Locale-aware string comparison for list sorting.
//!
//! Approximates the `en` collation of browsers: whitespace and punctuation
//! sort before digits, digits before letters, letters compare case-insensitively
//! and ignore accents. Accents break ties first ("eclair" < "éclair"), then
//! lowercase wins over uppercase. In numeric mode a run of digits is compared
//! by its value, so "9" < "10".

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Comparison mode of a sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collation {
    #[default]
    Text,
    Numeric,
}

/// Primary weight of a single collation element
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Element {
    class: u8,
    // digit count of a numeric run, 0 for single characters
    magnitude: usize,
    text: String,
}

const CLASS_SPACE: u8 = 0;
const CLASS_PUNCT: u8 = 1;
const CLASS_DIGIT: u8 = 2;
const CLASS_LETTER: u8 = 3;

fn class_of(c: char) -> u8 {
    if c.is_whitespace() {
        CLASS_SPACE
    } else if c.is_numeric() {
        CLASS_DIGIT
    } else if c.is_alphabetic() {
        CLASS_LETTER
    } else {
        CLASS_PUNCT
    }
}

/// Canonical decomposition split into base characters and, for each of them,
/// the combining marks that follow it
fn decompose(s: &str) -> (Vec<char>, Vec<Vec<char>>) {
    let mut base = Vec::with_capacity(s.len());
    let mut marks: Vec<Vec<char>> = Vec::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = marks.last_mut() {
                last.push(c);
            }
        } else {
            base.push(c);
            marks.push(Vec::new());
        }
    }
    (base, marks)
}

fn primary_elements(base: &[char], numeric: bool) -> Vec<Element> {
    let mut elements = Vec::with_capacity(base.len());
    let mut chars = base.iter().copied().peekable();

    while let Some(c) = chars.next() {
        if numeric && c.is_ascii_digit() {
            let mut digits = String::from(c);
            while let Some(&next) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                digits.push(next);
                chars.next();
            }
            let trimmed = digits.trim_start_matches('0');
            let value = if trimmed.is_empty() { "0" } else { trimmed };
            elements.push(Element {
                class: CLASS_DIGIT,
                magnitude: value.len(),
                text: value.to_string(),
            });
        } else {
            elements.push(Element {
                class: class_of(c),
                magnitude: 0,
                text: c.to_lowercase().collect(),
            });
        }
    }

    elements
}

/// Case of each letter, lowercase first
fn tertiary_key(s: &str) -> Vec<bool> {
    s.chars()
        .filter(|c| c.is_alphabetic())
        .map(char::is_uppercase)
        .collect()
}

/// Compare two strings the way a list column is sorted
pub fn locale_compare(a: &str, b: &str, numeric: bool) -> Ordering {
    let (a_base, a_marks) = decompose(a);
    let (b_base, b_marks) = decompose(b);
    primary_elements(&a_base, numeric)
        .cmp(&primary_elements(&b_base, numeric))
        .then_with(|| a_marks.cmp(&b_marks))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_ignore_case_first() {
        assert_eq!(locale_compare("apple", "Banana", false), Ordering::Less);
        assert_eq!(locale_compare("Banana", "apple", false), Ordering::Greater);
        assert_eq!(locale_compare("bread", "Bakery", false), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("a", "A", false), Ordering::Less);
        assert_eq!(locale_compare("Apple", "apple", false), Ordering::Greater);
        assert_eq!(locale_compare("same", "same", false), Ordering::Equal);
    }

    #[test]
    fn test_accents_ignored_before_ties() {
        assert_eq!(locale_compare("éclair", "zebra", false), Ordering::Less);
        assert_eq!(locale_compare("Ärger", "Birne", false), Ordering::Less);
        assert_eq!(locale_compare("éclair", "eclairs", false), Ordering::Less);
        assert_eq!(locale_compare("eclair", "éclair", false), Ordering::Less);
        assert_eq!(locale_compare("éclair", "Eclair", false), Ordering::Greater);
        // precomposed and decomposed forms sort alike
        assert_eq!(locale_compare("caf\u{e9}", "cafe", false), Ordering::Greater);
        assert_eq!(locale_compare("cafe\u{301}", "cafe", false), Ordering::Greater);
        assert_eq!(locale_compare("caf\u{e9}", "cafez", false), Ordering::Less);
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(locale_compare(" a", "-a", false), Ordering::Less);
        assert_eq!(locale_compare("-", "1", false), Ordering::Less);
        assert_eq!(locale_compare("9", "a", false), Ordering::Less);
    }

    #[test]
    fn test_numeric_mode() {
        assert_eq!(locale_compare("10", "9", false), Ordering::Less);
        assert_eq!(locale_compare("9", "10", true), Ordering::Less);
        assert_eq!(locale_compare("item2", "item10", true), Ordering::Less);
        assert_eq!(locale_compare("2.5", "2.10", true), Ordering::Less);
    }

    #[test]
    fn test_leading_zeros_only_break_ties() {
        assert_eq!(locale_compare("007", "8", true), Ordering::Less);
        assert_ne!(locale_compare("01", "1", true), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("App", "Apple", false), Ordering::Less);
        assert_eq!(locale_compare("", "a", false), Ordering::Less);
    }
}
