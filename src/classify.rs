//! Character and string classification used by the segmenter.
//!
//! A "letter" here is any character with case: `char::is_lowercase` or
//! `char::is_uppercase`. Digits, punctuation and uncased scripts are not
//! letters, so they never count as word boundaries on their own.

use crate::Separator;

/// Whether `c` is a cased letter.
pub fn is_letter(c: char) -> bool {
    is_lower_letter(c) || is_upper_letter(c)
}

/// Whether `c` is a lowercase letter.
pub fn is_lower_letter(c: char) -> bool {
    c.is_lowercase()
}

/// Whether `c` is an uppercase letter.
pub fn is_upper_letter(c: char) -> bool {
    c.is_uppercase()
}

/// Whether `input` contains both a lowercase and an uppercase letter.
pub fn is_mixed_case(input: &str) -> bool {
    let mut has_lower = false;
    let mut has_upper = false;

    for c in input.chars() {
        has_lower |= is_lower_letter(c);
        has_upper |= is_upper_letter(c);
        if has_lower && has_upper {
            return true;
        }
    }
    false
}

/// Whether `input` uses `separator` as an interior word separator.
///
/// True only when some occurrence of the separator has a letter somewhere
/// before it and a letter somewhere after it. Leading and trailing
/// separators alone do not count.
pub fn has_separator(input: &str, separator: Separator) -> bool {
    let sep = separator.as_char();
    let mut seen_letter = false;
    let mut seen_separator = false;

    for c in input.chars() {
        if !seen_letter {
            seen_letter = is_letter(c);
        } else if c == sep {
            seen_separator = true;
        } else if seen_separator && is_letter(c) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_letter() {
        assert!(is_letter('a'));
        assert!(is_letter('A'));
        assert!(is_letter('Æ'));
        assert!(is_letter('ø'));
        assert!(!is_letter('0'));
        assert!(!is_letter('9'));
        assert!(!is_letter('_'));
        assert!(!is_letter(' '));
    }

    #[test]
    fn test_is_mixed_case() {
        assert!(!is_mixed_case("lower"));
        assert!(!is_mixed_case("UPPER"));
        assert!(!is_mixed_case("this-is-dash-case"));
        assert!(!is_mixed_case(""));
        assert!(is_mixed_case("ThisIsPascalCase"));
        assert!(is_mixed_case("thisIsCamelCase"));
        assert!(is_mixed_case("aB"));
    }

    #[test]
    fn test_has_separator() {
        assert!(has_separator("this_is_snake_case", Separator::Underscore));
        assert!(!has_separator("thisIsCamelCase", Separator::Underscore));
        assert!(has_separator("this-is-dash-case", Separator::Dash));
        assert!(!has_separator("this-is-dash-case", Separator::Underscore));
    }

    #[test]
    fn test_has_separator_ignores_edges() {
        assert!(!has_separator("_leading", Separator::Underscore));
        assert!(!has_separator("trailing_", Separator::Underscore));
        assert!(!has_separator("___", Separator::Underscore));
        assert!(!has_separator("1_2", Separator::Underscore));
        // A leading marker does not disqualify a later interior separator.
        assert!(has_separator("_prefixed_snake", Separator::Underscore));
        // Digits between the separator and the next letter are fine.
        assert!(has_separator("a_1b", Separator::Underscore));
    }
}
