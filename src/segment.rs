//! Word segmentation: split an identifier into its words.
//!
//! The strategy is picked by a fixed priority chain, first match wins:
//!
//! 1. interior underscores → split on `_`
//! 2. interior dashes → split on `-`
//! 3. mixed case → split before every uppercase letter
//! 4. otherwise the whole input is one word
//!
//! Segmentation never fails. The empty string yields a single empty word.

use crate::Separator;
use crate::classify::{has_separator, is_mixed_case, is_upper_letter};

/// How an input string is split into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Split on runs of the given separator.
    Separated(Separator),
    /// Split before each uppercase letter.
    MixedCase,
    /// Keep the input as one word.
    Whole,
}

impl Strategy {
    /// Pick the strategy for `input`.
    pub fn detect(input: &str) -> Self {
        if has_separator(input, Separator::Underscore) {
            Self::Separated(Separator::Underscore)
        } else if has_separator(input, Separator::Dash) {
            Self::Separated(Separator::Dash)
        } else if is_mixed_case(input) {
            Self::MixedCase
        } else {
            Self::Whole
        }
    }

    /// Split `input` with this strategy.
    pub fn split(self, input: &str) -> Vec<String> {
        match self {
            Self::Separated(separator) => split_on_separator(input, separator),
            Self::MixedCase => split_on_case(input),
            Self::Whole => vec![input.to_string()],
        }
    }
}

/// Split `input` into its words.
pub fn segment(input: &str) -> Vec<String> {
    let strategy = Strategy::detect(input);
    let words = strategy.split(input);
    log::trace!(
        "Segmented {:?} with {:?} into {} word(s)",
        input,
        strategy,
        words.len()
    );
    words
}

/// Split on `separator`.
///
/// A separator seen while the current word is still empty is kept as word
/// content, so leading separators stay attached to the first word. Any other
/// separator marks a pending split that happens at the next non-separator
/// character: runs collapse to one split and trailing separators are dropped.
pub fn split_on_separator(input: &str, separator: Separator) -> Vec<String> {
    let sep = separator.as_char();
    let mut words = Vec::new();
    let mut word = String::new();
    let mut pending_split = false;

    for c in input.chars() {
        if pending_split && c != sep {
            words.push(std::mem::take(&mut word));
            pending_split = false;
        }
        if c != sep || word.is_empty() {
            word.push(c);
        } else {
            pending_split = true;
        }
    }

    words.push(word);
    words
}

/// Split before every uppercase letter after the first character.
pub fn split_on_case(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();

    for (i, c) in input.chars().enumerate() {
        if i > 0 && is_upper_letter(c) {
            words.push(std::mem::take(&mut word));
        }
        word.push(c);
    }

    words.push(word);
    words
}
