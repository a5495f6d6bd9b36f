//! Convention formatters: segment, transform each word, join.

use crate::Separator;
use crate::error::{ConventionError, Result};
use crate::segment::segment;

/// Convert to snake_case.
pub fn to_snake(input: &str) -> String {
    segment(input)
        .join(Separator::Underscore.as_str())
        .to_lowercase()
}

/// Convert to MACRO_CASE.
pub fn to_macro(input: &str) -> String {
    to_snake(input).to_uppercase()
}

/// Convert to dash-case.
pub fn to_dash(input: &str) -> String {
    segment(input).join(Separator::Dash.as_str()).to_lowercase()
}

/// Convert to COBOL-CASE.
pub fn to_cobol(input: &str) -> String {
    to_dash(input).to_uppercase()
}

/// Convert to camelCase.
///
/// The first word is lowercased, every following word is title-cased.
pub fn to_camel(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for (i, word) in segment(input).iter().enumerate() {
        if i == 0 {
            result.push_str(&word.to_lowercase());
        } else {
            // Only the first word can be empty, and title case of "" is "".
            result.push_str(&to_title(word).unwrap_or_default());
        }
    }
    result
}

/// Convert to PascalCase.
///
/// # Errors
///
/// Returns [`ConventionError::InvalidArgument`] for empty input.
pub fn to_pascal(input: &str) -> Result<String> {
    capitalize_first_char(&to_camel(input))
}

/// Convert to Train-Case (the HTTP header style).
///
/// # Errors
///
/// Returns [`ConventionError::InvalidArgument`] for empty input.
pub fn to_train(input: &str) -> Result<String> {
    Ok(format_words(&segment(input), to_title)?.join(Separator::Dash.as_str()))
}

/// Apply `transform` to every word, stopping at the first error.
pub fn format_words<F>(words: &[String], transform: F) -> Result<Vec<String>>
where
    F: Fn(&str) -> Result<String>,
{
    words.iter().map(|word| transform(word.as_str())).collect()
}

/// Uppercase the first character of `input`, leaving the rest untouched.
///
/// # Errors
///
/// Returns [`ConventionError::InvalidArgument`] if `input` is empty.
pub fn capitalize_first_char(input: &str) -> Result<String> {
    let mut chars = input.chars();
    let first = chars.next().ok_or(ConventionError::InvalidArgument {
        operation: "capitalize_first_char",
    })?;

    let mut result = String::with_capacity(input.len());
    result.extend(first.to_uppercase());
    result.push_str(chars.as_str());
    Ok(result)
}

/// Lowercase `word`, then uppercase its first character.
///
/// # Errors
///
/// Returns [`ConventionError::InvalidArgument`] if `word` is empty.
pub fn to_title(word: &str) -> Result<String> {
    capitalize_first_char(&word.to_lowercase())
}
