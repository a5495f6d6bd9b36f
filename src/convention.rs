//! Naming conventions as a selectable value.
//!
//! [`Convention`] lets a host application store the desired style in its own
//! configuration file (it serializes as `snake`, `macro`, `train`, ...) and
//! apply it with [`Convention::apply`] or [`convert`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Separator;
use crate::error::{ParseConventionError, Result};
use crate::format::{to_camel, to_cobol, to_dash, to_macro, to_pascal, to_snake, to_train};
use crate::studly::studly;

/// Available naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Convention {
    /// `this_is_snake_case`
    #[default]
    Snake,
    /// `THIS_IS_MACRO_CASE`
    Macro,
    /// `this-is-dash-case`
    Dash,
    /// `THIS-IS-COBOL-CASE`
    Cobol,
    /// `thisIsCamelCase`
    Camel,
    /// `ThisIsPascalCase`
    Pascal,
    /// `This-Is-Train-Case`
    Train,
    /// `tHiS iS StUdLy`
    Studly,
}

impl Convention {
    /// Display name, written in the convention itself.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Snake => "snake_case",
            Self::Macro => "MACRO_CASE",
            Self::Dash => "dash-case",
            Self::Cobol => "COBOL-CASE",
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Train => "Train-Case",
            Self::Studly => "StUdLy CaPs",
        }
    }

    /// Short description of the convention.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Snake => "Lowercase words joined with underscores",
            Self::Macro => "Uppercase words joined with underscores",
            Self::Dash => "Lowercase words joined with dashes (kebab-case)",
            Self::Cobol => "Uppercase words joined with dashes",
            Self::Camel => "First word lowercase, later words capitalized, no separator",
            Self::Pascal => "Every word capitalized, no separator",
            Self::Train => "Every word capitalized, joined with dashes (HTTP headers)",
            Self::Studly => "Pseudo-random letter case, words joined with spaces",
        }
    }

    /// Separator placed between words, if any.
    pub fn separator(&self) -> Option<Separator> {
        match self {
            Self::Snake | Self::Macro => Some(Separator::Underscore),
            Self::Dash | Self::Cobol | Self::Train => Some(Separator::Dash),
            Self::Camel | Self::Pascal => None,
            Self::Studly => Some(Separator::Space),
        }
    }

    /// All conventions in display order.
    pub fn all() -> &'static [Convention] {
        &[
            Self::Snake,
            Self::Macro,
            Self::Dash,
            Self::Cobol,
            Self::Camel,
            Self::Pascal,
            Self::Train,
            Self::Studly,
        ]
    }

    /// Convert `input` to this convention.
    ///
    /// # Errors
    ///
    /// Pascal and Train fail with
    /// [`ConventionError::InvalidArgument`](crate::ConventionError::InvalidArgument) on
    /// empty input. Every other convention always succeeds.
    pub fn apply(&self, input: &str) -> Result<String> {
        match self {
            Self::Snake => Ok(to_snake(input)),
            Self::Macro => Ok(to_macro(input)),
            Self::Dash => Ok(to_dash(input)),
            Self::Cobol => Ok(to_cobol(input)),
            Self::Camel => Ok(to_camel(input)),
            Self::Pascal => to_pascal(input),
            Self::Train => to_train(input),
            Self::Studly => Ok(studly(input)),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Convention {
    type Err = ParseConventionError;

    /// Parse a convention name.
    ///
    /// Case-insensitive; `-` and spaces are treated like `_`, so
    /// `"snake_case"`, `"Snake Case"` and `"SNAKE-CASE"` all parse. Common
    /// aliases such as `kebab`, `screaming_snake` and `http_header` are
    /// accepted too.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                _ => c.to_ascii_lowercase(),
            })
            .collect();

        let convention = match key.as_str() {
            "snake" | "snake_case" => Self::Snake,
            "macro" | "macro_case" | "screaming_snake" | "screaming_snake_case"
            | "upper_snake" | "constant" => Self::Macro,
            "dash" | "dash_case" | "kebab" | "kebab_case" => Self::Dash,
            "cobol" | "cobol_case" | "upper_kebab" | "screaming_kebab" => Self::Cobol,
            "camel" | "camelcase" | "camel_case" | "lower_camel" => Self::Camel,
            "pascal" | "pascalcase" | "pascal_case" | "upper_camel" => Self::Pascal,
            "train" | "train_case" | "http_header" => Self::Train,
            "studly" | "studly_caps" => Self::Studly,
            _ => {
                log::debug!("Rejected unknown naming convention '{}'", s);
                return Err(ParseConventionError::new(s));
            }
        };
        Ok(convention)
    }
}

/// Convert `input` to `convention`.
///
/// # Errors
///
/// See [`Convention::apply`].
pub fn convert(input: &str, convention: Convention) -> Result<String> {
    convention.apply(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_each_convention() {
        let input = "thisIsCamelCase";
        let expected = [
            (Convention::Snake, "this_is_camel_case"),
            (Convention::Macro, "THIS_IS_CAMEL_CASE"),
            (Convention::Dash, "this-is-camel-case"),
            (Convention::Cobol, "THIS-IS-CAMEL-CASE"),
            (Convention::Camel, "thisIsCamelCase"),
            (Convention::Pascal, "ThisIsCamelCase"),
            (Convention::Train, "This-Is-Camel-Case"),
            (Convention::Studly, "tHIs Is caMEl CASE"),
        ];
        for (convention, want) in expected {
            assert_eq!(
                convention.apply(input).expect("apply should succeed"),
                want,
                "{convention:?}"
            );
        }
    }

    #[test]
    fn test_all_lists_every_variant_once() {
        let all = Convention::all();
        assert_eq!(all.len(), 8);
        for (i, a) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(a), "{a:?} listed twice");
        }
    }

    #[test]
    fn test_separator_matches_output() {
        for &convention in Convention::all() {
            let out = convention
                .apply("some_long_name")
                .expect("apply should succeed");
            match convention.separator() {
                Some(sep) => assert_eq!(out.matches(sep.as_char()).count(), 2, "{convention:?}"),
                None => assert!(!out.contains(['_', '-', ' ']), "{convention:?}"),
            }
        }
    }

    #[test]
    fn test_from_str_names_and_aliases() {
        assert_eq!("snake_case".parse::<Convention>(), Ok(Convention::Snake));
        assert_eq!("Snake Case".parse::<Convention>(), Ok(Convention::Snake));
        assert_eq!("SCREAMING-SNAKE".parse::<Convention>(), Ok(Convention::Macro));
        assert_eq!(" kebab ".parse::<Convention>(), Ok(Convention::Dash));
        assert_eq!("camelCase".parse::<Convention>(), Ok(Convention::Camel));
        assert_eq!("upper-camel".parse::<Convention>(), Ok(Convention::Pascal));
        assert_eq!("http_header".parse::<Convention>(), Ok(Convention::Train));
        assert_eq!("cobol".parse::<Convention>(), Ok(Convention::Cobol));
        assert_eq!("studly".parse::<Convention>(), Ok(Convention::Studly));
    }

    #[test]
    fn test_from_str_display_name_round_trip() {
        for &convention in Convention::all() {
            assert_eq!(
                convention.to_string().parse::<Convention>(),
                Ok(convention),
                "{convention:?}"
            );
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = " Sentence ".parse::<Convention>().expect_err("sentence is not a convention");
        assert_eq!(err.name(), " Sentence ");
        assert_eq!(err.to_string(), "unknown naming convention ' Sentence '");
    }

    #[test]
    fn test_convert() {
        assert_eq!(
            convert("this_is_snake_case", Convention::Camel).expect("convert should succeed"),
            "thisIsSnakeCase"
        );
        assert!(convert("", Convention::Pascal).is_err());
    }
}
