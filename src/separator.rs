//! Word separator characters.

use std::fmt;

/// A character placed between words by a naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `_` (snake_case, MACRO_CASE)
    Underscore,
    /// `-` (dash-case, COBOL-CASE, Train-Case)
    Dash,
    /// `.` (reserved; no formatter emits it yet)
    Dot,
    /// ` ` (studly caps output)
    Space,
}

impl Separator {
    /// The separator as a character.
    pub const fn as_char(self) -> char {
        match self {
            Self::Underscore => '_',
            Self::Dash => '-',
            Self::Dot => '.',
            Self::Space => ' ',
        }
    }

    /// The separator as a string slice, for `join`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underscore => "_",
            Self::Dash => "-",
            Self::Dot => ".",
            Self::Space => " ",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
