//! Identifier naming-convention conversion.
//!
//! Converts identifiers between snake_case, MACRO_CASE, dash-case,
//! COBOL-CASE, camelCase, PascalCase and Train-Case, plus a reproducible
//! "studly caps" randomizer.
//!
//! Every formatter runs the same pipeline: [`segment()`] the input into words,
//! transform each word, join with the convention's separator. Segmentation
//! picks one strategy per input, in priority order: interior underscores,
//! interior dashes, mixed case, otherwise the whole string.
//!
//! ```
//! use conventionizer::{Convention, segment, to_camel, to_snake};
//!
//! assert_eq!(segment("thisIsCamelCase"), ["this", "Is", "Camel", "Case"]);
//! assert_eq!(to_snake("thisIsPascalCase"), "this_is_pascal_case");
//! assert_eq!(to_camel("this_is_snake_case"), "thisIsSnakeCase");
//! assert_eq!(Convention::Cobol.apply("thisIsCamelCase").unwrap(), "THIS-IS-CAMEL-CASE");
//! ```
//!
//! # Sub-modules
//!
//! - [`classify`]: letter/case predicates and separator detection
//! - [`segment`](mod@segment): word segmentation
//! - [`format`](mod@format): one formatter per convention
//! - [`studly`](mod@studly): seeded studly caps
//! - [`convention`]: [`Convention`] enum for config-driven selection
//!
//! All functions are pure and thread-safe. Only capitalizing an empty string
//! fails ([`ConventionError::InvalidArgument`]), which surfaces through
//! [`to_pascal`], [`to_train`], [`to_title`] and [`capitalize_first_char`].

pub mod classify;
pub mod convention;
pub mod error;
pub mod format;
pub mod segment;
mod separator;
pub mod studly;

pub use convention::{Convention, convert};
pub use error::{ConventionError, ParseConventionError, Result};
pub use format::{
    capitalize_first_char, format_words, to_camel, to_cobol, to_dash, to_macro, to_pascal,
    to_snake, to_title, to_train,
};
pub use segment::{Strategy, segment};
pub use separator::Separator;
pub use studly::{StudlyRng, studly, studly_with_rng};
