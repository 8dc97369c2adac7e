//! Line filtering with templated patterns.
//!
//! Patterns are prepared (composed with `-w`/`-i` wrappers and expanded),
//! compiled once into a [`Matcher`], and applied to every line of each input.
//! A line is written once if any pattern matches it.

mod filter;
mod matcher;

#[cfg(test)]
mod tests;

pub use filter::{STDIN_NAME, STDOUT_NAME};
pub use matcher::{Matcher, PatternOptions, prepare_pattern};
