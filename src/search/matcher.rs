//! Compiled pattern set.

use crate::error::{Result, TgrepError};
use crate::template::{self, ParseError, TemplateTable};
use regex::bytes::Regex;

/// How raw patterns are turned into regexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternOptions {
    /// Match only at word boundaries (`-w`).
    pub word_boundary: bool,
    /// Ignore case (`-i`).
    pub ignore_case: bool,
    /// Use patterns as plain regexes without templating (`-E`).
    pub no_template: bool,
}

/// Turn a raw pattern into regex source.
///
/// The word-boundary wrapper is applied first, then the case-insensitivity
/// prefix. With `no_template` the wrappers are raw regex and nothing is
/// expanded; otherwise the composed string goes through the expander.
pub fn prepare_pattern(
    raw: &str,
    options: &PatternOptions,
    table: &TemplateTable,
) -> std::result::Result<String, ParseError> {
    if options.no_template {
        let mut pattern = raw.to_string();
        if options.word_boundary {
            pattern = format!(r"\b{pattern}\b");
        }
        if options.ignore_case {
            pattern = format!("(?i){pattern}");
        }
        return Ok(pattern);
    }

    let mut pattern = raw.to_string();
    if options.word_boundary {
        pattern = template::word_boundary(&pattern);
    }
    if options.ignore_case {
        return template::expand_case_insensitive(table, &pattern);
    }
    template::expand_with(table, &pattern)
}

/// Compiled patterns for matching lines.
///
/// Create once per run and reuse for every input.
pub struct Matcher {
    /// The compiled regexes paired with their expanded source.
    patterns: Vec<(Regex, String)>,
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field(
                "patterns",
                &self.patterns.iter().map(|(_, s)| s).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Matcher {
    /// Prepare and compile every pattern.
    ///
    /// # Returns
    ///
    /// * `Ok(Matcher)` - All patterns compiled
    /// * `Err(TgrepError::Template)` - A pattern could not be expanded
    /// * `Err(TgrepError::InvalidRegex)` - An expanded pattern is not a valid regex
    pub fn compile<S: AsRef<str>>(
        raw_patterns: &[S],
        options: &PatternOptions,
        table: &TemplateTable,
    ) -> Result<Self> {
        let mut patterns = Vec::with_capacity(raw_patterns.len());

        for (index, raw) in raw_patterns.iter().enumerate() {
            let raw = raw.as_ref();
            let expanded = prepare_pattern(raw, options, table)
                .map_err(|source| TgrepError::Template { index, source })?;

            tracing::debug!(index, raw, expanded = %expanded, "prepared pattern");

            let regex = Regex::new(&expanded).map_err(|source| TgrepError::InvalidRegex {
                pattern: expanded.clone(),
                source,
            })?;
            patterns.push((regex, expanded));
        }

        Ok(Self { patterns })
    }

    /// Check whether any pattern matches `line`.
    pub fn is_match(&self, line: &[u8]) -> bool {
        self.patterns.iter().any(|(regex, _)| regex.is_match(line))
    }

    /// The expanded source of each pattern, in order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(_, source)| source.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
