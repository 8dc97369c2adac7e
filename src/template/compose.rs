//! Helpers that build templated patterns out of other patterns.
//!
//! None of these add parsing rules: they only wrap raw regex fragments in
//! `{{ }}` so the expander passes them through untouched.

use super::expander::{ParseError, expand_with};
use super::table::TemplateTable;

/// Wrap a raw regex fragment in a block so it is never escaped.
pub fn wrap(fragment: &str) -> String {
    format!("{{{{{fragment}}}}}")
}

/// Prefix `pattern` with an inline case-insensitivity flag.
pub fn case_insensitive(pattern: &str) -> String {
    format!("{}{pattern}", wrap("(?i)"))
}

/// Surround `pattern` with word-boundary assertions.
pub fn word_boundary(pattern: &str) -> String {
    let boundary = wrap(r"\b");
    format!("{boundary}{pattern}{boundary}")
}

/// Expand `pattern` so the resulting regex ignores case.
///
/// The composed string is no longer a bare template name, so a pattern such
/// as `int` is matched literally here rather than as the `int` template.
pub fn expand_case_insensitive(table: &TemplateTable, pattern: &str) -> Result<String, ParseError> {
    expand_with(table, &case_insensitive(pattern))
}
