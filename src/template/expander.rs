//! Single-pass expander for templated patterns.

use super::table::TemplateTable;
use thiserror::Error;

/// Characters escaped with a backslash when they appear outside a block.
pub const SPECIAL_CHARACTERS: &[char] = &['[', '(', ')', '{', '}', '$', '^', '\\'];

/// Error type for pattern expansion failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `{{` was found without a matching `}}`.
    #[error("template opened at position {position} is never closed")]
    UnclosedTemplate {
        /// Code point index of the opening `{{`.
        position: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Literal,
    InReference { start: usize },
}

/// Expand `input` against the built-in template table.
///
/// See [`expand_with`].
pub fn expand(input: &str) -> Result<String, ParseError> {
    expand_with(TemplateTable::builtin(), input)
}

/// Expand `input` into a regex source string.
///
/// If the whole input is a template name, its fragment is returned as-is.
/// Otherwise literal text is escaped, `{{name}}` is replaced by the named
/// fragment and any other `{{...}}` content is copied verbatim.
///
/// # Returns
///
/// * `Ok(String)` - The expanded pattern
/// * `Err(ParseError::UnclosedTemplate)` - If a `{{` is never closed
///
/// # Examples
///
/// ```
/// use tgrep::template::{TemplateTable, expand_with};
///
/// let table = TemplateTable::builtin();
/// assert_eq!(expand_with(table, "int").unwrap(), "-?[0-9]+");
/// assert_eq!(expand_with(table, "a{{[0-9]}}$").unwrap(), r"a[0-9]\$");
/// assert!(expand_with(table, "{{int").is_err());
/// ```
pub fn expand_with(table: &TemplateTable, input: &str) -> Result<String, ParseError> {
    if let Some(fragment) = table.lookup(input) {
        return Ok(fragment.to_string());
    }

    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len());
    let mut reference = String::new();
    let mut state = State::Literal;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();

        match state {
            State::Literal => match (ch, next) {
                ('\\', Some('{')) => {
                    output.push_str("\\{");
                    i += 2;
                }
                ('{', Some('{')) => {
                    state = State::InReference { start: i };
                    reference.clear();
                    i += 2;
                }
                _ => {
                    if SPECIAL_CHARACTERS.contains(&ch) {
                        output.push('\\');
                    }
                    output.push(ch);
                    i += 1;
                }
            },
            State::InReference { .. } => match (ch, next) {
                ('}', Some('}')) => {
                    state = State::Literal;
                    output.push_str(table.lookup(&reference).unwrap_or(reference.as_str()));
                    i += 2;
                }
                _ => {
                    // Nested `{{` is plain content here.
                    reference.push(ch);
                    i += 1;
                }
            },
        }
    }

    if let State::InReference { start } = state {
        return Err(ParseError::UnclosedTemplate { position: start });
    }

    Ok(output)
}
