//! Templated regular expressions.
//!
//! A pattern is plain text in which regex metacharacters are escaped, except
//! inside `{{ }}` blocks. A block holds either the name of a template from the
//! [`TemplateTable`] (replaced by its regex fragment) or raw regex text (passed
//! through unchanged).
//!
//! # Syntax
//!
//! - `{{name}}` - Substitutes the fragment of template `name`
//! - `{{[0-9]+}}` - Raw regex, emitted as-is
//! - `\{` - A literal `{` that does not open a block
//! - `name` - A pattern that is exactly a template name expands to the fragment
//!
//! ```
//! use tgrep::template::expand;
//!
//! assert_eq!(expand("id: {{int}}").unwrap(), "id: -?[0-9]+");
//! assert_eq!(expand("f(x)").unwrap(), r"f\(x\)");
//! ```

pub mod compose;
mod expander;
mod table;


pub use compose::{case_insensitive, expand_case_insensitive, word_boundary, wrap};
pub use expander::{ParseError, SPECIAL_CHARACTERS, expand, expand_with};
pub use table::{TemplateTable, TemplateTableError};
