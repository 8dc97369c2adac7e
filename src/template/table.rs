//! The name -> regex fragment lookup table.

use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Built-in templates. These fragments are part of the tool's interface and
/// must not change.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("int", "-?[0-9]+"),
    ("number", "-?[0-9]+(.[0-9]+)?"),
    (
        "uuid",
        "[0-9A-Fa-f-]{8}-[0-9A-Fa-f-]{4}-[0-9A-Fa-f-]{4}-[0-9A-Fa-f-]{4}-[0-9A-Fa-f-]{12}",
    ),
    ("integer", "[0-9]+"),
    ("email", "[^ ]+@[^ ]+[.][^ ]+"),
    ("word", r"\b[a-zA-Z0-9-]+\b"),
];

static BUILTIN: LazyLock<TemplateTable> = LazyLock::new(|| TemplateTable {
    templates: BUILTIN_TEMPLATES
        .iter()
        .map(|(name, fragment)| (name.to_string(), fragment.to_string()))
        .collect(),
});

/// Reasons a user-supplied template cannot be added to a table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateTableError {
    #[error("template name must not be empty")]
    EmptyName,

    /// The name could never be referenced from inside a `{{ }}` block.
    #[error("template name '{0}' must not contain '{{{{' or '}}}}'")]
    DelimiterInName(String),

    #[error("template '{0}' is built in and cannot be redefined")]
    RedefinesBuiltin(String),
}

/// Immutable mapping from template name to regex fragment.
///
/// Lookups are exact and case-sensitive. Iteration is always sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTable {
    templates: BTreeMap<String, String>,
}

impl TemplateTable {
    /// The shared table of built-in templates.
    pub fn builtin() -> &'static TemplateTable {
        &BUILTIN
    }

    /// Build a new table holding the built-ins plus `extra`.
    ///
    /// # Returns
    ///
    /// * `Ok(TemplateTable)` - The merged table
    /// * `Err(TemplateTableError)` - If any extra name is empty, contains a
    ///   block delimiter, or shadows a built-in
    pub fn with_templates<I, K, V>(extra: I) -> Result<Self, TemplateTableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut templates = BUILTIN.templates.clone();

        for (name, fragment) in extra {
            let name = name.into();
            if name.is_empty() {
                return Err(TemplateTableError::EmptyName);
            }
            if name.contains("{{") || name.contains("}}") {
                return Err(TemplateTableError::DelimiterInName(name));
            }
            if BUILTIN.templates.contains_key(&name) {
                return Err(TemplateTableError::RedefinesBuiltin(name));
            }
            templates.insert(name, fragment.into());
        }

        Ok(Self { templates })
    }

    /// Look up the fragment for `name`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// All `(name, fragment)` pairs, sorted by name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates
            .iter()
            .map(|(name, fragment)| (name.as_str(), fragment.as_str()))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateTable {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
