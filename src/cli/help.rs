//! Extended help text and the template listing.

use crate::template::TemplateTable;
use std::fmt::Write;

const NAME_WIDTH: usize = 12;

/// Render the template listing shown in `--help` and `--list-templates`.
///
/// ```text
///   Template      Regex
///   ========      =====
/// - email       : [^ ]+@[^ ]+[.][^ ]+
/// ```
pub fn render_template_listing(table: &TemplateTable) -> String {
    let header = format!("  {:<width$}  {}\n", "Template", "Regex", width = NAME_WIDTH);
    let underline: String = header
        .chars()
        .map(|c| if c == ' ' || c == '\n' { c } else { '=' })
        .collect();

    let mut out = header;
    out.push_str(&underline);
    for (name, fragment) in table.entries() {
        let _ = writeln!(out, "- {:<width$}: {}", name, fragment, width = NAME_WIDTH);
    }
    out
}

/// Text appended after the generated option help.
pub fn after_help(table: &TemplateTable) -> String {
    format!(
        "\
tgrep provides templating for regular expressions. The input argument is escaped to be
safe to use as a regex. Wrap regular expressions in {{{{ }}}} and they will not be escaped.

Examples:
    tgrep '(hello {{{{(world|bob)}}}})'               # {{{{ }}}} is a regex, everything else is escaped
    tgrep -e email /tmp/example.txt                # shorthand: a bare template name is its regex
    tgrep 'My email is {{{{email}}}}' /tmp/example.txt  # a template inside a longer pattern

Templates supplied:
{}",
        render_template_listing(table)
    )
}
