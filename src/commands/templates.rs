//! `tgrep --list-templates`.

use crate::cli::render_template_listing;
use crate::error::{Result, TgrepError};
use crate::search::STDOUT_NAME;
use crate::template::TemplateTable;
use std::io::Write;

pub(super) fn cmd_list_templates<W: Write>(table: &TemplateTable, stdout: &mut W) -> Result<()> {
    stdout
        .write_all(render_template_listing(table).as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| TgrepError::io(STDOUT_NAME, e))
}
