//! The default command: filter inputs by the given patterns.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, TgrepError};
use crate::search::{Matcher, PatternOptions, STDIN_NAME, STDOUT_NAME};
use crate::template::TemplateTable;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

pub(super) fn cmd_search<R: BufRead, W: Write>(
    cli: &Cli,
    config: &Config,
    table: &TemplateTable,
    stdin: R,
    stdout: &mut W,
) -> Result<()> {
    let (patterns, files) = cli.patterns_and_files().ok_or_else(|| {
        TgrepError::UserError(
            "no pattern given\n\
             Fix: pass a pattern as the first argument or with -e PATTERN (see --help)."
                .to_string(),
        )
    })?;

    // Flags can only switch options on; the config supplies the defaults.
    let options = PatternOptions {
        word_boundary: cli.word_boundary || config.word_boundary,
        ignore_case: cli.ignore_case || config.ignore_case,
        no_template: cli.no_template || config.no_template,
    };

    let matcher = Matcher::compile(patterns.as_slice(), &options, table)?;

    if files.is_empty() {
        matcher.filter_lines(STDIN_NAME, stdin, stdout)?;
    } else {
        for path in &files {
            let name = path.display().to_string();
            tracing::trace!(file = %name, "searching");
            let file = File::open(path).map_err(|e| TgrepError::io(name.clone(), e))?;
            matcher.filter_lines(&name, BufReader::new(file), stdout)?;
        }
    }

    stdout.flush().map_err(|e| TgrepError::io(STDOUT_NAME, e))
}
