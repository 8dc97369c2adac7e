//! Command implementations for tgrep.
//!
//! This module provides the dispatcher that routes a parsed command line to
//! the template listing or to the search.

mod search;
mod templates;


use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use std::io::{BufRead, Write};

/// Dispatch a parsed command line.
///
/// Loads the config, builds the effective template table, and runs either
/// `--list-templates` or the search. `stdin` is only read when no input files
/// are given.
pub fn dispatch<R: BufRead, W: Write>(cli: Cli, stdin: R, stdout: &mut W) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let table = config.template_table()?;

    if cli.list_templates {
        return templates::cmd_list_templates(&table, stdout);
    }

    search::cmd_search(&cli, &config, &table, stdin, stdout)
}
