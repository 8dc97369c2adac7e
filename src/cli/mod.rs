//! CLI argument parsing for tgrep.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the arguments; the work happens in the `commands` module.

mod help;

pub use help::{after_help, render_template_listing};

use crate::template::TemplateTable;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

/// Search lines with templated regular expressions.
///
/// Literal text in a pattern is regex-escaped; `{{ }}` blocks hold raw regex
/// or the name of a template such as `{{int}}` or `{{email}}`.
#[derive(Parser, Debug)]
#[command(name = "tgrep")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Regex should match at word boundaries.
    #[arg(short = 'w', long)]
    pub word_boundary: bool,

    /// Case insensitive search.
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Patterns are plain regexes and are not templated (like egrep).
    #[arg(short = 'E', long)]
    pub no_template: bool,

    /// Pattern to use. May be repeated; a line is printed if any pattern matches.
    #[arg(
        short = 'e',
        long = "regexp",
        value_name = "PATTERN",
        allow_hyphen_values = true
    )]
    pub patterns: Vec<String>,

    /// YAML config file with extra templates and default flags.
    #[arg(short, long, env = "TGREP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the available templates and exit.
    #[arg(long)]
    pub list_templates: bool,

    /// Files to search. Without -e, the first argument is the pattern.
    /// Standard input is read when no files are given.
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments, exiting with usage on error.
    ///
    /// The help text lists the built-in templates.
    pub fn parse_args() -> Self {
        let command = Cli::command().after_help(after_help(TemplateTable::builtin()));
        let matches = command.get_matches();
        Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Split the arguments into patterns and input files.
    ///
    /// Patterns come from `-e`; without any, the first positional argument is
    /// the pattern. Returns `None` when no pattern was given at all.
    pub fn patterns_and_files(&self) -> Option<(Vec<String>, Vec<PathBuf>)> {
        if !self.patterns.is_empty() {
            let files = self.args.iter().map(PathBuf::from).collect();
            return Some((self.patterns.clone(), files));
        }

        let (pattern, rest) = self.args.split_first()?;
        Some((vec![pattern.clone()], rest.iter().map(PathBuf::from).collect()))
    }
}
