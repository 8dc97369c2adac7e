//! tg: print templated patterns after expansion.
//!
//! Each argument is expanded and printed on its own line, which makes the
//! output usable with other regex tools:
//!
//! ```text
//! $ tg 'id: {{int}}' email
//! id: -?[0-9]+
//! [^ ]+@[^ ]+[.][^ ]+
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tgrep::config::Config;
use tgrep::logging;
use tgrep::template::{TemplateTable, expand_with};

/// Expand templated patterns and print the resulting regexes.
#[derive(Parser, Debug)]
#[command(name = "tg")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config file with extra templates.
    #[arg(short, long, env = "TGREP_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Patterns to expand.
    #[arg(required = true, value_name = "PATTERN")]
    patterns: Vec<String>,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let config = Config::resolve(args.config.as_deref())?;
    let table = config.template_table()?;

    let stdout = io::stdout();
    run(&args.patterns, &table, &mut stdout.lock())
}

fn run<W: Write>(patterns: &[String], table: &TemplateTable, out: &mut W) -> Result<()> {
    for (i, pattern) in patterns.iter().enumerate() {
        let expanded = expand_with(table, pattern)
            .with_context(|| format!("parsing pattern at index [{}]", i))?;
        writeln!(out, "{}", expanded).context("writing to stdout")?;
    }
    Ok(())
}
