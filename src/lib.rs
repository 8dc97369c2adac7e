//! tgrep: grep with templated regular expressions.
//!
//! The core is [`template::expand`], which turns a pattern such as
//! `(id {{int}})` into a regex source string with literal text escaped and
//! named templates resolved. The rest of the crate is the `tgrep` and `tg`
//! command-line tools built on it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod search;
pub mod template;
