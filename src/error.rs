//! Error types for the tgrep CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::ParseError;
use thiserror::Error;

/// Main error type for tgrep operations.
///
/// Each variant maps to an exit code from [`exit_codes`].
#[derive(Error, Debug)]
pub enum TgrepError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// A pattern could not be expanded.
    #[error("failed to expand pattern at index [{index}]: {source}")]
    Template {
        index: usize,
        #[source]
        source: ParseError,
    },

    /// The expanded pattern is not a valid regular expression.
    #[error("invalid regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Config file could not be read, parsed, or validated.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Reading an input or writing output failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl TgrepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TgrepError::UserError(_) => exit_codes::USER_ERROR,
            TgrepError::Template { .. } => exit_codes::USER_ERROR,
            TgrepError::InvalidRegex { .. } => exit_codes::USER_ERROR,
            TgrepError::ConfigError(_) => exit_codes::USER_ERROR,
            TgrepError::Io { .. } => exit_codes::IO_FAILURE,
        }
    }

    /// True when output was cut off by the reader going away (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, TgrepError::Io { source, .. } if source.kind() == std::io::ErrorKind::BrokenPipe)
    }

    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        TgrepError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for tgrep operations.
pub type Result<T> = std::result::Result<T, TgrepError>;
