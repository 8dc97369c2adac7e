//! Streaming line filter.

use super::matcher::Matcher;
use crate::error::{Result, TgrepError};
use std::io::{BufRead, Write};

/// Display name used for standard input in errors and logs.
pub const STDIN_NAME: &str = "<stdin>";

/// Display name used for standard output in errors.
pub const STDOUT_NAME: &str = "<stdout>";

impl Matcher {
    /// Copy every matching line of `reader` to `writer`.
    ///
    /// Lines are split on `\n` and a trailing `\r` is dropped before matching.
    /// Each written line is terminated with `\n`, including a final line that
    /// had no terminator in the input. Bytes are passed through unchanged, so
    /// input need not be valid UTF-8.
    ///
    /// # Arguments
    ///
    /// * `source` - Name of the input, used in error messages
    /// * `reader` - The input
    /// * `writer` - Where matching lines go
    ///
    /// # Returns
    ///
    /// The number of lines written.
    pub fn filter_lines<R: BufRead, W: Write>(
        &self,
        source: &str,
        mut reader: R,
        writer: &mut W,
    ) -> Result<u64> {
        let mut buf = Vec::new();
        let mut written = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| TgrepError::io(source, e))?;
            if read == 0 {
                break;
            }

            let line = trim_line_ending(&buf);
            if self.is_match(line) {
                writer
                    .write_all(line)
                    .and_then(|()| writer.write_all(b"\n"))
                    .map_err(|e| TgrepError::io(STDOUT_NAME, e))?;
                written += 1;
            }
        }

        tracing::trace!(source, written, "filtered input");
        Ok(written)
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
