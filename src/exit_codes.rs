//! Exit code constants for the tgrep CLI.
//!
//! - 0: Success (whether or not any line matched)
//! - 1: User error (bad args, bad pattern, bad config)
//! - 2: I/O failure (unreadable input file, broken output)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing pattern, unclosed template, invalid regex, or invalid config.
pub const USER_ERROR: i32 = 1;

/// An input could not be opened or read, or output could not be written.
pub const IO_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(IO_FAILURE, 2);
    }
}
