//! Tests for pattern preparation and line filtering.

use super::*;
use crate::error::TgrepError;
use crate::template::{ParseError, TemplateTable};
use std::io::Cursor;

fn options(word_boundary: bool, ignore_case: bool, no_template: bool) -> PatternOptions {
    PatternOptions {
        word_boundary,
        ignore_case,
        no_template,
    }
}

fn filter(patterns: &[&str], opts: PatternOptions, input: &str) -> String {
    let matcher = Matcher::compile(patterns, &opts, TemplateTable::builtin()).unwrap();
    let mut out = Vec::new();
    matcher
        .filter_lines(STDIN_NAME, Cursor::new(input.as_bytes()), &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

// ============================================================================
// prepare_pattern
// ============================================================================

#[test]
fn test_prepare_templated_default() {
    let table = TemplateTable::builtin();
    let result = prepare_pattern("a.b(", &PatternOptions::default(), table).unwrap();
    assert_eq!(result, r"a.b\(");
}

#[test]
fn test_prepare_shorthand() {
    let table = TemplateTable::builtin();
    let result = prepare_pattern("email", &PatternOptions::default(), table).unwrap();
    assert_eq!(result, "[^ ]+@[^ ]+[.][^ ]+");
}

#[test]
fn test_prepare_word_boundary_templated() {
    let table = TemplateTable::builtin();
    let result = prepare_pattern("mail", &options(true, false, false), table).unwrap();
    assert_eq!(result, r"\bmail\b");
}

#[test]
fn test_prepare_word_and_case_templated() {
    let table = TemplateTable::builtin();
    let result = prepare_pattern("a$", &options(true, true, false), table).unwrap();
    assert_eq!(result, r"(?i)\ba\$\b");
}

#[test]
fn test_prepare_untemplated() {
    let table = TemplateTable::builtin();
    let result = prepare_pattern("he[lo]{3}", &options(true, true, true), table).unwrap();
    assert_eq!(result, r"(?i)\bhe[lo]{3}\b");
}

#[test]
fn test_prepare_untemplated_ignores_table() {
    let table = TemplateTable::builtin();
    let result = prepare_pattern("int", &options(false, false, true), table).unwrap();
    assert_eq!(result, "int");
}

#[test]
fn test_prepare_unclosed() {
    let table = TemplateTable::builtin();
    let result = prepare_pattern("{{int", &PatternOptions::default(), table);
    assert_eq!(result, Err(ParseError::UnclosedTemplate { position: 0 }));
}

// ============================================================================
// Matcher::compile
// ============================================================================

#[test]
fn test_compile_reports_pattern_index() {
    let err = Matcher::compile(
        &["ok", "{{broken"],
        &PatternOptions::default(),
        TemplateTable::builtin(),
    )
    .unwrap_err();

    match err {
        TgrepError::Template { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(source, ParseError::UnclosedTemplate { position: 0 });
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_compile_invalid_regex() {
    let err = Matcher::compile(
        &["{{(}}"],
        &PatternOptions::default(),
        TemplateTable::builtin(),
    )
    .unwrap_err();

    match err {
        TgrepError::InvalidRegex { pattern, .. } => assert_eq!(pattern, "("),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_compile_keeps_sources() {
    let matcher = Matcher::compile(
        &["int", "x(y)"],
        &PatternOptions::default(),
        TemplateTable::builtin(),
    )
    .unwrap();

    assert_eq!(matcher.len(), 2);
    let sources: Vec<&str> = matcher.sources().collect();
    assert_eq!(sources, vec!["-?[0-9]+", r"x\(y\)"]);
}

#[test]
fn test_regex_metacharacters_in_literal_text() {
    let matcher = Matcher::compile(
        &["(a+)"],
        &PatternOptions::default(),
        TemplateTable::builtin(),
    )
    .unwrap();

    // `+` is not escaped, so it still quantifies.
    assert!(matcher.is_match(b"(aaa)"));
    assert!(!matcher.is_match(b"aaa"));
}

// ============================================================================
// filter_lines
// ============================================================================

#[test]
fn test_basic_match() {
    assert_eq!(filter(&["hello"], PatternOptions::default(), "hello"), "hello\n");
}

#[test]
fn test_multi_line_input() {
    assert_eq!(
        filter(&["hello"], PatternOptions::default(), "hello\nworld\n"),
        "hello\n"
    );
}

#[test]
fn test_no_match_writes_nothing() {
    assert_eq!(filter(&["zzz"], PatternOptions::default(), "hello\nworld"), "");
}

#[test]
fn test_empty_input() {
    assert_eq!(filter(&["a"], PatternOptions::default(), ""), "");
}

#[test]
fn test_multiple_patterns_preserve_order_and_dedupe() {
    assert_eq!(
        filter(
            &["world", "hello", "o"],
            PatternOptions::default(),
            "hello\nbob\nworld"
        ),
        "hello\nbob\nworld\n"
    );
    assert_eq!(
        filter(&["world", "hello"], PatternOptions::default(), "hello\nbob\nworld"),
        "hello\nworld\n"
    );
}

#[test]
fn test_email_shorthand() {
    assert_eq!(
        filter(
            &["email"],
            PatternOptions::default(),
            "hello\nbob\nexample@example.com\n"
        ),
        "example@example.com\n"
    );
}

#[test]
fn test_email_inside_literal_parens() {
    assert_eq!(
        filter(
            &["(my email is {{email}})"],
            PatternOptions::default(),
            "hello\nbob\nHello, (my email is example@example.com)\n"
        ),
        "Hello, (my email is example@example.com)\n"
    );
}

#[test]
fn test_ignore_case() {
    assert_eq!(
        filter(
            &["hello"],
            options(false, true, false),
            "HELLO WORLD\nmy email is example@example.com\n"
        ),
        "HELLO WORLD\n"
    );
}

#[test]
fn test_untemplated_regex() {
    assert_eq!(
        filter(
            &["he[lo]{3}"],
            options(false, false, true),
            "hello world\nmy email is example@example.com\n"
        ),
        "hello world\n"
    );
}

#[test]
fn test_untemplated_ignore_case() {
    assert_eq!(
        filter(
            &["he[lo]{3}"],
            options(false, true, true),
            "HELLO WORLD\nmy email is example@example.com\n"
        ),
        "HELLO WORLD\n"
    );
}

#[test]
fn test_word_boundary_templated() {
    assert_eq!(
        filter(
            &["mail"],
            options(true, false, false),
            "HELLO WORLD\ni like mail\nmy email is example@example.com\n"
        ),
        "i like mail\n"
    );
}

#[test]
fn test_word_boundary_untemplated() {
    assert_eq!(
        filter(
            &["mai[a-z]"],
            options(true, false, true),
            "HELLO WORLD\ni like mail\nmy email is example@example.com\n"
        ),
        "i like mail\n"
    );
}

#[test]
fn test_crlf_lines() {
    assert_eq!(
        filter(&["end$"], options(false, false, true), "the end\r\nnot\r\n"),
        "the end\n"
    );
}

#[test]
fn test_invalid_utf8_passed_through() {
    let matcher = Matcher::compile(
        &["abc"],
        &PatternOptions::default(),
        TemplateTable::builtin(),
    )
    .unwrap();
    let input: &[u8] = b"x\xffabc\nnope\n";
    let mut out = Vec::new();

    let written = matcher.filter_lines("bytes", input, &mut out).unwrap();

    assert_eq!(written, 1);
    assert_eq!(out, b"x\xffabc\n");
}

#[test]
fn test_read_error_names_source() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }

    let matcher = Matcher::compile(
        &["a"],
        &PatternOptions::default(),
        TemplateTable::builtin(),
    )
    .unwrap();
    let reader = std::io::BufReader::new(FailingReader);
    let mut out = Vec::new();

    let err = matcher.filter_lines("data.txt", reader, &mut out).unwrap_err();
    assert_eq!(err.to_string(), "I/O error on data.txt: boom");
}
