//! Failure message templates and assembly.
//!
//! Messages are line oriented so they stay greppable:
//!
//! ```text
//! The actual is NOT equal to the expected;
//! 	actual: 'b'
//! 	expected: 'a'
//! ```
//!
//! A null value is written as the bare `\tactual: null` line and is never
//! rendered.

use std::fmt::Write;

use crate::subject::{Rendered, Subject};

pub const ACTUAL_START_LINE: &str = "\tactual: '";
pub const ACTUAL_NULL_LINE: &str = "\tactual: null\n";
pub const EXPECTED_START_LINE: &str = "\texpected: '";
pub const EXPECTED_NULL_LINE: &str = "\texpected: null\n";
pub const QUOTE_NEW_LINE: &str = "'\n";
pub const NEW_LINE: &str = "\n";

pub const THE_ACTUAL_IS_EMPTY: &str = "The actual is empty.";
pub const THE_ACTUAL_IS_NULL: &str = "The actual is null.";
pub const THE_ACTUAL_IS_NOT_EQUAL_TO_THE_EXPECTED: &str =
    "The actual is NOT equal to the expected;\n";
pub const THE_ACTUAL_MUST_NOT_EQUAL_THE_EXPECTED: &str =
    "The actual MUST NOT equal the expected value;\n";
pub const THE_ACTUAL_MUST_BE_THE_SAME_AS_THE_EXPECTED: &str =
    "The actual MUST be the same as the expected value;\n";
pub const THE_ACTUAL_MUST_NOT_BE_THE_SAME_AS_THE_EXPECTED: &str =
    "The actual MUST NOT be the same as the expected value;\n";
pub const THE_COLLECTION_MUST_CONTAIN: &str = "The Collection MUST contain;\n";
pub const THE_COLLECTION_MUST_NOT_CONTAIN: &str = "The Collection MUST NOT contain;\n";
pub const THE_MAP_MUST_CONTAIN_KEY: &str = "The Map MUST contain key;\n";
pub const THE_MAP_MUST_NOT_CONTAIN_KEY: &str = "The Map MUST NOT contain key;\n";
pub const THE_MAP_MUST_CONTAIN_VALUE: &str = "The Map MUST contain value;\n";
pub const THE_MAP_MUST_NOT_CONTAIN_VALUE: &str = "The Map MUST NOT contain value;\n";
pub const TRUE_IS_REQUIRED: &str = "True is required at this point.\n";
pub const FALSE_IS_REQUIRED: &str = "False is required at this point.\n";

/// First line of a detailed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Prefix<'a> {
    /// A template constant, already newline terminated.
    Default(&'static str),
    /// Caller supplied; a newline is appended.
    Custom(&'a str),
}

impl Prefix<'_> {
    fn write_to(self, out: &mut String) {
        match self {
            Prefix::Default(template) => out.push_str(template),
            Prefix::Custom(message) => {
                out.push_str(message);
                out.push_str(NEW_LINE);
            }
        }
    }
}

/// `\tactual: '<actual>'\n`, or `\tactual: null\n`.
pub fn actual_line(actual: &dyn Subject) -> String {
    detail_line(ACTUAL_START_LINE, ACTUAL_NULL_LINE, actual)
}

/// `\texpected: '<expected>'\n`, or `\texpected: null\n`.
pub fn expected_line(expected: &dyn Subject) -> String {
    detail_line(EXPECTED_START_LINE, EXPECTED_NULL_LINE, expected)
}

fn detail_line(start: &str, null_line: &str, value: &dyn Subject) -> String {
    let mut line = String::new();
    push_detail(&mut line, start, null_line, value);
    line
}

fn push_detail(out: &mut String, start: &str, null_line: &str, value: &dyn Subject) {
    if value.is_null() {
        out.push_str(null_line);
        return;
    }
    out.push_str(start);
    // Writing into a String cannot fail.
    let _ = write!(out, "{}", Rendered(value));
    out.push_str(QUOTE_NEW_LINE);
}

/// Prefix followed by the actual line.
pub(crate) fn with_actual(prefix: Prefix<'_>, actual: &dyn Subject) -> String {
    let mut out = String::new();
    prefix.write_to(&mut out);
    push_detail(&mut out, ACTUAL_START_LINE, ACTUAL_NULL_LINE, actual);
    out
}

/// Prefix followed by the actual and expected lines.
pub(crate) fn with_actual_and_expected(
    prefix: Prefix<'_>,
    actual: &dyn Subject,
    expected: &dyn Subject,
) -> String {
    let mut out = with_actual(prefix, actual);
    push_detail(&mut out, EXPECTED_START_LINE, EXPECTED_NULL_LINE, expected);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_present_values() {
        assert_eq!(actual_line(&5), "\tactual: '5'\n");
        assert_eq!(expected_line(&"x"), "\texpected: 'x'\n");
    }

    #[test]
    fn null_lines_are_unquoted() {
        assert_eq!(actual_line(&None::<i32>), "\tactual: null\n");
        assert_eq!(expected_line(&None::<String>), "\texpected: null\n");
    }

    #[test]
    fn present_text_spelling_null_is_still_quoted() {
        assert_eq!(actual_line(&"null"), "\tactual: 'null'\n");
    }

    #[test]
    fn default_prefix_is_used_verbatim() {
        let message = with_actual_and_expected(
            Prefix::Default(THE_ACTUAL_IS_NOT_EQUAL_TO_THE_EXPECTED),
            &"b",
            &"a",
        );
        assert_eq!(
            message,
            "The actual is NOT equal to the expected;\n\tactual: 'b'\n\texpected: 'a'\n"
        );
    }

    #[test]
    fn custom_prefix_gets_a_newline() {
        let message = with_actual(Prefix::Custom("port is reserved"), &443);
        assert_eq!(message, "port is reserved\n\tactual: '443'\n");
    }
}
