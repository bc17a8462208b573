use owo_colors::OwoColorize;

use super::messages::generate_error_message;
use crate::language::LoadingError;
use crate::parsing::ParsingError;

/// Format a parsing error with full details including source code context
pub fn full_parsing_error(error: &ParsingError, name: &str, source: &str) -> String {
    let (problem, details) = generate_error_message(error);
    let offset = error.offset();

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("");
    let line = i + 1;
    let column = j + 1;
    let width = line
        .to_string()
        .len()
        .max(3);

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        name,
        line,
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error(error: &ParsingError, name: &str, source: &str) -> String {
    let offset = error.offset();
    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);
    let line = i + 1;
    let column = j + 1;

    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        name,
        line,
        column,
        error
            .message()
            .bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError, name: &str) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        name,
        error
            .problem
            .bold()
    )
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number, also zero-origin for consistency.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn counting_lines() {
        let content = "This is a test";

        let n = calculate_line_number(content, 5);
        assert_eq!(n + 1, 1);

        let content = r#"
This
is
a
test
            "#
        .trim_ascii();

        let n = calculate_line_number(content, 10);
        assert_eq!(n + 1, 4);

        let after = content
            .lines()
            .nth(n)
            .unwrap();
        assert_eq!(after, "test");
    }

    #[test]
    fn counting_columns() {
        let content = ".IPPcode22\nMOVE GF@x bogus";

        assert_eq!(calculate_column_number(content, 0), 0);
        assert_eq!(calculate_column_number(content, 11), 0);
        assert_eq!(calculate_column_number(content, 21), 10);

        // columns count characters, not bytes
        let content = "WRITE string@čaj xyz";
        assert_eq!(calculate_column_number(content, 18), 17);
    }

    #[test]
    fn concise_form() {
        let content = ".IPPcode22\nFOOBAR";
        let error = ParsingError::UnknownOpcode(11, "FOOBAR");

        let result = concise_parsing_error(&error, "<stdin>", content);
        assert!(result.contains("<stdin>:2:1"));
        assert!(result.contains("unknown opcode 'FOOBAR'"));
        assert!(!result.contains('\n'));
    }

    #[test]
    fn full_form() {
        let content = ".IPPcode22\nDEFVAR GF@x GF@y";
        let error = ParsingError::WrongArgumentCount(11, "DEFVAR", 1, 2);

        let result = full_parsing_error(&error, "<stdin>", content);
        assert!(result.contains("<stdin>:2:1"));
        assert!(result.contains("DEFVAR GF@x GF@y"));
        assert!(result.contains("DEFVAR ‹var›"));
    }
}
