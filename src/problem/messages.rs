use crate::language::{lookup, Operand, HEADER};
use crate::parsing::ParsingError;

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError) -> (String, String) {
    match error {
        ParsingError::InvalidHeader(_) => (
            "Invalid header".to_string(),
            format!(
                r#"
The first line of a program that is not blank or a comment must be exactly

    {}

with nothing else following it other than an optional comment.
                "#,
                HEADER
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnknownOpcode(_, word) => (
            format!("Unknown opcode '{}'", word),
            r#"
Every instruction line starts with the name of an operation such as MOVE,
DEFVAR, or JUMPIFEQ. Operation names are not case sensitive, but they must
be part of the IPPcode22 instruction set.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::WrongArgumentCount(_, opcode, expected, found) => (
            format!(
                "{} takes {} argument{} but {} given",
                opcode,
                expected,
                if *expected == 1 { "" } else { "s" },
                found
            ),
            format!("The form of this instruction is:\n\n    {}", synopsis(opcode)),
        ),
        ParsingError::InvalidLabel(_, word) => (
            format!("Invalid label '{}'", word),
            r#"
Labels start with a letter or one of the characters _ - $ & % * ! ? and
continue with letters, digits, or those same characters.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::InvalidVariable(_, word) => (
            format!("Invalid variable '{}'", word),
            r#"
Variables are written as a frame, an '@', and then a name, for example
GF@counter. The frame is one of GF (global), LF (local), or TF (temporary).
Names follow the same rules as labels.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::InvalidType(_, word) => (
            format!("Invalid type '{}'", word),
            "The type operand must be one of int, string, or bool.".to_string(),
        ),
        ParsingError::InvalidSymbol(_, word) => (
            format!("Invalid symbol '{}'", word),
            r#"
This operand accepts either a constant such as int@42 or string@hello, or a
variable such as LF@result.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::InvalidConstant(_, word) => (
            format!("Invalid constant '{}'", word),
            r#"
Constants are a type, an '@', and a value: int@-7, int@0x1F, bool@true,
nil@nil, or string@text. Inside strings a backslash must be followed by
exactly three decimal digits giving a character code, as in string@a\032b,
and the character # is not allowed.
            "#
            .trim_ascii()
            .to_string(),
        ),
    }
}

/// Describe the operands of an opcode, as in "MOVE ‹var› ‹symb›"
fn synopsis(opcode: &str) -> String {
    let mut result = opcode.to_string();

    if let Some(signature) = lookup(opcode) {
        for operand in signature.operands {
            result.push(' ');
            result.push_str(match operand {
                Operand::Var => "‹var›",
                Operand::Symbol => "‹symb›",
                Operand::Label => "‹label›",
                Operand::Type => "‹type›",
            });
        }
    }

    result
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn synopses() {
        assert_eq!(synopsis("MOVE"), "MOVE ‹var› ‹symb›");
        assert_eq!(synopsis("BREAK"), "BREAK");
        assert_eq!(synopsis("JUMPIFEQ"), "JUMPIFEQ ‹label› ‹symb› ‹symb›");
        assert_eq!(synopsis("READ"), "READ ‹var› ‹type›");
    }

    #[test]
    fn argument_count_details() {
        let (problem, details) =
            generate_error_message(&ParsingError::WrongArgumentCount(0, "DEFVAR", 1, 2));
        assert_eq!(problem, "DEFVAR takes 1 argument but 2 given");
        assert!(details.ends_with("DEFVAR ‹var›"));
    }

    #[test]
    fn header_details() {
        let (problem, details) = generate_error_message(&ParsingError::InvalidHeader(0));
        assert_eq!(problem, "Invalid header");
        assert!(details.contains(".IPPcode22"));
    }
}
