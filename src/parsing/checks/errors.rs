use super::*;

/// Helper function to check if parsing produces the expected error
fn expect_error(content: &str, expected: ParsingError) {
    let result = parse_program(content);
    match result {
        Ok(_) => panic!(
            "Expected parsing to fail, but it succeeded for input: {}",
            content
        ),
        Err(error) => {
            if error != expected {
                panic!(
                    "Expected error {:?} but got: {:?} for input '{}'",
                    expected, error, content
                );
            }
        }
    }
}

#[test]
fn missing_header() {
    expect_error("MOVE GF@x int@5", ParsingError::InvalidHeader(0));
}

#[test]
fn header_with_trailing_content() {
    expect_error(".IPPcode22x\nBREAK", ParsingError::InvalidHeader(0));
}

#[test]
fn empty_input() {
    expect_error("", ParsingError::InvalidHeader(0));
    expect_error("\n\n", ParsingError::InvalidHeader(2));
}

#[test]
fn unknown_opcode() {
    expect_error(".IPPcode22\nFOOBAR", ParsingError::UnknownOpcode(11, "FOOBAR"));
}

#[test]
fn header_repeated() {
    expect_error(
        ".IPPcode22\n.IPPcode22",
        ParsingError::UnknownOpcode(11, ".IPPcode22"),
    );
}

#[test]
fn too_many_arguments() {
    expect_error(
        ".IPPcode22\nDEFVAR GF@x GF@y",
        ParsingError::WrongArgumentCount(11, "DEFVAR", 1, 2),
    );
}

#[test]
fn too_few_arguments() {
    expect_error(
        ".IPPcode22\nADD GF@x int@1",
        ParsingError::WrongArgumentCount(11, "ADD", 3, 2),
    );
}

#[test]
fn invalid_label() {
    expect_error(
        ".IPPcode22\nJUMP 9lives",
        ParsingError::InvalidLabel(16, "9lives"),
    );
}

#[test]
fn invalid_variable_frame() {
    expect_error(
        ".IPPcode22\nDEFVAR XF@x",
        ParsingError::InvalidVariable(18, "XF@x"),
    );
}

#[test]
fn invalid_variable_name() {
    expect_error(
        ".IPPcode22\nMOVE GF@x GF@2",
        ParsingError::InvalidVariable(21, "GF@2"),
    );
}

#[test]
fn invalid_type() {
    expect_error(
        ".IPPcode22\nREAD GF@x float",
        ParsingError::InvalidType(21, "float"),
    );
}

#[test]
fn invalid_symbol() {
    expect_error(
        ".IPPcode22\nWRITE hello",
        ParsingError::InvalidSymbol(17, "hello"),
    );
}

#[test]
fn invalid_constant_escape() {
    expect_error(
        ".IPPcode22\nWRITE string@a\\65",
        ParsingError::InvalidConstant(17, "string@a\\65"),
    );
}

#[test]
fn invalid_constant_bool() {
    expect_error(
        ".IPPcode22\nPUSHS bool@TRUE",
        ParsingError::InvalidConstant(17, "bool@TRUE"),
    );
}

#[test]
fn first_error_wins() {
    // the second line is also broken but parsing stops at the first
    expect_error(
        ".IPPcode22\nBREAK\nPOPS int@1\nFOOBAR\n",
        ParsingError::InvalidVariable(22, "int@1"),
    );
}

#[test]
fn statuses() {
    assert_eq!(ParsingError::InvalidHeader(0).status(), Status::Header);
    assert_eq!(ParsingError::UnknownOpcode(0, "X").status(), Status::Opcode);
    assert_eq!(
        ParsingError::WrongArgumentCount(0, "MOVE", 2, 1).status(),
        Status::Syntax
    );
    assert_eq!(ParsingError::InvalidLabel(0, "1").status(), Status::Syntax);
    assert_eq!(ParsingError::InvalidVariable(0, "x").status(), Status::Syntax);
    assert_eq!(ParsingError::InvalidType(0, "x").status(), Status::Syntax);
    assert_eq!(ParsingError::InvalidSymbol(0, "x").status(), Status::Syntax);
    assert_eq!(ParsingError::InvalidConstant(0, "x").status(), Status::Syntax);

    assert_eq!(Status::Header.code(), 21);
    assert_eq!(Status::Opcode.code(), 22);
    assert_eq!(Status::Syntax.code(), 23);
}

#[test]
fn messages() {
    assert_eq!(
        ParsingError::WrongArgumentCount(0, "DEFVAR", 1, 2).message(),
        "DEFVAR takes 1 argument but 2 given"
    );
    assert_eq!(
        ParsingError::WrongArgumentCount(0, "ADD", 3, 0).message(),
        "ADD takes 3 arguments but 0 given"
    );
    assert_eq!(
        ParsingError::UnknownOpcode(0, "FOOBAR").message(),
        "unknown opcode 'FOOBAR'"
    );
}
