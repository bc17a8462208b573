use ippcode::language::{Kind, Status};
use ippcode::parsing::{self, ParsingError};

fn expect_status(content: &str, expected: Status) {
    match parsing::parse(content) {
        Ok(_) => panic!(
            "Expected parsing to fail, but it succeeded for input: {}",
            content
        ),
        Err(error) => assert_eq!(
            error.status(),
            expected,
            "wrong status for {:?} from input '{}'",
            error,
            content
        ),
    }
}

#[test]
fn single_move() {
    let document = parsing::parse(".IPPcode22\nMOVE GF@x int@5").unwrap();

    assert_eq!(document.len(), 1);

    let instruction = &document.instructions[0];
    assert_eq!(instruction.order, 1);
    assert_eq!(instruction.opcode, "MOVE");
    assert_eq!(instruction.arguments.len(), 2);
    assert_eq!(instruction.arguments[0].position, 1);
    assert_eq!(instruction.arguments[0].kind, Kind::Var);
    assert_eq!(instruction.arguments[0].value, "GF@x");
    assert_eq!(instruction.arguments[1].position, 2);
    assert_eq!(instruction.arguments[1].kind, Kind::Int);
    assert_eq!(instruction.arguments[1].value, "5");
}

#[test]
fn header_missing() {
    expect_status("MOVE GF@x int@5", Status::Header);
    expect_status("", Status::Header);
    expect_status("# only a comment\n", Status::Header);
    expect_status(".IPPcode22x\n", Status::Header);
    expect_status(".IPPCODE22\n", Status::Header);
}

#[test]
fn opcode_unknown() {
    expect_status(".IPPcode22\nFOOBAR", Status::Opcode);
    expect_status(".IPPcode22\nMOVE2 GF@x int@1", Status::Opcode);
}

#[test]
fn argument_count() {
    expect_status(".IPPcode22\nDEFVAR GF@x GF@y", Status::Syntax);
    expect_status(".IPPcode22\nDEFVAR", Status::Syntax);
    expect_status(".IPPcode22\nBREAK GF@x", Status::Syntax);
}

#[test]
fn argument_grammar() {
    expect_status(".IPPcode22\nLABEL GF@x", Status::Syntax);
    expect_status(".IPPcode22\nDEFVAR int@1", Status::Syntax);
    expect_status(".IPPcode22\nREAD GF@x nil", Status::Syntax);
    expect_status(".IPPcode22\nWRITE x", Status::Syntax);
    expect_status(".IPPcode22\nWRITE int@0b101", Status::Syntax);
    expect_status(".IPPcode22\nWRITE string@\\1", Status::Syntax);
}

#[test]
fn escaped_string() {
    let document = parsing::parse(".IPPcode22\nPUSHS string@a\\065b").unwrap();

    let argument = &document.instructions[0].arguments[0];
    assert_eq!(argument.kind, Kind::String);
    assert_eq!(argument.value, "a\\065b");
    assert_eq!(argument.decoded(), "aAb");
}

#[test]
fn unicode_spaces_inside_strings() {
    for space in ['\u{00A0}', '\u{2003}'] {
        let content = format!(".IPPcode22\nWRITE string@a{}b\n", space);
        let document = parsing::parse(&content).unwrap();

        let arguments = &document.instructions[0].arguments;
        assert_eq!(arguments.len(), 1);
        assert_eq!(arguments[0].kind, Kind::String);
        assert_eq!(arguments[0].value, format!("a{}b", space));
    }

    expect_status(".IPPcode22\u{00A0}\nBREAK\n", Status::Header);
}

#[test]
fn hash_starts_comment() {
    // everything from the '#' on is a comment, even inside what looks like a
    // string constant
    let document = parsing::parse(".IPPcode22\nWRITE string@a#b c d\n").unwrap();

    assert_eq!(document.instructions[0].arguments[0].value, "a");
}

#[test]
fn variables_verbatim() {
    let words = ["GF@x", "LF@_counter", "TF@$tmp-1", "GF@&%*!?"];

    for word in words {
        let content = format!(".IPPcode22\nDEFVAR {}\n", word);
        let document = parsing::parse(&content).unwrap();

        assert_eq!(document.instructions[0].arguments[0].value, word);
    }
}

#[test]
fn constants_revalidate() {
    let words = [
        "int@-12",
        "int@0x7F",
        "int@017",
        "bool@false",
        "nil@nil",
        "string@",
        "string@with@at",
        "string@tab\\009end",
    ];

    for word in words {
        let content = format!(".IPPcode22\nPUSHS {}\n", word);
        let document = parsing::parse(&content).unwrap();
        let argument = &document.instructions[0].arguments[0];

        // prefixing the emitted value with its tag gives back a valid constant
        let again = format!(".IPPcode22\nPUSHS {}@{}\n", argument.kind, argument.value);
        let reparsed = parsing::parse(&again).unwrap();
        assert_eq!(reparsed.instructions[0].arguments[0], *argument);
    }
}

#[test]
fn order_ignores_blank_lines() {
    let content = r#"
# header comes after this
.IPPcode22

CREATEFRAME
# a comment between instructions
PUSHFRAME

    POPFRAME   # trailing comment
RETURN
"#;
    let document = parsing::parse(content).unwrap();

    let orders: Vec<usize> = document
        .iter()
        .map(|instruction| instruction.order)
        .collect();
    assert_eq!(orders, vec![1, 2, 3, 4]);
}

#[test]
fn offsets_point_at_culprit() {
    let content = ".IPPcode22\nMOVE GF@x GF@y\nMOVE GF@x LF";

    let error = parsing::parse(content).unwrap_err();
    assert_eq!(error, ParsingError::InvalidVariable(36, "LF"));
    assert_eq!(&content[error.offset()..], "LF");
}
