use super::*;

#[test]
fn normalizing_lines() {
    assert_eq!(normalize(""), None);
    assert_eq!(normalize("   \t  "), None);
    assert_eq!(normalize("# just a comment"), None);
    assert_eq!(normalize("    # indented comment"), None);

    assert_eq!(
        normalize("MOVE GF@x int@5"),
        Some(Line {
            word: "MOVE",
            operands: vec!["GF@x", "int@5"],
        })
    );

    // comments are removed before splitting
    assert_eq!(
        normalize("  WRITE   string@hello#world  "),
        Some(Line {
            word: "WRITE",
            operands: vec!["string@hello"],
        })
    );

    assert_eq!(
        normalize("BREAK\r"),
        Some(Line {
            word: "BREAK",
            operands: vec![],
        })
    );

    assert_eq!(
        normalize("pushs\tint@1 # comment with MOVE"),
        Some(Line {
            word: "pushs",
            operands: vec!["int@1"],
        })
    );

    // only ASCII whitespace separates words
    assert_eq!(
        normalize("WRITE string@a\u{00A0}b"),
        Some(Line {
            word: "WRITE",
            operands: vec!["string@a\u{00A0}b"],
        })
    );

    assert_eq!(
        normalize("WRITE string@a\u{2003}b"),
        Some(Line {
            word: "WRITE",
            operands: vec!["string@a\u{2003}b"],
        })
    );
}

#[test]
fn taking_lines() {
    let mut input = Parser::new();
    input.initialize("first\nsecond\n\nlast");

    assert_eq!(input.take_line(), Some("first"));
    assert_eq!(input.offset, 6);
    assert_eq!(input.take_line(), Some("second"));
    assert_eq!(input.take_line(), Some(""));
    assert_eq!(input.take_line(), Some("last"));
    assert_eq!(input.take_line(), None);
    assert!(input.is_finished());
}

#[test]
fn skipping_blank_lines() {
    let mut input = Parser::new();
    input.initialize("\n# comment\n   \nDEFVAR GF@a\n");

    let line = input
        .next_line()
        .unwrap();
    assert_eq!(line.word, "DEFVAR");
    assert_eq!(input.locate(line.word), 15);

    assert_eq!(input.next_line(), None);
}

#[test]
fn header() {
    let mut input = Parser::new();
    input.initialize(".IPPcode22");
    assert_eq!(input.read_header(), Ok(()));

    input.initialize(".IPPcode22\n");
    assert_eq!(input.read_header(), Ok(()));

    // leading comments and blank lines are skipped
    input.initialize("# program\n\n   .IPPcode22   # header\nBREAK\n");
    assert_eq!(input.read_header(), Ok(()));
    assert_eq!(
        input.next_line(),
        Some(Line {
            word: "BREAK",
            operands: vec![],
        })
    );
}

#[test]
fn header_rejected() {
    let mut input = Parser::new();

    input.initialize(".IPPcode22x");
    assert_eq!(input.read_header(), Err(ParsingError::InvalidHeader(0)));

    input.initialize(".ippcode22");
    assert_eq!(input.read_header(), Err(ParsingError::InvalidHeader(0)));

    input.initialize(".IPPcode22 BREAK");
    assert_eq!(input.read_header(), Err(ParsingError::InvalidHeader(0)));

    input.initialize(".IPPcode22\u{00A0}");
    assert_eq!(input.read_header(), Err(ParsingError::InvalidHeader(0)));

    input.initialize("\n  MOVE GF@x int@5");
    assert_eq!(input.read_header(), Err(ParsingError::InvalidHeader(3)));

    // running out of input while looking for the header
    input.initialize("");
    assert_eq!(input.read_header(), Err(ParsingError::InvalidHeader(0)));

    input.initialize("# nothing here\n\n");
    assert_eq!(input.read_header(), Err(ParsingError::InvalidHeader(16)));
}

#[test]
fn type_names() {
    assert!(is_type_name("int"));
    assert!(is_type_name("string"));
    assert!(is_type_name("bool"));

    assert!(!is_type_name("nil"));
    assert!(!is_type_name("Int"));
    assert!(!is_type_name("integer"));
    assert!(!is_type_name("int@5"));
    assert!(!is_type_name(""));
}

#[test]
fn identifiers() {
    assert!(is_identifier("counter"));
    assert!(is_identifier("_tmp"));
    assert!(is_identifier("$x1"));
    assert!(is_identifier("&amp"));
    assert!(is_identifier("%percent"));
    assert!(is_identifier("*star"));
    assert!(is_identifier("!bang"));
    assert!(is_identifier("?what"));
    assert!(is_identifier("-dash-"));
    assert!(is_identifier("Loop_2"));

    assert!(!is_identifier(""));
    assert!(!is_identifier("1st"));
    assert!(!is_identifier("a.b"));
    assert!(!is_identifier("a@b"));
    assert!(!is_identifier("label:"));
    assert!(!is_identifier("čaj"));
}

#[test]
fn integers() {
    assert!(is_integer("5"));
    assert!(is_integer("0"));
    assert!(is_integer("-42"));
    assert!(is_integer("+42"));
    assert!(is_integer("0x1F"));
    assert!(is_integer("0xdeadBEEF"));
    assert!(is_integer("0x"));
    assert!(is_integer("017"));

    assert!(!is_integer(""));
    assert!(!is_integer("-"));
    assert!(!is_integer("0X1F"));
    assert!(!is_integer("0x1G"));
    assert!(!is_integer("-0x1"));
    assert!(!is_integer("1.5"));
    assert!(!is_integer("12a"));
    assert!(!is_integer("0o17"));
}

#[test]
fn string_literals() {
    assert!(is_string_literal(""));
    assert!(is_string_literal("hello"));
    assert!(is_string_literal(r"a\065b"));
    assert!(is_string_literal(r"\032"));
    assert!(is_string_literal(r"end\092"));
    assert!(is_string_literal(r"\0001234"));
    assert!(is_string_literal("user@example.com"));
    assert!(is_string_literal("příliš"));

    assert!(!is_string_literal(r"\"));
    assert!(!is_string_literal(r"a\6"));
    assert!(!is_string_literal(r"a\06b"));
    assert!(!is_string_literal(r"\x41"));
    assert!(!is_string_literal("a#b"));
    assert!(!is_string_literal(r"\065#"));

    // a hash is rejected in every position, the first included
    assert!(!is_string_literal("#start"));
}

#[test]
fn constant_values() {
    assert!(is_constant_value(Kind::Bool, "true"));
    assert!(is_constant_value(Kind::Bool, "false"));
    assert!(!is_constant_value(Kind::Bool, "True"));
    assert!(!is_constant_value(Kind::Bool, "1"));

    assert!(is_constant_value(Kind::Nil, "nil"));
    assert!(!is_constant_value(Kind::Nil, ""));
    assert!(!is_constant_value(Kind::Nil, "null"));

    assert!(is_constant_value(Kind::Int, "-1"));
    assert!(is_constant_value(Kind::String, "x"));

    assert!(!is_constant_value(Kind::Var, "GF@x"));
    assert!(!is_constant_value(Kind::Label, "loop"));
    assert!(!is_constant_value(Kind::Type, "int"));
}

#[test]
fn probing_constants() {
    let mut input = Parser::new();
    input.initialize("int@5 string@a@b string@ bool@true nil@nil float@1.0 GF@x int@five nil");

    let words: Vec<&str> = input
        .original
        .split(' ')
        .collect();

    assert_eq!(
        input.probe_constant(words[0], 2),
        Ok(Some(Argument {
            position: 2,
            kind: Kind::Int,
            value: "5",
        }))
    );
    assert_eq!(
        input.probe_constant(words[1], 1),
        Ok(Some(Argument {
            position: 1,
            kind: Kind::String,
            value: "a@b",
        }))
    );
    assert_eq!(
        input.probe_constant(words[2], 1),
        Ok(Some(Argument {
            position: 1,
            kind: Kind::String,
            value: "",
        }))
    );
    assert_eq!(
        input.probe_constant(words[3], 1),
        Ok(Some(Argument {
            position: 1,
            kind: Kind::Bool,
            value: "true",
        }))
    );
    assert_eq!(
        input.probe_constant(words[4], 1),
        Ok(Some(Argument {
            position: 1,
            kind: Kind::Nil,
            value: "nil",
        }))
    );

    // not constants at all
    assert_eq!(input.probe_constant(words[5], 1), Ok(None));
    assert_eq!(input.probe_constant(words[6], 1), Ok(None));

    // a constant tag commits to the value grammar
    assert_eq!(
        input.probe_constant(words[7], 1),
        Err(ParsingError::InvalidConstant(58, "int@five"))
    );
    assert_eq!(
        input.probe_constant(words[8], 1),
        Err(ParsingError::InvalidConstant(67, "nil"))
    );
}

#[test]
fn probing_variables() {
    let mut input = Parser::new();
    input.initialize("GF@x LF@_tmp TF@a@b gf@x GF@1x GF");

    let words: Vec<&str> = input
        .original
        .split(' ')
        .collect();

    assert_eq!(
        input.probe_variable(words[0], 1),
        Ok(Some(Argument {
            position: 1,
            kind: Kind::Var,
            value: "GF@x",
        }))
    );
    assert_eq!(
        input.probe_variable(words[1], 3),
        Ok(Some(Argument {
            position: 3,
            kind: Kind::Var,
            value: "LF@_tmp",
        }))
    );

    // the split is at the first '@' so the name here is "a@b"
    assert_eq!(
        input.probe_variable(words[2], 1),
        Err(ParsingError::InvalidVariable(13, "TF@a@b"))
    );

    // frames are upper case only
    assert_eq!(input.probe_variable(words[3], 1), Ok(None));

    assert_eq!(
        input.probe_variable(words[4], 1),
        Err(ParsingError::InvalidVariable(25, "GF@1x"))
    );
    assert_eq!(
        input.probe_variable(words[5], 1),
        Err(ParsingError::InvalidVariable(31, "GF"))
    );
}

#[test]
fn probing_symbols() {
    let mut input = Parser::new();
    input.initialize("int@1 GF@x label");

    let words: Vec<&str> = input
        .original
        .split(' ')
        .collect();

    assert_eq!(
        input.probe_symbol(words[0], 1),
        Ok(Probe::Constant(Argument {
            position: 1,
            kind: Kind::Int,
            value: "1",
        }))
    );
    assert_eq!(
        input.probe_symbol(words[1], 2),
        Ok(Probe::Variable(Argument {
            position: 2,
            kind: Kind::Var,
            value: "GF@x",
        }))
    );
    assert_eq!(input.probe_symbol(words[2], 1), Ok(Probe::NoMatch));

    assert_eq!(
        input.read_symbol(words[2], 1),
        Err(ParsingError::InvalidSymbol(11, "label"))
    );
}

#[test]
fn reading_labels_and_types() {
    let mut input = Parser::new();
    input.initialize("loop GF@loop bool nil");

    let words: Vec<&str> = input
        .original
        .split(' ')
        .collect();

    assert_eq!(
        input.read_label(words[0], 1),
        Ok(Argument {
            position: 1,
            kind: Kind::Label,
            value: "loop",
        })
    );
    assert_eq!(
        input.read_label(words[1], 1),
        Err(ParsingError::InvalidLabel(5, "GF@loop"))
    );
    assert_eq!(
        input.read_type(words[2], 2),
        Ok(Argument {
            position: 2,
            kind: Kind::Type,
            value: "bool",
        })
    );
    assert_eq!(
        input.read_type(words[3], 2),
        Err(ParsingError::InvalidType(18, "nil"))
    );
}

#[test]
fn dispatching_instructions() {
    let mut input = Parser::new();
    input.initialize("jumpIfEq end GF@x nil@nil");

    let line = input
        .next_line()
        .unwrap();
    let (signature, arguments) = input
        .read_instruction(&line)
        .unwrap();

    assert_eq!(signature.opcode, "JUMPIFEQ");
    assert_eq!(
        arguments,
        vec![
            Argument {
                position: 1,
                kind: Kind::Label,
                value: "end",
            },
            Argument {
                position: 2,
                kind: Kind::Var,
                value: "GF@x",
            },
            Argument {
                position: 3,
                kind: Kind::Nil,
                value: "nil",
            },
        ]
    );

    input.initialize("CREATEFRAME");
    let line = input
        .next_line()
        .unwrap();
    let (signature, arguments) = input
        .read_instruction(&line)
        .unwrap();
    assert_eq!(signature.opcode, "CREATEFRAME");
    assert!(arguments.is_empty());
}

#[test]
fn dispatching_failures() {
    let mut input = Parser::new();

    input.initialize("FOOBAR");
    let line = input
        .next_line()
        .unwrap();
    assert_eq!(
        input.read_instruction(&line),
        Err(ParsingError::UnknownOpcode(0, "FOOBAR"))
    );

    input.initialize("  DEFVAR GF@x GF@y");
    let line = input
        .next_line()
        .unwrap();
    assert_eq!(
        input.read_instruction(&line),
        Err(ParsingError::WrongArgumentCount(2, "DEFVAR", 1, 2))
    );

    input.initialize("RETURN now");
    let line = input
        .next_line()
        .unwrap();
    assert_eq!(
        input.read_instruction(&line),
        Err(ParsingError::WrongArgumentCount(0, "RETURN", 0, 1))
    );

    input.initialize("READ GF@x nil");
    let line = input
        .next_line()
        .unwrap();
    assert_eq!(
        input.read_instruction(&line),
        Err(ParsingError::InvalidType(10, "nil"))
    );

    // arguments are checked left to right, so the first bad one is reported
    input.initialize("ADD int@1 GF@x bogus");
    let line = input
        .next_line()
        .unwrap();
    assert_eq!(
        input.read_instruction(&line),
        Err(ParsingError::InvalidVariable(4, "int@1"))
    );
}

#[test]
fn whole_program() {
    let mut input = Parser::new();
    input.initialize(
        r#"
# Compute something
.IPPcode22
DEFVAR GF@counter      # declare
move GF@counter int@0

LABEL loop
  ADD GF@counter GF@counter int@1
JUMPIFNEQ loop GF@counter int@10
WRITE string@done\010
        "#,
    );

    let document = input
        .parse_from_start()
        .unwrap();

    assert_eq!(document.language, "IPPcode22");
    assert_eq!(document.len(), 6);

    let orders: Vec<usize> = document
        .iter()
        .map(|instruction| instruction.order)
        .collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5, 6]);

    let opcodes: Vec<&str> = document
        .iter()
        .map(|instruction| instruction.opcode)
        .collect();
    assert_eq!(
        opcodes,
        vec!["DEFVAR", "MOVE", "LABEL", "ADD", "JUMPIFNEQ", "WRITE"]
    );

    let last = &document.instructions[5];
    assert_eq!(last.arguments[0].kind, Kind::String);
    assert_eq!(last.arguments[0].value, r"done\010");
    assert_eq!(last.arguments[0].decoded(), "done\n");
}

#[test]
fn header_only() {
    let mut input = Parser::new();
    input.initialize(".IPPcode22\n# nothing else\n");

    let document = input
        .parse_from_start()
        .unwrap();
    assert!(document.is_empty());
}

#[test]
fn case_sensitivity() {
    // opcodes match regardless of case, identifiers do not fold
    let mut input = Parser::new();
    input.initialize(".IPPcode22\nMove GF@X int@1\nmove GF@x int@1\n");

    let document = input
        .parse_from_start()
        .unwrap();
    assert_eq!(document.instructions[0].opcode, "MOVE");
    assert_eq!(document.instructions[1].opcode, "MOVE");
    assert_eq!(document.instructions[0].arguments[0].value, "GF@X");
    assert_eq!(document.instructions[1].arguments[0].value, "GF@x");
}
