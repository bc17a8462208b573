//! Types representing the parsed form of an IPPcode22 program

use std::borrow::Cow;
use std::fmt;

/// Name of the source dialect, carried as the `language` attribute of every
/// emitted document.
pub const LANGUAGE: &str = "IPPcode22";

/// The mandatory first meaningful line of every source file.
pub const HEADER: &str = ".IPPcode22";

#[derive(Eq, Debug, PartialEq)]
pub struct Document<'i> {
    pub language: &'static str,
    pub instructions: Vec<Instruction<'i>>,
}

impl<'i> Document<'i> {
    pub fn new() -> Document<'i> {
        Document {
            language: LANGUAGE,
            instructions: Vec::new(),
        }
    }

    /// Append an instruction, assigning it the next order number. Returns the
    /// order number given.
    pub fn push(&mut self, opcode: &'static str, arguments: Vec<Argument<'i>>) -> usize {
        let order = self
            .instructions
            .len()
            + 1;

        self.instructions
            .push(Instruction {
                order,
                opcode,
                arguments,
            });

        order
    }

    pub fn len(&self) -> usize {
        self.instructions
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions
            .is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction<'i>> {
        self.instructions
            .iter()
    }
}

impl Default for Document<'_> {
    fn default() -> Self {
        Document::new()
    }
}

#[derive(Eq, Debug, PartialEq)]
pub struct Instruction<'i> {
    pub order: usize,
    pub opcode: &'static str,
    pub arguments: Vec<Argument<'i>>,
}

#[derive(Eq, Debug, PartialEq, Clone)]
pub struct Argument<'i> {
    pub position: usize,
    pub kind: Kind,
    pub value: &'i str,
}

impl<'i> Argument<'i> {
    /// The value with `\ddd` escapes in string constants replaced by the
    /// character they encode. Values of every other kind come back as
    /// written.
    pub fn decoded(&self) -> Cow<'i, str> {
        if self.kind != Kind::String || !self
            .value
            .contains('\\')
        {
            return Cow::Borrowed(self.value);
        }

        let mut segments = self
            .value
            .split('\\');

        let mut result = String::with_capacity(
            self.value
                .len(),
        );

        if let Some(first) = segments.next() {
            result.push_str(first);
        }

        for segment in segments {
            let code = segment
                .get(..3)
                .filter(|digits| {
                    digits
                        .bytes()
                        .all(|b| b.is_ascii_digit())
                })
                .and_then(|digits| {
                    digits
                        .parse::<u32>()
                        .ok()
                })
                .and_then(char::from_u32);

            match code {
                Some(c) => {
                    result.push(c);
                    result.push_str(&segment[3..]);
                }
                None => {
                    result.push('\\');
                    result.push_str(segment);
                }
            }
        }

        Cow::Owned(result)
    }
}

/// What an argument turned out to be. The first four are the constant
/// sub-kinds, named after the type tag that introduces them.
#[derive(Eq, Debug, PartialEq, Clone, Copy)]
pub enum Kind {
    Int,
    Bool,
    String,
    Nil,
    Var,
    Label,
    Type,
}

impl Kind {
    /// Look up the constant kind introduced by a type tag such as `int` in
    /// `int@42`.
    pub fn constant(tag: &str) -> Option<Kind> {
        match tag {
            "int" => Some(Kind::Int),
            "bool" => Some(Kind::Bool),
            "string" => Some(Kind::String),
            "nil" => Some(Kind::Nil),
            _ => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Kind::Int | Kind::Bool | Kind::String | Kind::Nil)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Nil => "nil",
            Kind::Var => "var",
            Kind::Label => "label",
            Kind::Type => "type",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn order_numbers_are_sequential() {
        let mut document = Document::new();
        assert!(document.is_empty());

        assert_eq!(document.push("CREATEFRAME", Vec::new()), 1);
        assert_eq!(document.push("PUSHFRAME", Vec::new()), 2);
        assert_eq!(document.push("POPFRAME", Vec::new()), 3);

        assert_eq!(document.len(), 3);
        let orders: Vec<usize> = document
            .iter()
            .map(|instruction| instruction.order)
            .collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert_eq!(document.language, "IPPcode22");
    }

    #[test]
    fn constant_tags() {
        assert_eq!(Kind::constant("int"), Some(Kind::Int));
        assert_eq!(Kind::constant("nil"), Some(Kind::Nil));
        assert_eq!(Kind::constant("float"), None);
        assert_eq!(Kind::constant("INT"), None);

        assert!(Kind::String.is_constant());
        assert!(!Kind::Var.is_constant());
        assert!(!Kind::Type.is_constant());
    }

    #[test]
    fn decoding_escapes() {
        let argument = Argument {
            position: 1,
            kind: Kind::String,
            value: r"a\065b",
        };
        assert_eq!(argument.decoded(), "aAb");

        let argument = Argument {
            position: 1,
            kind: Kind::String,
            value: r"hello\032world\092",
        };
        assert_eq!(argument.decoded(), r"hello world\");

        let argument = Argument {
            position: 1,
            kind: Kind::String,
            value: "plain",
        };
        assert!(matches!(argument.decoded(), Cow::Borrowed("plain")));

        // only string constants carry escapes
        let argument = Argument {
            position: 1,
            kind: Kind::Label,
            value: r"x\065",
        };
        assert_eq!(argument.decoded(), r"x\065");
    }
}
