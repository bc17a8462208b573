//! The IPPcode22 instruction set: which operands each opcode takes.

use std::collections::HashMap;
use std::sync::OnceLock;

/// The kind of operand an opcode expects in a given position.
#[derive(Eq, Debug, PartialEq, Clone, Copy)]
pub enum Operand {
    /// a frame-qualified variable, `GF@counter`
    Var,
    /// either a constant or a variable
    Symbol,
    /// a bare label name
    Label,
    /// one of the type names `int`, `string`, `bool`
    Type,
}

#[derive(Eq, Debug, PartialEq, Clone, Copy)]
pub struct Signature {
    pub opcode: &'static str,
    pub operands: &'static [Operand],
}

impl Signature {
    pub fn arity(&self) -> usize {
        self.operands
            .len()
    }
}

use Operand::*;

const VAR_SYMBOL: &[Operand] = &[Var, Symbol];
const VAR_TYPE: &[Operand] = &[Var, Type];
const LABEL_SYMBOL_SYMBOL: &[Operand] = &[Label, Symbol, Symbol];
const VAR_SYMBOL_SYMBOL: &[Operand] = &[Var, Symbol, Symbol];
const SYMBOL: &[Operand] = &[Symbol];
const VAR: &[Operand] = &[Var];
const NOTHING: &[Operand] = &[];
const LABEL: &[Operand] = &[Label];

static INSTRUCTIONS: &[(&[&str], &[Operand])] = &[
    (&["MOVE", "INT2CHAR", "TYPE", "STRLEN", "NOT"], VAR_SYMBOL),
    (&["READ"], VAR_TYPE),
    (&["JUMPIFEQ", "JUMPIFNEQ"], LABEL_SYMBOL_SYMBOL),
    (
        &[
            "ADD", "SUB", "MUL", "IDIV", "LT", "GT", "EQ", "AND", "OR", "STRI2INT", "CONCAT",
            "GETCHAR", "SETCHAR",
        ],
        VAR_SYMBOL_SYMBOL,
    ),
    (&["PUSHS", "EXIT", "DPRINT", "WRITE"], SYMBOL),
    (&["POPS", "DEFVAR"], VAR),
    (
        &["BREAK", "RETURN", "CREATEFRAME", "PUSHFRAME", "POPFRAME"],
        NOTHING,
    ),
    (&["LABEL", "CALL", "JUMP"], LABEL),
];

fn table() -> &'static HashMap<&'static str, Signature> {
    static TABLE: OnceLock<HashMap<&'static str, Signature>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        for &(opcodes, operands) in INSTRUCTIONS {
            for &opcode in opcodes {
                table.insert(opcode, Signature { opcode, operands });
            }
        }
        table
    })
}

/// Find the signature for an opcode. Matching ignores case; the returned
/// signature carries the canonical upper case spelling.
pub fn lookup(opcode: &str) -> Option<&'static Signature> {
    table().get(
        opcode
            .to_ascii_uppercase()
            .as_str(),
    )
}

/// Every opcode in the instruction set, in no particular order.
pub fn opcodes() -> impl Iterator<Item = &'static str> {
    table()
        .keys()
        .copied()
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn instruction_set_size() {
        assert_eq!(opcodes().count(), 35);
    }

    #[test]
    fn lookup_ignores_case() {
        let upper = lookup("MOVE").unwrap();
        let lower = lookup("move").unwrap();
        let mixed = lookup("Move").unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
        assert_eq!(mixed.opcode, "MOVE");
        assert_eq!(mixed.operands, &[Var, Symbol]);
    }

    #[test]
    fn unknown_opcodes() {
        assert_eq!(lookup("FOOBAR"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup(".IPPcode22"), None);
    }

    #[test]
    fn arities() {
        assert_eq!(lookup("BREAK").unwrap().arity(), 0);
        assert_eq!(lookup("DEFVAR").unwrap().arity(), 1);
        assert_eq!(lookup("READ").unwrap().arity(), 2);
        assert_eq!(lookup("JUMPIFNEQ").unwrap().arity(), 3);
        assert_eq!(lookup("jumpifeq").unwrap().operands, &[Label, Symbol, Symbol]);
        assert_eq!(lookup("setchar").unwrap().operands, &[Var, Symbol, Symbol]);
        assert_eq!(lookup("call").unwrap().operands, &[Label]);
        assert_eq!(lookup("write").unwrap().operands, &[Symbol]);
    }
}
