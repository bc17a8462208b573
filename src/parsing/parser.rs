//! Single pass parser for IPPcode22 source text.
//!
//! Input is consumed one line at a time. Each line is stripped of its
//! comment and split on whitespace; the first meaningful line must be the
//! header, and every meaningful line after that is one instruction whose
//! words are checked against the signature of its opcode.

use tracing::{debug, trace};

use crate::language::*;

pub fn parse_program(content: &str) -> Result<Document<'_>, ParsingError<'_>> {
    let mut input = Parser::new();
    input.initialize(content);

    input.parse_from_start()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError<'i> {
    InvalidHeader(usize),
    UnknownOpcode(usize, &'i str),
    WrongArgumentCount(usize, &'static str, usize, usize),
    InvalidLabel(usize, &'i str),
    InvalidVariable(usize, &'i str),
    InvalidType(usize, &'i str),
    InvalidSymbol(usize, &'i str),
    InvalidConstant(usize, &'i str),
}

impl<'i> ParsingError<'i> {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::InvalidHeader(offset) => *offset,
            ParsingError::UnknownOpcode(offset, _) => *offset,
            ParsingError::WrongArgumentCount(offset, _, _, _) => *offset,
            ParsingError::InvalidLabel(offset, _) => *offset,
            ParsingError::InvalidVariable(offset, _) => *offset,
            ParsingError::InvalidType(offset, _) => *offset,
            ParsingError::InvalidSymbol(offset, _) => *offset,
            ParsingError::InvalidConstant(offset, _) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::InvalidHeader(_) => "invalid header".to_string(),
            ParsingError::UnknownOpcode(_, word) => format!("unknown opcode '{}'", word),
            ParsingError::WrongArgumentCount(_, opcode, expected, found) => format!(
                "{} takes {} argument{} but {} given",
                opcode,
                expected,
                if *expected == 1 { "" } else { "s" },
                found
            ),
            ParsingError::InvalidLabel(_, word) => format!("invalid label '{}'", word),
            ParsingError::InvalidVariable(_, word) => format!("invalid variable '{}'", word),
            ParsingError::InvalidType(_, word) => format!("invalid type '{}'", word),
            ParsingError::InvalidSymbol(_, word) => format!("invalid symbol '{}'", word),
            ParsingError::InvalidConstant(_, word) => format!("invalid constant '{}'", word),
        }
    }

    /// Exit status the process terminates with. Argument count and every
    /// argument grammar failure share one status.
    pub fn status(&self) -> Status {
        match self {
            ParsingError::InvalidHeader(_) => Status::Header,
            ParsingError::UnknownOpcode(_, _) => Status::Opcode,
            ParsingError::WrongArgumentCount(..)
            | ParsingError::InvalidLabel(..)
            | ParsingError::InvalidVariable(..)
            | ParsingError::InvalidType(..)
            | ParsingError::InvalidSymbol(..)
            | ParsingError::InvalidConstant(..) => Status::Syntax,
        }
    }
}

/// A meaningful source line, comment removed and split into words.
#[derive(Debug, PartialEq, Eq)]
struct Line<'i> {
    word: &'i str,
    operands: Vec<&'i str>,
}

/// Outcome of trying a word as each of the alternatives a symbol may be.
#[derive(Debug, PartialEq, Eq)]
enum Probe<'i> {
    Constant(Argument<'i>),
    Variable(Argument<'i>),
    NoMatch,
}

#[derive(Debug)]
struct Parser<'i> {
    original: &'i str,
    source: &'i str,
    offset: usize,
}

impl<'i> Parser<'i> {
    fn new() -> Parser<'i> {
        Parser {
            original: "",
            source: "",
            offset: 0,
        }
    }

    fn initialize(&mut self, content: &'i str) {
        self.original = content;
        self.source = content;
        self.offset = 0;
    }

    fn advance(&mut self, width: usize) {
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    /// Where in the original input a word taken from it begins.
    fn locate(&self, word: &'i str) -> usize {
        word.as_ptr() as usize - self
            .original
            .as_ptr() as usize
    }

    fn parse_from_start(&mut self) -> Result<Document<'i>, ParsingError<'i>> {
        self.read_header()?;

        let mut document = Document::new();

        while let Some(line) = self.next_line() {
            let (signature, arguments) = self.read_instruction(&line)?;
            let order = document.push(signature.opcode, arguments);
            trace!(order, opcode = signature.opcode, "instruction");
        }

        Ok(document)
    }

    /// consume up to and including the next newline (or end)
    fn take_line(&mut self) -> Option<&'i str> {
        if self.is_finished() {
            return None;
        }

        let (line, width) = match self
            .source
            .find('\n')
        {
            Some(i) => (&self.source[..i], i + 1),
            None => (
                self.source,
                self.source
                    .len(),
            ),
        };

        self.advance(width);
        Some(line)
    }

    /// Read lines until one has content, skipping blank and comment-only
    /// lines. Returns None at end of input.
    fn next_line(&mut self) -> Option<Line<'i>> {
        while let Some(text) = self.take_line() {
            if let Some(line) = normalize(text) {
                return Some(line);
            }
        }
        None
    }

    fn read_header(&mut self) -> Result<(), ParsingError<'i>> {
        match self.next_line() {
            Some(line) if is_header(&line) => {
                debug!("Found header {}", line.word);
                Ok(())
            }
            Some(line) => Err(ParsingError::InvalidHeader(self.locate(line.word))),
            None => Err(ParsingError::InvalidHeader(self.offset)),
        }
    }

    fn read_instruction(
        &self,
        line: &Line<'i>,
    ) -> Result<(&'static Signature, Vec<Argument<'i>>), ParsingError<'i>> {
        let signature = lookup(line.word)
            .ok_or_else(|| ParsingError::UnknownOpcode(self.locate(line.word), line.word))?;

        let found = line
            .operands
            .len();
        if found != signature.arity() {
            return Err(ParsingError::WrongArgumentCount(
                self.locate(line.word),
                signature.opcode,
                signature.arity(),
                found,
            ));
        }

        let arguments = signature
            .operands
            .iter()
            .zip(
                line.operands
                    .iter()
                    .copied(),
            )
            .enumerate()
            .map(|(i, (operand, word))| self.read_argument(*operand, word, i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((signature, arguments))
    }

    fn read_argument(
        &self,
        operand: Operand,
        word: &'i str,
        position: usize,
    ) -> Result<Argument<'i>, ParsingError<'i>> {
        match operand {
            Operand::Var => self.read_variable(word, position),
            Operand::Symbol => self.read_symbol(word, position),
            Operand::Label => self.read_label(word, position),
            Operand::Type => self.read_type(word, position),
        }
    }

    fn read_type(&self, word: &'i str, position: usize) -> Result<Argument<'i>, ParsingError<'i>> {
        if !is_type_name(word) {
            return Err(ParsingError::InvalidType(self.locate(word), word));
        }

        Ok(Argument {
            position,
            kind: Kind::Type,
            value: word,
        })
    }

    fn read_label(&self, word: &'i str, position: usize) -> Result<Argument<'i>, ParsingError<'i>> {
        if !is_identifier(word) {
            return Err(ParsingError::InvalidLabel(self.locate(word), word));
        }

        Ok(Argument {
            position,
            kind: Kind::Label,
            value: word,
        })
    }

    fn read_variable(
        &self,
        word: &'i str,
        position: usize,
    ) -> Result<Argument<'i>, ParsingError<'i>> {
        match self.probe_variable(word, position)? {
            Some(argument) => Ok(argument),
            None => Err(ParsingError::InvalidVariable(self.locate(word), word)),
        }
    }

    fn read_symbol(&self, word: &'i str, position: usize) -> Result<Argument<'i>, ParsingError<'i>> {
        match self.probe_symbol(word, position)? {
            Probe::Constant(argument) | Probe::Variable(argument) => Ok(argument),
            Probe::NoMatch => Err(ParsingError::InvalidSymbol(self.locate(word), word)),
        }
    }

    fn probe_symbol(&self, word: &'i str, position: usize) -> Result<Probe<'i>, ParsingError<'i>> {
        if let Some(argument) = self.probe_constant(word, position)? {
            return Ok(Probe::Constant(argument));
        }
        if let Some(argument) = self.probe_variable(word, position)? {
            return Ok(Probe::Variable(argument));
        }
        Ok(Probe::NoMatch)
    }

    /// A word is a variable if it starts with a frame prefix. Once the
    /// prefix matches the name must be valid too; otherwise this is not a
    /// variable at all and None comes back.
    fn probe_variable(
        &self,
        word: &'i str,
        position: usize,
    ) -> Result<Option<Argument<'i>>, ParsingError<'i>> {
        let (frame, name) = match word.split_once('@') {
            Some((frame, name)) => (frame, Some(name)),
            None => (word, None),
        };

        if !is_frame(frame) {
            return Ok(None);
        }

        match name {
            Some(name) if is_identifier(name) => Ok(Some(Argument {
                position,
                kind: Kind::Var,
                value: word,
            })),
            _ => Err(ParsingError::InvalidVariable(self.locate(word), word)),
        }
    }

    /// Constants are `tag@value`, split at the first `@` so that string
    /// values may contain further ones. An unrecognized tag means the word
    /// is not a constant; a recognized tag commits to the value grammar.
    fn probe_constant(
        &self,
        word: &'i str,
        position: usize,
    ) -> Result<Option<Argument<'i>>, ParsingError<'i>> {
        let (tag, value) = match word.split_once('@') {
            Some((tag, value)) => (tag, Some(value)),
            None => (word, None),
        };

        let kind = match Kind::constant(tag) {
            Some(kind) => kind,
            None => return Ok(None),
        };

        match value {
            Some(value) if is_constant_value(kind, value) => Ok(Some(Argument {
                position,
                kind,
                value,
            })),
            _ => Err(ParsingError::InvalidConstant(self.locate(word), word)),
        }
    }
}

/// Strip any comment, then split what remains on whitespace. Lines with
/// nothing left are of no interest and give None.
fn normalize(text: &str) -> Option<Line<'_>> {
    let text = match text.split_once('#') {
        Some((before, _)) => before,
        None => text,
    };

    let mut words = text.split_ascii_whitespace();
    let word = words.next()?;

    Some(Line {
        word,
        operands: words.collect(),
    })
}

fn is_header(line: &Line) -> bool {
    line.word == HEADER
        && line
            .operands
            .is_empty()
}

fn is_frame(content: &str) -> bool {
    matches!(content, "GF" | "LF" | "TF")
}

/// Names of variables and labels. Case matters.
fn is_identifier(content: &str) -> bool {
    let re = regex!(r"^[a-zA-Z_$&%*!?-][a-zA-Z0-9_$&%*!?-]*$");
    re.is_match(content)
}

fn is_type_name(content: &str) -> bool {
    let re = regex!(r"^(int|string|bool)$");
    re.is_match(content)
}

fn is_constant_value(kind: Kind, content: &str) -> bool {
    if !kind.is_constant() {
        return false;
    }

    match kind {
        Kind::Int => is_integer(content),
        Kind::Bool => content == "true" || content == "false",
        Kind::Nil => content == "nil",
        Kind::String => is_string_literal(content),
        _ => false,
    }
}

/// Integers are decimal with an optional sign, hexadecimal with a `0x`
/// prefix, or the octal-like form of a single zero followed by a digit 1-7.
fn is_integer(content: &str) -> bool {
    let decimal = regex!(r"^[+-]?[0-9]+$");
    let hexadecimal = regex!(r"^0x[0-9a-fA-F]*$");
    let octal = regex!(r"^0[1-7][0-7]*$");

    decimal.is_match(content) || hexadecimal.is_match(content) || octal.is_match(content)
}

/// Every backslash must open a three digit decimal escape, and `#` may not
/// appear anywhere.
fn is_string_literal(content: &str) -> bool {
    let escape = regex!(r"^[0-9]{3}");

    if content.contains('#') {
        return false;
    }

    content
        .split('\\')
        .skip(1)
        .all(|segment| escape.is_match(segment))
}

#[cfg(test)]
#[path = "checks/parser.rs"]
mod check;

#[cfg(test)]
#[path = "checks/errors.rs"]
mod verify;
