//! Serialization of parsed documents to the XML representation consumed by
//! the interpreter.

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::language::{Argument, Document, Instruction};

static TEMPLATE: &'static str = r#"<?xml version="1.0" encoding="UTF-8"?>
{{ if empty }}<program language="{language}"/>
{{ else }}<program language="{language}">
{{ for instruction in instructions }}{{ if instruction.bare }}  <instruction order="{instruction.order}" opcode="{instruction.opcode}"/>
{{ else }}  <instruction order="{instruction.order}" opcode="{instruction.opcode}">
{{ for argument in instruction.arguments }}    <arg{argument.position} type="{argument.kind}">{argument.value}</arg{argument.position}>
{{ endfor }}  </instruction>
{{ endif }}{{ endfor }}</program>
{{ endif }}"#;

#[derive(Serialize)]
struct Context<'a> {
    language: &'a str,
    empty: bool,
    instructions: Vec<InstructionContext<'a>>,
}

#[derive(Serialize)]
struct InstructionContext<'a> {
    order: usize,
    opcode: &'a str,
    bare: bool,
    arguments: Vec<ArgumentContext<'a>>,
}

#[derive(Serialize)]
struct ArgumentContext<'a> {
    position: usize,
    kind: &'a str,
    value: &'a str,
}

impl<'a> From<&'a Instruction<'a>> for InstructionContext<'a> {
    fn from(instruction: &'a Instruction<'a>) -> Self {
        InstructionContext {
            order: instruction.order,
            opcode: instruction.opcode,
            bare: instruction
                .arguments
                .is_empty(),
            arguments: instruction
                .arguments
                .iter()
                .map(ArgumentContext::from)
                .collect(),
        }
    }
}

impl<'a> From<&'a Argument<'a>> for ArgumentContext<'a> {
    fn from(argument: &'a Argument<'a>) -> Self {
        ArgumentContext {
            position: argument.position,
            kind: argument
                .kind
                .as_str(),
            value: argument.value,
        }
    }
}

/// Render a Document as XML. Values are entity escaped by the template
/// engine's default formatter.
pub fn render(document: &Document) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.add_template("program", TEMPLATE)?;

    let context = Context {
        language: document.language,
        empty: document.is_empty(),
        instructions: document
            .iter()
            .map(InstructionContext::from)
            .collect(),
    };

    let rendered = tt.render("program", &context)?;
    debug!("Rendered {} bytes", rendered.len());

    Ok(rendered)
}
