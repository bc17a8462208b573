//! Parser for the IPPcode22 language: reads the line-oriented source form
//! and produces an ordered document of instructions and typed arguments.

#[macro_use]
mod cache;

pub mod language;
pub mod output;
pub mod parsing;
pub mod problem;
